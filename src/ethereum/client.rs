//! Ethereum RPC client.

use alloy::{
    network::Ethereum,
    primitives::{Address, Bytes, TxHash},
    providers::{Provider, ProviderBuilder, RootProvider},
    rpc::types::TransactionRequest,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::{
    error::{AppError, Result},
    ethereum::Ledger,
    types::ReceiptSummary,
};

/// Type alias for the HTTP provider.
type HttpProvider = RootProvider<Ethereum>;

/// Ethereum RPC client wrapper with lazy initialization.
#[derive(Clone)]
pub struct EthereumClient {
    /// The underlying provider.
    provider: Arc<HttpProvider>,
    /// RPC URL for logging.
    rpc_url: String,
    /// Lazily initialized chain ID.
    chain_id: Arc<OnceCell<u64>>,
}

impl EthereumClient {
    /// Create a new Ethereum client.
    ///
    /// Note: This does NOT make any network calls. The connection is
    /// established when the first operation is performed.
    pub fn new(rpc_url: &str) -> Result<Self> {
        let url = rpc_url
            .parse()
            .map_err(|_| AppError::Config(format!("Invalid RPC URL: {}", rpc_url)))?;

        let provider = ProviderBuilder::new().connect_http(url).root().clone();

        tracing::info!(rpc_url = %rpc_url, "Ethereum client created");

        Ok(Self {
            provider: Arc::new(provider),
            rpc_url: rpc_url.to_string(),
            chain_id: Arc::new(OnceCell::new()),
        })
    }
}

#[async_trait]
impl Ledger for EthereumClient {
    /// Get the chain ID (fetches from network on first call only).
    async fn chain_id(&self) -> Result<u64> {
        self.chain_id
            .get_or_try_init(|| async {
                let chain_id = self
                    .provider
                    .get_chain_id()
                    .await
                    .map_err(|e| AppError::query("failed to get chain ID", e))?;
                tracing::info!(
                    chain_id = chain_id,
                    rpc_url = %self.rpc_url,
                    "Connected to Ethereum node"
                );
                Ok(chain_id)
            })
            .await
            .copied()
    }

    async fn pending_nonce(&self, address: Address) -> Result<u64> {
        let nonce = self
            .provider
            .get_transaction_count(address)
            .pending()
            .await
            .map_err(|e| AppError::query("failed to get nonce", e))?;
        tracing::debug!(address = %address, nonce = nonce, "Fetched pending nonce");
        Ok(nonce)
    }

    async fn gas_price(&self) -> Result<u128> {
        self.provider
            .get_gas_price()
            .await
            .map_err(|e| AppError::query("failed to get gas price", e))
    }

    async fn estimate_gas(&self, tx: &TransactionRequest) -> Result<u64> {
        self.provider
            .estimate_gas(tx.clone())
            .await
            .map_err(|e| AppError::query("failed to estimate gas", e))
    }

    async fn code_at(&self, address: Address) -> Result<Bytes> {
        self.provider
            .get_code_at(address)
            .await
            .map_err(|e| AppError::query("failed to get contract code", e))
    }

    async fn transaction_receipt(&self, tx_hash: TxHash) -> Result<Option<ReceiptSummary>> {
        let receipt = self
            .provider
            .get_transaction_receipt(tx_hash)
            .await
            .map_err(|e| AppError::query("failed to get transaction receipt", e))?;
        Ok(receipt.as_ref().map(ReceiptSummary::from))
    }

    async fn call(&self, tx: &TransactionRequest) -> Result<Bytes> {
        self.provider.call(tx.clone()).await.map_err(|e| AppError::query("call failed", e))
    }

    async fn send_raw_transaction(&self, raw: Bytes) -> Result<TxHash> {
        let pending =
            self.provider.send_raw_transaction(&raw).await.map_err(AppError::submission)?;
        Ok(*pending.tx_hash())
    }
}

impl std::fmt::Debug for EthereumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EthereumClient")
            .field("rpc_url", &self.rpc_url)
            .field("chain_id", &self.chain_id.get())
            .finish()
    }
}
