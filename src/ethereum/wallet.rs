//! Wallet management and transaction signing.

use alloy::{
    consensus::TxEnvelope,
    network::{EthereumWallet, TransactionBuilder},
    primitives::Address,
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
};

use crate::error::{AppError, Result};

/// Wallet manager for transaction signing.
#[derive(Clone)]
pub struct WalletManager {
    /// Network wallet wrapping the signer, used to sign envelopes.
    wallet: EthereumWallet,
    /// Wallet address.
    address: Address,
}

impl WalletManager {
    /// Create a wallet manager from a private key string.
    pub fn from_private_key(private_key: &str) -> Result<Self> {
        // Remove 0x prefix if present
        let key = private_key.strip_prefix("0x").unwrap_or(private_key);

        let signer: PrivateKeySigner =
            key.parse().map_err(|e: alloy::signers::local::LocalSignerError| {
                AppError::Wallet(e.to_string())
            })?;

        let address = signer.address();
        let wallet = EthereumWallet::from(signer);

        tracing::info!(address = %address, "Wallet initialized");

        Ok(Self { wallet, address })
    }

    /// Get the wallet address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Sign a fully populated transaction request.
    ///
    /// The request must carry nonce, gas limit, gas price and chain ID; a
    /// legacy request with a chain ID is signed with EIP-155 replay
    /// protection.
    pub async fn sign(&self, tx: TransactionRequest) -> Result<TxEnvelope> {
        let envelope = tx.with_from(self.address).build(&self.wallet).await?;
        tracing::debug!(tx_hash = %envelope.tx_hash(), "Transaction signed");
        Ok(envelope)
    }
}

impl std::fmt::Debug for WalletManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletManager").field("address", &self.address).finish()
    }
}
