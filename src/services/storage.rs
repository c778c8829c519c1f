//! SimpleStorage contract service.

use alloy::{
    eips::eip2718::Encodable2718,
    network::TransactionBuilder,
    primitives::{Address, TxHash, U256},
    rpc::types::TransactionRequest,
    sol_types::SolCall,
};
use std::sync::Arc;

use crate::{
    error::Result,
    ethereum::{contracts::SimpleStorage, Ledger, WalletManager},
};

/// Service for calling `set` and `get` on a deployed storage contract.
#[derive(Clone)]
pub struct StorageService {
    ledger: Arc<dyn Ledger>,
    wallet: WalletManager,
    chain_id: u64,
}

impl StorageService {
    /// Create a new storage service.
    pub fn new(ledger: Arc<dyn Ledger>, wallet: WalletManager, chain_id: u64) -> Self {
        Self { ledger, wallet, chain_id }
    }

    /// Store `value` in the contract at `contract`.
    ///
    /// Returns the hash of the submitted transaction without waiting for it
    /// to be mined.
    pub async fn set(&self, contract: Address, value: U256) -> Result<TxHash> {
        let from = self.wallet.address();
        let input = SimpleStorage::setCall { x: value }.abi_encode();

        let call = TransactionRequest::default()
            .with_from(from)
            .with_to(contract)
            .with_input(input);

        let gas_limit = self.ledger.estimate_gas(&call).await?;
        let gas_price = self.ledger.gas_price().await?;
        let nonce = self.ledger.pending_nonce(from).await?;

        let tx = call
            .with_nonce(nonce)
            .with_gas_limit(gas_limit)
            .with_gas_price(gas_price)
            .with_chain_id(self.chain_id);

        let envelope = self.wallet.sign(tx).await?;
        let tx_hash = self.ledger.send_raw_transaction(envelope.encoded_2718().into()).await?;

        tracing::info!(
            contract = %contract,
            value = %value,
            tx_hash = %tx_hash,
            nonce = nonce,
            "set transaction submitted"
        );

        Ok(tx_hash)
    }

    /// Read the value stored in the contract at `contract`.
    pub async fn get(&self, contract: Address) -> Result<U256> {
        let call = TransactionRequest::default()
            .with_to(contract)
            .with_input(SimpleStorage::getCall {}.abi_encode());

        let output = self.ledger.call(&call).await?;
        let value = SimpleStorage::getCall::abi_decode_returns(&output)?;

        tracing::debug!(contract = %contract, value = %value, "Read stored value");
        Ok(value)
    }
}
