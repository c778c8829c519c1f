//! Contract deployment service.

use alloy::{
    eips::eip2718::Encodable2718,
    network::TransactionBuilder,
    primitives::{Bytes, U256},
    rpc::types::TransactionRequest,
};
use std::sync::Arc;

use crate::{
    error::{AppError, Result},
    ethereum::{Ledger, WalletManager},
    services::TransactionService,
    types::Deployment,
};

/// Service for deploying the storage contract.
#[derive(Clone)]
pub struct DeployService {
    ledger: Arc<dyn Ledger>,
    wallet: WalletManager,
    transactions: TransactionService,
    chain_id: u64,
    gas_limit: u64,
}

impl DeployService {
    /// Create a new deploy service.
    pub fn new(
        ledger: Arc<dyn Ledger>,
        wallet: WalletManager,
        transactions: TransactionService,
        chain_id: u64,
        gas_limit: u64,
    ) -> Self {
        Self { ledger, wallet, transactions, chain_id, gas_limit }
    }

    /// Deploy `bytecode` from the wallet account.
    ///
    /// The contract address is derived from the deployer address and the
    /// nonce used, then checked for code once the receipt is available.
    pub async fn deploy(&self, bytecode: Bytes) -> Result<Deployment> {
        let deployer = self.wallet.address();
        let nonce = self.ledger.pending_nonce(deployer).await?;
        let gas_price = self.ledger.gas_price().await?;

        tracing::info!(
            deployer = %deployer,
            nonce = nonce,
            chain_id = self.chain_id,
            gas_limit = self.gas_limit,
            size = bytecode.len(),
            "Deploying contract"
        );

        let tx = TransactionRequest::default()
            .with_deploy_code(bytecode)
            .with_value(U256::ZERO)
            .with_nonce(nonce)
            .with_gas_limit(self.gas_limit)
            .with_gas_price(gas_price)
            .with_chain_id(self.chain_id);

        let envelope = self.wallet.sign(tx).await?;
        let tx_hash = self.ledger.send_raw_transaction(envelope.encoded_2718().into()).await?;
        let contract_address = deployer.create(nonce);

        tracing::info!(
            tx_hash = %tx_hash,
            contract_address = %contract_address,
            "Deployment transaction submitted"
        );

        if let Some(receipt) = self.transactions.wait_for_receipt(tx_hash).await? {
            if !receipt.success {
                return Err(AppError::Reverted { tx_hash, gas_used: receipt.gas_used });
            }
        }

        let code = self.ledger.code_at(contract_address).await?;
        if code.is_empty() {
            return Err(AppError::NoContractCode { address: contract_address, tx_hash });
        }

        tracing::info!(
            contract_address = %contract_address,
            code_size = code.len(),
            "Contract deployed"
        );

        Ok(Deployment { tx_hash, contract_address, nonce })
    }
}
