//! Ledger abstraction.
//!
//! The services only talk to the node through this trait, so the same
//! orchestration runs against a JSON-RPC endpoint or a simulated node.

use alloy::{
    primitives::{Address, Bytes, TxHash},
    rpc::types::TransactionRequest,
};
use async_trait::async_trait;

use crate::{error::Result, types::ReceiptSummary};

/// Trait for the node operations the CLI needs.
///
/// Provides an abstraction over the remote node, allowing different
/// implementations (e.g., an HTTP JSON-RPC client or a mock for testing).
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Chain ID reported by the node.
    async fn chain_id(&self) -> Result<u64>;

    /// Next nonce for `address`, counting transactions still in the pool.
    async fn pending_nonce(&self, address: Address) -> Result<u64>;

    /// Current gas price in wei.
    async fn gas_price(&self) -> Result<u128>;

    /// Estimate gas for a transaction.
    async fn estimate_gas(&self, tx: &TransactionRequest) -> Result<u64>;

    /// Deployed bytecode at `address` (empty for accounts without code).
    async fn code_at(&self, address: Address) -> Result<Bytes>;

    /// Receipt for a transaction, `None` while it is not mined.
    async fn transaction_receipt(&self, tx_hash: TxHash) -> Result<Option<ReceiptSummary>>;

    /// Execute a call (simulate transaction without broadcasting).
    async fn call(&self, tx: &TransactionRequest) -> Result<Bytes>;

    /// Submit an EIP-2718 encoded, signed transaction.
    async fn send_raw_transaction(&self, raw: Bytes) -> Result<TxHash>;
}
