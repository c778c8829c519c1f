//! Receipt and outcome types.

use std::fmt;

use alloy::{
    primitives::{Address, TxHash},
    rpc::types::TransactionReceipt,
};

/// The parts of a transaction receipt the CLI reports on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptSummary {
    /// Transaction hash.
    pub tx_hash: TxHash,
    /// Whether execution succeeded.
    pub success: bool,
    /// Gas consumed by the transaction.
    pub gas_used: u64,
    /// Block the transaction was included in.
    pub block_number: Option<u64>,
}

impl From<&TransactionReceipt> for ReceiptSummary {
    fn from(receipt: &TransactionReceipt) -> Self {
        Self {
            tx_hash: receipt.transaction_hash,
            success: receipt.status(),
            gas_used: receipt.gas_used,
            block_number: receipt.block_number,
        }
    }
}

/// Status of a transaction as seen from its receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    /// No receipt yet.
    Pending,
    /// Mined with a failure status.
    Failed { gas_used: u64 },
    /// Mined successfully.
    Succeeded { gas_used: u64, block_number: Option<u64> },
}

impl From<Option<ReceiptSummary>> for TransactionStatus {
    fn from(receipt: Option<ReceiptSummary>) -> Self {
        match receipt {
            None => TransactionStatus::Pending,
            Some(r) if !r.success => TransactionStatus::Failed { gas_used: r.gas_used },
            Some(r) => {
                TransactionStatus::Succeeded { gas_used: r.gas_used, block_number: r.block_number }
            }
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionStatus::Pending => write!(f, "Transaction is still pending"),
            TransactionStatus::Failed { gas_used } => {
                write!(f, "Transaction failed - status: 0\nGas used: {gas_used}")
            }
            TransactionStatus::Succeeded { gas_used, block_number: Some(block) } => {
                write!(f, "Transaction succeeded in block {block} (gas used: {gas_used})")
            }
            TransactionStatus::Succeeded { gas_used, block_number: None } => {
                write!(f, "Transaction succeeded (gas used: {gas_used})")
            }
        }
    }
}

/// A contract deployment that went through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    /// Hash of the contract-creation transaction.
    pub tx_hash: TxHash,
    /// Address the contract lives at.
    pub contract_address: Address,
    /// Deployer nonce the address was derived from.
    pub nonce: u64,
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Contract deployed!")?;
        writeln!(f, "Transaction hash: {}", self.tx_hash)?;
        write!(f, "Contract address: {}", self.contract_address)
    }
}
