//! Error types and handling module.
//!
//! Defines all application-specific error types and conversions.

use alloy::{
    network::{Ethereum, TransactionBuilderError},
    primitives::{Address, TxHash},
    transports::{RpcError, TransportError},
};
use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The node could not be reached.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A read query against the node failed.
    #[error("Ethereum RPC error: {0}")]
    Rpc(String),

    /// Malformed or unusable private key.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// The transaction could not be built or signed.
    #[error("Signing error: {0}")]
    Signing(String),

    /// The node rejected a signed transaction.
    #[error("Submission error: {0}")]
    Submission(String),

    /// Deployment was submitted but nothing lives at the computed address.
    #[error("No contract code found at {address} (transaction {tx_hash})")]
    NoContractCode { address: Address, tx_hash: TxHash },

    /// A submitted transaction was mined with a failure status.
    #[error("Transaction {tx_hash} reverted (gas used: {gas_used})")]
    Reverted { tx_hash: TxHash, gas_used: u64 },

    /// The node serves a different chain than the one configured.
    #[error("Chain ID mismatch: expected {expected}, node reports {actual}")]
    ChainMismatch { expected: u64, actual: u64 },

    /// Invalid Ethereum address.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Contract bytecode could not be loaded.
    #[error("Bytecode error: {0}")]
    Bytecode(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Terminal input/output failure.
    #[error("I/O error: {0}")]
    Io(String),
}

impl AppError {
    /// Whether the interactive loop must stop on this error.
    ///
    /// Everything else is reported and the menu is shown again.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AppError::Config(_)
                | AppError::Wallet(_)
                | AppError::ChainMismatch { .. }
                | AppError::Io(_)
        )
    }

    /// Classify a failed node query, keeping connectivity problems apart.
    pub fn query(context: &str, err: TransportError) -> Self {
        match err {
            RpcError::Transport(kind) => AppError::Transport(format!("{context}: {kind}")),
            other => AppError::Rpc(format!("{context}: {other}")),
        }
    }

    /// Classify a failed raw transaction submission.
    pub fn submission(err: TransportError) -> Self {
        match err {
            RpcError::Transport(kind) => AppError::Transport(kind.to_string()),
            other => AppError::Submission(other.to_string()),
        }
    }
}

impl From<TransportError> for AppError {
    fn from(err: TransportError) -> Self {
        AppError::query("RPC request failed", err)
    }
}

impl From<alloy::signers::local::LocalSignerError> for AppError {
    fn from(err: alloy::signers::local::LocalSignerError) -> Self {
        AppError::Wallet(err.to_string())
    }
}

impl From<TransactionBuilderError<Ethereum>> for AppError {
    fn from(err: TransactionBuilderError<Ethereum>) -> Self {
        AppError::Signing(err.to_string())
    }
}

impl From<alloy::hex::FromHexError> for AppError {
    fn from(err: alloy::hex::FromHexError) -> Self {
        AppError::Parse(err.to_string())
    }
}

impl From<alloy::sol_types::Error> for AppError {
    fn from(err: alloy::sol_types::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
