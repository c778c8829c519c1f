//! Type definitions module.
//!
//! Contains shared types used across the application.

pub mod input;
pub mod receipt;

pub use input::{parse_address, parse_tx_hash};
pub use receipt::{Deployment, ReceiptSummary, TransactionStatus};
