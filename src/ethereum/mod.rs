//! Ethereum interaction module.
//!
//! Contains the node client, the ledger abstraction, wallet management, and
//! contract bindings.

pub mod client;
pub mod constants;
pub mod contracts;
pub mod ledger;
pub mod wallet;

pub use client::EthereumClient;
pub use ledger::Ledger;
pub use wallet::WalletManager;
