//! SimpleStorage Contract CLI Library
//!
//! An interactive command-line client for a single `SimpleStorage` contract
//! on an Ethereum-compatible network.
//!
//! # Features
//!
//! - **Deploy**: Sign and submit the contract-creation transaction, then
//!   verify code at the derived address
//! - **Check transaction**: Report pending, failed or succeeded from the receipt
//! - **Set / Get**: Write the fixed value 42 and read the stored value back
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storage_contract_cli::{Config, ContractCli, EthereumClient, WalletManager};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = Arc::new(EthereumClient::new(&config.rpc_url)?);
//!     let wallet = WalletManager::from_private_key(&config.private_key)?;
//!     let cli = ContractCli::connect(client, wallet, &config).await?;
//!     cli.run(std::io::stdin().lock(), std::io::stdout()).await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod ethereum;
pub mod services;
pub mod types;

pub use cli::{ActionOutcome, ContractCli};
pub use config::Config;
pub use error::{AppError, Result};
pub use ethereum::{EthereumClient, Ledger, WalletManager};
