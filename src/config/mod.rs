//! Configuration management module.
//!
//! Handles loading configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::AppError;
use crate::ethereum::constants::{
    DEFAULT_BYTECODE_PATH, DEFAULT_DEPLOY_GAS_LIMIT, DEFAULT_RECEIPT_POLL_ATTEMPTS,
    DEFAULT_RECEIPT_POLL_INTERVAL, DEFAULT_RPC_URL,
};

/// Application configuration.
#[derive(Clone)]
pub struct Config {
    /// Ethereum JSON-RPC endpoint URL.
    pub rpc_url: String,
    /// Private key for wallet (hex string, 0x prefix optional).
    pub private_key: String,
    /// Chain ID the node is expected to report, if pinned.
    pub chain_id: Option<u64>,
    /// File holding the compiled contract bytecode.
    pub bytecode_path: PathBuf,
    /// Gas limit for the contract-creation transaction.
    pub deploy_gas_limit: u64,
    /// How many times the deploy receipt is polled.
    pub receipt_poll_attempts: u32,
    /// Delay between two receipt polls.
    pub receipt_poll_interval: Duration,
    /// Logging level (default: info).
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `ETHEREUM_PRIVATE_KEY`: Private key for wallet (hex)
    ///
    /// Optional environment variables:
    /// - `ETHEREUM_RPC_URL`: JSON-RPC endpoint (default: `http://localhost:8545`)
    /// - `ETHEREUM_CHAIN_ID`: expected chain ID, checked against the node at startup
    /// - `CONTRACT_BYTECODE_PATH`: bytecode file (default: `SimpleStorage.bin`)
    /// - `DEPLOY_GAS_LIMIT`: deploy gas limit (default: 3500000)
    /// - `RECEIPT_POLL_ATTEMPTS`: deploy receipt polls (default: 5)
    /// - `RECEIPT_POLL_INTERVAL_MS`: delay between polls (default: 1000)
    /// - `LOG_LEVEL`: Logging level (default: info)
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let rpc_url = lookup("ETHEREUM_RPC_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_RPC_URL.to_string());

        let private_key = lookup("ETHEREUM_PRIVATE_KEY")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                AppError::Config("ETHEREUM_PRIVATE_KEY environment variable not set".into())
            })?;

        let chain_id = lookup("ETHEREUM_CHAIN_ID")
            .map(|v| parse_number::<u64>("ETHEREUM_CHAIN_ID", &v))
            .transpose()?;

        let bytecode_path = lookup("CONTRACT_BYTECODE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BYTECODE_PATH));

        let deploy_gas_limit = lookup("DEPLOY_GAS_LIMIT")
            .map(|v| parse_number::<u64>("DEPLOY_GAS_LIMIT", &v))
            .transpose()?
            .unwrap_or(DEFAULT_DEPLOY_GAS_LIMIT);

        let receipt_poll_attempts = lookup("RECEIPT_POLL_ATTEMPTS")
            .map(|v| parse_number::<u32>("RECEIPT_POLL_ATTEMPTS", &v))
            .transpose()?
            .unwrap_or(DEFAULT_RECEIPT_POLL_ATTEMPTS);

        let receipt_poll_interval = lookup("RECEIPT_POLL_INTERVAL_MS")
            .map(|v| parse_number::<u64>("RECEIPT_POLL_INTERVAL_MS", &v))
            .transpose()?
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_RECEIPT_POLL_INTERVAL);

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Self {
            rpc_url,
            private_key,
            chain_id,
            bytecode_path,
            deploy_gas_limit,
            receipt_poll_attempts,
            receipt_poll_interval,
            log_level,
        })
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, AppError> {
    value
        .trim()
        .parse()
        .map_err(|_| {
            AppError::Config(format!("{key} must be a non-negative integer, got '{value}'"))
        })
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("rpc_url", &self.rpc_url)
            .field("private_key", &"<redacted>")
            .field("chain_id", &self.chain_id)
            .field("bytecode_path", &self.bytecode_path)
            .field("deploy_gas_limit", &self.deploy_gas_limit)
            .field("receipt_poll_attempts", &self.receipt_poll_attempts)
            .field("receipt_poll_interval", &self.receipt_poll_interval)
            .field("log_level", &self.log_level)
            .finish()
    }
}
