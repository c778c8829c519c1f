//! Network and deployment defaults.

use std::time::Duration;

// ============================================================================
// Network
// ============================================================================

/// Local development node endpoint.
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

// ============================================================================
// Deployment
// ============================================================================

/// Compiled `SimpleStorage` bytecode, relative to the working directory.
pub const DEFAULT_BYTECODE_PATH: &str = "SimpleStorage.bin";

/// Gas limit for the contract-creation transaction.
pub const DEFAULT_DEPLOY_GAS_LIMIT: u64 = 3_500_000;

/// Receipt polls after a deployment is submitted.
pub const DEFAULT_RECEIPT_POLL_ATTEMPTS: u32 = 5;

/// Delay between two receipt polls.
pub const DEFAULT_RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(1);

// ============================================================================
// Storage contract
// ============================================================================

/// Value written by the "set" menu action.
pub const DEFAULT_SET_VALUE: u64 = 42;
