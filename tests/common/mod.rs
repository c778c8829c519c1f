//! Common utilities for integration tests.
//!
//! `MockLedger` is an in-memory node for a single account: it decodes the
//! signed transactions it receives, mines them instantly and keeps contract
//! code and SimpleStorage values per address.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use alloy::{
    consensus::{Transaction, TxEnvelope},
    eips::eip2718::Decodable2718,
    primitives::{Address, Bytes, TxHash, TxKind, U256},
    rpc::types::TransactionRequest,
    sol_types::SolCall,
};
use async_trait::async_trait;

use storage_contract_cli::{
    ethereum::contracts::SimpleStorage, types::ReceiptSummary, AppError, Config, ContractCli,
    Ledger, Result, WalletManager,
};

/// Well-known Hardhat/Anvil development key (DO NOT use in production!)
pub const TEST_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Chain ID of local development nodes.
pub const TEST_CHAIN_ID: u64 = 1337;

/// Gas the mock charges for a SimpleStorage `set`.
pub const SET_GAS_USED: u64 = 43_724;

/// Gas the mock charges for a deployment.
pub const DEPLOY_GAS_USED: u64 = 125_653;

/// Minimal runtime-looking bytecode for deploy tests.
pub const TEST_BYTECODE_HEX: &str = "6080604052348015600f57600080fd5b50";

#[derive(Default)]
struct MockState {
    nonce: u64,
    code: HashMap<Address, Bytes>,
    storage: HashMap<Address, U256>,
    receipts: HashMap<TxHash, ReceiptSummary>,
    sent: Vec<TxEnvelope>,
    block_number: u64,
    hold_transactions: bool,
    deploy_leaves_no_code: bool,
    revert_deployments: bool,
}

/// Simulated node.
pub struct MockLedger {
    sender: Address,
    chain_id: u64,
    state: Mutex<MockState>,
    calls: AtomicUsize,
}

impl MockLedger {
    /// Node that only accepts transactions from `sender`.
    pub fn new(sender: Address, chain_id: u64) -> Self {
        Self {
            sender,
            chain_id,
            state: Mutex::new(MockState::default()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of node operations served so far.
    pub fn network_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Stop mining: submitted transactions stay without receipt.
    pub fn hold_transactions(&self) {
        self.state.lock().unwrap().hold_transactions = true;
    }

    /// Mine deployments but leave no code behind.
    pub fn deploy_leaves_no_code(&self) {
        self.state.lock().unwrap().deploy_leaves_no_code = true;
    }

    /// Mine deployments with a failure status.
    pub fn revert_deployments(&self) {
        self.state.lock().unwrap().revert_deployments = true;
    }

    /// Register a receipt directly.
    pub fn insert_receipt(&self, receipt: ReceiptSummary) {
        self.state.lock().unwrap().receipts.insert(receipt.tx_hash, receipt);
    }

    /// Transactions received, in order.
    pub fn sent_transactions(&self) -> Vec<TxEnvelope> {
        self.state.lock().unwrap().sent.clone()
    }

    /// Value stored by SimpleStorage at `contract`, if ever set.
    pub fn stored_value(&self, contract: Address) -> Option<U256> {
        self.state.lock().unwrap().storage.get(&contract).copied()
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn mine(state: &mut MockState, tx_hash: TxHash, success: bool, gas_used: u64) {
        state.block_number += 1;
        state.receipts.insert(
            tx_hash,
            ReceiptSummary {
                tx_hash,
                success,
                gas_used,
                block_number: Some(state.block_number),
            },
        );
    }
}

#[async_trait]
impl Ledger for MockLedger {
    async fn chain_id(&self) -> Result<u64> {
        self.record_call();
        Ok(self.chain_id)
    }

    async fn pending_nonce(&self, address: Address) -> Result<u64> {
        self.record_call();
        if address == self.sender {
            Ok(self.state.lock().unwrap().nonce)
        } else {
            Ok(0)
        }
    }

    async fn gas_price(&self) -> Result<u128> {
        self.record_call();
        Ok(1_000_000_000)
    }

    async fn estimate_gas(&self, _tx: &TransactionRequest) -> Result<u64> {
        self.record_call();
        Ok(SET_GAS_USED)
    }

    async fn code_at(&self, address: Address) -> Result<Bytes> {
        self.record_call();
        Ok(self.state.lock().unwrap().code.get(&address).cloned().unwrap_or_default())
    }

    async fn transaction_receipt(&self, tx_hash: TxHash) -> Result<Option<ReceiptSummary>> {
        self.record_call();
        Ok(self.state.lock().unwrap().receipts.get(&tx_hash).cloned())
    }

    async fn call(&self, tx: &TransactionRequest) -> Result<Bytes> {
        self.record_call();
        let state = self.state.lock().unwrap();

        let to = tx
            .to
            .and_then(|kind| kind.to().copied())
            .ok_or_else(|| AppError::Rpc("call without recipient".into()))?;
        let input = tx.input.input().cloned().unwrap_or_default();

        if !state.code.contains_key(&to) {
            // Calling an account without code returns nothing
            return Ok(Bytes::new());
        }
        if !input.starts_with(&SimpleStorage::getCall::SELECTOR) {
            return Err(AppError::Rpc("execution reverted".into()));
        }

        let value = state.storage.get(&to).copied().unwrap_or(U256::ZERO);
        Ok(Bytes::from(value.to_be_bytes::<32>().to_vec()))
    }

    async fn send_raw_transaction(&self, raw: Bytes) -> Result<TxHash> {
        self.record_call();
        let mut buf: &[u8] = &raw;
        let envelope = TxEnvelope::decode_2718(&mut buf)
            .map_err(|e| AppError::Submission(format!("invalid transaction: {e}")))?;

        let mut state = self.state.lock().unwrap();

        if envelope.chain_id() != Some(self.chain_id) {
            return Err(AppError::Submission("invalid chain id".into()));
        }
        if envelope.nonce() != state.nonce {
            return Err(AppError::Submission(format!(
                "nonce mismatch: expected {}, got {}",
                state.nonce,
                envelope.nonce()
            )));
        }

        let tx_hash = *envelope.tx_hash();
        let nonce = state.nonce;
        state.nonce += 1;

        if state.hold_transactions {
            state.sent.push(envelope);
            return Ok(tx_hash);
        }

        match envelope.kind() {
            TxKind::Create => {
                let created = self.sender.create(nonce);
                let success = !state.revert_deployments;
                if success && !state.deploy_leaves_no_code {
                    state.code.insert(created, envelope.input().clone());
                }
                Self::mine(&mut state, tx_hash, success, DEPLOY_GAS_USED);
            }
            TxKind::Call(to) => {
                let input = envelope.input().clone();
                let is_set = input.starts_with(&SimpleStorage::setCall::SELECTOR);
                if is_set && state.code.contains_key(&to) {
                    let call = SimpleStorage::setCall::abi_decode(&input)
                        .map_err(|e| AppError::Submission(e.to_string()))?;
                    state.storage.insert(to, call.x);
                    Self::mine(&mut state, tx_hash, true, SET_GAS_USED);
                } else {
                    Self::mine(&mut state, tx_hash, true, 21_000);
                }
            }
        }

        state.sent.push(envelope);
        Ok(tx_hash)
    }
}

/// Wallet for the development key.
pub fn test_wallet() -> WalletManager {
    WalletManager::from_private_key(TEST_PRIVATE_KEY).expect("test key is valid")
}

/// Mock node serving the development account.
pub fn mock_ledger() -> Arc<MockLedger> {
    Arc::new(MockLedger::new(test_wallet().address(), TEST_CHAIN_ID))
}

/// Write bytecode to a per-test file.
pub fn bytecode_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir()
        .join(format!("storage-contract-cli-test-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).expect("temp dir is writable");
    path
}

/// Configuration for tests, with fast receipt polling.
pub fn test_config(bytecode_path: &std::path::Path) -> Config {
    let path = bytecode_path.display().to_string();
    Config::from_lookup(|key| match key {
        "ETHEREUM_PRIVATE_KEY" => Some(TEST_PRIVATE_KEY.to_string()),
        "CONTRACT_BYTECODE_PATH" => Some(path.clone()),
        "RECEIPT_POLL_ATTEMPTS" => Some("3".to_string()),
        "RECEIPT_POLL_INTERVAL_MS" => Some("1".to_string()),
        _ => None,
    })
    .expect("test config is valid")
}

/// Connect a CLI to the mock node.
pub async fn connect_cli(ledger: Arc<MockLedger>, config: &Config) -> ContractCli {
    ContractCli::connect(ledger, test_wallet(), config).await.expect("mock node is reachable")
}

/// Run a scripted session and return everything printed.
pub async fn run_session(cli: &ContractCli, script: &str) -> Result<String> {
    let mut output = Vec::new();
    cli.run(std::io::Cursor::new(script.to_string()), &mut output).await?;
    Ok(String::from_utf8(output).expect("output is UTF-8"))
}

/// Live-node configuration from the environment, if present.
pub fn live_config() -> Option<Config> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let rpc_url = std::env::var("ETHEREUM_RPC_URL").ok()?;
    let private_key = std::env::var("ETHEREUM_PRIVATE_KEY").ok()?;
    let bytecode_path = std::env::var("CONTRACT_BYTECODE_PATH").ok()?;

    if rpc_url.is_empty() || private_key.is_empty() || bytecode_path.is_empty() {
        return None;
    }

    Config::from_env().ok()
}

/// Skip test if no live node is configured (missing env vars).
#[macro_export]
macro_rules! skip_if_no_node {
    () => {
        match common::live_config() {
            Some(config) => config,
            None => {
                eprintln!("Skipping test: node environment variables not set");
                return;
            }
        }
    };
}
