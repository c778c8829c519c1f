//! Interactive menu loop.

use std::fmt;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use alloy::primitives::{TxHash, U256};

use crate::{
    cli::menu::{parse_selection, render_menu, Action},
    config::Config,
    error::{AppError, Result},
    ethereum::{constants::DEFAULT_SET_VALUE, Ledger, WalletManager},
    services::{load_bytecode, DeployService, StorageService, TransactionService},
    types::{parse_address, parse_tx_hash, Deployment, TransactionStatus},
};

/// Result of one menu action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The contract was deployed.
    Deployed(Deployment),
    /// A transaction status was looked up.
    Checked(TransactionStatus),
    /// A `set` transaction was submitted.
    ValueSet { tx_hash: TxHash, value: U256 },
    /// The stored value was read.
    ValueRead(U256),
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionOutcome::Deployed(deployment) => fmt::Display::fmt(deployment, f),
            ActionOutcome::Checked(status) => fmt::Display::fmt(status, f),
            ActionOutcome::ValueSet { tx_hash, value } => {
                write!(f, "Transaction sent: {tx_hash} (set {value})")
            }
            ActionOutcome::ValueRead(value) => write!(f, "Stored value is: {value}"),
        }
    }
}

/// The interactive contract client.
pub struct ContractCli {
    deploy: DeployService,
    transactions: TransactionService,
    storage: StorageService,
    bytecode_path: PathBuf,
    chain_id: u64,
}

impl ContractCli {
    /// Connect to the node and wire the services.
    ///
    /// The chain ID is fetched here once and reused by every action. A
    /// configured chain ID that differs from the node's is an error.
    pub async fn connect(
        ledger: Arc<dyn Ledger>,
        wallet: WalletManager,
        config: &Config,
    ) -> Result<Self> {
        let chain_id = ledger.chain_id().await?;

        if let Some(expected) = config.chain_id {
            if expected != chain_id {
                return Err(AppError::ChainMismatch { expected, actual: chain_id });
            }
        }

        let transactions = TransactionService::new(
            ledger.clone(),
            config.receipt_poll_attempts,
            config.receipt_poll_interval,
        );
        let deploy = DeployService::new(
            ledger.clone(),
            wallet.clone(),
            transactions.clone(),
            chain_id,
            config.deploy_gas_limit,
        );
        let storage = StorageService::new(ledger, wallet, chain_id);

        tracing::info!(chain_id = chain_id, "Contract CLI ready");

        Ok(Self {
            deploy,
            transactions,
            storage,
            bytecode_path: config.bytecode_path.clone(),
            chain_id,
        })
    }

    /// Chain ID every transaction is signed for.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Run the menu loop until the operator exits or input ends.
    ///
    /// Action failures are reported and the menu is shown again; only
    /// fatal errors are returned.
    pub async fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<()> {
        writeln!(output, "Welcome to the contract CLI")?;

        loop {
            render_menu(&mut output)?;

            let Some(line) = read_line(&mut input)? else {
                writeln!(output)?;
                break;
            };

            let option = match parse_selection(&line) {
                Ok(option) => option,
                Err(e) => {
                    writeln!(output, "{e}")?;
                    continue;
                }
            };

            let Some(action) = option.action() else {
                break;
            };

            writeln!(output, "Processing ...")?;

            match self.dispatch(action, &mut input, &mut output).await {
                Ok(outcome) => {
                    writeln!(output, "{outcome}")?;
                    writeln!(output, "Done!")?;
                }
                Err(e) if e.is_fatal() => {
                    tracing::error!(error = %e, action = ?action, "Action failed");
                    return Err(e);
                }
                Err(e) => {
                    tracing::warn!(error = %e, action = ?action, "Action failed");
                    writeln!(output, "Error: {e}")?;
                }
            }
        }

        writeln!(output, "Bye Bye")?;
        Ok(())
    }

    /// Perform one action, prompting for its input.
    async fn dispatch<R: BufRead, W: Write>(
        &self,
        action: Action,
        input: &mut R,
        output: &mut W,
    ) -> Result<ActionOutcome> {
        match action {
            Action::Deploy => {
                let bytecode = load_bytecode(&self.bytecode_path)?;
                let deployment = self.deploy.deploy(bytecode).await?;
                Ok(ActionOutcome::Deployed(deployment))
            }
            Action::CheckTransaction => {
                let text = prompt(input, output, "Please enter the transaction hash: ")?;
                let status = self.transactions.check(parse_tx_hash(&text)).await?;
                Ok(ActionOutcome::Checked(status))
            }
            Action::Set => {
                let text = prompt(input, output, "Please enter the contract address: ")?;
                let contract = parse_address(&text)?;
                let value = U256::from(DEFAULT_SET_VALUE);
                let tx_hash = self.storage.set(contract, value).await?;
                Ok(ActionOutcome::ValueSet { tx_hash, value })
            }
            Action::Get => {
                let text = prompt(input, output, "Please enter the contract address: ")?;
                let contract = parse_address(&text)?;
                let value = self.storage.get(contract).await?;
                Ok(ActionOutcome::ValueRead(value))
            }
        }
    }
}

/// Read one line, `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask for a line of free text.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
    write!(output, "{message}")?;
    output.flush()?;

    read_line(input)?.ok_or_else(|| AppError::Io("input closed while waiting for an answer".into()))
}
