//! SimpleStorage Contract CLI
//!
//! Interactive menu for deploying and calling a SimpleStorage contract.

use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use storage_contract_cli::{Config, ContractCli, EthereumClient, WalletManager};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging; stdout belongs to the menu
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    tracing::info!("Starting SimpleStorage contract CLI");

    let client = Arc::new(EthereumClient::new(&config.rpc_url)?);
    let wallet = WalletManager::from_private_key(&config.private_key)?;

    let cli = match ContractCli::connect(client, wallet, &config).await {
        Ok(cli) => cli,
        Err(e) => {
            tracing::error!(
                error = %e,
                rpc_url = %config.rpc_url,
                "Failed to connect to the Ethereum node"
            );
            return Err(e.into());
        }
    };

    let stdin = std::io::stdin();
    if let Err(e) = cli.run(stdin.lock(), std::io::stdout()).await {
        tracing::error!(error = %e, "Contract CLI stopped");
        return Err(e.into());
    }

    Ok(())
}
