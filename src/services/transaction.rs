//! Transaction status service.

use alloy::primitives::TxHash;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};

use crate::{
    error::Result,
    ethereum::Ledger,
    types::{ReceiptSummary, TransactionStatus},
};

/// Service for looking up transaction receipts.
#[derive(Clone)]
pub struct TransactionService {
    ledger: Arc<dyn Ledger>,
    poll_attempts: u32,
    poll_interval: Duration,
}

impl TransactionService {
    /// Create a new transaction service.
    pub fn new(ledger: Arc<dyn Ledger>, poll_attempts: u32, poll_interval: Duration) -> Self {
        Self { ledger, poll_attempts, poll_interval }
    }

    /// Report the status of a transaction from a single receipt lookup.
    pub async fn check(&self, tx_hash: TxHash) -> Result<TransactionStatus> {
        tracing::debug!(tx_hash = %tx_hash, "Checking transaction");

        let receipt = self.ledger.transaction_receipt(tx_hash).await?;
        let status = TransactionStatus::from(receipt);

        tracing::info!(tx_hash = %tx_hash, status = ?status, "Transaction checked");
        Ok(status)
    }

    /// Poll for a receipt up to the configured number of attempts.
    ///
    /// Returns `None` if the transaction is still not mined afterwards.
    pub async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<Option<ReceiptSummary>> {
        if self.poll_attempts == 0 {
            return Ok(None);
        }

        // interval() panics on a zero period
        let mut ticker = interval(self.poll_interval.max(Duration::from_millis(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        for attempt in 1..=self.poll_attempts {
            ticker.tick().await;

            if let Some(receipt) = self.ledger.transaction_receipt(tx_hash).await? {
                return Ok(Some(receipt));
            }

            tracing::debug!(
                tx_hash = %tx_hash,
                attempt = attempt,
                max_attempts = self.poll_attempts,
                "Transaction pending"
            );
        }

        Ok(None)
    }
}
