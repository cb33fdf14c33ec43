//! JSON persistence of the ledger on top of a [`KeyValueStore`].
//!
//! The whole ledger is stored under [`TRANSACTIONS_KEY`] as one JSON array:
//!
//! ```json
//! [{"id":"lr5q2x1c…","title":"Salary","amount":5000.0,"category":"Job","date":"2024-01-01","type":"income"}]
//! ```
use log::{debug, warn};
use std::collections::HashSet;
use std::sync::Arc;

use super::traits::{KeyValueStore, TRANSACTIONS_KEY};
use crate::domain::errors::PersistenceError;
use crate::domain::models::Transaction;

#[derive(Clone)]
pub struct TransactionRepository {
    store: Arc<dyn KeyValueStore>,
}

impl TransactionRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read the stored ledger. A missing key is an empty ledger; anything that
    /// cannot be read or decoded is an error for the caller to decide on.
    pub fn load_transactions(&self) -> Result<Vec<Transaction>, PersistenceError> {
        let raw = match self.store.get(TRANSACTIONS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored transactions found");
                return Ok(Vec::new());
            }
            Err(e) => return Err(PersistenceError::Read(e.to_string())),
        };

        let transactions = Self::deserialize(&raw)?;
        debug!("Loaded {} stored transactions", transactions.len());
        Ok(transactions)
    }

    /// Serialize and store the entire ledger, replacing what was there.
    pub fn save_transactions(&self, transactions: &[Transaction]) -> Result<(), PersistenceError> {
        let json = Self::serialize(transactions)?;
        self.store
            .set(TRANSACTIONS_KEY, &json)
            .map_err(|e| PersistenceError::Write(e.to_string()))?;
        debug!("Saved {} transactions", transactions.len());
        Ok(())
    }

    pub fn serialize(transactions: &[Transaction]) -> Result<String, PersistenceError> {
        serde_json::to_string(transactions).map_err(|e| PersistenceError::Write(e.to_string()))
    }

    /// Decode a stored ledger, rejecting records that break the transaction
    /// invariants or repeat an id.
    pub fn deserialize(raw: &str) -> Result<Vec<Transaction>, PersistenceError> {
        // localStorage-style stores may hold a literal "null" for a cleared key
        if raw.trim() == "null" {
            return Ok(Vec::new());
        }

        let transactions: Vec<Transaction> =
            serde_json::from_str(raw).map_err(|e| PersistenceError::Corrupt(e.to_string()))?;

        let mut seen_ids = HashSet::new();
        for transaction in &transactions {
            transaction
                .check_invariants()
                .map_err(PersistenceError::Corrupt)?;
            if !seen_ids.insert(transaction.id()) {
                warn!("Duplicate transaction id in stored ledger: {}", transaction.id());
                return Err(PersistenceError::Corrupt(format!(
                    "duplicate transaction id {}",
                    transaction.id()
                )));
            }
        }
        Ok(transactions)
    }
}
