//! Ledger store: owns the canonical transaction list and keeps its persisted
//! mirror up to date.
//!
//! Every successful add or remove re-serializes the whole ledger and stores
//! it synchronously. When that write fails the in-memory ledger stays as it
//! is and remains authoritative for the session; the failure is handed back
//! to the caller on the result.
use log::{error, info, warn};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::commands::transactions::{
    AddTransactionCommand, AddTransactionResult, RemoveTransactionCommand, RemoveTransactionResult,
};
use crate::domain::errors::{PersistenceError, ValidationError};
use crate::domain::models::Transaction;
use crate::domain::transaction_form::TransactionFormService;
use crate::storage::TransactionRepository;

pub struct LedgerService {
    transactions: Vec<Transaction>,
    repository: TransactionRepository,
    form_service: TransactionFormService,
}

impl LedgerService {
    /// Restore the ledger from storage. Never fails: missing, unreadable or
    /// corrupted data yields an empty ledger.
    pub fn load(repository: TransactionRepository) -> Self {
        Self::load_with_form_service(repository, TransactionFormService::new())
    }

    pub fn load_with_form_service(repository: TransactionRepository, form_service: TransactionFormService) -> Self {
        let transactions = match repository.load_transactions() {
            Ok(transactions) => {
                info!("Restored ledger with {} transactions", transactions.len());
                transactions
            }
            Err(e) => {
                warn!("Starting with an empty ledger: {}", e);
                Vec::new()
            }
        };
        Self {
            transactions,
            repository,
            form_service,
        }
    }

    /// Validate and record a new transaction.
    ///
    /// The sign of the amount is normalized to the transaction type regardless
    /// of what was typed. Nothing changes when validation fails.
    pub fn add_transaction(&mut self, command: AddTransactionCommand) -> Result<AddTransactionResult, ValidationError> {
        let validated = self.form_service.validate(&command).map_err(|e| {
            info!("Rejected transaction form: {}", e);
            e
        })?;

        let transaction = Transaction::new(
            self.next_id(),
            validated.title,
            validated.amount,
            validated.category,
            validated.date,
            validated.transaction_type,
        );

        self.transactions.push(transaction.clone());
        info!(
            "Added {} transaction {} ({:.2}) on {}",
            transaction.transaction_type(),
            transaction.id(),
            transaction.amount(),
            transaction.date()
        );

        Ok(AddTransactionResult {
            transaction,
            persistence_error: self.persist(),
        })
    }

    /// Remove a transaction by id. An unknown id is a no-op and does not touch storage.
    pub fn remove_transaction(&mut self, command: RemoveTransactionCommand) -> RemoveTransactionResult {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id() != command.transaction_id);

        if self.transactions.len() == before {
            info!("No transaction with id {} to remove", command.transaction_id);
            return RemoveTransactionResult {
                removed: false,
                persistence_error: None,
            };
        }

        info!("Removed transaction {}", command.transaction_id);
        RemoveTransactionResult {
            removed: true,
            persistence_error: self.persist(),
        }
    }

    /// The ledger in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// An owned copy of the ledger, unaffected by later mutation
    pub fn snapshot(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id() == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    fn persist(&self) -> Option<PersistenceError> {
        match self.repository.save_transactions(&self.transactions) {
            Ok(()) => None,
            Err(e) => {
                error!("Ledger kept in memory only: {}", e);
                Some(e)
            }
        }
    }

    fn next_id(&self) -> String {
        let now_millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        loop {
            let id = Transaction::generate_id(now_millis);
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}
