//! Domain-level command and query types
//! These structs are used by services inside the domain layer. The io layer is
//! responsible for mapping the public DTOs defined in the `shared` crate to
//! these internal types.

pub mod transactions {
    use crate::domain::errors::PersistenceError;
    use crate::domain::models::Transaction;

    /// Raw form input for creating a new transaction.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct AddTransactionCommand {
        pub title: String,
        pub amount: String,
        pub category: String,
        pub date: String,
        pub transaction_type: String,
    }

    /// Result of adding a transaction.
    ///
    /// The transaction is in the ledger even when `persistence_error` is set;
    /// only the on-disk mirror is stale.
    #[derive(Debug, Clone)]
    pub struct AddTransactionResult {
        pub transaction: Transaction,
        pub persistence_error: Option<PersistenceError>,
    }

    /// Command for removing a single transaction.
    #[derive(Debug, Clone, PartialEq)]
    pub struct RemoveTransactionCommand {
        pub transaction_id: String,
    }

    /// Result of removing a transaction.
    #[derive(Debug, Clone)]
    pub struct RemoveTransactionResult {
        pub removed: bool,
        pub persistence_error: Option<PersistenceError>,
    }
}

pub mod intents {
    use shared::{FilterType, LedgerViewResponse, Notification, SubmitTransactionRequest};

    /// A user action coming from the presentation layer.
    #[derive(Debug, Clone, PartialEq)]
    pub enum LedgerIntent {
        SubmitNewTransaction(SubmitTransactionRequest),
        DeleteTransaction { id: String },
        SetFilterType(FilterType),
        SetSearchText(String),
    }

    /// What the dispatcher did in response to an intent.
    #[derive(Debug, Clone, PartialEq)]
    pub struct DispatchOutcome {
        /// Notifications sent for this intent, in order
        pub notifications: Vec<Notification>,
        /// Projection the renderer was given
        pub view: LedgerViewResponse,
    }
}
