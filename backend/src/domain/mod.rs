//! # Domain Module
//!
//! Contains all business logic for the ledger, independent of any UI or
//! storage backend.
//!
//! ## Module Organization
//!
//! - **ledger_service**: the ledger store; add/remove and persistence
//! - **view_pipeline**: filtered, searched, sorted projection plus totals
//! - **transaction_form**: validation of submitted form fields
//! - **transaction_table**: display formatting of rows and totals
//! - **notifications**: user-facing messages and toast styling
//! - **commands**: command, result and intent types
//! - **models**: transactions, view state, totals
//!
//! ## Business Rules
//!
//! - Income amounts are strictly positive, expense amounts strictly negative
//! - Transaction ids are unique and never reused
//! - The visible list is sorted by date, most recent first, ties in ledger order
//! - Totals always cover the whole ledger, whatever is currently visible

pub mod commands;
pub mod errors;
pub mod ledger_service;
pub mod models;
pub mod notifications;
pub mod transaction_form;
pub mod transaction_table;
pub mod view_pipeline;

pub use errors::{PersistenceError, ValidationError};
pub use ledger_service::LedgerService;
pub use transaction_form::{TransactionFormConfig, TransactionFormService};
pub use transaction_table::{TransactionTableConfig, TransactionTableService};
pub use view_pipeline::{LedgerView, ViewPipeline, VisibleTransactions};
