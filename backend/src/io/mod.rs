//! # IO Module
//!
//! The boundary between the ledger and whatever front end drives it.
//! Front ends implement [`LedgerRenderer`] and [`Notifier`] and send
//! [`LedgerIntent`](crate::domain::commands::intents::LedgerIntent)s to the
//! [`IntentDispatcher`]; DTOs from the `shared` crate are the only types
//! that cross this boundary.

pub mod collaborators;
pub mod dispatcher;
pub mod mappers;

pub use collaborators::{LedgerRenderer, Notifier};
pub use dispatcher::IntentDispatcher;
pub use mappers::TransactionMapper;
