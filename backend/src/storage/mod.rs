//! # Storage Module
//!
//! Handles all data persistence for the ledger.
//!
//! The ledger only needs a string key-value store (the same contract as a
//! browser's local storage). [`KeyValueStore`] is that seam; [`FileStore`]
//! keeps one file per key in the data directory and [`MemoryStore`] keeps
//! everything in process. [`TransactionRepository`] encodes the ledger as JSON
//! on top of whichever store it is given.

pub mod file_store;
pub mod memory_store;
pub mod traits;
pub mod transaction_repository;

#[cfg(test)]
pub mod test_utils;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use traits::{KeyValueStore, THEME_KEY, TRANSACTIONS_KEY};
pub use transaction_repository::TransactionRepository;
