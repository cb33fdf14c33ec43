//! # Storage Traits
//!
//! This module defines the storage abstraction that allows different
//! key-value backends to be used interchangeably by the ledger.

use anyhow::Result;

/// Key under which the serialized ledger is stored
pub const TRANSACTIONS_KEY: &str = "transactions";

/// Key owned by the theme toggle (`"dark"` / `"light"`). The ledger never touches it.
pub const THEME_KEY: &str = "theme";

/// A local string key-value store, the only persistence the ledger relies on.
///
/// Implementations must be synchronous: `set` returns only once the value is
/// stored (or failed to store).
pub trait KeyValueStore: Send + Sync {
    /// Read the value for `key`. Returns `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
