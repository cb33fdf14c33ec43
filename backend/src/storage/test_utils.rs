/// Test utilities module for automatic cleanup and consistent test infrastructure
///
/// Provides a temp-dir backed environment that is removed even if a test
/// panics, and a store that fails on demand.

use anyhow::{anyhow, Result};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

use super::file_store::FileStore;
use super::memory_store::MemoryStore;
use super::traits::KeyValueStore;

/// Test environment that provides a temporary directory and a file store
/// that will be automatically cleaned up when the environment is dropped.
pub struct TestEnvironment {
    pub store: Arc<FileStore>,
    /// Base directory path for manual inspection if needed
    pub base_path: PathBuf,
    _temp_dir: TempDir, // Keep alive to prevent cleanup
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let store = Arc::new(FileStore::new(temp_dir.path())?);
        Ok(Self {
            store,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }

    /// Open a second store on the same directory, as a restarted process would
    pub fn reopen_store(&self) -> Result<Arc<FileStore>> {
        Ok(Arc::new(FileStore::new(&self.base_path)?))
    }
}

/// Store whose reads and/or writes fail. Successful operations go to an inner memory store.
#[derive(Debug)]
pub struct FailingStore {
    inner: MemoryStore,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl FailingStore {
    /// Every read and write fails
    pub fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            fail_reads: AtomicBool::new(true),
            fail_writes: AtomicBool::new(true),
        }
    }

    /// Reads work (starting empty), writes fail
    pub fn failing_writes() -> Self {
        Self {
            inner: MemoryStore::new(),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(true),
        }
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(anyhow!("storage unavailable"));
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(anyhow!("quota exceeded"));
        }
        self.inner.set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_cleanup() -> Result<()> {
        let base_path;
        {
            let env = TestEnvironment::new()?;
            base_path = env.base_path.clone();
            assert!(base_path.exists());
            // Environment dropped here
        }
        assert!(!base_path.exists());
        Ok(())
    }

    #[test]
    fn test_failing_store_toggle() -> Result<()> {
        let store = FailingStore::failing_writes();
        assert_eq!(store.get("transactions")?, None);
        assert!(store.set("transactions", "[]").is_err());
        store.set_fail_writes(false);
        store.set("transactions", "[]")?;
        assert_eq!(store.get("transactions")?.as_deref(), Some("[]"));
        Ok(())
    }
}
