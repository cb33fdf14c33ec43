//! # Budget Buddy Backend
//!
//! All non-UI logic of the Budget Buddy personal finance ledger:
//! - **Domain**: the ledger store, the view pipeline, validation and formatting
//! - **Storage**: key-value persistence of the ledger
//! - **IO**: the intent dispatcher and the traits front ends implement
//!
//! [`Backend`] wires these together at startup. There is no global state:
//! everything hangs off the `Backend` value and lives as long as it does.

use anyhow::Result;
use log::info;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub mod config;
pub mod domain;
pub mod io;
pub mod logging;
pub mod storage;

pub use config::AppConfig;
pub use domain::commands::intents::{DispatchOutcome, LedgerIntent};
pub use io::{IntentDispatcher, LedgerRenderer, Notifier};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

use domain::{LedgerService, TransactionFormService, TransactionTableService};
use storage::TransactionRepository;

/// Main backend struct that owns the ledger, the view state and the config
pub struct Backend {
    pub config: AppConfig,
    pub dispatcher: IntentDispatcher,
    data_directory: Option<PathBuf>,
}

impl Backend {
    /// Start the application backend on the default data directory, with logging
    pub fn new() -> Result<Self> {
        let data_directory = config::default_data_directory();
        // Logging comes up before the ledger loads so load warnings are kept
        let config = AppConfig::load_or_create(&data_directory)?;
        logging::init_logging(&config.log_level);
        let backend = Self::open_with_config(&data_directory, config)?;
        info!("Budget Buddy backend ready in {:?}", data_directory);
        Ok(backend)
    }

    /// Open (or create) a data directory: config plus file-backed ledger
    pub fn open<P: AsRef<Path>>(data_directory: P) -> Result<Self> {
        let data_directory = data_directory.as_ref();
        let config = AppConfig::load_or_create(data_directory)?;
        Self::open_with_config(data_directory, config)
    }

    fn open_with_config(data_directory: &Path, config: AppConfig) -> Result<Self> {
        let store = Arc::new(FileStore::new(data_directory)?);
        let mut backend = Self::with_store(store, config);
        backend.data_directory = Some(data_directory.to_path_buf());
        Ok(backend)
    }

    /// Build a backend over any key-value store, e.g. a [`MemoryStore`]
    pub fn with_store(store: Arc<dyn KeyValueStore>, config: AppConfig) -> Self {
        info!("Setting up ledger");
        let ledger = LedgerService::load_with_form_service(
            TransactionRepository::new(store),
            TransactionFormService::with_config(config.form_config()),
        );
        let table_service = TransactionTableService::with_config(config.table_config());
        let dispatcher = IntentDispatcher::new(ledger, table_service);

        Self {
            config,
            dispatcher,
            data_directory: None,
        }
    }

    /// Directory the ledger and config are stored in; `None` for non-file stores
    pub fn data_directory(&self) -> Option<&Path> {
        self.data_directory.as_deref()
    }

    pub fn dispatch(&mut self, intent: LedgerIntent) -> DispatchOutcome {
        self.dispatcher.dispatch(intent)
    }
}
