//! Logging setup. The library logs through the `log` facade; embedding
//! applications call [`init_logging`] once at startup.
use env_logger::Env;

/// Initialize `env_logger`. `RUST_LOG` wins over `default_level` when set.
/// Returns false if a logger was already installed.
pub fn init_logging(default_level: &str) -> bool {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .try_init()
        .is_ok()
}
