//! Logging setup on top of `tracing`.
//!
//! The host process owns stdout/stderr, so the subscriber is installed at most
//! once per process and never replaces one the host already registered.

use std::sync::OnceLock;

use tracing::info;
use tracing_subscriber::EnvFilter;

use super::config::{BridgeCfg, LogFormat};
use super::error::{BridgeError, BridgeResult};

/// Outcome of the first installation attempt.
static INSTALLED: OnceLock<BridgeResult<()>> = OnceLock::new();

/// Parse the configured filter directive.
pub fn filter(cfg: &BridgeCfg) -> BridgeResult<EnvFilter> {
    EnvFilter::try_new(&cfg.log_filter).map_err(|e| BridgeError::InvalidFilter(e.to_string()))
}

/// Install the global subscriber described by `cfg`.
///
/// Only the first call with a valid filter attempts the installation; every
/// later call reports that attempt's outcome.
pub fn init(cfg: &BridgeCfg) -> BridgeResult<()> {
    if let Some(outcome) = INSTALLED.get() {
        return outcome.clone();
    }

    let filter = filter(cfg)?;
    INSTALLED
        .get_or_init(|| install(cfg.log_format, filter))
        .clone()
}

fn install(format: LogFormat, filter: EnvFilter) -> BridgeResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    // Only the tracing dispatcher is claimed. The `log` facade belongs to the
    // host and may already carry its own logger.
    let installed = match format {
        LogFormat::Text => tracing::subscriber::set_global_default(builder.finish()),
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
    };
    installed.map_err(|e| BridgeError::LoggerInit(e.to_string()))?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        abi = crate::api::ffi::API_VERSION,
        ?format,
        "native bridge loaded"
    );
    Ok(())
}
