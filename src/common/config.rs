//! Runtime configuration loaded from the process environment.
//!
//! Values are read once, when the host loads the library.

use std::env;

use super::error::{BridgeError, BridgeResult};

pub const LOG_FILTER_KEY: &str = "TEARDOWN_LOG";
pub const LOG_FORMAT_KEY: &str = "TEARDOWN_LOG_FORMAT";

const DEFAULT_LOG_FILTER: &str = "info";

/// Output format of the tracing subscriber.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> BridgeResult<Self> {
        match raw {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(BridgeError::InvalidConfig {
                key: LOG_FORMAT_KEY,
                value: raw.to_string(),
            }),
        }
    }
}

/// Snapshot of configuration values consumed by the bridge.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BridgeCfg {
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Default for BridgeCfg {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl BridgeCfg {
    /// Create a configuration snapshot from the process environment.
    pub fn load() -> BridgeResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a snapshot from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> BridgeResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup(LOG_FILTER_KEY)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let log_format = match lookup(LOG_FORMAT_KEY) {
            Some(raw) => LogFormat::parse(&raw)?,
            None => LogFormat::default(),
        };

        Ok(Self {
            log_filter,
            log_format,
        })
    }
}
