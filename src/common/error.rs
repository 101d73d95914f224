//! Error handling primitives shared across the bridge.
//!
//! Errors only arise while setting up the library. The multiply path is total.

use thiserror::Error;

/// Stable status codes that cross the C boundary.
#[repr(u32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BridgeCode {
    /// Initialisation succeeded or had already happened.
    Ok = 0,
    /// An environment value could not be parsed.
    InvalidConfig = 1,
    /// The global tracing subscriber could not be installed.
    LoggerInit = 2,
}

/// Canonical error type for the bridge.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum BridgeError {
    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },

    #[error("invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("failed to install logger: {0}")]
    LoggerInit(String),
}

/// Result alias used throughout the crate.
pub type BridgeResult<T> = Result<T, BridgeError>;

impl BridgeError {
    /// Code reported to C callers.
    pub const fn code(&self) -> BridgeCode {
        match self {
            Self::InvalidConfig { .. } | Self::InvalidFilter(_) => BridgeCode::InvalidConfig,
            Self::LoggerInit(_) => BridgeCode::LoggerInit,
        }
    }
}

impl<T> From<&BridgeResult<T>> for BridgeCode {
    fn from(result: &BridgeResult<T>) -> Self {
        match result {
            Ok(_) => BridgeCode::Ok,
            Err(err) => err.code(),
        }
    }
}
