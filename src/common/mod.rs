//! Configuration, errors and logging shared by the bridge.
pub mod config;
pub mod error;
pub mod log;

pub use config::BridgeCfg;
pub use error::{BridgeCode, BridgeError, BridgeResult};

/// Load configuration from the environment and install logging.
pub fn init() -> BridgeResult<()> {
    let cfg = BridgeCfg::load()?;
    log::init(&cfg)
}
