// lib.rs - native side of the teardown React Native module
pub mod api;
pub mod arith;
pub mod common;

pub use api::ffi::{teardown_api_version, teardown_init, teardown_multiply};
pub use arith::multiply;
