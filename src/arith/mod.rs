//! Arithmetic exposed to the React Native host.

pub mod service;

pub use service::multiply;
