//! Application-level configuration.
//!
//! - [`RelayConfig`]: addressing and schema for the submission handler

pub mod relay_config;

pub use relay_config::RelayConfig;
