//! Configuration module for bili-picker.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - CLI argument merging (see `cli`)
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{Config, MiscConfig, NetworkConfig, UserConfig};
pub use validation::{validate_config, validate_network, validate_sessdata};
