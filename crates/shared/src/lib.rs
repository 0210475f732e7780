//! Shared errors, configuration, and code normalization for currency-flags.
//!
//! This crate provides common pieces used across the other crates:
//! - Currency and country code normalization
//! - The workspace-wide error type
//! - Flag asset configuration

pub mod config;
pub mod error;
pub mod types;

pub use config::FlagsConfig;
pub use error::{LookupError, LookupResult};
pub use types::{non_empty_code, normalize_code};
