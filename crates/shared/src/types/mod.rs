//! Common types and helpers used across the workspace.

pub mod code;

pub use code::{non_empty_code, normalize_code};
