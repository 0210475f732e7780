//! Flag asset locators for countries and currencies.

pub mod resolver;

pub use resolver::{FlagResolver, FlagUrls, to_flag_filename};
