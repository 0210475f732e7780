//! Bundled reference data for currency-flags.
//!
//! The dataset is produced offline and embedded at compile time:
//! - `data/currencies.json` - ordered currency records
//! - `data/aliases.json` - alternate display names keyed by currency code
//! - `flags/` - target directory for the lower-case `<country-code>.svg`
//!   assets. The SVGs are supplied externally by the generation step; the
//!   crate ships the directory with only its README.
//!
//! Nothing here is computed at runtime beyond JSON deserialization, and no
//! flag file is ever read.

pub mod dataset;

pub use dataset::{AliasTable, Dataset, RawCurrencyRecord, flags_dir, load};
