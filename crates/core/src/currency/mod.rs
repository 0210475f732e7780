//! Currency indices and query operations.
//!
//! - `builder` - one-pass index construction and normalization
//! - `service` - exact and reverse (country to currency) lookups
//! - `search` - substring, exact-name, and free-text search

pub mod builder;
pub mod search;
pub mod service;
pub mod types;

#[cfg(test)]
mod props;

pub use search::looks_like_country_code;
pub use service::CurrencyIndex;
pub use types::{CurrencyCountries, CurrencyRecord, IndexStats};
