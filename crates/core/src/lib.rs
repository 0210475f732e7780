//! Currency and country lookups for currency-flags.
//!
//! Indices are built once from a dataset and are read-only afterwards. No
//! query performs I/O; flag locators are derived from the country code alone.
//!
//! # Modules
//!
//! - `currency` - Index construction, exact and reverse lookups, name search
//! - `flags` - Flag asset locator resolution
//!
//! # Example
//!
//! ```
//! use currency_flags_core::{CurrencyIndex, FlagResolver};
//!
//! let index = CurrencyIndex::bundled().unwrap();
//! let flags = FlagResolver::bundled().unwrap();
//!
//! let pounds = index.find_currencies_by_name("pound");
//! assert!(pounds.iter().any(|r| r.currency_code == "GBP"));
//!
//! let flag = flags.flag_url_by_currency_code(&index, "GBP").unwrap();
//! assert!(flag.as_str().ends_with("gb.svg"));
//! ```

pub mod currency;
pub mod flags;

pub use currency::{CurrencyCountries, CurrencyIndex, CurrencyRecord, IndexStats};
pub use flags::{FlagResolver, FlagUrls, to_flag_filename};
