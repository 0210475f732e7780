//! Currency record and query result types.

use serde::{Deserialize, Serialize};

/// A normalized currency record.
///
/// Codes are trimmed and upper-cased, and `other_country_codes` never contains
/// `primary_country_code` or duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyRecord {
    /// ISO 4217 currency code (e.g., "USD").
    pub currency_code: String,
    /// Canonical display name.
    pub currency_name: String,
    /// Country chosen to represent the currency (e.g., "EU" for the euro).
    pub primary_country_code: String,
    /// Other countries using the currency, in dataset order.
    pub other_country_codes: Vec<String>,
}

impl CurrencyRecord {
    /// Primary country followed by every other country.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary_country_code.as_str())
            .chain(self.other_country_codes.iter().map(String::as_str))
    }

    /// Returns true if `country_code` (already normalized) uses this currency.
    #[must_use]
    pub fn is_used_in(&self, country_code: &str) -> bool {
        self.countries().any(|c| c == country_code)
    }
}

/// Countries using a currency, split by role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CurrencyCountries<'a> {
    /// Primary country, `None` if the currency is unknown.
    pub primary: Option<&'a str>,
    /// Other countries.
    pub others: Vec<&'a str>,
    /// Primary followed by others, without duplicates.
    pub all: Vec<&'a str>,
}

/// Sizes of the built indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Number of currencies.
    pub currencies: usize,
    /// Number of distinct country codes.
    pub countries: usize,
    /// Number of currencies with at least one alias.
    pub aliased: usize,
}
