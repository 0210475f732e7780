//! Name search and free-text query dispatch.

use once_cell::sync::Lazy;
use regex::Regex;

use super::service::CurrencyIndex;
use super::types::CurrencyRecord;

/// Letters with at most one inner hyphen ("US", "GB-SCT").
static COUNTRY_CODE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]+(?:-[A-Za-z]+)?$").expect("country code pattern is valid")
});

/// Returns true if a trimmed query looks like a country code: two to five
/// letters, optionally split by a single hyphen that does not count toward
/// the letter limit.
#[must_use]
pub fn looks_like_country_code(query: &str) -> bool {
    let query = query.trim();
    if !COUNTRY_CODE_SHAPE.is_match(query) {
        return false;
    }
    let letters = query.chars().filter(char::is_ascii_alphabetic).count();
    (2..=5).contains(&letters)
}

impl CurrencyIndex {
    /// Currencies whose name or any alias contains `query`, case-insensitively.
    ///
    /// Results follow dataset order; there is no ranking. An empty query
    /// matches nothing.
    #[must_use]
    pub fn find_currencies_by_name(&self, query: &str) -> Vec<&CurrencyRecord> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.records
            .iter()
            .filter(|record| {
                self.name_haystack_by_code
                    .get(&record.currency_code)
                    .is_some_and(|haystack| haystack.contains(&needle))
            })
            .collect()
    }

    /// Currencies whose canonical name or an alias equals `name`,
    /// case-insensitively. Substring matches are not included.
    #[must_use]
    pub fn currencies_by_exact_name(&self, name: &str) -> Vec<&CurrencyRecord> {
        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return Vec::new();
        }

        self.records
            .iter()
            .filter(|record| {
                self.exact_names_by_code
                    .get(&record.currency_code)
                    .is_some_and(|names| names.iter().any(|n| *n == wanted))
            })
            .collect()
    }

    /// Best-effort free-text search.
    ///
    /// 1. A query shaped like a country code returns that country's currencies.
    /// 2. Otherwise an exact currency code returns that single record.
    /// 3. Otherwise falls back to [`find_currencies_by_name`](Self::find_currencies_by_name).
    ///
    /// The shape check runs first, so a three-letter currency code such as
    /// `"USD"` is looked up as a country and yields nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&CurrencyRecord> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        if looks_like_country_code(query) {
            return self.currencies_by_country_code(query);
        }

        if let Some(record) = self.currency_by_code(query) {
            return vec![record];
        }

        self.find_currencies_by_name(query)
    }
}
