//! Currency index and exact/reverse lookups.
//!
//! `CurrencyIndex` is plain read-only data once built: every query takes
//! `&self`, performs no I/O, and is safe to share across threads.

use std::collections::HashMap;

use currency_flags_shared::{non_empty_code, normalize_code};

use super::types::{CurrencyCountries, CurrencyRecord, IndexStats};

/// In-memory indices over a currency dataset.
///
/// Construct with [`CurrencyIndex::new`], [`CurrencyIndex::from_dataset`],
/// or [`CurrencyIndex::bundled`]. Instances are independent of each other.
///
/// # Example
///
/// ```
/// use currency_flags_core::CurrencyIndex;
///
/// let index = CurrencyIndex::bundled().unwrap();
/// let euro = index.currency_by_code(" eur ").unwrap();
/// assert_eq!(euro.primary_country_code, "EU");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CurrencyIndex {
    /// Records in dataset order.
    pub(super) records: Vec<CurrencyRecord>,
    /// Currency code -> position in `records`.
    pub(super) code_to_currency: HashMap<String, usize>,
    /// Country code -> currency codes, in insertion order without duplicates.
    pub(super) country_to_currency_codes: HashMap<String, Vec<String>>,
    /// Country codes in order of first appearance.
    pub(super) country_order: Vec<String>,
    /// Currency code -> lower-cased name and aliases joined for substring search.
    pub(super) name_haystack_by_code: HashMap<String, String>,
    /// Currency code -> lower-cased name and each alias, for exact matching.
    pub(super) exact_names_by_code: HashMap<String, Vec<String>>,
    /// Number of currencies with at least one alias.
    pub(super) aliased: usize,
}

impl CurrencyIndex {
    /// Looks up a currency by code, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn currency_by_code(&self, currency_code: &str) -> Option<&CurrencyRecord> {
        let code = non_empty_code(currency_code)?;
        self.code_to_currency
            .get(&code)
            .map(|&position| &self.records[position])
    }

    /// Returns true if the currency code is in the dataset.
    #[must_use]
    pub fn contains_currency(&self, currency_code: &str) -> bool {
        self.currency_by_code(currency_code).is_some()
    }

    /// Currencies used in a country, in the order they were associated.
    ///
    /// Unknown or empty country codes yield an empty list.
    #[must_use]
    pub fn currencies_by_country_code(&self, country_code: &str) -> Vec<&CurrencyRecord> {
        self.currency_codes_by_country_code(country_code)
            .into_iter()
            .filter_map(|code| self.code_to_currency.get(code))
            .map(|&position| &self.records[position])
            .collect()
    }

    /// Currency codes used in a country.
    #[must_use]
    pub fn currency_codes_by_country_code(&self, country_code: &str) -> Vec<&str> {
        self.country_to_currency_codes
            .get(&normalize_code(country_code))
            .map(|codes| codes.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// The country chosen to represent a currency.
    #[must_use]
    pub fn primary_country_for_currency(&self, currency_code: &str) -> Option<&str> {
        self.currency_by_code(currency_code)
            .map(|record| record.primary_country_code.as_str())
    }

    /// Countries other than the primary that use a currency.
    #[must_use]
    pub fn other_countries_for_currency(&self, currency_code: &str) -> Vec<&str> {
        self.currency_by_code(currency_code)
            .map(|record| record.other_country_codes.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Every country using a currency: the primary first, then the others.
    #[must_use]
    pub fn all_countries_using_currency(&self, currency_code: &str) -> Vec<&str> {
        let Some(record) = self.currency_by_code(currency_code) else {
            return Vec::new();
        };

        let mut all: Vec<&str> = Vec::with_capacity(record.other_country_codes.len() + 1);
        for country in record.countries() {
            if !all.contains(&country) {
                all.push(country);
            }
        }
        all
    }

    /// Countries using a currency, split into primary, others, and all.
    ///
    /// An unknown currency yields `{ primary: None, others: [], all: [] }`.
    #[must_use]
    pub fn countries_for_currency(&self, currency_code: &str) -> CurrencyCountries<'_> {
        CurrencyCountries {
            primary: self.primary_country_for_currency(currency_code),
            others: self.other_countries_for_currency(currency_code),
            all: self.all_countries_using_currency(currency_code),
        }
    }

    /// All records in dataset order.
    #[must_use]
    pub fn all_currency_entries(&self) -> &[CurrencyRecord] {
        &self.records
    }

    /// All currency codes in dataset order.
    #[must_use]
    pub fn currency_codes(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|record| record.currency_code.as_str())
            .collect()
    }

    /// Every country code appearing in any record, in order of first appearance.
    #[must_use]
    pub fn country_codes(&self) -> Vec<&str> {
        self.country_order.iter().map(String::as_str).collect()
    }

    /// Number of currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the index holds no currencies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sizes of the built indices.
    #[must_use]
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            currencies: self.records.len(),
            countries: self.country_order.len(),
            aliased: self.aliased,
        }
    }
}
