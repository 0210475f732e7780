//! Index construction.
//!
//! Every index is built in one pass over the dataset and never mutated again.
//! Codes are normalized on the way in so lookups only ever compare normalized
//! strings.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use currency_flags_data::{AliasTable, Dataset, RawCurrencyRecord};
use currency_flags_shared::{LookupError, LookupResult, normalize_code};
use tracing::debug;

use super::service::CurrencyIndex;
use super::types::CurrencyRecord;

impl CurrencyIndex {
    /// Builds the indices from raw records and an alias table.
    ///
    /// Records keep their dataset order. Alias keys are matched against the
    /// normalized currency code, so `" usd"` in the alias table still applies
    /// to `USD`.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::MalformedRecord` if a record has no currency
    /// code, no primary country, or repeats an earlier currency code. There is
    /// no partial index: a broken dataset fails as a whole.
    pub fn new<I>(records: I, aliases: &AliasTable) -> LookupResult<Self>
    where
        I: IntoIterator<Item = RawCurrencyRecord>,
    {
        let aliases = normalize_aliases(aliases);
        let mut index = Self::default();

        for (position, raw) in records.into_iter().enumerate() {
            let record = normalize_record(position, raw)?;
            let code = record.currency_code.clone();

            match index.code_to_currency.entry(code.clone()) {
                Entry::Occupied(_) => {
                    return Err(LookupError::MalformedRecord {
                        position,
                        reason: format!("duplicate currency code {code}"),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(index.records.len());
                }
            }

            let alias_names = aliases.get(&code).map(Vec::as_slice).unwrap_or_default();
            if !alias_names.is_empty() {
                index.aliased += 1;
            }

            let names: Vec<&str> = std::iter::once(record.currency_name.as_str())
                .chain(alias_names.iter().map(String::as_str))
                .collect();
            index
                .name_haystack_by_code
                .insert(code.clone(), names.join(" ").to_lowercase());
            index.exact_names_by_code.insert(
                code.clone(),
                names.iter().map(|name| name.trim().to_lowercase()).collect(),
            );

            for country in record.countries() {
                index.link_country(country, &code);
            }
            index.records.push(record);
        }

        debug!(
            currencies = index.records.len(),
            countries = index.country_order.len(),
            aliased = index.aliased,
            "Built currency index"
        );

        Ok(index)
    }

    /// Builds the indices from a loaded dataset.
    pub fn from_dataset(dataset: &Dataset) -> LookupResult<Self> {
        Self::new(dataset.records.iter().cloned(), &dataset.aliases)
    }

    /// Builds the indices from the dataset bundled with `currency-flags-data`.
    pub fn bundled() -> LookupResult<Self> {
        let dataset = currency_flags_data::load()?;
        Self::new(dataset.records, &dataset.aliases)
    }

    /// Adds `currency_code` to the ordered set of currencies used in `country`.
    fn link_country(&mut self, country: &str, currency_code: &str) {
        if !self.country_to_currency_codes.contains_key(country) {
            self.country_order.push(country.to_string());
        }

        let codes = self
            .country_to_currency_codes
            .entry(country.to_string())
            .or_default();
        if !codes.iter().any(|c| c == currency_code) {
            codes.push(currency_code.to_string());
        }
    }
}

fn normalize_record(position: usize, raw: RawCurrencyRecord) -> LookupResult<CurrencyRecord> {
    let currency_code = normalize_code(&raw.currency_code);
    if currency_code.is_empty() {
        return Err(LookupError::MalformedRecord {
            position,
            reason: "missing currency code".to_string(),
        });
    }

    let primary_country_code = normalize_code(&raw.primary_country_code);
    if primary_country_code.is_empty() {
        return Err(LookupError::MalformedRecord {
            position,
            reason: format!("{currency_code} has no primary country"),
        });
    }

    let mut other_country_codes: Vec<String> = Vec::with_capacity(raw.other_country_codes.len());
    for other in &raw.other_country_codes {
        let other = normalize_code(other);
        if other.is_empty() || other == primary_country_code || other_country_codes.contains(&other) {
            continue;
        }
        other_country_codes.push(other);
    }

    Ok(CurrencyRecord {
        currency_code,
        currency_name: raw.currency_name,
        primary_country_code,
        other_country_codes,
    })
}

fn normalize_aliases(aliases: &AliasTable) -> HashMap<String, Vec<String>> {
    let mut normalized: HashMap<String, Vec<String>> = HashMap::with_capacity(aliases.len());
    for (code, names) in aliases {
        let entry = normalized.entry(normalize_code(code)).or_default();
        entry.extend(
            names
                .iter()
                .map(|name| name.trim())
                .filter(|name| !name.is_empty())
                .map(ToString::to_string),
        );
    }
    normalized
}
