//! Dataset types and loading.

use std::collections::HashMap;
use std::path::PathBuf;

use currency_flags_shared::{LookupError, LookupResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

const CURRENCIES_JSON: &str = include_str!("../data/currencies.json");
const ALIASES_JSON: &str = include_str!("../data/aliases.json");

/// Alternate display names keyed by currency code.
///
/// A code with no entry has no aliases.
pub type AliasTable = HashMap<String, Vec<String>>;

/// A currency record as it appears in the dataset, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCurrencyRecord {
    /// ISO 4217 code. Missing codes deserialize to an empty string and are
    /// rejected when the index is built.
    #[serde(default)]
    pub currency_code: String,
    /// Canonical display name.
    #[serde(default)]
    pub currency_name: String,
    /// Country chosen to represent the currency.
    #[serde(default)]
    pub primary_country_code: String,
    /// Additional countries sharing the currency.
    #[serde(default)]
    pub other_country_codes: Vec<String>,
}

impl RawCurrencyRecord {
    /// Creates a raw record.
    #[must_use]
    pub fn new(
        currency_code: impl Into<String>,
        currency_name: impl Into<String>,
        primary_country_code: impl Into<String>,
        other_country_codes: &[&str],
    ) -> Self {
        Self {
            currency_code: currency_code.into(),
            currency_name: currency_name.into(),
            primary_country_code: primary_country_code.into(),
            other_country_codes: other_country_codes.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Ordered currency records plus their alias table.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Records in dataset order.
    pub records: Vec<RawCurrencyRecord>,
    /// Aliases keyed by currency code.
    pub aliases: AliasTable,
}

impl Dataset {
    /// Parses a dataset from its two JSON documents.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::Dataset` if either document is not valid JSON of
    /// the expected shape.
    pub fn from_json(records_json: &str, aliases_json: &str) -> LookupResult<Self> {
        let records: Vec<RawCurrencyRecord> = serde_json::from_str(records_json)
            .map_err(|e| LookupError::Dataset(format!("currencies: {e}")))?;
        let aliases: AliasTable = serde_json::from_str(aliases_json)
            .map_err(|e| LookupError::Dataset(format!("aliases: {e}")))?;

        Ok(Self { records, aliases })
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Loads the dataset embedded in this crate.
///
/// # Errors
///
/// Only fails if the embedded JSON is broken, which indicates a bad build.
pub fn load() -> LookupResult<Dataset> {
    let dataset = Dataset::from_json(CURRENCIES_JSON, ALIASES_JSON)?;
    debug!(
        records = dataset.records.len(),
        aliased = dataset.aliases.len(),
        "Loaded bundled currency dataset"
    );
    Ok(dataset)
}

/// Absolute path of the flag asset directory.
///
/// Locators point into this directory whether or not the SVGs have been
/// placed there yet; they are supplied externally by the generation step.
#[must_use]
pub fn flags_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("flags")
}
