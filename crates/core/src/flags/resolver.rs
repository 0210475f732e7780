//! Flag locator resolution.
//!
//! Locators are built by joining `<code>.svg` onto a base URL. Nothing here
//! reads the filesystem or the network, and a locator is returned whether or
//! not the file exists.

use std::path::Path;

use currency_flags_shared::{
    FlagsConfig, LookupError, LookupResult, non_empty_code, normalize_code,
};
use serde::Serialize;
use tracing::warn;
use url::Url;

use crate::currency::CurrencyIndex;

/// Flag locators for every country using a currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlagUrls {
    /// Flag of the primary country, `None` if the currency is unknown.
    pub primary: Option<Url>,
    /// One entry per other country, in record order; `None` where the
    /// locator cannot be built.
    pub others: Vec<Option<Url>>,
}

/// File name of a country's flag: normalized code, lower-cased, plus `.svg`.
///
/// # Example
///
/// ```
/// use currency_flags_core::flags::to_flag_filename;
///
/// assert_eq!(to_flag_filename(" US "), "us.svg");
/// ```
#[must_use]
pub fn to_flag_filename(country_code: &str) -> String {
    format!("{}.svg", normalize_code(country_code).to_lowercase())
}

/// Resolves country codes to flag asset locators under a fixed base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagResolver {
    base: Url,
}

impl FlagResolver {
    /// Creates a resolver rooted at `base`.
    ///
    /// A trailing slash is added to the path when missing, so `base` is always
    /// treated as a directory.
    #[must_use]
    pub fn new(mut base: Url) -> Self {
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Self { base }
    }

    /// Creates a resolver for a local directory, producing `file://` URLs.
    ///
    /// Relative paths are made absolute against the current directory.
    pub fn from_dir(dir: &Path) -> LookupResult<Self> {
        let absolute = std::path::absolute(dir).map_err(|e| {
            LookupError::Config(format!("cannot resolve flags directory {}: {e}", dir.display()))
        })?;
        let base = Url::from_directory_path(&absolute).map_err(|()| {
            LookupError::Config(format!(
                "flags directory is not a valid URL path: {}",
                absolute.display()
            ))
        })?;
        Ok(Self { base })
    }

    /// Creates a resolver for the flags directory bundled with the dataset.
    pub fn bundled() -> LookupResult<Self> {
        Self::from_dir(&currency_flags_data::flags_dir())
    }

    /// Creates a resolver from configuration.
    ///
    /// `base_url` wins over `flags_dir`; with neither set, the bundled
    /// directory is used.
    pub fn from_config(config: &FlagsConfig) -> LookupResult<Self> {
        if let Some(base) = config.parsed_base_url()? {
            return Ok(Self::new(base));
        }
        match &config.flags_dir {
            Some(dir) => Self::from_dir(dir),
            None => Self::bundled(),
        }
    }

    /// The directory URL flags are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Builds the locator for a country's flag.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::FlagResolution` if the code is empty or contains
    /// anything other than ASCII letters, digits, and `-`. Such codes could
    /// otherwise address files outside the flags directory.
    pub fn flag_url_from_country_code(&self, country_code: &str) -> LookupResult<Url> {
        let stem = normalize_code(country_code).to_lowercase();
        if stem.is_empty() {
            return Err(LookupError::flag_resolution(country_code, "empty country code"));
        }
        if !stem.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(LookupError::flag_resolution(
                country_code,
                "country code contains unsupported characters",
            ));
        }

        self.base
            .join(&to_flag_filename(country_code))
            .map_err(|e| LookupError::flag_resolution(country_code, e.to_string()))
    }

    /// Locator for a country's flag, or `None` if the code is empty or the
    /// locator cannot be built.
    #[must_use]
    pub fn flag_url_by_country_code(&self, country_code: &str) -> Option<Url> {
        if non_empty_code(country_code).is_none() {
            return None;
        }

        match self.flag_url_from_country_code(country_code) {
            Ok(url) => Some(url),
            Err(e) => {
                warn!(code = %country_code, error = %e, "Flag resolution failed");
                None
            }
        }
    }

    /// Flag of a currency's primary country; `None` for unknown currencies.
    #[must_use]
    pub fn flag_url_by_currency_code(
        &self,
        index: &CurrencyIndex,
        currency_code: &str,
    ) -> Option<Url> {
        index
            .primary_country_for_currency(currency_code)
            .and_then(|country| self.flag_url_by_country_code(country))
    }

    /// Flags of every country using a currency.
    ///
    /// An unknown currency yields `{ primary: None, others: [] }`. `others`
    /// lines up with the record's other country codes.
    #[must_use]
    pub fn flag_urls_for_currency(
        &self,
        index: &CurrencyIndex,
        currency_code: &str,
    ) -> FlagUrls {
        let Some(record) = index.currency_by_code(currency_code) else {
            return FlagUrls::default();
        };

        FlagUrls {
            primary: self.flag_url_by_country_code(&record.primary_country_code),
            others: record
                .other_country_codes
                .iter()
                .map(|country| self.flag_url_by_country_code(country))
                .collect(),
        }
    }
}
