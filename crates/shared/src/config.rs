//! Flag asset configuration.

use serde::Deserialize;
use std::path::PathBuf;
use url::Url;

use crate::error::LookupResult;

/// Where flag assets are resolved from.
///
/// Both fields are optional; an empty config means "use the flags directory
/// bundled with the dataset".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FlagsConfig {
    /// Local directory containing `<code>.svg` files.
    #[serde(default)]
    pub flags_dir: Option<PathBuf>,
    /// Base URL (e.g. a CDN prefix) that takes precedence over `flags_dir`.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl FlagsConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Sources, later ones overriding earlier ones:
    /// - `config/default.toml`
    /// - `config/{RUN_MODE}.toml` (`RUN_MODE` defaults to `development`)
    /// - `CURRENCY_FLAGS__FLAGS_DIR` / `CURRENCY_FLAGS__BASE_URL`
    ///
    /// # Errors
    ///
    /// Returns an error if a source exists but cannot be read or deserialized.
    pub fn load() -> LookupResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("CURRENCY_FLAGS").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Creates a config pointing at a local flags directory.
    #[must_use]
    pub fn with_flags_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            flags_dir: Some(dir.into()),
            base_url: None,
        }
    }

    /// Creates a config pointing at a remote base URL.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            flags_dir: None,
            base_url: Some(base_url.into()),
        }
    }

    /// Parses the configured base URL, if any.
    ///
    /// A trailing slash is added when missing so that joining a filename
    /// appends to the path instead of replacing its last segment.
    pub fn parsed_base_url(&self) -> LookupResult<Option<Url>> {
        let Some(raw) = self.base_url.as_deref().map(str::trim) else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }

        let url = if raw.ends_with('/') {
            Url::parse(raw)?
        } else {
            Url::parse(&format!("{raw}/"))?
        };
        Ok(Some(url))
    }
}
