//! Workspace-wide error types.
//!
//! Lookups never fail: "nothing matched" is an empty result. These errors only
//! surface while building an index, loading configuration, or constructing a
//! flag locator.

use thiserror::Error;

/// Result type alias using `LookupError`.
pub type LookupResult<T> = Result<T, LookupError>;

/// Errors raised while preparing lookup data.
#[derive(Debug, Error)]
pub enum LookupError {
    /// A dataset record cannot be indexed (empty or duplicate currency code).
    #[error("Malformed record at position {position}: {reason}")]
    MalformedRecord {
        /// Zero-based position of the record in the dataset.
        position: usize,
        /// What is wrong with it.
        reason: String,
    },

    /// The dataset could not be parsed.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A flag locator could not be constructed.
    #[error("Flag resolution failed for {code:?}: {reason}")]
    FlagResolution {
        /// The country code as given by the caller.
        code: String,
        /// Why resolution failed.
        reason: String,
    },
}

impl LookupError {
    /// Returns a stable, machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedRecord { .. } => "MALFORMED_RECORD",
            Self::Dataset(_) => "DATASET_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::FlagResolution { .. } => "FLAG_RESOLUTION_FAILED",
        }
    }

    /// Returns true if the error means the shipped data itself is broken.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::MalformedRecord { .. } | Self::Dataset(_))
    }

    /// Builds a `FlagResolution` error for `code`.
    #[must_use]
    pub fn flag_resolution(code: &str, reason: impl Into<String>) -> Self {
        Self::FlagResolution {
            code: code.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<config::ConfigError> for LookupError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<url::ParseError> for LookupError {
    fn from(err: url::ParseError) -> Self {
        Self::Config(format!("invalid URL: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed() -> LookupError {
        LookupError::MalformedRecord {
            position: 3,
            reason: "empty currency code".into(),
        }
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(malformed().error_code(), "MALFORMED_RECORD");
        assert_eq!(
            LookupError::Dataset(String::new()).error_code(),
            "DATASET_ERROR"
        );
        assert_eq!(
            LookupError::Config(String::new()).error_code(),
            "CONFIG_ERROR"
        );
        assert_eq!(
            LookupError::flag_resolution("us", "bad").error_code(),
            "FLAG_RESOLUTION_FAILED"
        );
    }

    #[test]
    fn test_is_fatal() {
        assert!(malformed().is_fatal());
        assert!(LookupError::Dataset("eof".into()).is_fatal());
        assert!(!LookupError::Config("missing".into()).is_fatal());
        assert!(!LookupError::flag_resolution("us", "bad").is_fatal());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            malformed().to_string(),
            "Malformed record at position 3: empty currency code"
        );
        assert_eq!(
            LookupError::Dataset("msg".into()).to_string(),
            "Dataset error: msg"
        );
        assert_eq!(
            LookupError::Config("msg".into()).to_string(),
            "Configuration error: msg"
        );
        assert_eq!(
            LookupError::flag_resolution("u/s", "msg").to_string(),
            "Flag resolution failed for \"u/s\": msg"
        );
    }

    #[test]
    fn test_from_url_parse_error() {
        let err: LookupError = url::Url::parse("not a url").unwrap_err().into();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }
}
