//! Currency and country code normalization.
//!
//! Every code is trimmed and upper-cased before it is used as an index key,
//! stored on a record, or compared against one. Applying the same function to
//! dataset values and to query input is what makes lookups case- and
//! whitespace-insensitive.

/// Normalizes a currency or country code: trims whitespace and upper-cases.
///
/// # Example
///
/// ```
/// use currency_flags_shared::normalize_code;
///
/// assert_eq!(normalize_code(" usd "), "USD");
/// assert_eq!(normalize_code("Eu"), "EU");
/// ```
#[must_use]
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Normalizes a code, returning `None` when nothing is left after trimming.
#[must_use]
pub fn non_empty_code(code: &str) -> Option<String> {
    let normalized = normalize_code(code);
    (!normalized.is_empty()).then_some(normalized)
}
