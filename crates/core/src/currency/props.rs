//! Property-based tests for index construction and queries.
//!
//! Datasets are generated with messy input (lower-case codes, padding,
//! duplicated and primary-overlapping country lists) so the properties also
//! cover normalization.

use proptest::prelude::*;
use std::collections::HashSet;

use currency_flags_data::{AliasTable, RawCurrencyRecord};

use super::service::CurrencyIndex;

/// Strategy for one raw record with the given (upper-case) currency code.
fn raw_record(code: String) -> impl Strategy<Value = RawCurrencyRecord> {
    (
        any::<bool>(),
        "[A-Z]{2}",
        prop::collection::vec("[A-Za-z]{2}", 0..6),
        "[A-Za-z]{3,8}( [A-Za-z]{3,8}){0,2}",
        any::<bool>(),
    )
        .prop_map(move |(messy, primary, mut others, name, repeat_primary)| {
            if repeat_primary {
                others.push(format!(" {} ", primary.to_lowercase()));
            }
            let currency_code = if messy {
                format!("  {}\t", code.to_lowercase())
            } else {
                code.clone()
            };
            RawCurrencyRecord {
                currency_code,
                currency_name: name,
                primary_country_code: primary,
                other_country_codes: others,
            }
        })
}

/// Strategy for a dataset of 1 to 20 records with unique currency codes.
fn raw_dataset() -> impl Strategy<Value = Vec<RawCurrencyRecord>> {
    prop::collection::hash_set("[A-Z]{3}", 1..20)
        .prop_flat_map(|codes| codes.into_iter().map(raw_record).collect::<Vec<_>>())
}

fn build(records: &[RawCurrencyRecord]) -> CurrencyIndex {
    CurrencyIndex::new(records.to_vec(), &AliasTable::new()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* dataset code C, looking up C in any case or padding returns
    /// the record whose code is the normalized C.
    #[test]
    fn prop_lookup_returns_normalized_code(records in raw_dataset()) {
        let index = build(&records);
        for raw in &records {
            let expected = raw.currency_code.trim().to_uppercase();
            for query in [
                raw.currency_code.clone(),
                expected.to_lowercase(),
                format!(" {expected} "),
            ] {
                let record = index.currency_by_code(&query);
                prop_assert!(record.is_some(), "{} not found", query);
                prop_assert_eq!(&record.unwrap().currency_code, &expected);
            }
        }
    }

    /// *For any* record, the primary country is never among the others and
    /// the others carry no duplicates.
    #[test]
    fn prop_primary_not_in_others(records in raw_dataset()) {
        let index = build(&records);
        for record in index.all_currency_entries() {
            prop_assert!(!record.other_country_codes.contains(&record.primary_country_code));
            let unique: HashSet<&String> = record.other_country_codes.iter().collect();
            prop_assert_eq!(unique.len(), record.other_country_codes.len());
        }
    }

    /// *For any* currency, the full country list has no duplicates and starts
    /// with the primary country.
    #[test]
    fn prop_all_countries_primary_first(records in raw_dataset()) {
        let index = build(&records);
        for code in index.currency_codes() {
            let all = index.all_countries_using_currency(code);
            let unique: HashSet<&&str> = all.iter().collect();
            prop_assert_eq!(unique.len(), all.len());
            prop_assert_eq!(all.first().copied(), index.primary_country_for_currency(code));
        }
    }

    /// *For any* country code K in the dataset, the reverse lookup is
    /// non-empty and every record returned lists K.
    #[test]
    fn prop_reverse_lookup_consistent(records in raw_dataset()) {
        let index = build(&records);
        for country in index.country_codes() {
            let currencies = index.currencies_by_country_code(country);
            prop_assert!(!currencies.is_empty(), "{} has no currencies", country);
            for record in currencies {
                prop_assert!(record.is_used_in(country));
            }
        }
    }

    /// Country codes are reported once each, and every country of every
    /// record is reported.
    #[test]
    fn prop_country_codes_complete_and_unique(records in raw_dataset()) {
        let index = build(&records);
        let countries = index.country_codes();
        let unique: HashSet<&str> = countries.iter().copied().collect();
        prop_assert_eq!(unique.len(), countries.len());
        for record in index.all_currency_entries() {
            for country in record.countries() {
                prop_assert!(unique.contains(country));
            }
        }
    }

    /// *For any* query, name search only returns records whose name contains
    /// the query, and repeated calls return the same records.
    #[test]
    fn prop_name_search_matches_and_is_idempotent(
        records in raw_dataset(),
        query in "[a-zA-Z]{1,3}",
    ) {
        let index = build(&records);
        let first = index.find_currencies_by_name(&query);
        let second = index.find_currencies_by_name(&query);
        prop_assert_eq!(&first, &second);
        for record in first {
            prop_assert!(record.currency_name.to_lowercase().contains(&query.to_lowercase()));
        }
    }

    /// Every query returns structurally identical results when repeated.
    #[test]
    fn prop_queries_are_idempotent(records in raw_dataset(), query in "[A-Za-z ]{0,6}") {
        let index = build(&records);
        prop_assert_eq!(index.search(&query), index.search(&query));
        prop_assert_eq!(
            index.countries_for_currency(&query),
            index.countries_for_currency(&query)
        );
        prop_assert_eq!(
            index.currencies_by_country_code(&query),
            index.currencies_by_country_code(&query)
        );
        prop_assert_eq!(
            index.currencies_by_exact_name(&query),
            index.currencies_by_exact_name(&query)
        );
    }
}
