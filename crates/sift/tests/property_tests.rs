//! Property-based tests for the classifier and decomposers.
//!
//! These verify the invariants that hold for any input:
//!
//! 1. **No panics**: recognizers and decomposers accept arbitrary text
//! 2. **Determinism**: the same input always produces the same output
//! 3. **Single bucket**: every value lands on exactly one label
//! 4. **Probability laws**: distributions sum to 1 with entries in [0,1]

use std::sync::Arc;

use proptest::prelude::*;

use sift::classify::{sample_values, SAMPLE_CAP};
use sift::{Classifier, CompanyDecomposer, Label, PhoneDecomposer, ReferenceData, Recognizers};

fn reference() -> Arc<ReferenceData> {
    Arc::new(ReferenceData::with_defaults())
}

/// Arbitrary printable ASCII strings (common case).
fn ascii_string() -> impl Strategy<Value = String> {
    "[ -~]{0,60}"
}

/// Strings that look like phone numbers.
fn phone_like() -> impl Strategy<Value = String> {
    prop_oneof![
        r"\+91 [6-9][0-9]{9}",
        r"\+1 [2-9][0-9]{9}",
        r"\+44 [0-9]{10}",
        r"[0-9]{7,15}",
        r"\([0-9]{3}\) [0-9]{3}-[0-9]{4}",
    ]
}

/// Strings that look like company names.
fn company_like() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Z][a-z]{2,10} (Ltd|Inc|LLC|GmbH|Corp)\\.?",
        "[A-Z][a-z]{2,10} [A-Z][a-z]{2,10} (pvt ltd|& Co\\. KG)",
        "[A-Z][a-z]{2,12}",
    ]
}

/// Completely random UTF-8 (edge cases).
fn random_utf8() -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<u8>(), 0..80)
        .prop_filter_map("valid UTF-8", |bytes| String::from_utf8(bytes).ok())
}

proptest! {
    #[test]
    fn recognizers_never_panic(value in random_utf8()) {
        let r = Recognizers::new(reference());
        let _ = r.is_phone(&value);
        let _ = r.is_date(&value);
        let _ = r.is_country(&value);
        let _ = r.is_company(&value);
        let _ = r.label_for(&value);
    }

    #[test]
    fn recognizers_are_deterministic(value in ascii_string()) {
        let r = Recognizers::new(reference());
        prop_assert_eq!(r.label_for(&value), r.label_for(&value));
    }

    #[test]
    fn label_for_matches_precedence(value in ascii_string()) {
        let r = Recognizers::new(reference());
        let expected = if r.is_phone(&value) {
            Label::PhoneNumber
        } else if r.is_date(&value) {
            Label::Date
        } else if r.is_country(&value) {
            Label::Country
        } else if r.is_company(&value) {
            Label::CompanyName
        } else {
            Label::Other
        };
        prop_assert_eq!(r.label_for(&value), expected);
    }

    #[test]
    fn distribution_is_a_probability_distribution(
        values in proptest::collection::vec(ascii_string(), 1..40)
    ) {
        let classifier = Classifier::new(reference());
        let refs: Vec<&str> = values.iter().map(|s| s.as_str()).collect();
        let dist = classifier.distribution(refs.iter().copied());

        let sum: f64 = dist.values().sum();
        let all_missing = refs
            .iter()
            .all(|v| sift::DataTable::is_missing_value(v));

        if all_missing {
            prop_assert!(sum.abs() < 1e-9);
        } else {
            prop_assert!((sum - 1.0).abs() < 1e-9);
        }
        for p in dist.values() {
            prop_assert!((0.0..=1.0).contains(p));
        }
    }

    #[test]
    fn classification_confidence_in_unit_interval(
        values in proptest::collection::vec(ascii_string(), 0..40)
    ) {
        let classifier = Classifier::new(reference());
        let refs: Vec<&str> = values.iter().map(|s| s.as_str()).collect();
        let result = classifier.classify(refs.iter().copied());
        prop_assert!((0.0..=1.0).contains(&result.confidence));
    }

    #[test]
    fn classification_is_deterministic(
        values in proptest::collection::vec(phone_like(), 1..30)
    ) {
        let classifier = Classifier::new(reference());
        let refs: Vec<&str> = values.iter().map(|s| s.as_str()).collect();
        let first = classifier.classify(refs.iter().copied());
        let second = classifier.classify(refs.iter().copied());
        prop_assert_eq!(first.label, second.label);
        prop_assert_eq!(first.confidence, second.confidence);
    }

    #[test]
    fn sample_respects_cap(count in 1usize..2200) {
        let owned: Vec<String> = (0..count).map(|i| i.to_string()).collect();
        let values: Vec<&str> = owned.iter().map(|s| s.as_str()).collect();
        let sample = sample_values(&values);
        prop_assert_eq!(sample.len(), count.min(SAMPLE_CAP));
    }

    #[test]
    fn phone_decompose_never_panics(value in random_utf8()) {
        let _ = PhoneDecomposer::new().decompose(&value);
    }

    #[test]
    fn phone_decompose_known_e164_round_trip(national in r"[6-9][0-9]{9}") {
        let raw = format!("+91 {}", national);
        let decomposed = PhoneDecomposer::new().decompose(&raw);
        prop_assert_eq!(decomposed.country, "India");
        prop_assert_eq!(decomposed.number, national);
    }

    #[test]
    fn company_decompose_never_panics(value in random_utf8()) {
        let _ = CompanyDecomposer::new(reference()).decompose(&value);
    }

    #[test]
    fn company_decompose_idempotent_on_clean_names(value in company_like()) {
        let reference = reference();
        let decomposer = CompanyDecomposer::new(Arc::clone(&reference));
        let first = decomposer.decompose(&value);

        // Idempotence holds whenever the returned name carries no
        // remaining suffix tokens.
        let has_suffix_token = first.name.split_whitespace().any(|w| {
            let token = w.trim_end_matches(|c: char| matches!(c, '.' | ',' | ';' | ':'));
            reference.is_legal_suffix(token)
        });
        if !has_suffix_token {
            let second = decomposer.decompose(&first.name);
            prop_assert_eq!(second.name, first.name);
            prop_assert_eq!(second.legal, "");
        }
    }

    #[test]
    fn company_decompose_output_is_lowercase(value in company_like()) {
        let decomposed = CompanyDecomposer::new(reference()).decompose(&value);
        prop_assert_eq!(decomposed.name.to_lowercase(), decomposed.name);
        prop_assert_eq!(decomposed.legal.to_lowercase(), decomposed.legal);
    }
}
