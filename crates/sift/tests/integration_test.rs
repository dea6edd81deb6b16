//! Integration tests for the sift engine.

use std::io::Write;
use tempfile::NamedTempFile;

use sift::{Label, ReferenceConfig, ReferenceData, Sift, SiftConfig, SiftError};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

fn engine() -> Sift {
    Sift::with_reference(ReferenceData::with_defaults())
}

// =============================================================================
// End-to-End Processing
// =============================================================================

#[test]
fn test_process_file_augments_table() {
    let content = "ph_nb,vendor,region\n\
                   +91 9876543210,Tresata pvt ltd.,India\n\
                   4853859590,Enno Roggemann GmbH & Co. KG,Germany\n\
                   +1 4752162114,Apple Inc.,Japan\n";
    let file = create_test_file(content);

    let sift = engine();
    let (result, source) = sift.process_file(file.path()).expect("Processing failed");

    assert_eq!(source.row_count, 3);
    assert_eq!(source.column_count, 3);
    assert_eq!(source.format, "csv");

    assert_eq!(result.phone_column.as_deref(), Some("ph_nb"));
    assert_eq!(result.company_column.as_deref(), Some("vendor"));

    // Decomposed fields lead, remaining columns follow in original order.
    assert_eq!(
        result.table.headers,
        vec!["PhoneNumber", "Country", "Number", "CompanyName", "Name", "Legal", "region"]
    );

    assert_eq!(result.table.get(0, 1), Some("India"));
    assert_eq!(result.table.get(0, 2), Some("9876543210"));
    assert_eq!(result.table.get(1, 1), Some(""));
    assert_eq!(result.table.get(1, 2), Some("4853859590"));
    assert_eq!(result.table.get(1, 4), Some("enno roggemann"));
    assert_eq!(result.table.get(1, 5), Some("gmbh & co kg"));
    assert_eq!(result.table.get(2, 6), Some("Japan"));
}

#[test]
fn test_process_file_without_phone_or_company() {
    let content = "region,when\nIndia,12/25/2023\nFrance,11/30/2022\n";
    let file = create_test_file(content);

    let sift = engine();
    let (result, _) = sift.process_file(file.path()).expect("Processing failed");

    assert_eq!(result.phone_column, None);
    assert_eq!(result.company_column, None);
    assert_eq!(result.table.headers, vec!["region", "when"]);
    assert_eq!(result.table.get(0, 0), Some("India"));
}

#[test]
fn test_output_round_trip() {
    let content = "ph_nb\n+91 9876543210\n9876543210\n";
    let file = create_test_file(content);

    let sift = engine();
    let (result, _) = sift.process_file(file.path()).expect("Processing failed");

    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("output.csv");
    result.table.write_csv(&out_path).expect("Write failed");

    let written = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(
        written,
        "PhoneNumber,Country,Number\n\
         +91 9876543210,India,9876543210\n\
         9876543210,India,9876543210\n"
    );
}

// =============================================================================
// Column Classification
// =============================================================================

#[test]
fn test_classify_file_phone_majority() {
    // Five valid phone strings out of seven values.
    let content = "contact\n\
                   +91 9876543210\n\
                   9876543210\n\
                   485-385-9590\n\
                   +1 4752162114\n\
                   8005550199\n\
                   not a phone\n\
                   hello world\n";
    let file = create_test_file(content);

    let sift = engine();
    let (classification, _) = sift
        .classify_file(file.path(), "contact")
        .expect("Classification failed");

    assert_eq!(classification.label, Label::PhoneNumber);
    assert!((classification.confidence - 5.0 / 7.0).abs() < 1e-9);
}

#[test]
fn test_classify_file_invalid_column() {
    let content = "a,b\n1,2\n";
    let file = create_test_file(content);

    let sift = engine();
    let err = sift.classify_file(file.path(), "missing").unwrap_err();
    assert!(matches!(err, SiftError::InvalidColumn(_)));
}

#[test]
fn test_empty_file_is_rejected() {
    let file = create_test_file("a,b\n");

    let sift = engine();
    let err = sift.process_file(file.path()).unwrap_err();
    assert!(matches!(err, SiftError::EmptyInput(_)));
}

#[test]
fn test_equal_probability_tie_breaks_by_enumeration_order() {
    // One country and one capitalized non-country: 0.5 each for Country
    // and Company Name; Company Name is earlier in the enumeration.
    let content = "place\nIndia\nIndiana\n";
    let file = create_test_file(content);

    let sift = engine();
    let (classification, _) = sift
        .classify_file(file.path(), "place")
        .expect("Classification failed");

    assert_eq!(classification.label, Label::CompanyName);
    assert!((classification.confidence - 0.5).abs() < 1e-9);
}

// =============================================================================
// Reference File Loading
// =============================================================================

#[test]
fn test_reference_files_override_defaults() {
    let mut countries = NamedTempFile::new().unwrap();
    writeln!(countries, "wakanda").unwrap();
    let mut legal = NamedTempFile::new().unwrap();
    writeln!(legal, "xyz").unwrap();

    let config = SiftConfig {
        reference: ReferenceConfig {
            countries_path: countries.path().to_path_buf(),
            legal_path: legal.path().to_path_buf(),
        },
        ..SiftConfig::default()
    };
    let sift = Sift::with_config(config);
    assert!(sift.reference_warnings().is_empty());

    let content = "col\nWakanda\nWakanda\nWakanda\n";
    let file = create_test_file(content);
    let (classification, _) = sift.classify_file(file.path(), "col").unwrap();
    assert_eq!(classification.label, Label::Country);
    assert!((classification.confidence - 1.0).abs() < 1e-9);
}

#[test]
fn test_missing_reference_files_warn_and_default() {
    let config = SiftConfig {
        reference: ReferenceConfig {
            countries_path: "/nonexistent/Countries.txt".into(),
            legal_path: "/nonexistent/legal.txt".into(),
        },
        ..SiftConfig::default()
    };
    let sift = Sift::with_config(config);

    assert_eq!(sift.reference_warnings().len(), 2);

    // Built-in defaults still classify.
    let content = "col\nIndia\nFrance\n";
    let file = create_test_file(content);
    let (classification, _) = sift.classify_file(file.path(), "col").unwrap();
    assert_eq!(classification.label, Label::Country);
}

// =============================================================================
// Delimiter Handling
// =============================================================================

#[test]
fn test_tsv_auto_detect() {
    let content = "contact\tregion\n+91 9876543210\tIndia\n9876543210\tFrance\n";
    let file = create_test_file(content);

    let sift = engine();
    let (result, source) = sift.process_file(file.path()).expect("Processing failed");

    assert_eq!(source.format, "tsv");
    assert_eq!(result.phone_column.as_deref(), Some("contact"));
}
