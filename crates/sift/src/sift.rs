//! Main Sift engine and public API.

use std::path::Path;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::classify::{Classification, Classifier, Label};
use crate::decompose::{CompanyDecomposer, PhoneDecomposer};
use crate::error::{Result, SiftError};
use crate::input::{DataTable, Parser, ParserConfig, SourceMetadata};
use crate::reference::{ReferenceConfig, ReferenceData, ReferenceWarning};

/// Canonical name for the winning phone column in augmented output.
pub const PHONE_COLUMN: &str = "PhoneNumber";
/// Canonical name for the winning company column in augmented output.
pub const COMPANY_COLUMN: &str = "CompanyName";

/// Configuration for the Sift engine.
#[derive(Debug, Clone, Default)]
pub struct SiftConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Reference file locations.
    pub reference: ReferenceConfig,
}

/// Result of classifying and augmenting a table.
#[derive(Debug, Clone)]
pub struct ProcessResult {
    /// The augmented output table.
    pub table: DataTable,
    /// Every column's classification, in original column order.
    pub classifications: IndexMap<String, Classification>,
    /// Original name of the selected Phone Number column, if any.
    pub phone_column: Option<String>,
    /// Original name of the selected Company Name column, if any.
    pub company_column: Option<String>,
}

/// The classification and decomposition engine.
///
/// Reference data is loaded once at construction and shared read-only by
/// the classifier and decomposers; every operation afterwards is a pure
/// function of its input.
pub struct Sift {
    parser: Parser,
    classifier: Classifier,
    phone: PhoneDecomposer,
    company: CompanyDecomposer,
    warnings: Vec<ReferenceWarning>,
}

impl Sift {
    /// Create an engine with default configuration, loading reference
    /// files from the working directory.
    pub fn new() -> Self {
        Self::with_config(SiftConfig::default())
    }

    /// Create an engine with custom configuration.
    pub fn with_config(config: SiftConfig) -> Self {
        let (reference, warnings) = ReferenceData::load(&config.reference);
        Self::build(Parser::with_config(config.parser), reference, warnings)
    }

    /// Create an engine around already-built reference data, skipping
    /// file lookups entirely.
    pub fn with_reference(reference: ReferenceData) -> Self {
        Self::build(Parser::new(), reference, Vec::new())
    }

    fn build(parser: Parser, reference: ReferenceData, warnings: Vec<ReferenceWarning>) -> Self {
        let reference = Arc::new(reference);
        Self {
            parser,
            classifier: Classifier::new(Arc::clone(&reference)),
            phone: PhoneDecomposer::new(),
            company: CompanyDecomposer::new(reference),
            warnings,
        }
    }

    /// Warnings raised while loading reference data, if any.
    pub fn reference_warnings(&self) -> &[ReferenceWarning] {
        &self.warnings
    }

    /// The column classifier.
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// The phone decomposer.
    pub fn phone_decomposer(&self) -> &PhoneDecomposer {
        &self.phone
    }

    /// The company decomposer.
    pub fn company_decomposer(&self) -> &CompanyDecomposer {
        &self.company
    }

    /// Classify one named column of a table.
    pub fn classify_column(&self, table: &DataTable, column: &str) -> Result<Classification> {
        let index = table
            .column_index(column)
            .ok_or_else(|| SiftError::InvalidColumn(column.to_string()))?;
        Ok(self.classifier.classify(table.column_values(index)))
    }

    /// Classify every column independently, preserving column order.
    pub fn classify_table(&self, table: &DataTable) -> IndexMap<String, Classification> {
        table
            .headers
            .iter()
            .enumerate()
            .map(|(index, name)| {
                (
                    name.clone(),
                    self.classifier.classify(table.column_values(index)),
                )
            })
            .collect()
    }

    /// Classify every column, then decompose the winning Phone Number
    /// and Company Name columns into an augmented output table.
    pub fn process_table(&self, table: &DataTable) -> Result<ProcessResult> {
        if table.column_count() == 0 {
            return Err(SiftError::EmptyInput("table has no columns".to_string()));
        }
        if table.row_count() == 0 {
            return Err(SiftError::EmptyInput("table has no data rows".to_string()));
        }

        let classifications = self.classify_table(table);
        let phone_column = select_column(&classifications, Label::PhoneNumber);
        let company_column = select_column(&classifications, Label::CompanyName);

        let output = self.augment(table, phone_column.as_deref(), company_column.as_deref());

        Ok(ProcessResult {
            table: output,
            classifications,
            phone_column,
            company_column,
        })
    }

    /// Parse a file and classify one named column.
    pub fn classify_file(
        &self,
        path: impl AsRef<Path>,
        column: &str,
    ) -> Result<(Classification, SourceMetadata)> {
        let (table, metadata) = self.parser.parse_file(path)?;
        let classification = self.classify_column(&table, column)?;
        Ok((classification, metadata))
    }

    /// Parse a file and produce its augmented table.
    pub fn process_file(&self, path: impl AsRef<Path>) -> Result<(ProcessResult, SourceMetadata)> {
        let (table, metadata) = self.parser.parse_file(path)?;
        let result = self.process_table(&table)?;
        Ok((result, metadata))
    }

    /// Build the augmented table: decomposed fields first, then the
    /// remaining original columns in original order. Added columns
    /// replace any same-named originals.
    fn augment(
        &self,
        table: &DataTable,
        phone_column: Option<&str>,
        company_column: Option<&str>,
    ) -> DataTable {
        let mut columns: Vec<(String, Vec<String>)> = Vec::new();

        if let Some(index) = phone_column.and_then(|name| table.column_index(name)) {
            let raw: Vec<String> = table.column_values(index).map(String::from).collect();
            let mut countries = Vec::with_capacity(raw.len());
            let mut numbers = Vec::with_capacity(raw.len());
            for value in &raw {
                let decomposed = self.phone.decompose(value);
                countries.push(decomposed.country);
                numbers.push(decomposed.number);
            }
            columns.push((PHONE_COLUMN.to_string(), raw));
            columns.push(("Country".to_string(), countries));
            columns.push(("Number".to_string(), numbers));
        }

        if let Some(index) = company_column.and_then(|name| table.column_index(name)) {
            let raw: Vec<String> = table.column_values(index).map(String::from).collect();
            let mut names = Vec::with_capacity(raw.len());
            let mut legals = Vec::with_capacity(raw.len());
            for value in &raw {
                let decomposed = self.company.decompose(value);
                names.push(decomposed.name);
                legals.push(decomposed.legal);
            }
            columns.push((COMPANY_COLUMN.to_string(), raw));
            columns.push(("Name".to_string(), names));
            columns.push(("Legal".to_string(), legals));
        }

        let generated: Vec<String> = columns.iter().map(|(name, _)| name.clone()).collect();
        for (index, header) in table.headers.iter().enumerate() {
            if Some(header.as_str()) == phone_column || Some(header.as_str()) == company_column {
                continue;
            }
            if generated.iter().any(|name| name == header) {
                continue;
            }
            let values: Vec<String> = table.column_values(index).map(String::from).collect();
            columns.push((header.clone(), values));
        }

        let headers: Vec<String> = columns.iter().map(|(name, _)| name.clone()).collect();
        let rows: Vec<Vec<String>> = (0..table.row_count())
            .map(|row| {
                columns
                    .iter()
                    .map(|(_, values)| values.get(row).cloned().unwrap_or_default())
                    .collect()
            })
            .collect();

        DataTable::new(headers, rows, table.delimiter)
    }
}

impl Default for Sift {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the column with the given label and the highest confidence; ties
/// resolve to the earliest column in original order.
fn select_column(
    classifications: &IndexMap<String, Classification>,
    label: Label,
) -> Option<String> {
    let mut best: Option<(&String, f64)> = None;
    for (name, classification) in classifications {
        if classification.label != label {
            continue;
        }
        let better = match best {
            Some((_, confidence)) => classification.confidence > confidence,
            None => true,
        };
        if better {
            best = Some((name, classification.confidence));
        }
    }
    best.map(|(name, _)| name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Sift {
        Sift::with_reference(ReferenceData::with_defaults())
    }

    fn sample_table() -> DataTable {
        DataTable::new(
            vec!["contact".into(), "firm".into(), "where".into()],
            vec![
                vec![
                    "+91 9876543210".into(),
                    "Tresata pvt ltd.".into(),
                    "India".into(),
                ],
                vec![
                    "4853859590".into(),
                    "Enno Roggemann GmbH & Co. KG".into(),
                    "France".into(),
                ],
                vec!["+1 4752162114".into(), "Apple Inc.".into(), "Japan".into()],
            ],
            b',',
        )
    }

    #[test]
    fn test_classify_column_invalid_name() {
        let engine = engine();
        let table = sample_table();
        assert!(matches!(
            engine.classify_column(&table, "missing"),
            Err(SiftError::InvalidColumn(_))
        ));
    }

    #[test]
    fn test_classify_table_labels() {
        let engine = engine();
        let table = sample_table();
        let classifications = engine.classify_table(&table);

        assert_eq!(classifications["contact"].label, Label::PhoneNumber);
        assert_eq!(classifications["firm"].label, Label::CompanyName);
        assert_eq!(classifications["where"].label, Label::Country);
    }

    #[test]
    fn test_process_table_augments_and_orders_columns() {
        let engine = engine();
        let result = engine.process_table(&sample_table()).unwrap();

        assert_eq!(result.phone_column.as_deref(), Some("contact"));
        assert_eq!(result.company_column.as_deref(), Some("firm"));
        assert_eq!(
            result.table.headers,
            vec!["PhoneNumber", "Country", "Number", "CompanyName", "Name", "Legal", "where"]
        );

        // Raw values are preserved under the canonical names.
        assert_eq!(result.table.get(0, 0), Some("+91 9876543210"));
        assert_eq!(result.table.get(0, 1), Some("India"));
        assert_eq!(result.table.get(0, 2), Some("9876543210"));
        assert_eq!(result.table.get(0, 4), Some("tresata"));
        assert_eq!(result.table.get(0, 5), Some("pvt ltd"));

        // Unknown-country number passes digits through.
        assert_eq!(result.table.get(1, 1), Some(""));
        assert_eq!(result.table.get(1, 2), Some("4853859590"));

        // Untouched columns keep their values.
        assert_eq!(result.table.get(2, 6), Some("Japan"));
    }

    #[test]
    fn test_process_table_empty_errors() {
        let engine = engine();
        let empty = DataTable::new(Vec::new(), Vec::new(), b',');
        assert!(matches!(
            engine.process_table(&empty),
            Err(SiftError::EmptyInput(_))
        ));

        let no_rows = DataTable::new(vec!["a".into()], Vec::new(), b',');
        assert!(matches!(
            engine.process_table(&no_rows),
            Err(SiftError::EmptyInput(_))
        ));
    }

    #[test]
    fn test_select_column_prefers_confidence_then_order() {
        let mut classifications: IndexMap<String, Classification> = IndexMap::new();
        classifications.insert(
            "a".into(),
            Classification {
                label: Label::PhoneNumber,
                confidence: 0.5,
            },
        );
        classifications.insert(
            "b".into(),
            Classification {
                label: Label::PhoneNumber,
                confidence: 0.9,
            },
        );
        classifications.insert(
            "c".into(),
            Classification {
                label: Label::PhoneNumber,
                confidence: 0.9,
            },
        );

        assert_eq!(
            select_column(&classifications, Label::PhoneNumber).as_deref(),
            Some("b")
        );
        assert_eq!(select_column(&classifications, Label::CompanyName), None);
    }
}
