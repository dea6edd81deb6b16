//! Sift: semantic column classification and field decomposition for
//! tabular datasets.
//!
//! Sift labels spreadsheet columns as Phone Number, Company Name,
//! Country, Date, or Other by scoring a sample of each column's values
//! against rule-based recognizers, then splits the winning phone and
//! company columns into structured sub-fields.
//!
//! # Core Principles
//!
//! - **Deterministic**: rule-based recognizers, fixed precedence, and a
//!   fixed sampling seed; no statistical models.
//! - **Forgiving**: unparseable values are negative results, never
//!   errors; missing reference files degrade to built-in defaults.
//! - **Shared read-only reference data**: lookup sets are built once and
//!   never mutated, so per-column work is safe to parallelize.
//!
//! # Example
//!
//! ```no_run
//! use sift::Sift;
//!
//! let sift = Sift::new();
//! let (result, _source) = sift.process_file("contacts.csv").unwrap();
//!
//! for (column, classification) in &result.classifications {
//!     println!("{}: {} ({:.0}%)", column, classification.label,
//!         classification.confidence * 100.0);
//! }
//! ```

pub mod classify;
pub mod decompose;
pub mod error;
pub mod input;
pub mod reference;

mod sift;

pub use crate::sift::{ProcessResult, Sift, SiftConfig, COMPANY_COLUMN, PHONE_COLUMN};
pub use classify::{Classification, Classifier, Label, Recognizers};
pub use decompose::{CompanyDecomposer, DecomposedCompany, DecomposedPhone, PhoneDecomposer};
pub use error::{Result, SiftError};
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata};
pub use reference::{ReferenceConfig, ReferenceData, ReferenceWarning};
