//! CLI command implementations.

pub mod parse;
pub mod predict;
pub mod sample;
pub mod serve;

use std::path::PathBuf;

use colored::Colorize;
use sift::{ReferenceConfig, Sift, SiftConfig};

/// Build an engine honoring reference-path overrides, printing any
/// reference-loading warnings to stderr.
pub(crate) fn build_engine(countries: Option<PathBuf>, legal: Option<PathBuf>) -> Sift {
    let mut reference = ReferenceConfig::default();
    if let Some(path) = countries {
        reference.countries_path = path;
    }
    if let Some(path) = legal {
        reference.legal_path = path;
    }

    let sift = Sift::with_config(SiftConfig {
        reference,
        ..SiftConfig::default()
    });

    for warning in sift.reference_warnings() {
        eprintln!("{} {}", "Warning:".yellow().bold(), warning);
    }

    sift
}
