//! Country and legal-suffix reference sets.
//!
//! Both sets are built once at startup from newline-delimited text files
//! and are read-only afterwards. A missing or unreadable file degrades to
//! the built-in default set and surfaces a warning instead of failing.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// Built-in country list used when the countries file is absent.
const DEFAULT_COUNTRIES: &[&str] = &[
    "india",
    "usa",
    "united states",
    "uk",
    "united kingdom",
    "china",
    "japan",
    "germany",
    "france",
    "canada",
    "australia",
];

/// Built-in legal-suffix list used when the suffix file is absent.
const DEFAULT_LEGAL_SUFFIXES: &[&str] = &[
    "ltd",
    "limited",
    "inc",
    "incorporated",
    "corp",
    "corporation",
    "llc",
    "gmbh",
    "ag",
    "pvt",
    "private",
    "co",
    "kg",
    "plc",
    "sa",
    "nv",
    "bv",
    "oy",
    "ab",
    "as",
    "spa",
    "srl",
    "sl",
    "slu",
];

/// Where to look for the two reference files.
#[derive(Debug, Clone)]
pub struct ReferenceConfig {
    /// Path to the newline-delimited country list.
    pub countries_path: PathBuf,
    /// Path to the newline-delimited legal-suffix list.
    pub legal_path: PathBuf,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            countries_path: PathBuf::from("Countries.txt"),
            legal_path: PathBuf::from("legal.txt"),
        }
    }
}

/// A non-fatal problem encountered while loading reference data.
#[derive(Debug, Clone)]
pub struct ReferenceWarning {
    /// The file that could not be read.
    pub path: PathBuf,
    /// What went wrong.
    pub detail: String,
}

impl fmt::Display for ReferenceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (using built-in defaults)",
            self.path.display(),
            self.detail
        )
    }
}

/// Immutable lookup sets for the recognizers and decomposers.
///
/// All entries are normalized: trimmed and lowercased.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    countries: HashSet<String>,
    legal_suffixes: HashSet<String>,
}

impl ReferenceData {
    /// Load reference sets from the configured files, substituting the
    /// built-in defaults (with a warning) for any file that cannot be read.
    pub fn load(config: &ReferenceConfig) -> (Self, Vec<ReferenceWarning>) {
        let mut warnings = Vec::new();

        let countries = match read_set(&config.countries_path) {
            Ok(set) => set,
            Err(e) => {
                warnings.push(ReferenceWarning {
                    path: config.countries_path.clone(),
                    detail: e.to_string(),
                });
                default_set(DEFAULT_COUNTRIES)
            }
        };

        let legal_suffixes = match read_set(&config.legal_path) {
            Ok(set) => set,
            Err(e) => {
                warnings.push(ReferenceWarning {
                    path: config.legal_path.clone(),
                    detail: e.to_string(),
                });
                default_set(DEFAULT_LEGAL_SUFFIXES)
            }
        };

        (
            Self {
                countries,
                legal_suffixes,
            },
            warnings,
        )
    }

    /// Build reference data from the built-in default sets only.
    pub fn with_defaults() -> Self {
        Self {
            countries: default_set(DEFAULT_COUNTRIES),
            legal_suffixes: default_set(DEFAULT_LEGAL_SUFFIXES),
        }
    }

    /// Build reference data from explicit entries (normalized on insert).
    pub fn from_parts<I, J, S, T>(countries: I, legal_suffixes: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        Self {
            countries: countries
                .into_iter()
                .map(|s| s.as_ref().trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
            legal_suffixes: legal_suffixes
                .into_iter()
                .map(|s| s.as_ref().trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// Exact case-insensitive country match on the trimmed value.
    pub fn is_country(&self, value: &str) -> bool {
        self.countries.contains(&value.trim().to_lowercase())
    }

    /// Membership test for an already-normalized suffix token.
    pub fn is_legal_suffix(&self, token: &str) -> bool {
        self.legal_suffixes.contains(token)
    }

    /// Number of known countries.
    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    /// Number of known legal suffixes.
    pub fn legal_suffix_count(&self) -> usize {
        self.legal_suffixes.len()
    }
}

fn default_set(entries: &[&str]) -> HashSet<String> {
    entries.iter().map(|s| s.to_string()).collect()
}

fn read_set(path: &Path) -> std::io::Result<HashSet<String>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect())
}
