//! Company name decomposition into (base name, legal-suffix phrase).

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::reference::ReferenceData;

/// A company value split into its base name and legal-suffix phrase,
/// both lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecomposedCompany {
    /// Base name; the entire lowercased input when no suffix is found.
    pub name: String,
    /// Legal-suffix phrase, empty when none is detected.
    pub legal: String,
}

/// Splits raw company names against the legal-suffix reference set.
#[derive(Debug, Clone)]
pub struct CompanyDecomposer {
    reference: Arc<ReferenceData>,
}

impl CompanyDecomposer {
    /// Create a company decomposer backed by the given reference data.
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        Self { reference }
    }

    /// Decompose a raw company string into (name, legal).
    ///
    /// Tokens are scanned right to left: the rightmost legal-suffix
    /// token starts the suffix span, which extends left over further
    /// suffix tokens and `&`/`and` conjunctions. The first token outside
    /// the span ends it; that token and everything left of it form the
    /// base name.
    pub fn decompose(&self, raw: &str) -> DecomposedCompany {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return DecomposedCompany {
                name: String::new(),
                legal: String::new(),
            };
        }

        let words: Vec<&str> = trimmed.split_whitespace().collect();
        let mut legal_parts: Vec<String> = Vec::new();
        let mut trailing_name: Vec<&str> = Vec::new();
        let mut span_end: Option<usize> = None;
        let mut found_legal = false;

        for i in (0..words.len()).rev() {
            let token = normalize_token(words[i]);
            if !found_legal {
                if self.reference.is_legal_suffix(&token) {
                    legal_parts.push(token);
                    found_legal = true;
                } else {
                    trailing_name.push(words[i]);
                }
            } else if self.reference.is_legal_suffix(&token) || token == "&" || token == "and" {
                legal_parts.push(token);
            } else {
                span_end = Some(i);
                break;
            }
        }

        if !found_legal {
            return DecomposedCompany {
                name: trimmed.to_lowercase(),
                legal: String::new(),
            };
        }

        legal_parts.reverse();
        trailing_name.reverse();

        let mut name_parts: Vec<&str> = Vec::new();
        if let Some(end) = span_end {
            name_parts.extend(&words[..=end]);
        }
        name_parts.extend(trailing_name);

        DecomposedCompany {
            name: name_parts.join(" ").to_lowercase(),
            legal: legal_parts.join(" "),
        }
    }
}

/// Lowercase a token and strip trailing punctuation.
fn normalize_token(word: &str) -> String {
    word.to_lowercase()
        .trim_end_matches(|c: char| matches!(c, '.' | ',' | ';' | ':'))
        .to_string()
}
