//! Phone number decomposition into (country, national number).

use serde::{Deserialize, Serialize};

use crate::reference::regions;

/// Default regions tried, in order, when a number carries no
/// international prefix.
const DEFAULT_REGIONS: &[&str] = &["US", "IN", "GB"];

/// A phone value split into its display country and national digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecomposedPhone {
    /// Display country name, or the raw region code for unmapped
    /// regions, or empty when the country cannot be determined.
    pub country: String,
    /// National number digits, or the cleaned input when no structure
    /// was recognized.
    pub number: String,
}

/// Splits raw phone strings using the structured grammar first and
/// digit-prefix heuristics as a last resort.
#[derive(Debug, Clone, Default)]
pub struct PhoneDecomposer;

impl PhoneDecomposer {
    /// Create a phone decomposer.
    pub fn new() -> Self {
        Self
    }

    /// Decompose a raw phone string into (country, number).
    ///
    /// Never fails: unparseable input comes back with an empty country
    /// and the cleaned digit string passed through.
    pub fn decompose(&self, raw: &str) -> DecomposedPhone {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return DecomposedPhone {
                country: String::new(),
                number: String::new(),
            };
        }

        let cleaned = regions::strip_separators(trimmed);

        // Region-agnostic structured parse.
        if let Some(parsed) = regions::parse(&cleaned) {
            return from_parsed(parsed);
        }

        // Retry assuming each default region as context.
        for region in DEFAULT_REGIONS {
            if let Some(parsed) = regions::parse_with_default(&cleaned, region) {
                return from_parsed(parsed);
            }
        }

        // Manual digit-prefix heuristics.
        if cleaned.starts_with("91") && cleaned.len() >= 10 {
            return DecomposedPhone {
                country: "India".to_string(),
                number: cleaned[2..].to_string(),
            };
        }
        if cleaned.starts_with('1') && cleaned.len() == 11 {
            return DecomposedPhone {
                country: "US".to_string(),
                number: cleaned[1..].to_string(),
            };
        }
        if cleaned.starts_with("44") && cleaned.len() >= 10 {
            return DecomposedPhone {
                country: "UK".to_string(),
                number: cleaned[2..].to_string(),
            };
        }

        DecomposedPhone {
            country: String::new(),
            number: cleaned,
        }
    }
}

fn from_parsed(parsed: regions::ParsedNumber) -> DecomposedPhone {
    DecomposedPhone {
        country: regions::display_name(parsed.region).to_string(),
        number: parsed.national,
    }
}
