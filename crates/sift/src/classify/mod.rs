//! Semantic column classification: per-value recognizers and the
//! sampling vote that labels a whole column.

mod classifier;
mod recognizers;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use classifier::{sample_values, Classifier, SAMPLE_CAP, SAMPLE_SEED};
pub use recognizers::Recognizers;

/// Semantic label assigned to a column.
///
/// The variant order is the recognizer precedence and the argmax
/// tie-break order: a value that satisfies several recognizers is
/// counted under the earliest one, and equal-probability labels
/// resolve to the earliest variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "Phone Number")]
    PhoneNumber,
    #[serde(rename = "Company Name")]
    CompanyName,
    Country,
    Date,
    Other,
}

impl Label {
    /// All labels in precedence order.
    pub const ALL: [Label; 5] = [
        Label::PhoneNumber,
        Label::CompanyName,
        Label::Country,
        Label::Date,
        Label::Other,
    ];

    /// Human-readable label name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::PhoneNumber => "Phone Number",
            Label::CompanyName => "Company Name",
            Label::Country => "Country",
            Label::Date => "Date",
            Label::Other => "Other",
        }
    }

    /// Lowercased, space-free form used by the CLI prediction output.
    pub fn slug(&self) -> &'static str {
        match self {
            Label::PhoneNumber => "phonenumber",
            Label::CompanyName => "companyname",
            Label::Country => "country",
            Label::Date => "date",
            Label::Other => "other",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A column's assigned label and the fraction of sampled values that
/// matched it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Winning label.
    pub label: Label,
    /// Fraction of the sample matched to the label, in [0, 1].
    pub confidence: f64,
}
