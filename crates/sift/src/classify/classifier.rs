//! Column classification by sampled per-value voting.

use std::sync::Arc;

use indexmap::IndexMap;

use super::{Classification, Label, Recognizers};
use crate::input::DataTable;
use crate::reference::ReferenceData;

/// Maximum number of values scored per column.
pub const SAMPLE_CAP: usize = 1000;

/// Seed for the over-cap random sample, fixed for reproducibility.
pub const SAMPLE_SEED: u64 = 42;

/// Assigns a confidence-scored semantic label to a column of raw values.
#[derive(Debug, Clone)]
pub struct Classifier {
    recognizers: Recognizers,
}

impl Classifier {
    /// Create a classifier backed by the given reference data.
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        Self {
            recognizers: Recognizers::new(reference),
        }
    }

    /// The per-value recognizers this classifier votes with.
    pub fn recognizers(&self) -> &Recognizers {
        &self.recognizers
    }

    /// Classify a column of raw values, missing entries included.
    ///
    /// Missing values are excluded before sampling and do not count
    /// toward the denominator. A column with no non-missing values is
    /// `(Other, 0.0)`.
    pub fn classify<'v, I>(&self, values: I) -> Classification
    where
        I: IntoIterator<Item = &'v str>,
    {
        let non_missing: Vec<&str> = values
            .into_iter()
            .filter(|v| !DataTable::is_missing_value(v))
            .collect();

        if non_missing.is_empty() {
            return Classification {
                label: Label::Other,
                confidence: 0.0,
            };
        }

        let sample = sample_values(&non_missing);
        let counts = self.count_labels(&sample);
        let total = sample.len() as f64;

        // Strict comparison keeps the earliest label on ties.
        let mut label = Label::Other;
        let mut best = 0usize;
        for (l, c) in &counts {
            if *c > best {
                label = *l;
                best = *c;
            }
        }

        Classification {
            label,
            confidence: best as f64 / total,
        }
    }

    /// Per-label probabilities over the sampled values, in precedence
    /// order. All zeros when the column has no non-missing values;
    /// otherwise the probabilities sum to 1.
    pub fn distribution<'v, I>(&self, values: I) -> IndexMap<Label, f64>
    where
        I: IntoIterator<Item = &'v str>,
    {
        let non_missing: Vec<&str> = values
            .into_iter()
            .filter(|v| !DataTable::is_missing_value(v))
            .collect();

        if non_missing.is_empty() {
            return Label::ALL.iter().map(|l| (*l, 0.0)).collect();
        }

        let sample = sample_values(&non_missing);
        let total = sample.len() as f64;
        self.count_labels(&sample)
            .into_iter()
            .map(|(l, c)| (l, c as f64 / total))
            .collect()
    }

    fn count_labels(&self, sample: &[&str]) -> IndexMap<Label, usize> {
        let mut counts: IndexMap<Label, usize> = Label::ALL.iter().map(|l| (*l, 0)).collect();
        for value in sample {
            if let Some(count) = counts.get_mut(&self.recognizers.label_for(value)) {
                *count += 1;
            }
        }
        counts
    }
}

/// Draw the column sample: the full set when at or under the cap, else a
/// seeded random subset of exactly [`SAMPLE_CAP`] values.
pub fn sample_values<'a>(values: &[&'a str]) -> Vec<&'a str> {
    if values.len() <= SAMPLE_CAP {
        return values.to_vec();
    }

    // Partial Fisher-Yates over the index space; the seed is fixed so the
    // same input always yields the same subset.
    let mut rng = fastrand::Rng::with_seed(SAMPLE_SEED);
    let mut indices: Vec<usize> = (0..values.len()).collect();
    for i in 0..SAMPLE_CAP {
        let j = rng.usize(i..indices.len());
        indices.swap(i, j);
    }
    indices.truncate(SAMPLE_CAP);
    indices.into_iter().map(|i| values[i]).collect()
}
