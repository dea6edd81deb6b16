//! Per-value recognizers for the semantic types.
//!
//! Each recognizer decides whether a single non-missing raw value looks
//! like its type. The classifier evaluates them in fixed precedence
//! (phone, date, country, company), first match wins.

use std::sync::Arc;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use super::Label;
use crate::reference::{regions, ReferenceData};

/// Shape a cleaned phone candidate must have: optional plus, 7-15 digits.
static PHONE_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?\d{7,15}$").unwrap());

/// Literal date patterns, each confirmed by a strict calendar parse.
static DATE_PATTERNS: Lazy<Vec<(Regex, &'static [&'static str])>> = Lazy::new(|| {
    vec![
        (
            Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap(),
            &["%Y-%m-%d"][..],
        ),
        (
            Regex::new(r"^\d{2}/\d{2}/\d{4}$").unwrap(),
            &["%m/%d/%Y"][..],
        ),
        (
            Regex::new(r"^\d{2}-\d{2}-\d{4}$").unwrap(),
            &["%m-%d-%Y"][..],
        ),
        (
            Regex::new(r"^\d{4}/\d{2}/\d{2}$").unwrap(),
            &["%Y/%m/%d"][..],
        ),
        (
            Regex::new(r"^\d{1,2}\s+[A-Za-z]+\s+\d{4}$").unwrap(),
            &["%d %B %Y", "%d %b %Y"][..],
        ),
    ]
});

/// A numeric date token for the relaxed fallback (e.g. 15-03-2024,
/// 2024.01.15). Both separators must agree; both day/month orders are
/// tried.
static NUMERIC_DATE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,4})([-/.])(\d{1,2})([-/.])(\d{1,4})$").unwrap());

/// Substrings that strongly indicate a company name.
const COMPANY_INDICATORS: &[&str] = &["bank", "corp", "inc", "ltd", "llc", "gmbh", "ag", "co"];

/// Month names and their common abbreviations.
const MONTHS: &[(&str, u32)] = &[
    ("january", 1),
    ("jan", 1),
    ("february", 2),
    ("feb", 2),
    ("march", 3),
    ("mar", 3),
    ("april", 4),
    ("apr", 4),
    ("may", 5),
    ("june", 6),
    ("jun", 6),
    ("july", 7),
    ("jul", 7),
    ("august", 8),
    ("aug", 8),
    ("september", 9),
    ("sept", 9),
    ("sep", 9),
    ("october", 10),
    ("oct", 10),
    ("november", 11),
    ("nov", 11),
    ("december", 12),
    ("dec", 12),
];

/// The four semantic-type predicates, sharing one reference data set.
#[derive(Debug, Clone)]
pub struct Recognizers {
    reference: Arc<ReferenceData>,
}

impl Recognizers {
    /// Create recognizers backed by the given reference data.
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        Self { reference }
    }

    /// Label a single non-missing value under the fixed precedence.
    pub fn label_for(&self, value: &str) -> Label {
        if self.is_phone(value) {
            Label::PhoneNumber
        } else if self.is_date(value) {
            Label::Date
        } else if self.is_country(value) {
            Label::Country
        } else if self.is_company(value) {
            Label::CompanyName
        } else {
            Label::Other
        }
    }

    /// Whether the value looks like a phone number.
    ///
    /// Separators are stripped, the result must be an optional plus and
    /// 7-15 digits. International input must additionally pass the
    /// structured grammar; bare digit runs are accepted as-is.
    pub fn is_phone(&self, value: &str) -> bool {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return false;
        }
        let cleaned = regions::strip_separators(trimmed);
        if !PHONE_SHAPE.is_match(&cleaned) {
            return false;
        }
        if cleaned.starts_with('+') {
            regions::parse(&cleaned).is_some()
        } else {
            true
        }
    }

    /// Whether the value looks like a calendar date.
    ///
    /// Literal patterns confirmed by a strict parse come first; anything
    /// they reject gets one relaxed parse attempt that tolerates
    /// surrounding non-date tokens.
    pub fn is_date(&self, value: &str) -> bool {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return false;
        }

        for (pattern, formats) in DATE_PATTERNS.iter() {
            if pattern.is_match(trimmed)
                && formats
                    .iter()
                    .any(|f| NaiveDate::parse_from_str(trimmed, f).is_ok())
            {
                return true;
            }
        }

        relaxed_date_parse(trimmed)
    }

    /// Exact case-insensitive match against the country reference set.
    pub fn is_country(&self, value: &str) -> bool {
        self.reference.is_country(value)
    }

    /// Whether the value looks like a company name.
    ///
    /// Strong signals first (legal-suffix token, indicator substring),
    /// then a weak capitalization heuristic gated on the value not being
    /// a date, phone number, or country.
    pub fn is_company(&self, value: &str) -> bool {
        let trimmed = value.trim();
        if trimmed.chars().count() < 2 {
            return false;
        }

        let lower = trimmed.to_lowercase();
        if lower
            .split_whitespace()
            .any(|word| self.reference.is_legal_suffix(word))
        {
            return true;
        }

        if COMPANY_INDICATORS.iter().any(|ind| lower.contains(ind)) {
            return true;
        }

        let starts_upper = trimmed
            .chars()
            .next()
            .map(char::is_uppercase)
            .unwrap_or(false);
        starts_upper
            && !self.is_date(trimmed)
            && !self.is_phone(trimmed)
            && !self.is_country(trimmed)
    }
}

/// Relaxed date parse: collect month/day/year components from the tokens
/// and accept when a calendar-valid date can be assembled from at least
/// two of them (one naming a month), or when a full numeric date token
/// is embedded.
fn relaxed_date_parse(value: &str) -> bool {
    let mut month: Option<u32> = None;
    let mut day: Option<u32> = None;
    let mut year: Option<i32> = None;

    for token in value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        let token = token.trim_matches(|c: char| matches!(c, '.' | ';' | ':'));
        if token.is_empty() {
            continue;
        }

        if let Some(caps) = NUMERIC_DATE_TOKEN.captures(token) {
            if caps[2] == caps[4] && numeric_date_valid(&caps[1], &caps[3], &caps[5]) {
                return true;
            }
            continue;
        }

        let lower = token.to_lowercase();
        if month.is_none() {
            if let Some((_, m)) = MONTHS.iter().find(|(name, _)| *name == lower) {
                month = Some(*m);
                continue;
            }
        }

        if let Ok(n) = token.parse::<u32>() {
            if token.len() == 4 && (1000..=9999).contains(&n) {
                year.get_or_insert(n as i32);
            } else if (1..=31).contains(&n) {
                day.get_or_insert(n);
            }
        }
    }

    if let Some(m) = month {
        if day.is_some() || year.is_some() {
            let y = year.unwrap_or(2000);
            let d = day.unwrap_or(1);
            return NaiveDate::from_ymd_opt(y, m, d).is_some();
        }
    }
    false
}

/// Validate a three-part numeric token, trying year-first and year-last
/// arrangements with both day/month orders.
fn numeric_date_valid(a: &str, b: &str, c: &str) -> bool {
    let (a_num, b_num, c_num) = match (a.parse::<u32>(), b.parse::<u32>(), c.parse::<u32>()) {
        (Ok(x), Ok(y), Ok(z)) => (x, y, z),
        _ => return false,
    };

    if a.len() == 4 {
        // year-month-day
        return NaiveDate::from_ymd_opt(a_num as i32, b_num, c_num).is_some();
    }
    if c.len() == 4 {
        // month-day-year or day-month-year
        return NaiveDate::from_ymd_opt(c_num as i32, a_num, b_num).is_some()
            || NaiveDate::from_ymd_opt(c_num as i32, b_num, a_num).is_some();
    }
    false
}
