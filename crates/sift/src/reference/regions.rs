//! Calling-code reference table and the digit-pattern phone grammar.
//!
//! The grammar is deliberately table-driven rather than backed by a full
//! numbering-plan database: a number is structurally valid when its calling
//! code is known and the remaining digits satisfy that region's length and
//! leading-digit rule. Numbers outside the table are handled by the manual
//! prefix heuristics in the phone decomposer.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters treated as cosmetic separators in phone input.
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\-().]").unwrap());

/// Validation rule for one region's national numbers.
#[derive(Debug, Clone, Copy)]
pub struct RegionRule {
    /// ISO 3166-1 alpha-2 region code.
    pub region: &'static str,
    /// International calling code digits.
    pub calling_code: &'static str,
    /// Minimum national number length.
    pub min_len: usize,
    /// Maximum national number length.
    pub max_len: usize,
    /// Allowed leading digits of the national number (empty = any).
    pub leading: &'static str,
    /// Whether nationally-formatted numbers carry a leading trunk zero.
    pub trunk_zero: bool,
    /// Whether a bare national number (no calling code, no trunk prefix)
    /// is accepted when given this region as context. Only set where the
    /// leading-digit rule is selective enough to avoid false matches.
    pub bare_national: bool,
}

/// Known regions. Prefix matching always picks the longest matching code.
pub const REGION_RULES: &[RegionRule] = &[
    RegionRule {
        region: "US",
        calling_code: "1",
        min_len: 10,
        max_len: 10,
        leading: "23456789",
        trunk_zero: false,
        bare_national: false,
    },
    RegionRule {
        region: "RU",
        calling_code: "7",
        min_len: 10,
        max_len: 10,
        leading: "",
        trunk_zero: false,
        bare_national: false,
    },
    RegionRule {
        region: "NL",
        calling_code: "31",
        min_len: 9,
        max_len: 9,
        leading: "",
        trunk_zero: true,
        bare_national: false,
    },
    RegionRule {
        region: "FR",
        calling_code: "33",
        min_len: 9,
        max_len: 9,
        leading: "",
        trunk_zero: true,
        bare_national: false,
    },
    RegionRule {
        region: "ES",
        calling_code: "34",
        min_len: 9,
        max_len: 9,
        leading: "",
        trunk_zero: false,
        bare_national: false,
    },
    RegionRule {
        region: "IT",
        calling_code: "39",
        min_len: 8,
        max_len: 11,
        leading: "",
        trunk_zero: false,
        bare_national: false,
    },
    RegionRule {
        region: "GB",
        calling_code: "44",
        min_len: 9,
        max_len: 10,
        leading: "",
        trunk_zero: true,
        bare_national: false,
    },
    RegionRule {
        region: "DE",
        calling_code: "49",
        min_len: 6,
        max_len: 11,
        leading: "",
        trunk_zero: true,
        bare_national: false,
    },
    RegionRule {
        region: "BR",
        calling_code: "55",
        min_len: 10,
        max_len: 11,
        leading: "",
        trunk_zero: false,
        bare_national: false,
    },
    RegionRule {
        region: "AU",
        calling_code: "61",
        min_len: 9,
        max_len: 9,
        leading: "",
        trunk_zero: true,
        bare_national: false,
    },
    RegionRule {
        region: "SG",
        calling_code: "65",
        min_len: 8,
        max_len: 8,
        leading: "",
        trunk_zero: false,
        bare_national: false,
    },
    RegionRule {
        region: "JP",
        calling_code: "81",
        min_len: 9,
        max_len: 10,
        leading: "",
        trunk_zero: true,
        bare_national: false,
    },
    RegionRule {
        region: "KR",
        calling_code: "82",
        min_len: 8,
        max_len: 11,
        leading: "",
        trunk_zero: true,
        bare_national: false,
    },
    RegionRule {
        region: "CN",
        calling_code: "86",
        min_len: 10,
        max_len: 11,
        leading: "",
        trunk_zero: true,
        bare_national: false,
    },
    RegionRule {
        region: "IN",
        calling_code: "91",
        min_len: 10,
        max_len: 10,
        leading: "6789",
        trunk_zero: true,
        bare_national: true,
    },
];

/// Region code to display name for the decomposer output. Region codes not
/// listed here pass through unchanged.
const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("IN", "India"),
    ("US", "US"),
    ("GB", "UK"),
    ("CA", "Canada"),
    ("AU", "Australia"),
    ("DE", "Germany"),
    ("FR", "France"),
    ("CN", "China"),
    ("JP", "Japan"),
];

/// A structurally valid parsed number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumber {
    /// Detected region code (e.g. "IN").
    pub region: &'static str,
    /// National number digits, calling code excluded.
    pub national: String,
}

/// Remove whitespace, hyphens, parentheses, and periods.
pub fn strip_separators(value: &str) -> String {
    SEPARATORS.replace_all(value, "").into_owned()
}

/// Map a region code to its display name; unlisted codes pass through.
pub fn display_name(region: &str) -> &str {
    DISPLAY_NAMES
        .iter()
        .find(|(code, _)| *code == region)
        .map(|(_, name)| *name)
        .unwrap_or(region)
}

/// Look up the rule for a region code.
pub fn rule_for(region: &str) -> Option<&'static RegionRule> {
    REGION_RULES.iter().find(|r| r.region == region)
}

/// Region-agnostic structured parse. Succeeds only for `+`-prefixed input
/// whose calling code is in the table and whose national digits satisfy
/// the region rule. `cleaned` must already be separator-free.
pub fn parse(cleaned: &str) -> Option<ParsedNumber> {
    let digits = cleaned.strip_prefix('+')?;
    if !is_all_digits(digits) {
        return None;
    }

    // Longest calling-code prefix wins.
    let rule = REGION_RULES
        .iter()
        .filter(|r| digits.starts_with(r.calling_code))
        .max_by_key(|r| r.calling_code.len())?;

    let national = &digits[rule.calling_code.len()..];
    if satisfies(rule, national) {
        return Some(ParsedNumber {
            region: rule.region,
            national: national.to_string(),
        });
    }
    None
}

/// Structured parse with a default region as context, for input without an
/// international prefix. Accepts the region's calling code spelled out, a
/// trunk-zero national form, or (where the rule allows) a bare national
/// number. `+`-prefixed input falls back to the region-agnostic parse.
pub fn parse_with_default(cleaned: &str, region: &str) -> Option<ParsedNumber> {
    if cleaned.starts_with('+') {
        return parse(cleaned);
    }
    if !is_all_digits(cleaned) {
        return None;
    }
    let rule = rule_for(region)?;

    if let Some(rest) = cleaned.strip_prefix(rule.calling_code) {
        if satisfies(rule, rest) {
            return Some(ParsedNumber {
                region: rule.region,
                national: rest.to_string(),
            });
        }
    }

    if rule.trunk_zero {
        if let Some(rest) = cleaned.strip_prefix('0') {
            if satisfies(rule, rest) {
                return Some(ParsedNumber {
                    region: rule.region,
                    national: rest.to_string(),
                });
            }
        }
    }

    if rule.bare_national && satisfies(rule, cleaned) {
        return Some(ParsedNumber {
            region: rule.region,
            national: cleaned.to_string(),
        });
    }

    None
}

fn satisfies(rule: &RegionRule, digits: &str) -> bool {
    if digits.len() < rule.min_len || digits.len() > rule.max_len {
        return false;
    }
    if !is_all_digits(digits) {
        return false;
    }
    if rule.leading.is_empty() {
        return true;
    }
    digits
        .chars()
        .next()
        .map(|c| rule.leading.contains(c))
        .unwrap_or(false)
}

fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
