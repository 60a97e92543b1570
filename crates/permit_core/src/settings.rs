use std::collections::HashSet;

use chrono::NaiveDate;

/// Normalized filter criteria for one pipeline run.
///
/// Constructed once per invocation from the caller's raw input, normalized
/// immediately, and passed by shared reference through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSettings {
    /// Inclusive lower bound (`YYYYMMDD`); empty means no lower bound.
    pub start_date: String,
    /// Inclusive upper bound (`YYYYMMDD`); empty means no upper bound.
    pub end_date: String,
    /// Categories to keep; an empty set keeps every category.
    pub categories: HashSet<String>,
}

impl FilterSettings {
    /// Build settings from raw caller input, normalizing every field.
    pub fn from_raw(start_date: &str, end_date: &str, categories: &str) -> Self {
        Self {
            start_date: normalize_date(start_date),
            end_date: normalize_date(end_date),
            categories: split_categories(categories),
        }
    }

    /// True when no criterion is set and the pipeline is a passthrough.
    pub fn is_empty(&self) -> bool {
        self.start_date.is_empty() && self.end_date.is_empty() && self.categories.is_empty()
    }
}

/// Normalize a raw date-like string to `YYYYMMDD`.
///
/// Strips every non-digit character; the result is kept only when exactly
/// 8 digits remain, otherwise the empty string ("no bound") is returned.
/// An exact 8-digit input passes through unchanged.
pub fn normalize_date(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 8 {
        digits
    } else {
        String::new()
    }
}

/// Format a calendar date as `YYYYMMDD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Split a raw comma-separated category selector into a membership set.
/// Parts are trimmed and empty parts dropped.
pub fn split_categories(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
