//! The three-stage filter pipeline: date range, category, address dedup.

use std::collections::{HashMap, HashSet};

use crate::{FilterSettings, PermitRecord};

/// Stand-in permit date for records without one; sorts before every real
/// `YYYYMMDD` value.
const MISSING_PERMIT_DATE: &str = "00000000";

/// Run all three stages in their fixed order.
///
/// Deterministic and free of hidden state: identical inputs always produce
/// identical output. Empty settings make the whole pipeline a passthrough.
pub fn apply(records: Vec<PermitRecord>, settings: &FilterSettings) -> Vec<PermitRecord> {
    if settings.is_empty() {
        return records;
    }

    let records = filter_by_date(records, &settings.start_date, &settings.end_date);
    let records = filter_by_category(records, &settings.categories);
    dedupe_by_address(records)
}

/// Stage 1: keep records whose effective date falls inside the bounds.
///
/// Passthrough when both bounds are empty. Once any bound is set, a record
/// with no effective date fails the filter. Bounds are inclusive and
/// compared lexicographically on the 8-digit format.
pub fn filter_by_date(
    records: Vec<PermitRecord>,
    start_date: &str,
    end_date: &str,
) -> Vec<PermitRecord> {
    if start_date.is_empty() && end_date.is_empty() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| {
            let effective = record.effective_date();
            if effective.is_empty() {
                return false;
            }
            if !start_date.is_empty() && effective < start_date {
                return false;
            }
            if !end_date.is_empty() && effective > end_date {
                return false;
            }
            true
        })
        .collect()
}

/// Stage 2: exact, case-sensitive category membership.
///
/// Passthrough when the category set is empty.
pub fn filter_by_category(
    records: Vec<PermitRecord>,
    categories: &HashSet<String>,
) -> Vec<PermitRecord> {
    if categories.is_empty() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| categories.contains(&record.category))
        .collect()
}

/// Stage 3: one survivor per address (empty string is a valid key).
///
/// Single left-to-right pass; a later record replaces the stored survivor
/// when its permit date is greater or equal, so among equal maximal dates
/// the last occurrence wins. Each group keeps the position where its
/// address was first seen.
pub fn dedupe_by_address(records: Vec<PermitRecord>) -> Vec<PermitRecord> {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut survivors: Vec<PermitRecord> = Vec::new();

    for record in records {
        match slots.get(&record.address) {
            Some(&slot) => {
                if permit_date_key(&record) >= permit_date_key(&survivors[slot]) {
                    survivors[slot] = record;
                }
            }
            None => {
                slots.insert(record.address.clone(), survivors.len());
                survivors.push(record);
            }
        }
    }

    survivors
}

fn permit_date_key(record: &PermitRecord) -> &str {
    if record.permit_date.is_empty() {
        MISSING_PERMIT_DATE
    } else {
        &record.permit_date
    }
}
