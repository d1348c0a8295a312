//! Month/year selection over the full history.

use crate::record::WellnessRecord;
use chrono::{Datelike, NaiveDate};

/// Date a record belongs to for bucketing: the entry date when it parses,
/// else the date part of `created_at`. `None` means the record cannot be
/// placed in any month.
fn bucket_date(record: &WellnessRecord) -> Option<NaiveDate> {
    let parse = |s: &str| {
        let prefix: String = s.chars().take(10).collect();
        NaiveDate::parse_from_str(&prefix, "%Y-%m-%d").ok()
    };
    record
        .date
        .as_deref()
        .and_then(parse)
        .or_else(|| record.created_at.as_deref().and_then(parse))
}

/// Keep the records that fall in the given month. Records without any usable
/// date are dropped here, before aggregation ever sees them.
pub fn filter_month(records: &[WellnessRecord], year: i32, month: u32) -> Vec<WellnessRecord> {
    records
        .iter()
        .filter(|r| {
            bucket_date(r).is_some_and(|d| d.year() == year && d.month() == month)
        })
        .cloned()
        .collect()
}
