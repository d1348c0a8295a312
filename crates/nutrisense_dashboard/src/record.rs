//! Normalized wellness log records.
//!
//! The API reports the diet classification under two names (`category` and
//! `prediction`) and scatters entry fields across a nested `input` block.
//! Everything is resolved here, once, at the construction boundary; the
//! aggregation code downstream only ever sees [`WellnessRecord`].

use chrono::{NaiveDate, NaiveDateTime};
use nutrisense_client::WellnessHistoryItem;

/// Diet classification attached to a wellness log.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DietCategory {
    Healthy,
    Moderate,
    Poor,
    #[default]
    Unknown,
}

impl DietCategory {
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("Healthy") => Self::Healthy,
            Some("Moderate") => Self::Moderate,
            Some("Poor") => Self::Poor,
            _ => Self::Unknown,
        }
    }

    /// Heatmap quality bucket: Healthy days are "good", Moderate "mixed",
    /// everything else "bad".
    pub fn quality(self) -> &'static str {
        match self {
            Self::Healthy => "good",
            Self::Moderate => "mixed",
            _ => "bad",
        }
    }
}

/// One normalized wellness log entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WellnessRecord {
    pub score: Option<f64>,
    pub category: DietCategory,
    pub created_at: Option<String>,
    pub date: Option<String>,
    pub sleep_hours: Option<f64>,
    pub exercise_hours: Option<f64>,
    pub mood: Option<String>,
    pub height_cm: Option<f64>,
}

impl From<WellnessHistoryItem> for WellnessRecord {
    fn from(item: WellnessHistoryItem) -> Self {
        // `category` wins when it carries a known label; `prediction` is the
        // fallback name used by older records.
        let category = match DietCategory::from_label(item.category.as_deref()) {
            DietCategory::Unknown => DietCategory::from_label(item.prediction.as_deref()),
            known => known,
        };
        let input = item.input.unwrap_or_default();
        Self {
            score: item.score,
            category,
            created_at: item.created_at,
            date: input.date,
            sleep_hours: input.sleep_hours,
            exercise_hours: input.exercise_hours,
            mood: input.mood,
            height_cm: input.height_cm,
        }
    }
}

impl WellnessRecord {
    /// Display date with the fallback chain: entry date, else the first ten
    /// characters of `created_at` (YYYY-MM-DD), else `today`. Callers pass
    /// `today` explicitly so the fallback stays deterministic.
    pub fn effective_date(&self, today: NaiveDate) -> String {
        if let Some(date) = &self.date {
            return date.clone();
        }
        if let Some(created) = &self.created_at {
            return created.chars().take(10).collect();
        }
        today.format("%Y-%m-%d").to_string()
    }

    /// Timestamp used for ordering: `created_at` when parsable, else the
    /// entry date at midnight. `None` means the record has no usable date.
    pub fn sort_key(&self) -> Option<NaiveDateTime> {
        self.created_at
            .as_deref()
            .and_then(parse_stamp)
            .or_else(|| self.date.as_deref().and_then(parse_stamp))
    }
}

/// Parse a timestamp string to a naive datetime.
///
/// Accepts:
/// - RFC3339 datetime (normalized to UTC)
/// - Naive datetime YYYY-MM-DDTHH:MM:SS (with optional fractional seconds)
/// - YYYY-MM-DD (midnight)
fn parse_stamp(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(ndt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    None
}

/// Descending-by-date copy of `records`. Records with no parsable timestamp
/// sort last; equal keys keep their input order (stable sort).
pub fn sorted_desc(records: &[WellnessRecord]) -> Vec<WellnessRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by_cached_key(|r| {
        let key = r.sort_key();
        (key.is_none(), std::cmp::Reverse(key))
    });
    sorted
}
