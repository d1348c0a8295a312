//! Chart-ready monthly dashboard aggregation.
//!
//! A pure reshaping of one month of wellness logs into the fixed summary the
//! dashboard renders: radar values for the latest day, a diet breakdown over
//! the whole month, rolling trend/quality windows, the recent growth list,
//! and rounded monthly averages. Missing or malformed fields degrade to
//! defaults; the only non-success outcome is `None` for an empty month.

use serde::Serialize;

use crate::record::{DietCategory, WellnessRecord, sorted_desc};
use chrono::NaiveDate;

/// Radar values derived from the single most recent record.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct DailyRadar {
    pub diet: i32,
    pub sleep: i32,
    pub energy: i32,
    pub activity: i32,
    pub mood: i32,
}

/// Diet category counts over the whole month.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct DietBreakdown {
    pub healthy: usize,
    pub balanced: usize,
    pub junk: usize,
}

/// One point of the 14-day mood/energy trend line.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct TrendPoint {
    pub date: String,
    pub energy: i32,
    pub mood: i32,
}

/// One cell of the 28-day quality heatmap strip.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct QualityDay {
    pub date: String,
    pub quality: &'static str,
}

/// One entry of the recent height list, newest first.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct GrowthPoint {
    pub date: String,
    pub height_cm: Option<f64>,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct MonthlySummary {
    pub avg_health_score: i32,
    pub healthy_days: usize,
    pub junk_days: usize,
    pub avg_sleep: i32,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct DashboardSummary {
    pub daily_radar: DailyRadar,
    pub diet_breakdown: DietBreakdown,
    pub trends: Vec<TrendPoint>,
    pub weekly_quality: Vec<QualityDay>,
    pub recent_growth: Vec<GrowthPoint>,
    pub monthly_summary: MonthlySummary,
}

const DEFAULT_SCORE: f64 = 50.0;
const DEFAULT_SLEEP_HOURS: f64 = 7.0;
const ENERGY_PLACEHOLDER: i32 = 50;

const TREND_WINDOW: usize = 14;
const QUALITY_WINDOW: usize = 28;
const GROWTH_WINDOW: usize = 3;

/// Score for a mood label, case-insensitive; unmatched or absent moods land
/// on the neutral 50.
pub fn mood_score(mood: Option<&str>) -> i32 {
    match mood.map(str::to_lowercase).as_deref() {
        Some("happy") => 80,
        Some("sad") => 30,
        Some("stressed") => 20,
        Some("angry") => 25,
        _ => 50,
    }
}

/// Build the monthly dashboard summary from one month of logs.
///
/// `logs` is expected to be pre-filtered to the month of interest (see
/// [`crate::period::filter_month`]). `today` is only used as the display
/// fallback for records without any date of their own. Returns `None` when
/// there is no data for the period.
pub fn dashboard_summary(logs: &[WellnessRecord], today: NaiveDate) -> Option<DashboardSummary> {
    if logs.is_empty() {
        return None;
    }

    let recent = sorted_desc(logs);
    let latest = &recent[0];

    let daily_radar = DailyRadar {
        diet: latest.score.unwrap_or(DEFAULT_SCORE).round() as i32,
        sleep: (latest.sleep_hours.unwrap_or(DEFAULT_SLEEP_HOURS) * 10.0).round() as i32,
        energy: ENERGY_PLACEHOLDER,
        activity: (latest.exercise_hours.unwrap_or(0.0) * 20.0).round() as i32,
        mood: mood_score(latest.mood.as_deref()),
    };

    // Counts cover the entire month, not just the windowed slices. Records
    // with an unknown category fall in no bucket.
    let count = |cat: DietCategory| logs.iter().filter(|l| l.category == cat).count();
    let diet_breakdown = DietBreakdown {
        healthy: count(DietCategory::Healthy),
        balanced: count(DietCategory::Moderate),
        junk: count(DietCategory::Poor),
    };

    let mut trends: Vec<TrendPoint> = recent
        .iter()
        .take(TREND_WINDOW)
        .map(|l| TrendPoint {
            date: l.effective_date(today),
            energy: ENERGY_PLACEHOLDER,
            mood: mood_score(l.mood.as_deref()),
        })
        .collect();
    trends.reverse();

    let mut weekly_quality: Vec<QualityDay> = recent
        .iter()
        .take(QUALITY_WINDOW)
        .map(|l| QualityDay {
            date: l.effective_date(today),
            quality: l.category.quality(),
        })
        .collect();
    weekly_quality.reverse();

    // Newest first, no reversal.
    let recent_growth: Vec<GrowthPoint> = recent
        .iter()
        .take(GROWTH_WINDOW)
        .map(|l| GrowthPoint {
            date: l.effective_date(today),
            height_cm: l.height_cm,
        })
        .collect();

    let len = logs.len() as f64;
    let score_sum: f64 = logs.iter().map(|l| l.score.unwrap_or(0.0)).sum();
    let sleep_sum: f64 = logs
        .iter()
        .map(|l| l.sleep_hours.unwrap_or(DEFAULT_SLEEP_HOURS))
        .sum();
    let monthly_summary = MonthlySummary {
        avg_health_score: (score_sum / len).round() as i32,
        healthy_days: diet_breakdown.healthy,
        junk_days: diet_breakdown.junk,
        avg_sleep: (sleep_sum / len).round() as i32,
    };

    Some(DashboardSummary {
        daily_radar,
        diet_breakdown,
        trends,
        weekly_quality,
        recent_growth,
        monthly_summary,
    })
}
