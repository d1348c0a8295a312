//! Plain-text rendering of a monthly dashboard.

use std::fmt::Write as _;

use crate::aggregate::DashboardSummary;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn quality_mark(quality: &str) -> char {
    match quality {
        "good" => '#',
        "mixed" => '~',
        _ => '.',
    }
}

/// Render a monthly summary as plain text. `None` renders the empty-state
/// message the dashboard shows when a month has no logs.
pub fn render_text(summary: Option<&DashboardSummary>, year: i32, month: u32) -> String {
    let month_name = MONTH_NAMES
        .get((month as usize).saturating_sub(1))
        .copied()
        .unwrap_or("Unknown");
    let mut out = String::new();
    let _ = writeln!(out, "Monthly Dashboard - {month_name} {year}");
    let _ = writeln!(out);

    let Some(data) = summary else {
        let _ = writeln!(out, "No data available for this month.");
        return out;
    };

    let radar = &data.daily_radar;
    let _ = writeln!(out, "Daily Health Radar");
    let _ = writeln!(
        out,
        "  diet {:>3}  sleep {:>3}  energy {:>3}  activity {:>3}  mood {:>3}",
        radar.diet, radar.sleep, radar.energy, radar.activity, radar.mood
    );

    let pie = &data.diet_breakdown;
    let _ = writeln!(out);
    let _ = writeln!(out, "Diet Breakdown");
    let _ = writeln!(
        out,
        "  healthy {}  balanced {}  junk {}",
        pie.healthy, pie.balanced, pie.junk
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "Mood & Energy (Last 14 Days)");
    for point in &data.trends {
        let _ = writeln!(
            out,
            "  {}  energy {:>3}  mood {:>3}",
            point.date, point.energy, point.mood
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Weekly Heatmap (Last 28 Days)  [# good, ~ mixed, . bad]");
    let marks: String = data
        .weekly_quality
        .iter()
        .map(|d| quality_mark(d.quality))
        .collect();
    for week in marks.as_bytes().chunks(7) {
        let _ = writeln!(out, "  {}", String::from_utf8_lossy(week));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Height Growth Trend (Last 3 Days)");
    for growth in &data.recent_growth {
        match growth.height_cm {
            Some(h) => {
                let _ = writeln!(out, "  {}  {h:.1} cm", growth.date);
            }
            None => {
                let _ = writeln!(out, "  {}  -", growth.date);
            }
        }
    }

    let monthly = &data.monthly_summary;
    let _ = writeln!(out);
    let _ = writeln!(out, "Monthly Summary");
    let _ = writeln!(out, "  Avg Health Score  {}", monthly.avg_health_score);
    let _ = writeln!(out, "  Healthy Days      {}", monthly.healthy_days);
    let _ = writeln!(out, "  Junk Days         {}", monthly.junk_days);
    let _ = writeln!(out, "  Avg Sleep (hrs)   {}", monthly.avg_sleep);

    out
}
