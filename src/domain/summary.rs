use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::compass::compass;
use crate::domain::marine::HourlySeries;

/// Per-calendar-date reduction of the hourly series. Any statistic is `None`
/// when its source series is absent or no finite sample fell in the bucket;
/// the other statistics of the same day are unaffected.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub label: String,
    pub height_max: Option<f32>,
    pub period_max: Option<f32>,
    pub dir_avg: Option<f32>,
    pub dir_label: &'static str,
    pub wind_wave_peak_max: Option<f32>,
}

/// Buckets the hourly series by calendar date and reduces each bucket,
/// keeping at most 7 days from `today` forward, ascending.
///
/// Direction is a plain arithmetic mean of the available degrees, matching
/// the dashboard this replaces; it is wrong across the 0°/360° seam (350°
/// and 10° average to 180°) and kept that way deliberately.
#[must_use]
pub fn summarize_week(series: &HourlySeries, today: NaiveDate) -> Vec<DaySummary> {
    if series.is_empty() {
        return Vec::new();
    }

    // BTreeMap keeps the date keys sorted for free.
    let mut buckets: BTreeMap<NaiveDate, Vec<usize>> = BTreeMap::new();
    for (idx, t) in series.time.iter().enumerate() {
        buckets.entry(t.date()).or_default().push(idx);
    }

    buckets
        .iter()
        .filter(|(date, _)| **date >= today)
        .take(7)
        .map(|(date, idxs)| summarize_day(series, *date, idxs))
        .collect()
}

fn summarize_day(series: &HourlySeries, date: NaiveDate, idxs: &[usize]) -> DaySummary {
    let heights = gather(series.wave_height.as_ref(), idxs);
    let periods = gather(series.wave_period.as_ref(), idxs);
    let dirs = gather(series.wave_direction.as_ref(), idxs);
    let peaks = gather(series.wind_wave_peak_period.as_ref(), idxs);

    let dir_avg = mean(&dirs);

    DaySummary {
        date,
        label: day_label(date),
        height_max: max(&heights),
        period_max: max(&periods),
        dir_avg,
        dir_label: compass(dir_avg),
        wind_wave_peak_max: max(&peaks),
    }
}

/// "Sat 14 Mar" — the short weekday/day/month form the cards display.
fn day_label(date: NaiveDate) -> String {
    date.format("%a %d %b").to_string()
}

fn gather(series: Option<&Vec<Option<f32>>>, idxs: &[usize]) -> Vec<f32> {
    let Some(series) = series else {
        return Vec::new();
    };
    idxs.iter()
        .filter_map(|&i| series.get(i).copied().flatten())
        .filter(|v| v.is_finite())
        .collect()
}

fn max(values: &[f32]) -> Option<f32> {
    values.iter().copied().reduce(f32::max)
}

fn mean(values: &[f32]) -> Option<f32> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f32>() / values.len() as f32)
}
