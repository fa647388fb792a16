use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::domain::compass::compass;
use crate::domain::spots::Spot;
use crate::resilience::freshness::FreshnessState;

/// Parallel hourly series as delivered by the marine API. Every present
/// series has exactly `time.len()` entries; individual samples may still be
/// absent. The equal-length invariant is enforced at the data boundary
/// (`data::marine`), so indexing by a `time` index is always valid here.
#[derive(Debug, Clone, Default)]
pub struct HourlySeries {
    pub time: Vec<NaiveDateTime>,
    pub wave_height: Option<Vec<Option<f32>>>,
    pub wave_direction: Option<Vec<Option<f32>>>,
    pub wave_period: Option<Vec<Option<f32>>>,
    pub wind_wave_peak_period: Option<Vec<Option<f32>>>,
}

impl HourlySeries {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub(crate) fn sample(series: Option<&Vec<Option<f32>>>, idx: usize) -> Option<f32> {
        series
            .and_then(|s| s.get(idx).copied().flatten())
            .filter(|v| v.is_finite())
    }
}

/// Unit strings carried alongside the series, with the API's defaults when
/// the `hourly_units` block is missing.
#[derive(Debug, Clone)]
pub struct HourlyUnits {
    pub wave_height: String,
    pub wave_direction: String,
    pub wave_period: String,
    pub wind_wave_peak_period: String,
}

impl Default for HourlyUnits {
    fn default() -> Self {
        Self {
            wave_height: "m".to_string(),
            wave_direction: "°".to_string(),
            wave_period: "s".to_string(),
            wind_wave_peak_period: "s".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TideSeries {
    pub time: Vec<NaiveDateTime>,
    pub height: Vec<Option<f32>>,
}

#[derive(Debug, Clone)]
pub struct MarineBundle {
    pub spot: Spot,
    pub hourly: HourlySeries,
    pub units: HourlyUnits,
    pub tide: Option<TideSeries>,
    pub fetched_at: DateTime<Utc>,
}

impl MarineBundle {
    /// Snapshot of conditions at the sample closest to `now`. `None` only
    /// when the series is empty; individual fields stay absent on their own.
    #[must_use]
    pub fn now_snapshot(&self, now: NaiveDateTime) -> Option<NowSnapshot> {
        let idx = nearest_index(&self.hourly.time, now)?;
        let dir = HourlySeries::sample(self.hourly.wave_direction.as_ref(), idx);
        Some(NowSnapshot {
            time: self.hourly.time[idx],
            wave_height: HourlySeries::sample(self.hourly.wave_height.as_ref(), idx),
            wave_period: HourlySeries::sample(self.hourly.wave_period.as_ref(), idx),
            wave_dir_deg: dir,
            wave_dir_label: compass(dir),
            wind_wave_peak_period: HourlySeries::sample(
                self.hourly.wind_wave_peak_period.as_ref(),
                idx,
            ),
        })
    }

    /// The next 24 wave-height samples from the nearest hour forward, for
    /// the swell bar chart. Empty when the series carries no heights.
    #[must_use]
    pub fn swell_window(&self, now: NaiveDateTime) -> Window {
        let Some(start) = nearest_index(&self.hourly.time, now) else {
            return Window::default();
        };
        match self.hourly.wave_height.as_ref() {
            Some(heights) => slice_window(&self.hourly.time, heights, start, 24),
            None => Window::default(),
        }
    }

    /// The first 24 tide samples, when the upstream response carried a tide
    /// block.
    #[must_use]
    pub fn tide_window(&self) -> Window {
        match self.tide.as_ref() {
            Some(tide) => slice_window(&tide.time, &tide.height, 0, 24),
            None => Window::default(),
        }
    }
}

/// Current-conditions view derived from the hourly series.
#[derive(Debug, Clone)]
pub struct NowSnapshot {
    pub time: NaiveDateTime,
    pub wave_height: Option<f32>,
    pub wave_period: Option<f32>,
    pub wave_dir_deg: Option<f32>,
    pub wave_dir_label: &'static str,
    pub wind_wave_peak_period: Option<f32>,
}

/// Index of the timestamp closest to `now`; first minimal index wins on
/// ties. `None` for an empty series.
#[must_use]
pub fn nearest_index(times: &[NaiveDateTime], now: NaiveDateTime) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    for (idx, t) in times.iter().enumerate() {
        let diff = (*t - now).num_seconds().abs();
        if best.is_none_or(|(_, d)| diff < d) {
            best = Some((idx, diff));
        }
    }
    best.map(|(idx, _)| idx)
}

/// Contiguous sub-window of a timestamp series zipped with one value series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Window {
    pub times: Vec<NaiveDateTime>,
    pub values: Vec<f32>,
}

impl Window {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Extracts `[start, min(len, start + count))` of both arrays. An
/// out-of-bounds start yields the empty window; samples absent or non-finite
/// at an index drop that index from the window.
#[must_use]
pub fn slice_window(
    times: &[NaiveDateTime],
    values: &[Option<f32>],
    start: usize,
    count: usize,
) -> Window {
    if start >= times.len() {
        return Window::default();
    }
    let end = times.len().min(start.saturating_add(count));

    let mut out = Window::default();
    for idx in start..end {
        if let Some(v) = values.get(idx).copied().flatten()
            && v.is_finite()
        {
            out.times.push(times[idx]);
            out.values.push(v);
        }
    }
    out
}

pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[derive(Debug, Clone)]
pub struct RefreshMetadata {
    pub last_success: Option<DateTime<Utc>>,
    pub last_attempt: Option<DateTime<Utc>>,
    pub state: FreshnessState,
    pub consecutive_failures: u32,
}

impl Default for RefreshMetadata {
    fn default() -> Self {
        Self {
            last_success: None,
            last_attempt: None,
            state: FreshnessState::Stale,
            consecutive_failures: 0,
        }
    }
}

impl RefreshMetadata {
    pub fn mark_success(&mut self) {
        let now = Utc::now();
        self.last_attempt = Some(now);
        self.last_success = Some(now);
        self.consecutive_failures = 0;
        self.state = FreshnessState::Fresh;
    }

    pub fn mark_failure(&mut self) {
        self.last_attempt = Some(Utc::now());
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
    }

    pub fn age_minutes(&self) -> Option<i64> {
        self.last_success.map(|ts| (Utc::now() - ts).num_minutes())
    }
}
