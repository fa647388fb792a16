use anyhow::{Context, Result};
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::marine::{
    HourlySeries, HourlyUnits, MarineBundle, TideSeries, parse_datetime,
};
use crate::domain::spots::Spot;

const MARINE_URL: &str = "https://marine-api.open-meteo.com/v1/marine";

#[derive(Debug, Clone)]
pub struct MarineClient {
    client: Client,
    base_url: String,
}

impl Default for MarineClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MarineClient {
    pub fn new() -> Self {
        Self::with_base_url(MARINE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
        }
    }

    pub async fn fetch(&self, spot: Spot) -> Result<MarineBundle> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", spot.lat.to_string()),
                ("longitude", spot.lon.to_string()),
                (
                    "hourly",
                    "wave_height,wave_direction,wave_period,wind_wave_peak_period,sea_level_height_msl"
                        .to_string(),
                ),
                ("timezone", "auto".to_string()),
                ("forecast_days", "10".to_string()),
            ])
            .send()
            .await
            .context("marine request failed")?
            .error_for_status()
            .context("marine request returned non-success status")?;

        let payload: MarineResponse = response
            .json()
            .await
            .context("failed to parse marine payload")?;

        let (hourly, hourly_tide) = parse_hourly(&payload.hourly);
        // An explicit tide block wins over the sea-level series.
        let tide = payload.tide.as_ref().map(parse_tide).or(hourly_tide);

        Ok(MarineBundle {
            spot,
            hourly,
            units: parse_units(payload.hourly_units.as_ref()),
            tide,
            fetched_at: Utc::now(),
        })
    }
}

/// Splits the wire block into the wave series and the optional tide series,
/// dropping samples whose timestamp does not parse. Value series shorter than
/// `time` are padded with absent samples so every kept series has equal
/// length; longer series are truncated.
fn parse_hourly(hourly: &HourlyBlock) -> (HourlySeries, Option<TideSeries>) {
    let mut keep: Vec<usize> = Vec::with_capacity(hourly.time.len());
    let mut time = Vec::with_capacity(hourly.time.len());
    for (idx, raw) in hourly.time.iter().enumerate() {
        if let Some(t) = parse_datetime(raw) {
            keep.push(idx);
            time.push(t);
        }
    }

    let align = |series: &Option<Vec<Option<f32>>>| -> Option<Vec<Option<f32>>> {
        series
            .as_ref()
            .map(|s| keep.iter().map(|&i| s.get(i).copied().flatten()).collect())
    };

    let tide = align(&hourly.sea_level_height_msl).map(|height| TideSeries {
        time: time.clone(),
        height,
    });

    let series = HourlySeries {
        wave_height: align(&hourly.wave_height),
        wave_direction: align(&hourly.wave_direction),
        wave_period: align(&hourly.wave_period),
        wind_wave_peak_period: align(&hourly.wind_wave_peak_period),
        time,
    };

    (series, tide)
}

fn parse_tide(tide: &TideBlock) -> TideSeries {
    let mut out = TideSeries::default();
    for (idx, raw) in tide.time.iter().enumerate() {
        if let Some(t) = parse_datetime(raw) {
            out.time.push(t);
            out.height.push(tide.tide_height.get(idx).copied().flatten());
        }
    }
    out
}

fn parse_units(units: Option<&UnitsBlock>) -> HourlyUnits {
    let defaults = HourlyUnits::default();
    let Some(units) = units else {
        return defaults;
    };
    HourlyUnits {
        wave_height: units.wave_height.clone().unwrap_or(defaults.wave_height),
        wave_direction: units
            .wave_direction
            .clone()
            .unwrap_or(defaults.wave_direction),
        wave_period: units.wave_period.clone().unwrap_or(defaults.wave_period),
        wind_wave_peak_period: units
            .wind_wave_peak_period
            .clone()
            .unwrap_or(defaults.wind_wave_peak_period),
    }
}

#[derive(Debug, Deserialize)]
struct MarineResponse {
    hourly: HourlyBlock,
    hourly_units: Option<UnitsBlock>,
    tide: Option<TideBlock>,
}

#[derive(Debug, Deserialize)]
struct TideBlock {
    time: Vec<String>,
    tide_height: Vec<Option<f32>>,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    time: Vec<String>,
    wave_height: Option<Vec<Option<f32>>>,
    wave_direction: Option<Vec<Option<f32>>>,
    wave_period: Option<Vec<Option<f32>>>,
    wind_wave_peak_period: Option<Vec<Option<f32>>>,
    sea_level_height_msl: Option<Vec<Option<f32>>>,
}

#[derive(Debug, Deserialize)]
struct UnitsBlock {
    wave_height: Option<String>,
    wave_direction: Option<String>,
    wave_period: Option<String>,
    wind_wave_peak_period: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hourly_skips_bad_timestamps() {
        let block = HourlyBlock {
            time: vec!["bad".to_string(), "2026-03-14T10:00".to_string()],
            wave_height: Some(vec![Some(1.0), Some(2.0)]),
            wave_direction: None,
            wave_period: Some(vec![Some(8.0), Some(9.0)]),
            wind_wave_peak_period: None,
            sea_level_height_msl: None,
        };

        let (series, tide) = parse_hourly(&block);
        assert_eq!(series.time.len(), 1);
        assert_eq!(series.wave_height, Some(vec![Some(2.0)]));
        assert_eq!(series.wave_period, Some(vec![Some(9.0)]));
        assert!(tide.is_none());
    }

    #[test]
    fn parse_hourly_pads_short_series() {
        let block = HourlyBlock {
            time: vec![
                "2026-03-14T10:00".to_string(),
                "2026-03-14T11:00".to_string(),
            ],
            wave_height: Some(vec![Some(1.0)]),
            wave_direction: None,
            wave_period: None,
            wind_wave_peak_period: None,
            sea_level_height_msl: Some(vec![Some(0.4), Some(0.6)]),
        };

        let (series, tide) = parse_hourly(&block);
        assert_eq!(series.wave_height, Some(vec![Some(1.0), None]));
        let tide = tide.expect("tide series present");
        assert_eq!(tide.height, vec![Some(0.4), Some(0.6)]);
        assert_eq!(tide.time.len(), 2);
    }

    #[test]
    fn parse_tide_block_skips_bad_timestamps() {
        let block = TideBlock {
            time: vec!["2026-03-14T00:00".to_string(), "bad".to_string()],
            tide_height: vec![Some(0.2), Some(0.9)],
        };
        let tide = parse_tide(&block);
        assert_eq!(tide.time.len(), 1);
        assert_eq!(tide.height, vec![Some(0.2)]);
    }

    #[test]
    fn parse_units_falls_back_to_defaults() {
        let units = parse_units(None);
        assert_eq!(units.wave_height, "m");
        assert_eq!(units.wave_direction, "°");

        let partial = UnitsBlock {
            wave_height: Some("ft".to_string()),
            wave_direction: None,
            wave_period: None,
            wind_wave_peak_period: None,
        };
        let units = parse_units(Some(&partial));
        assert_eq!(units.wave_height, "ft");
        assert_eq!(units.wave_period, "s");
    }
}
