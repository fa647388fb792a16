#![allow(clippy::cast_precision_loss)]
#![allow(dead_code)]

use chrono::{Duration, Local, NaiveDateTime, Utc};
use swell_tui::{
    cli::Cli,
    domain::marine::{HourlySeries, HourlyUnits, MarineBundle, TideSeries},
    domain::spots,
};

pub fn carnac_cli() -> Cli {
    Cli {
        spot: None,
        lat: None,
        lon: None,
        theme: None,
        lang: None,
        refresh_interval: 600,
        fps: 30,
        no_animation: true,
        marine_url: None,
        auth_url: None,
        no_prefs: true,
        one_shot: false,
    }
}

pub fn cli_with_urls(marine_url: &str, auth_url: &str) -> Cli {
    Cli {
        marine_url: Some(marine_url.to_string()),
        auth_url: Some(auth_url.to_string()),
        ..carnac_cli()
    }
}

/// Midnight today, so window and weekly logic sees the fixture as current.
pub fn fixture_base_time() -> NaiveDateTime {
    Local::now()
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .expect("valid midnight")
}

/// Ten days of plausible hourly surf data plus a sinusoidal tide.
pub fn fixture_bundle() -> MarineBundle {
    let base = fixture_base_time();
    let hours = 10 * 24;
    let time: Vec<NaiveDateTime> = (0..hours)
        .map(|i| base + Duration::hours(i as i64))
        .collect();

    let hourly = HourlySeries {
        time: time.clone(),
        wave_height: Some(
            (0..hours)
                .map(|i| Some(0.8 + 0.7 * ((i % 24) as f32 / 24.0)))
                .collect(),
        ),
        wave_direction: Some(vec![Some(270.0); hours]),
        wave_period: Some((0..hours).map(|i| Some(9.0 + (i % 6) as f32)).collect()),
        wind_wave_peak_period: Some(vec![Some(5.0); hours]),
    };

    let tide = TideSeries {
        time,
        height: (0..hours)
            .map(|i| Some(2.0 * (i as f32 * std::f32::consts::PI / 6.0).sin()))
            .collect(),
    };

    MarineBundle {
        spot: spots::default_spot().clone(),
        hourly,
        units: HourlyUnits::default(),
        tide: Some(tide),
        fetched_at: Utc::now(),
    }
}

/// Wire-shaped marine payload the mock server serves, 48 hours from today.
pub fn mock_marine_payload() -> serde_json::Value {
    let base = fixture_base_time();
    let time: Vec<String> = (0..48)
        .map(|i| (base + Duration::hours(i)).format("%Y-%m-%dT%H:%M").to_string())
        .collect();
    let heights: Vec<f32> = (0..48).map(|i| 1.0 + 0.05 * i as f32).collect();
    let periods: Vec<f32> = (0..48).map(|i| 8.0 + (i % 4) as f32).collect();
    let dirs: Vec<f32> = vec![280.0; 48];
    let peaks: Vec<f32> = vec![6.0; 48];
    let tide: Vec<f32> = (0..48)
        .map(|i| 1.5 * (i as f32 * std::f32::consts::PI / 6.0).sin())
        .collect();

    serde_json::json!({
        "hourly": {
            "time": time,
            "wave_height": heights,
            "wave_direction": dirs,
            "wave_period": periods,
            "wind_wave_peak_period": peaks,
            "sea_level_height_msl": tide,
        },
        "hourly_units": {
            "wave_height": "m",
            "wave_direction": "°",
            "wave_period": "s",
            "wind_wave_peak_period": "s",
        }
    })
}
