#![allow(clippy::missing_errors_doc)]

use clap::Parser;

use crate::app::prefs::{Lang, ThemePref};

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser, Clone)]
#[command(
    name = "swell-tui",
    version,
    about = "Terminal surf conditions dashboard"
)]
pub struct Cli {
    /// Spot slug or search term (default: Plage de Carnac)
    pub spot: Option<String>,

    /// Direct latitude (requires --lon)
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Direct longitude (requires --lat)
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Theme override (otherwise from preferences)
    #[arg(long, value_enum)]
    pub theme: Option<ThemePref>,

    /// Language override (otherwise from preferences)
    #[arg(long, value_enum)]
    pub lang: Option<Lang>,

    /// Refresh interval in seconds
    #[arg(long, default_value_t = 600)]
    pub refresh_interval: u64,

    /// Target FPS (15..60)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u8).range(15..=60))]
    pub fps: u8,

    /// Disable UI animation
    #[arg(long)]
    pub no_animation: bool,

    /// Marine API base URL override
    #[arg(long)]
    pub marine_url: Option<String>,

    /// Account service base URL override
    #[arg(long)]
    pub auth_url: Option<String>,

    /// Skip loading and saving the preferences file
    #[arg(long)]
    pub no_prefs: bool,

    /// Print a conditions snapshot to stdout and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        match (self.lat, self.lon) {
            (Some(_), None) | (None, Some(_)) => {
                anyhow::bail!("--lat and --lon must be provided together")
            }
            (Some(lat), Some(lon)) => {
                if !(-90.0..=90.0).contains(&lat) {
                    anyhow::bail!("--lat must be in -90..=90");
                }
                if !(-180.0..=180.0).contains(&lon) {
                    anyhow::bail!("--lon must be in -180..=180");
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}
