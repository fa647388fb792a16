/// Marker shown wherever a direction is unavailable.
pub const UNKNOWN_DIRECTION: &str = "-";

const LABELS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Maps a direction in degrees to one of the 16 compass labels.
///
/// Sectors are 22.5° wide, centered on the label, starting at North and going
/// clockwise. Rounding is half-away-from-zero, so 11.25° already lands on
/// "NNE". `None` and NaN map to [`UNKNOWN_DIRECTION`].
#[must_use]
pub fn compass(degrees: Option<f32>) -> &'static str {
    let Some(deg) = degrees else {
        return UNKNOWN_DIRECTION;
    };
    if deg.is_nan() {
        return UNKNOWN_DIRECTION;
    }

    let idx = (deg / 22.5).round() as i64;
    LABELS[idx.rem_euclid(16) as usize]
}
