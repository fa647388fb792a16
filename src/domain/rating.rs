//! Surf-quality rating: blends trapezoidal memberships for wave height and
//! period with a wind-wave smoothness factor into a 0–100 score.

use serde::Serialize;

use crate::app::prefs::Lang;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum RatingLabel {
    VeryPoor,
    Poor,
    Average,
    Good,
    VeryGood,
    Epic,
}

impl RatingLabel {
    #[must_use]
    pub fn text(self, lang: Lang) -> &'static str {
        match (self, lang) {
            (Self::VeryPoor, Lang::En) => "Very poor",
            (Self::Poor, Lang::En) => "Poor",
            (Self::Average, Lang::En) => "Average",
            (Self::Good, Lang::En) => "Good",
            (Self::VeryGood, Lang::En) => "Very good",
            (Self::Epic, Lang::En) => "Epic",
            (Self::VeryPoor, Lang::Fr) => "Très mauvais",
            (Self::Poor, Lang::Fr) => "Mauvais",
            (Self::Average, Lang::Fr) => "Moyen",
            (Self::Good, Lang::Fr) => "Bon",
            (Self::VeryGood, Lang::Fr) => "Très bon",
            (Self::Epic, Lang::Fr) => "Épique",
        }
    }
}

/// Color-class tag paired 1:1 with the label, resolved to a concrete color
/// by the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tone {
    Red,
    Amber,
    Zinc,
    Emerald,
    Teal,
    Sky,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConditionRating {
    pub score: u8,
    pub label: RatingLabel,
    pub tone: Tone,
}

const HEIGHT_WEIGHT: f32 = 0.48;
const PERIOD_WEIGHT: f32 = 0.42;
const SMOOTHNESS_WEIGHT: f32 = 0.10;

/// Rates a (height, period, wind-wave-peak) triple. Pure and total: any
/// numeric input is absorbed by the clamps, absent inputs degrade the score
/// instead of failing.
///
/// Absence is asymmetric on purpose: a missing height or period contributes
/// membership 0 (penalized) while a missing wind-wave peak contributes the
/// neutral 0.5, exactly as the dashboard this replaces behaved.
#[must_use]
pub fn rate(
    height: Option<f32>,
    period: Option<f32>,
    wind_wave_peak: Option<f32>,
) -> ConditionRating {
    let h = trapezoid(height, 0.2, 0.8, 2.5, 4.5);
    let p = trapezoid(period, 6.0, 10.0, 16.0, 22.0);
    let s = smoothness(wind_wave_peak);

    let combo = clamp01(HEIGHT_WEIGHT * h + PERIOD_WEIGHT * p + SMOOTHNESS_WEIGHT * s) * 100.0;
    let (label, tone) = classify(combo);

    ConditionRating {
        score: combo.round() as u8,
        label,
        tone,
    }
}

/// Trapezoidal fuzzy membership: 0 outside `(a, d)`, 1 on `[b, c]`, linear
/// ramps in between. Absent or NaN input is membership 0.
fn trapezoid(value: Option<f32>, a: f32, b: f32, c: f32, d: f32) -> f32 {
    let Some(v) = value else { return 0.0 };
    if v.is_nan() || v <= a || v >= d {
        return 0.0;
    }
    if v >= b && v <= c {
        return 1.0;
    }
    if v < b { (v - a) / (b - a) } else { (d - v) / (d - c) }
}

/// Wind-wave peak period mapped onto [0, 1] across the 3–10 s range;
/// absent input is the neutral 0.5.
fn smoothness(wind_wave_peak: Option<f32>) -> f32 {
    match wind_wave_peak {
        Some(w) if !w.is_nan() => clamp01((w - 3.0) / (10.0 - 3.0)),
        _ => 0.5,
    }
}

fn clamp01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

fn classify(combo: f32) -> (RatingLabel, Tone) {
    if combo < 20.0 {
        (RatingLabel::VeryPoor, Tone::Red)
    } else if combo < 40.0 {
        (RatingLabel::Poor, Tone::Amber)
    } else if combo < 60.0 {
        (RatingLabel::Average, Tone::Zinc)
    } else if combo < 75.0 {
        (RatingLabel::Good, Tone::Emerald)
    } else if combo < 90.0 {
        (RatingLabel::VeryGood, Tone::Teal)
    } else {
        (RatingLabel::Epic, Tone::Sky)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plateau_conditions_rate_epic() {
        // Height and period both inside their plateaus, smoothness 3/7.
        // 0.48 + 0.42 + 0.10 * 0.42857 = 0.942857 -> 94.
        let r = rate(Some(1.5), Some(12.0), Some(6.0));
        assert_eq!(r.score, 94);
        assert_eq!(r.label, RatingLabel::Epic);
        assert_eq!(r.tone, Tone::Sky);
    }

    #[test]
    fn all_absent_is_very_poor_five() {
        // Memberships 0, neutral smoothness 0.5 -> combo 5.
        let r = rate(None, None, None);
        assert_eq!(r.score, 5);
        assert_eq!(r.label, RatingLabel::VeryPoor);
        assert_eq!(r.tone, Tone::Red);
    }

    #[test]
    fn trapezoid_shape() {
        assert_eq!(trapezoid(Some(0.2), 0.2, 0.8, 2.5, 4.5), 0.0);
        assert_eq!(trapezoid(Some(0.5), 0.2, 0.8, 2.5, 4.5), 0.5);
        assert_eq!(trapezoid(Some(0.8), 0.2, 0.8, 2.5, 4.5), 1.0);
        assert_eq!(trapezoid(Some(2.5), 0.2, 0.8, 2.5, 4.5), 1.0);
        assert_eq!(trapezoid(Some(3.5), 0.2, 0.8, 2.5, 4.5), 0.5);
        assert_eq!(trapezoid(Some(4.5), 0.2, 0.8, 2.5, 4.5), 0.0);
        assert_eq!(trapezoid(None, 0.2, 0.8, 2.5, 4.5), 0.0);
        assert_eq!(trapezoid(Some(f32::NAN), 0.2, 0.8, 2.5, 4.5), 0.0);
    }

    #[test]
    fn smoothness_clamps_and_defaults() {
        assert_eq!(smoothness(Some(3.0)), 0.0);
        assert_eq!(smoothness(Some(10.0)), 1.0);
        assert_eq!(smoothness(Some(-50.0)), 0.0);
        assert_eq!(smoothness(Some(500.0)), 1.0);
        assert_eq!(smoothness(None), 0.5);
        assert_eq!(smoothness(Some(f32::NAN)), 0.5);
    }

    #[test]
    fn extreme_inputs_never_panic_and_stay_in_range() {
        for h in [Some(f32::MIN), Some(f32::MAX), Some(-1.0), None] {
            for p in [Some(f32::MIN), Some(f32::MAX), Some(1e9), None] {
                for w in [Some(f32::MIN), Some(f32::MAX), None] {
                    let r = rate(h, p, w);
                    assert!(r.score <= 100);
                }
            }
        }
    }

    #[test]
    fn band_edges() {
        assert_eq!(classify(19.9).0, RatingLabel::VeryPoor);
        assert_eq!(classify(20.0).0, RatingLabel::Poor);
        assert_eq!(classify(39.9).0, RatingLabel::Poor);
        assert_eq!(classify(40.0).0, RatingLabel::Average);
        assert_eq!(classify(59.9).0, RatingLabel::Average);
        assert_eq!(classify(60.0).0, RatingLabel::Good);
        assert_eq!(classify(74.9).0, RatingLabel::Good);
        assert_eq!(classify(75.0).0, RatingLabel::VeryGood);
        assert_eq!(classify(89.9).0, RatingLabel::VeryGood);
        assert_eq!(classify(90.0).0, RatingLabel::Epic);
    }

    #[test]
    fn labels_localize() {
        assert_eq!(RatingLabel::Epic.text(Lang::En), "Epic");
        assert_eq!(RatingLabel::Epic.text(Lang::Fr), "Épique");
        assert_eq!(RatingLabel::VeryPoor.text(Lang::Fr), "Très mauvais");
    }
}
