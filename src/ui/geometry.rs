//! Pure chart geometry. Everything here maps value series onto abstract
//! (x, y) pixel coordinates with y growing downward; widgets scale the
//! result onto their render surface.

/// Polyline for the weekly sparkline, with the bounds and aggregates the
/// surrounding widget prints.
#[derive(Debug, Clone, PartialEq)]
pub struct SparkPath {
    pub path: String,
    pub points: Vec<(f32, f32)>,
    pub min: f32,
    pub max: f32,
    pub avg: f32,
    pub lo_bound: f32,
    pub hi_bound: f32,
}

/// Fits `values` into a `width` x `height` box with `padding` on every side.
/// The vertical scale is padded asymmetrically (15% below the minimum, 10%
/// above the maximum) so the curve never touches the frame. A flat or
/// single-value series pins every point to the vertical center.
#[must_use]
pub fn build_spark_path(
    values: &[f32],
    width: f32,
    height: f32,
    padding: f32,
) -> Option<SparkPath> {
    if values.is_empty() {
        return None;
    }

    let min = values.iter().copied().fold(f32::INFINITY, f32::min);
    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let avg = values.iter().sum::<f32>() / values.len() as f32;

    let span = max - min;
    let lo_bound = min - 0.15 * span;
    let hi_bound = max + 0.10 * span;

    let usable_w = width - 2.0 * padding;
    let usable_h = height - 2.0 * padding;
    let step = if values.len() > 1 {
        usable_w / (values.len() - 1) as f32
    } else {
        0.0
    };

    let points: Vec<(f32, f32)> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = if values.len() > 1 {
                padding + i as f32 * step
            } else {
                width / 2.0
            };
            let y = if hi_bound > lo_bound {
                let t = (v - lo_bound) / (hi_bound - lo_bound);
                padding + (1.0 - t) * usable_h
            } else {
                height / 2.0
            };
            (x, y)
        })
        .collect();

    let mut path = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        let op = if i == 0 { 'M' } else { 'L' };
        path.push_str(&format!("{op}{x:.1},{y:.1} "));
    }
    let path = path.trim_end().to_string();

    Some(SparkPath {
        path,
        points,
        min,
        max,
        avg,
        lo_bound,
        hi_bound,
    })
}

/// One bar of a bar chart, in the same downward-y coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub value: f32,
}

/// Lays `values` out as bars. `spacing` widens the gaps: bar width is
/// `width / (n * spacing)`, with the leftover spread evenly. Bars scale
/// linearly between the series min and max over the usable height; a flat
/// series renders every bar at half height so it stays visible.
#[must_use]
pub fn build_bar_chart(
    values: &[f32],
    width: f32,
    height: f32,
    spacing: f32,
    pad_x: f32,
    pad_y: f32,
) -> Vec<Bar> {
    if values.is_empty() {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f32::INFINITY, f32::min);
    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let span = max - min;

    let n = values.len() as f32;
    let bar_w = width / (n * spacing);
    let usable_w = width - 2.0 * pad_x;
    let usable_h = height - 2.0 * pad_y;
    let slot = usable_w / n;

    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let h = if span > 0.0 {
                (v - min) / span * usable_h
            } else {
                usable_h / 2.0
            };
            Bar {
                x: pad_x + i as f32 * slot + (slot - bar_w) / 2.0,
                y: height - pad_y - h,
                width: bar_w,
                height: h,
                value: v,
            }
        })
        .collect()
}

/// Local extremum of the tide curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtremumKind {
    Peak,
    Trough,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum {
    pub index: usize,
    pub value: f32,
    pub kind: ExtremumKind,
}

/// High/low water markers by 3-sample neighbor comparison, capped at 4 of
/// each kind. Flat shoulders count toward the earlier sample.
#[must_use]
pub fn tide_extrema(values: &[f32]) -> Vec<Extremum> {
    let mut out = Vec::new();
    let mut peaks = 0;
    let mut troughs = 0;

    for i in 1..values.len().saturating_sub(1) {
        let (a, b, c) = (values[i - 1], values[i], values[i + 1]);
        if b > a && b >= c && peaks < 4 {
            peaks += 1;
            out.push(Extremum {
                index: i,
                value: b,
                kind: ExtremumKind::Peak,
            });
        } else if b < a && b <= c && troughs < 4 {
            troughs += 1;
            out.push(Extremum {
                index: i,
                value: b,
                kind: ExtremumKind::Trough,
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn spark_path_spans_padded_box() {
        let spark = build_spark_path(&[1.0, 3.0, 2.0], 100.0, 40.0, 10.0).expect("non-empty");

        assert!(close(spark.points[0].0, 10.0));
        assert!(close(spark.points[2].0, 90.0));
        assert_eq!(spark.min, 1.0);
        assert_eq!(spark.max, 3.0);
        assert!(close(spark.avg, 2.0));
        assert!(close(spark.lo_bound, 1.0 - 0.3));
        assert!(close(spark.hi_bound, 3.0 + 0.2));
        assert!(spark.path.starts_with('M'));
        assert_eq!(spark.path.matches('L').count(), 2);

        // y grows downward: the maximum sits above the minimum.
        assert!(spark.points[1].1 < spark.points[0].1);
    }

    #[test]
    fn spark_path_empty_and_flat() {
        assert!(build_spark_path(&[], 100.0, 40.0, 10.0).is_none());

        let flat = build_spark_path(&[2.0, 2.0, 2.0], 100.0, 40.0, 10.0).expect("non-empty");
        assert!(flat.points.iter().all(|&(_, y)| close(y, 20.0)));

        let single = build_spark_path(&[5.0], 100.0, 40.0, 10.0).expect("non-empty");
        assert_eq!(single.points.len(), 1);
        assert!(close(single.points[0].0, 50.0));
        assert!(close(single.points[0].1, 20.0));
    }

    #[test]
    fn bars_scale_between_min_and_max() {
        let bars = build_bar_chart(&[0.0, 1.0, 2.0], 120.0, 60.0, 1.5, 10.0, 10.0);
        assert_eq!(bars.len(), 3);
        assert!(close(bars[0].height, 0.0));
        assert!(close(bars[1].height, 20.0));
        assert!(close(bars[2].height, 40.0));
        assert!(close(bars[2].y, 10.0));
        assert!(close(bars[0].width, 120.0 / (3.0 * 1.5)));
    }

    #[test]
    fn flat_bars_render_at_half_height() {
        let bars = build_bar_chart(&[1.5, 1.5], 100.0, 60.0, 1.6, 10.0, 10.0);
        assert!(bars.iter().all(|b| close(b.height, 20.0)));
    }

    #[test]
    fn empty_bars_are_empty() {
        assert!(build_bar_chart(&[], 100.0, 60.0, 1.5, 10.0, 10.0).is_empty());
    }

    #[test]
    fn extrema_alternate_and_cap() {
        let tide: Vec<f32> = (0..48)
            .map(|i| (i as f32 * std::f32::consts::PI / 6.0).sin())
            .collect();
        let ext = tide_extrema(&tide);
        let peaks = ext
            .iter()
            .filter(|e| e.kind == ExtremumKind::Peak)
            .count();
        let troughs = ext
            .iter()
            .filter(|e| e.kind == ExtremumKind::Trough)
            .count();
        assert_eq!(peaks, 4);
        assert_eq!(troughs, 4);
    }

    #[test]
    fn extrema_ignore_endpoints_and_monotone_series() {
        assert!(tide_extrema(&[1.0, 2.0, 3.0, 4.0]).is_empty());
        assert!(tide_extrema(&[1.0]).is_empty());
        assert!(tide_extrema(&[]).is_empty());

        // Flat shoulder: the first sample of the plateau is the peak.
        let ext = tide_extrema(&[0.0, 1.0, 1.0, 0.0]);
        assert_eq!(ext.len(), 1);
        assert_eq!(ext[0].index, 1);
        assert_eq!(ext[0].kind, ExtremumKind::Peak);
    }
}
