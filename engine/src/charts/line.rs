//! Line/area chart geometry.
//!
//! Deterministic mapping from one sparse series plus the shared period axis
//! to drawable coordinates. The scale has to stay readable for revenue in
//! the billions and for ratios near 1.0 on the same page, and a missing year
//! must show up as a gap in the line, not a dip to zero.

use model::Series;
use serde::Serialize;

/// Axis label intervals; tick values = intervals + 1.
pub const TICK_INTERVALS: usize = 4;

/// Inner drawing margins, in the same logical units as the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Logical canvas and fill options for one chart request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartSpec {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub fill_area: bool,
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self {
            width: 420.0,
            height: 200.0,
            margin: Margin {
                top: 20.0,
                right: 24.0,
                bottom: 30.0,
                left: 64.0,
            },
            fill_area: false,
        }
    }
}

impl ChartSpec {
    pub fn with_height(height: f64) -> Self {
        Self {
            height,
            ..Self::default()
        }
    }

    pub fn filled(mut self) -> Self {
        self.fill_area = true;
        self
    }

    fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }
}

/// One plotted value with its canvas position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub period: String,
    pub value: f64,
}

/// Horizontal gridline position with the raw value it labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisTick {
    pub y: f64,
    pub value: f64,
}

/// Padded vertical range the chart is scaled against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

/// A bare vertex on the area outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

/// X position for one axis period's label and gridline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodLabel {
    pub x: f64,
    pub period: String,
}

/// Render-ready geometry for one series. All coordinates live in the spec's
/// logical canvas space with y growing downward; the renderer only draws.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartGeometry {
    /// Defined periods only, in axis order. Gaps simply have no point.
    pub points: Vec<ChartPoint>,
    pub ticks: Vec<AxisTick>,
    pub bounds: Bounds,
    /// Y of the bottom axis line, which doubles as the area baseline.
    pub baseline_y: f64,
    /// Closed area outline in draw order: baseline under the first point,
    /// along the points, baseline under the last. Present only when fill was
    /// requested and at least two points exist.
    pub area: Option<Vec<PathPoint>>,
    /// One slot per axis period, defined or not, for x labels and gridlines.
    pub period_labels: Vec<PeriodLabel>,
}

impl ChartGeometry {
    /// Most recent defined point; points are in axis order so it's the last.
    pub fn latest(&self) -> Option<&ChartPoint> {
        self.points.last()
    }

    pub fn has_area(&self) -> bool {
        self.area.is_some()
    }
}

/// Compute geometry for one series against the shared axis. Returns None
/// when the series has no defined value on the axis, so the caller can show
/// a dedicated empty state instead of a blank canvas.
pub fn line_geometry(series: &Series, axis: &[String], spec: &ChartSpec) -> Option<ChartGeometry> {
    let defined: Vec<(usize, &str, f64)> = axis
        .iter()
        .enumerate()
        .filter_map(|(index, period)| {
            series
                .value(period)
                .map(|value| (index, period.as_str(), value))
        })
        .collect();
    if defined.is_empty() {
        return None;
    }

    let min_value = defined.iter().map(|&(_, _, v)| v).fold(f64::INFINITY, f64::min);
    let max_value = defined
        .iter()
        .map(|&(_, _, v)| v)
        .fold(f64::NEG_INFINITY, f64::max);

    let bounds = padded_bounds(min_value, max_value);
    let span = fallback_zero(bounds.upper - bounds.lower, 1.0);

    let scale_x = |index: usize| -> f64 {
        if axis.len() <= 1 {
            spec.margin.left + spec.inner_width() / 2.0
        } else {
            spec.margin.left + (index as f64 / (axis.len() - 1) as f64) * spec.inner_width()
        }
    };
    let scale_y = |value: f64| -> f64 {
        spec.margin.top + spec.inner_height()
            - ((value - bounds.lower) / span) * spec.inner_height()
    };

    let points: Vec<ChartPoint> = defined
        .iter()
        .map(|&(index, period, value)| ChartPoint {
            x: scale_x(index),
            y: scale_y(value),
            period: period.to_string(),
            value,
        })
        .collect();

    let baseline_y = spec.margin.top + spec.inner_height();

    let area = (spec.fill_area && points.len() > 1).then(|| {
        let mut outline = Vec::with_capacity(points.len() + 2);
        outline.push(PathPoint {
            x: points[0].x,
            y: baseline_y,
        });
        outline.extend(points.iter().map(|point| PathPoint {
            x: point.x,
            y: point.y,
        }));
        outline.push(PathPoint {
            x: points[points.len() - 1].x,
            y: baseline_y,
        });
        outline
    });

    let ticks = (0..=TICK_INTERVALS)
        .map(|step| {
            let value = bounds.lower + (span / TICK_INTERVALS as f64) * step as f64;
            AxisTick {
                y: scale_y(value),
                value,
            }
        })
        .collect();

    let period_labels = axis
        .iter()
        .enumerate()
        .map(|(index, period)| PeriodLabel {
            x: scale_x(index),
            period: period.clone(),
        })
        .collect();

    Some(ChartGeometry {
        points,
        ticks,
        bounds,
        baseline_y,
        area,
        period_labels,
    })
}

/// Pad the value range by 10% of the span (falling back to 10% of |max|,
/// then to 1.0, so the scale is never zero-width), then clamp the bound on
/// the zero side: all-non-negative data keeps a zero floor, all-non-positive
/// data keeps a zero ceiling, and mixed-sign data floats past both extremes.
fn padded_bounds(min_value: f64, max_value: f64) -> Bounds {
    let span = max_value - min_value;
    let padding = fallback_zero(span, fallback_zero(max_value.abs(), 1.0)) * 0.1;
    Bounds {
        lower: if min_value >= 0.0 {
            0.0
        } else {
            min_value - padding
        },
        upper: if max_value <= 0.0 {
            0.0
        } else {
            max_value + padding
        },
    }
}

fn fallback_zero(value: f64, fallback: f64) -> f64 {
    if value == 0.0 {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|label| label.to_string()).collect()
    }

    fn spec() -> ChartSpec {
        ChartSpec::default()
    }

    #[test]
    fn empty_series_yields_no_geometry() {
        assert!(line_geometry(&Series::new(), &axis(&["2021", "2022"]), &spec()).is_none());
    }

    #[test]
    fn series_with_no_axis_overlap_yields_no_geometry() {
        let series: Series = [("2019", 10.0)].into_iter().collect();
        assert!(line_geometry(&series, &axis(&["2021", "2022"]), &spec()).is_none());
    }

    #[test]
    fn all_positive_data_keeps_a_zero_floor() {
        let series: Series = [("2021", 100.0), ("2022", 200.0)].into_iter().collect();
        let geometry = line_geometry(&series, &axis(&["2021", "2022"]), &spec()).unwrap();
        assert_eq!(geometry.bounds.lower, 0.0);
        assert_eq!(geometry.bounds.upper, 210.0); // 200 + 10% of span
    }

    #[test]
    fn all_negative_data_keeps_a_zero_ceiling() {
        let series: Series = [("2021", -100.0), ("2022", -50.0)].into_iter().collect();
        let geometry = line_geometry(&series, &axis(&["2021", "2022"]), &spec()).unwrap();
        assert_eq!(geometry.bounds.upper, 0.0);
        assert_eq!(geometry.bounds.lower, -105.0); // -100 - 10% of span
    }

    #[test]
    fn mixed_sign_bounds_float_past_both_extremes() {
        let series: Series = [("2021", -10.0), ("2022", 30.0)].into_iter().collect();
        let geometry = line_geometry(&series, &axis(&["2021", "2022"]), &spec()).unwrap();
        assert!(geometry.bounds.lower < -10.0);
        assert!(geometry.bounds.upper > 30.0);
        assert_eq!(geometry.bounds.lower, -14.0);
        assert_eq!(geometry.bounds.upper, 34.0);
    }

    #[test]
    fn constant_series_pads_by_a_tenth_of_the_value() {
        let series: Series = [("2021", 50.0), ("2022", 50.0)].into_iter().collect();
        let geometry = line_geometry(&series, &axis(&["2021", "2022"]), &spec()).unwrap();
        // Span is zero, so padding falls back to 10% of |max|.
        assert_eq!(geometry.bounds.lower, 0.0);
        assert_eq!(geometry.bounds.upper, 55.0);
    }

    #[test]
    fn all_zero_series_still_scales_finitely() {
        let series: Series = [("2021", 0.0), ("2022", 0.0)].into_iter().collect();
        let geometry = line_geometry(&series, &axis(&["2021", "2022"]), &spec()).unwrap();
        assert_eq!(geometry.bounds.lower, 0.0);
        assert_eq!(geometry.bounds.upper, 0.0);
        for point in &geometry.points {
            assert!(point.y.is_finite());
        }
        for tick in &geometry.ticks {
            assert!(tick.y.is_finite());
        }
    }

    #[test]
    fn gaps_drop_points_but_keep_axis_positions() {
        let series: Series = [("2021", 1.0), ("2023", 3.0)].into_iter().collect();
        let years = axis(&["2021", "2022", "2023"]);
        let geometry = line_geometry(&series, &years, &spec()).unwrap();
        assert_eq!(geometry.points.len(), 2);
        assert_eq!(geometry.period_labels.len(), 3);
        // The 2023 point sits at the axis slot for index 2, not index 1.
        assert_eq!(geometry.points[1].x, geometry.period_labels[2].x);
    }

    #[test]
    fn single_period_axis_centers_the_point() {
        let series: Series = [("2021", 42.0)].into_iter().collect();
        let geometry = line_geometry(&series, &axis(&["2021"]), &spec()).unwrap();
        let s = spec();
        let expected = s.margin.left + (s.width - s.margin.left - s.margin.right) / 2.0;
        assert_eq!(geometry.points[0].x, expected);
    }

    #[test]
    fn five_ticks_span_the_padded_range() {
        let series: Series = [("2021", 0.0), ("2022", 100.0)].into_iter().collect();
        let geometry = line_geometry(&series, &axis(&["2021", "2022"]), &spec()).unwrap();
        assert_eq!(geometry.ticks.len(), TICK_INTERVALS + 1);
        assert_eq!(geometry.ticks[0].value, geometry.bounds.lower);
        assert_eq!(
            geometry.ticks[TICK_INTERVALS].value,
            geometry.bounds.lower + (geometry.bounds.upper - geometry.bounds.lower),
        );
        // Evenly spaced.
        let step = geometry.ticks[1].value - geometry.ticks[0].value;
        for pair in geometry.ticks.windows(2) {
            assert!((pair[1].value - pair[0].value - step).abs() < 1e-9);
        }
    }

    #[test]
    fn area_requires_fill_flag_and_two_points() {
        let years = axis(&["2021", "2022"]);
        let series: Series = [("2021", 1.0), ("2022", 2.0)].into_iter().collect();

        let plain = line_geometry(&series, &years, &spec()).unwrap();
        assert!(!plain.has_area());

        let filled = line_geometry(&series, &years, &ChartSpec::default().filled()).unwrap();
        let outline = filled.area.as_ref().unwrap();
        // Baseline, two points, baseline.
        assert_eq!(outline.len(), 4);
        assert_eq!(outline[0].y, filled.baseline_y);
        assert_eq!(outline[0].x, filled.points[0].x);
        assert_eq!(outline[3].y, filled.baseline_y);
        assert_eq!(outline[3].x, filled.points[1].x);

        let single: Series = [("2021", 1.0)].into_iter().collect();
        let lone = line_geometry(&single, &years, &ChartSpec::default().filled()).unwrap();
        assert!(!lone.has_area());
    }

    #[test]
    fn latest_is_the_last_defined_point() {
        let series: Series = [("2021", 1.0), ("2022", 2.0)].into_iter().collect();
        let geometry = line_geometry(&series, &axis(&["2021", "2022", "2023"]), &spec()).unwrap();
        let latest = geometry.latest().unwrap();
        assert_eq!(latest.period, "2022");
        assert_eq!(latest.value, 2.0);
    }

    #[test]
    fn identical_inputs_produce_identical_geometry() {
        let series: Series = [("2021", 123.45), ("2023", 678.9)].into_iter().collect();
        let years = axis(&["2021", "2022", "2023"]);
        let a = line_geometry(&series, &years, &spec()).unwrap();
        let b = line_geometry(&series, &years, &spec()).unwrap();
        assert_eq!(a, b);
    }
}
