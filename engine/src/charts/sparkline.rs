//! Compact inline trend glyphs.
//!
//! A sparkline stretches the series over a fixed 120×40 virtual canvas with
//! a plain min–max scale: no zero anchoring, no padding, no ticks. Anything
//! with fewer than two defined points renders as a placeholder dash, which
//! is the caller's concern; here it's just None.

use model::Series;
use serde::Serialize;

pub const SPARK_WIDTH: f64 = 120.0;
pub const SPARK_HEIGHT: f64 = 40.0;

const PLOT_LEFT: f64 = 12.0;
const PLOT_SPAN_X: f64 = 96.0;
const PLOT_BOTTOM: f64 = 36.0;
const PLOT_SPAN_Y: f64 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SparkPoint {
    pub x: f64,
    pub y: f64,
}

/// Polyline vertices on the fixed virtual canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SparklineGeometry {
    pub points: Vec<SparkPoint>,
    pub width: f64,
    pub height: f64,
}

/// Compute sparkline vertices, or None when fewer than two points are
/// defined. X positions keep the original axis index, so a gap compresses
/// the polyline without shifting neighbours off their time slots.
pub fn sparkline_geometry(series: &Series, axis: &[String]) -> Option<SparklineGeometry> {
    let defined: Vec<(usize, f64)> = axis
        .iter()
        .enumerate()
        .filter_map(|(index, period)| series.value(period).map(|value| (index, value)))
        .collect();
    if defined.len() < 2 {
        return None;
    }

    let min = defined.iter().map(|&(_, v)| v).fold(f64::INFINITY, f64::min);
    let max = defined
        .iter()
        .map(|&(_, v)| v)
        .fold(f64::NEG_INFINITY, f64::max);
    let span = if max - min == 0.0 { 1.0 } else { max - min };
    let last_slot = axis.len().saturating_sub(1).max(1) as f64;

    let points = defined
        .iter()
        .map(|&(index, value)| SparkPoint {
            x: PLOT_LEFT + (index as f64 / last_slot) * PLOT_SPAN_X,
            y: PLOT_BOTTOM - ((value - min) / span) * PLOT_SPAN_Y,
        })
        .collect();

    Some(SparklineGeometry {
        points,
        width: SPARK_WIDTH,
        height: SPARK_HEIGHT,
    })
}
