//! Series aggregation: means and gap-tolerant trends.

use model::Series;
use serde::{Deserialize, Serialize};

/// Deltas smaller than this count as flat, so floating-point near-equality
/// never flips a trend arrow.
pub const FLAT_EPSILON: f64 = 0.001;

/// How many of the most recent defined periods feed a headline average.
pub const RECENT_WINDOW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl TrendDirection {
    /// Arrow glyph for badge rendering.
    pub fn glyph(&self) -> &'static str {
        match self {
            TrendDirection::Up => "▲",
            TrendDirection::Down => "▼",
            TrendDirection::Flat => "▬",
        }
    }
}

/// Last-vs-previous movement of a series along the period axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trend {
    pub delta: f64,
    pub direction: TrendDirection,
}

impl Trend {
    pub fn flat() -> Self {
        Self {
            delta: 0.0,
            direction: TrendDirection::Flat,
        }
    }
}

/// Arithmetic mean of every defined value. None when nothing is defined;
/// missing periods are never imputed.
pub fn average(series: &Series) -> Option<f64> {
    if series.is_empty() {
        return None;
    }
    let (count, sum) = series
        .values()
        .fold((0usize, 0.0), |(count, sum), value| (count + 1, sum + value));
    Some(sum / count as f64)
}

/// Mean over the last `limit` defined values in axis order.
pub fn average_recent(series: &Series, axis: &[String], limit: usize) -> Option<f64> {
    let defined: Vec<f64> = series.defined_along(axis).map(|(_, value)| value).collect();
    if defined.is_empty() || limit == 0 {
        return None;
    }
    let window = &defined[defined.len().saturating_sub(limit)..];
    Some(window.iter().sum::<f64>() / window.len() as f64)
}

/// Movement between the two most recent defined values in axis order.
///
/// Gaps are skipped, so the two values need not sit in adjacent periods.
/// Fewer than two defined values, or a sub-epsilon delta, reads as flat
/// with a zero delta.
pub fn trend(series: &Series, axis: &[String]) -> Trend {
    let defined: Vec<f64> = series.defined_along(axis).map(|(_, value)| value).collect();
    if defined.len() < 2 {
        return Trend::flat();
    }

    let latest = defined[defined.len() - 1];
    let previous = defined[defined.len() - 2];
    let delta = latest - previous;
    if delta.abs() < FLAT_EPSILON {
        return Trend::flat();
    }

    Trend {
        delta,
        direction: if delta > 0.0 {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        },
    }
}
