//! Donut gauge geometry for the net-margin widget.

use std::f64::consts::PI;

use serde::Serialize;

/// Gauge scale ceiling: a 20% margin fills the ring.
pub const DONUT_MAX: f64 = 20.0;
pub const DONUT_RADIUS: f64 = 36.0;

/// Stroke-dash parameters for a circular progress ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DonutGeometry {
    /// The raw value, for the center label.
    pub value: f64,
    pub radius: f64,
    pub circumference: f64,
    /// Dash offset covering the unfilled remainder of the ring.
    pub dash_offset: f64,
}

pub fn donut_geometry(value: f64) -> DonutGeometry {
    let normalized = if value.is_finite() {
        value.clamp(0.0, DONUT_MAX)
    } else {
        0.0
    };
    let circumference = 2.0 * PI * DONUT_RADIUS;
    DonutGeometry {
        value,
        radius: DONUT_RADIUS,
        circumference,
        dash_offset: ((DONUT_MAX - normalized) / DONUT_MAX) * circumference,
    }
}
