//! Derived series: per-period ratios and margins.
//!
//! Upstream catalogs sometimes omit derived metrics (debt-to-equity, profit
//! margins). These helpers rebuild them period by period, skipping any period
//! where either side is undefined or the denominator is zero.

use model::Series;

/// Per-period `numerator / denominator` along the axis.
pub fn ratio_series(numerator: &Series, denominator: &Series, axis: &[String]) -> Series {
    scaled_quotient(numerator, denominator, axis, 1.0)
}

/// Per-period `numerator / denominator × 100`, for margin percentages.
pub fn margin_series(numerator: &Series, denominator: &Series, axis: &[String]) -> Series {
    scaled_quotient(numerator, denominator, axis, 100.0)
}

fn scaled_quotient(
    numerator: &Series,
    denominator: &Series,
    axis: &[String],
    scale: f64,
) -> Series {
    let mut derived = Series::new();
    for (period, value) in numerator.defined_along(axis) {
        match denominator.value(period) {
            Some(divisor) if divisor != 0.0 => {
                derived.insert(period, value / divisor * scale);
            }
            _ => {}
        }
    }
    derived
}
