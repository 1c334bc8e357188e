//! Formatting helpers for presenting metric values.
//!
//! Presentation only: the analytic types stay numeric, and every helper
//! renders a missing or non-finite value as the "-" placeholder.

/// Grouped fixed-decimal number, e.g. `1,234,567.89`.
pub fn format_number(value: Option<f64>, fraction: usize) -> String {
    let Some(value) = finite(value) else {
        return "-".to_string();
    };
    let rendered = format!("{value:.fraction$}");
    let (mantissa, decimals) = match rendered.split_once('.') {
        Some((mantissa, decimals)) => (mantissa, Some(decimals)),
        None => (rendered.as_str(), None),
    };
    let (sign, digits) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let grouped = group_thousands(digits);
    match decimals {
        Some(decimals) => format!("{sign}{grouped}.{decimals}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Whole-unit currency amount with grouping. The currency symbol is the
/// renderer's concern.
pub fn format_currency(value: Option<f64>) -> String {
    format_number(value, 0)
}

/// Compact axis-label form: `1.5B`, `2.3M`, `45.1K`, else a plain number
/// (two decimals below 10, none from 10 up).
pub fn format_compact(value: Option<f64>) -> String {
    let Some(value) = finite(value) else {
        return "-".to_string();
    };
    let abs = value.abs();
    if abs >= 1_000_000_000.0 {
        format!("{:.1}B", value / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format_number(Some(value), if abs >= 10.0 { 0 } else { 2 })
    }
}

/// Fixed-decimal percentage with the `%` suffix.
pub fn format_percent(value: Option<f64>, fraction: usize) -> String {
    let Some(value) = finite(value) else {
        return "-".to_string();
    };
    format!("{}%", format_number(Some(value), fraction))
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && index % 3 == offset {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
