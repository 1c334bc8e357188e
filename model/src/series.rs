//! Sparse period→value mapping for one metric.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

/// One metric's values keyed by period label (fiscal year).
///
/// Only defined numeric values are stored. A period absent from the map means
/// "no data for that period", which is never the same thing as `0.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Series(HashMap<String, f64>);

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a series from a JSON object, keeping only entries with a numeric
    /// reading. `null`, strings, and nested values are skipped.
    pub fn from_value(raw: &Value) -> Self {
        let mut values = HashMap::new();
        if let Some(object) = raw.as_object() {
            for (period, entry) in object {
                if let Some(number) = entry.as_f64() {
                    values.insert(period.clone(), number);
                }
            }
        }
        Self(values)
    }

    pub fn insert(&mut self, period: impl Into<String>, value: f64) {
        self.0.insert(period.into(), value);
    }

    pub fn value(&self, period: &str) -> Option<f64> {
        self.0.get(period).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All defined values, in no particular order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.values().copied()
    }

    /// Defined entries in axis order. Periods the series has no value for are
    /// skipped, so the yielded pairs can be sparser than the axis.
    pub fn defined_along<'a>(
        &'a self,
        axis: &'a [String],
    ) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        axis.iter()
            .filter_map(|period| self.value(period).map(|value| (period.as_str(), value)))
    }

    /// Count of defined entries along the given axis.
    pub fn defined_count(&self, axis: &[String]) -> usize {
        self.defined_along(axis).count()
    }
}

impl<P: Into<String>> FromIterator<(P, f64)> for Series {
    fn from_iter<I: IntoIterator<Item = (P, f64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(period, value)| (period.into(), value))
                .collect(),
        )
    }
}
