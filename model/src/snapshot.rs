//! The analyze-payload boundary: parsing, tolerance rules, and contract
//! validation. Sparse data is tolerated silently; contract violations are
//! rejected here so the engine never has to handle them.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::breakdown::HeuristicsSummary;
use crate::series::Series;

/// Keys under `metrics` that hold summary blocks rather than period series.
const NON_SERIES_KEYS: [&str; 2] = ["heuristics", "ipo_assessment"];

#[derive(Debug, Error, PartialEq)]
pub enum SnapshotError {
    #[error("payload has no data.years axis")]
    MissingAxis,
    #[error("data.years is empty")]
    EmptyAxis,
    #[error("duplicate period label {0:?} in data.years")]
    DuplicatePeriod(String),
    #[error("breakdown item {key:?} has score {score} above max_score {max_score}")]
    ScoreAboveMax {
        key: String,
        score: f64,
        max_score: f64,
    },
    #[error("breakdown item {0:?} has a negative max_score")]
    NegativeMaxScore(String),
}

/// A fully materialized analyze payload: shared period axis, metric catalog,
/// and the upstream scorer's summary.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportSnapshot {
    pub company_name: Option<String>,
    /// RFC3339 stamp of the analysis run, if the producer supplied one.
    pub generated_at: Option<String>,
    /// Ordered period axis shared by every series. Caller order is preserved,
    /// never re-sorted.
    pub years: Vec<String>,
    pub metrics: HashMap<String, Series>,
    pub heuristics: HeuristicsSummary,
}

impl ReportSnapshot {
    /// Parse an analyze payload (`{"data": .., "metrics": ..}`).
    ///
    /// Non-numeric and `null` series entries are skipped, a missing
    /// heuristics block yields an empty summary, and unknown metric keys are
    /// kept. Axis and score contract violations are rejected.
    pub fn from_value(raw: &Value) -> Result<Self, SnapshotError> {
        let data = raw.get("data").unwrap_or(&Value::Null);

        let years = parse_axis(data.get("years"))?;

        let company_name = data
            .get("company_name")
            .and_then(Value::as_str)
            .map(str::to_string);
        let generated_at = data
            .get("generated_at")
            .and_then(Value::as_str)
            .map(str::to_string);

        let mut metrics = HashMap::new();
        let mut heuristics = HeuristicsSummary::default();
        match raw.get("metrics").and_then(Value::as_object) {
            Some(catalog) => {
                for (key, entry) in catalog {
                    if NON_SERIES_KEYS.contains(&key.as_str()) {
                        continue;
                    }
                    metrics.insert(key.clone(), Series::from_value(entry));
                }
                match catalog.get("heuristics") {
                    Some(block) => {
                        heuristics =
                            serde_json::from_value(block.clone()).unwrap_or_else(|err| {
                                warn!("metrics.heuristics is malformed ({err}); scorecard will be empty");
                                HeuristicsSummary::default()
                            });
                    }
                    None => warn!("metrics.heuristics missing; scorecard will be empty"),
                }
            }
            None => warn!("payload has no metrics catalog"),
        }

        validate_breakdown(&heuristics)?;

        debug!(
            years = years.len(),
            metrics = metrics.len(),
            breakdown = heuristics.breakdown.len(),
            "parsed report snapshot"
        );

        Ok(Self {
            company_name,
            generated_at,
            years,
            metrics,
            heuristics,
        })
    }

    pub fn series(&self, key: &str) -> Option<&Series> {
        self.metrics.get(key)
    }
}

/// Periods may arrive as JSON numbers (fiscal years) or strings; both are
/// normalized to their string label.
fn period_label(value: &Value) -> Option<String> {
    if let Some(number) = value.as_i64() {
        return Some(number.to_string());
    }
    value.as_str().map(str::to_string)
}

fn parse_axis(raw: Option<&Value>) -> Result<Vec<String>, SnapshotError> {
    let entries = raw
        .and_then(Value::as_array)
        .ok_or(SnapshotError::MissingAxis)?;

    let mut years = Vec::with_capacity(entries.len());
    let mut seen = HashSet::new();
    for entry in entries {
        let Some(label) = period_label(entry) else {
            continue;
        };
        if !seen.insert(label.clone()) {
            return Err(SnapshotError::DuplicatePeriod(label));
        }
        years.push(label);
    }

    if years.is_empty() {
        return Err(SnapshotError::EmptyAxis);
    }
    Ok(years)
}

fn validate_breakdown(heuristics: &HeuristicsSummary) -> Result<(), SnapshotError> {
    for item in &heuristics.breakdown {
        if item.max_score < 0.0 {
            return Err(SnapshotError::NegativeMaxScore(item.key.clone()));
        }
        if item.score > item.max_score {
            return Err(SnapshotError::ScoreAboveMax {
                key: item.key.clone(),
                score: item.score,
                max_score: item.max_score,
            });
        }
    }
    Ok(())
}
