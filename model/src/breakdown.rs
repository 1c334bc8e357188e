//! Scored metric records delivered by the upstream scorer.

use serde::{Deserialize, Serialize};

/// One scored metric category contributing to the overall readiness score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricBreakdownItem {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub max_score: f64,
    /// Free-text qualitative level ("ดีมาก", "ต้องปรับปรุง", ...).
    #[serde(default)]
    pub level: String,
    /// Mean precomputed by the scorer; used when the metric has no series
    /// in the snapshot catalog.
    #[serde(default)]
    pub average: Option<f64>,
}

/// The scorer's summary block (`metrics.heuristics`), consumed verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HeuristicsSummary {
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub max_score: f64,
    #[serde(default)]
    pub percentage: f64,
    #[serde(default)]
    pub readiness: String,
    #[serde(default)]
    pub breakdown: Vec<MetricBreakdownItem>,
}
