//! Render-ready report assembly: one snapshot in, one view model out.
//!
//! Pure and allocation-only. Rendering twice with the same snapshot yields
//! bit-identical views, so the caller may re-render at any time.

use std::collections::HashMap;

use model::{MetricBreakdownItem, ReportSnapshot};
use once_cell::sync::Lazy;
use serde::Serialize;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tracing::debug;

use crate::charts::{
    donut_geometry, line_geometry, sparkline_geometry, ChartGeometry, ChartSpec, DonutGeometry,
    SparklineGeometry,
};
use crate::core::stats::{self, Trend, RECENT_WINDOW};
use crate::core::tone::Tone;

use super::scorecard::{summarize, ScorecardSummary};

/// Canvas heights used by the report layout.
const HEADLINE_CHART_HEIGHT: f64 = 220.0;
const PANEL_CHART_HEIGHT: f64 = 160.0;

/// Shown when the scorer didn't state a readiness level.
const UNSPECIFIED_READINESS: &str = "ไม่ระบุ";

/// Display-name fallbacks for metric keys the breakdown doesn't label.
static METRIC_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("roa", "ROA"),
        ("roe", "ROE"),
        ("current_ratio", "Current Ratio"),
        ("debt_to_equity", "หนี้สินต่อส่วนของผู้ถือหุ้น"),
        ("debt_to_assets", "หนี้สินต่อสินทรัพย์รวม"),
        ("gross_margin", "Gross Margin"),
        ("net_profit_margin", "Net Profit Margin"),
        ("total_revenue", "รายได้รวม"),
        ("gross_profit", "กำไรขั้นต้น"),
        ("net_profit", "กำไรสุทธิ"),
        ("total_assets", "สินทรัพย์รวม"),
        ("total_liabilities", "หนี้สินรวม"),
        ("shareholders_equity", "ส่วนของผู้ถือหุ้น"),
    ])
});

pub fn metric_label(key: &str) -> &str {
    METRIC_LABELS.get(key).copied().unwrap_or(key)
}

/// One breakdown metric enriched with its series-derived statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightRow {
    pub key: String,
    pub label: String,
    /// Series mean, falling back to the scorer's precomputed average.
    pub average: Option<f64>,
    pub score: f64,
    pub max_score: f64,
    pub level: String,
    pub tone: Tone,
    pub trend: Trend,
    pub sparkline: Option<SparklineGeometry>,
}

/// Headline card: recent average plus trend for one key metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightCard {
    pub key: String,
    pub label: String,
    pub average: Option<f64>,
    pub trend: Trend,
}

/// The full render-ready view model for one report request.
#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub company_name: Option<String>,
    /// Compact run stamp like `2025-09-28 14:30Z`, "—" when absent.
    pub generated_label: String,
    pub readiness: String,
    pub score: f64,
    pub max_score: f64,
    pub scorecard: ScorecardSummary,
    pub highlights: Vec<HighlightCard>,
    pub insight_rows: Vec<InsightRow>,
    pub revenue_chart: Option<ChartGeometry>,
    pub margin_chart: Option<ChartGeometry>,
    pub roa_chart: Option<ChartGeometry>,
    /// Net-margin gauge; an unknown margin shows an empty ring.
    pub margin_donut: DonutGeometry,
}

pub fn build_report(snapshot: &ReportSnapshot) -> ReportView {
    let insight_rows: Vec<InsightRow> = snapshot
        .heuristics
        .breakdown
        .iter()
        .map(|item| insight_row(snapshot, item))
        .collect();

    let classified: Vec<(MetricBreakdownItem, Tone)> = snapshot
        .heuristics
        .breakdown
        .iter()
        .cloned()
        .zip(insight_rows.iter().map(|row| row.tone))
        .collect();
    let scorecard = summarize(&classified);

    let highlights = ["total_revenue", "net_profit", "net_profit_margin"]
        .into_iter()
        .map(|key| highlight(snapshot, key))
        .collect();

    let margin_average = snapshot
        .series("net_profit_margin")
        .and_then(stats::average);

    let readiness = if snapshot.heuristics.readiness.is_empty() {
        UNSPECIFIED_READINESS.to_string()
    } else {
        snapshot.heuristics.readiness.clone()
    };

    let view = ReportView {
        company_name: snapshot.company_name.clone(),
        generated_label: stamp_label(snapshot.generated_at.as_deref()),
        readiness,
        score: snapshot.heuristics.score,
        max_score: snapshot.heuristics.max_score,
        scorecard,
        highlights,
        insight_rows,
        revenue_chart: chart_for(
            snapshot,
            "total_revenue",
            ChartSpec::with_height(HEADLINE_CHART_HEIGHT).filled(),
        ),
        margin_chart: chart_for(
            snapshot,
            "net_profit_margin",
            ChartSpec::with_height(PANEL_CHART_HEIGHT),
        ),
        roa_chart: chart_for(snapshot, "roa", ChartSpec::with_height(PANEL_CHART_HEIGHT)),
        margin_donut: donut_geometry(margin_average.unwrap_or(0.0)),
    };

    debug!(
        rows = view.insight_rows.len(),
        charts = [&view.revenue_chart, &view.margin_chart, &view.roa_chart]
            .iter()
            .filter(|chart| chart.is_some())
            .count(),
        "assembled report view"
    );

    view
}

fn insight_row(snapshot: &ReportSnapshot, item: &MetricBreakdownItem) -> InsightRow {
    let series = snapshot.series(&item.key);
    InsightRow {
        key: item.key.clone(),
        label: if item.label.is_empty() {
            metric_label(&item.key).to_string()
        } else {
            item.label.clone()
        },
        average: series.and_then(stats::average).or(item.average),
        score: item.score,
        max_score: item.max_score,
        level: item.level.clone(),
        tone: Tone::classify(&item.level),
        trend: series
            .map(|series| stats::trend(series, &snapshot.years))
            .unwrap_or_else(Trend::flat),
        sparkline: series.and_then(|series| sparkline_geometry(series, &snapshot.years)),
    }
}

fn highlight(snapshot: &ReportSnapshot, key: &str) -> HighlightCard {
    let series = snapshot.series(key);
    HighlightCard {
        key: key.to_string(),
        label: metric_label(key).to_string(),
        average: series.and_then(|series| {
            stats::average_recent(series, &snapshot.years, RECENT_WINDOW)
        }),
        trend: series
            .map(|series| stats::trend(series, &snapshot.years))
            .unwrap_or_else(Trend::flat),
    }
}

fn chart_for(snapshot: &ReportSnapshot, key: &str, spec: ChartSpec) -> Option<ChartGeometry> {
    snapshot
        .series(key)
        .and_then(|series| line_geometry(series, &snapshot.years, &spec))
}

fn stamp_label(raw: Option<&str>) -> String {
    raw.and_then(|stamp| OffsetDateTime::parse(stamp, &Rfc3339).ok())
        .map(format_stamp_compact)
        .unwrap_or_else(|| "—".to_string())
}

/// Compact display like `2025-09-28 14:30Z`.
fn format_stamp_compact(ts: OffsetDateTime) -> String {
    let date = ts.date();
    let time = ts.time();
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}Z",
        date.year(),
        date.month() as u8,
        date.day(),
        time.hour(),
        time.minute()
    )
}
