mod scorecard;
pub use scorecard::{
    attention_items, overall_percentage, strength_items, summarize, tally, top_items,
    ScorecardSummary, ToneTally, PICK_CAP, TOP_COUNT,
};

mod view;
pub use view::{build_report, metric_label, HighlightCard, InsightRow, ReportView};
