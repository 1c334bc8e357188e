//! Scorecard aggregation over classified breakdown items.
//!
//! Items arrive already paired with their tone; this module only counts,
//! sums, and selects. Caller-supplied order is upstream priority and is
//! preserved everywhere, never re-sorted by score.

use model::MetricBreakdownItem;
use serde::Serialize;

use crate::core::tone::Tone;

/// Display cap for the attention and strength pick lists.
pub const PICK_CAP: usize = 3;

/// How many leading metrics the summary surfaces.
pub const TOP_COUNT: usize = 3;

/// Counts per tone over one breakdown list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ToneTally {
    pub positive: usize,
    pub informative: usize,
    pub warning: usize,
    pub muted: usize,
    pub neutral: usize,
    pub total: usize,
}

impl ToneTally {
    pub fn count(&self, tone: Tone) -> usize {
        match tone {
            Tone::Positive => self.positive,
            Tone::Informative => self.informative,
            Tone::Warning => self.warning,
            Tone::Muted => self.muted,
            Tone::Neutral => self.neutral,
        }
    }

    fn add(&mut self, tone: Tone) {
        match tone {
            Tone::Positive => self.positive += 1,
            Tone::Informative => self.informative += 1,
            Tone::Warning => self.warning += 1,
            Tone::Muted => self.muted += 1,
            Tone::Neutral => self.neutral += 1,
        }
        self.total += 1;
    }
}

/// Everything the scorecard panel needs for one render.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScorecardSummary {
    pub tone_counts: ToneTally,
    /// `100 × Σscore / Σmax_score`, 0 when nothing is scorable.
    pub overall_percentage: f64,
    pub top: Vec<MetricBreakdownItem>,
    pub attention: Vec<MetricBreakdownItem>,
    pub strengths: Vec<MetricBreakdownItem>,
}

pub fn tally(tones: impl IntoIterator<Item = Tone>) -> ToneTally {
    let mut counts = ToneTally::default();
    for tone in tones {
        counts.add(tone);
    }
    counts
}

/// Overall readiness percentage. A zero max-score sum (empty list, or every
/// item unscorable) reads as 0, never a division by zero.
pub fn overall_percentage(items: &[MetricBreakdownItem]) -> f64 {
    let score_sum: f64 = items.iter().map(|item| item.score).sum();
    let max_sum: f64 = items.iter().map(|item| item.max_score).sum();
    if max_sum == 0.0 {
        0.0
    } else {
        100.0 * score_sum / max_sum
    }
}

/// First `n` items in caller order.
pub fn top_items(items: &[MetricBreakdownItem], n: usize) -> Vec<MetricBreakdownItem> {
    items.iter().take(n).cloned().collect()
}

/// Warning-toned items in caller order, capped for display.
pub fn attention_items(
    classified: &[(MetricBreakdownItem, Tone)],
    cap: usize,
) -> Vec<MetricBreakdownItem> {
    pick_by_tone(classified, Tone::Warning, cap)
}

/// Positive-toned items in caller order, capped for display.
pub fn strength_items(
    classified: &[(MetricBreakdownItem, Tone)],
    cap: usize,
) -> Vec<MetricBreakdownItem> {
    pick_by_tone(classified, Tone::Positive, cap)
}

fn pick_by_tone(
    classified: &[(MetricBreakdownItem, Tone)],
    wanted: Tone,
    cap: usize,
) -> Vec<MetricBreakdownItem> {
    classified
        .iter()
        .filter(|(_, tone)| *tone == wanted)
        .take(cap)
        .map(|(item, _)| item.clone())
        .collect()
}

pub fn summarize(classified: &[(MetricBreakdownItem, Tone)]) -> ScorecardSummary {
    let items: Vec<MetricBreakdownItem> =
        classified.iter().map(|(item, _)| item.clone()).collect();
    ScorecardSummary {
        tone_counts: tally(classified.iter().map(|(_, tone)| *tone)),
        overall_percentage: overall_percentage(&items),
        top: top_items(&items, TOP_COUNT),
        attention: attention_items(classified, PICK_CAP),
        strengths: strength_items(classified, PICK_CAP),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(key: &str, score: f64, max_score: f64, level: &str) -> MetricBreakdownItem {
        MetricBreakdownItem {
            key: key.into(),
            label: key.to_uppercase(),
            score,
            max_score,
            level: level.into(),
            average: None,
        }
    }

    fn classify(items: Vec<MetricBreakdownItem>) -> Vec<(MetricBreakdownItem, Tone)> {
        items
            .into_iter()
            .map(|item| {
                let tone = Tone::classify(&item.level);
                (item, tone)
            })
            .collect()
    }

    #[test]
    fn percentage_is_score_over_max() {
        let items = vec![item("roa", 8.0, 10.0, "ดี"), item("roe", 2.0, 10.0, "ต้องปรับปรุง")];
        assert_eq!(overall_percentage(&items), 50.0);
    }

    #[test]
    fn zero_max_sum_reads_zero_percent() {
        assert_eq!(overall_percentage(&[]), 0.0);
        let unscored = vec![item("roa", 0.0, 0.0, "ไม่มีข้อมูล")];
        assert_eq!(overall_percentage(&unscored), 0.0);
    }

    #[test]
    fn tally_counts_every_tone() {
        let classified = classify(vec![
            item("roa", 2.0, 2.0, "ดีมาก"),
            item("roe", 0.0, 2.0, "ต้องปรับปรุง"),
            item("size", 1.0, 1.0, "ขนาดใหญ่"),
            item("cash", 0.0, 0.0, "ไม่มีข้อมูล"),
        ]);
        let counts = tally(classified.iter().map(|(_, tone)| *tone));
        assert_eq!(counts.positive, 1);
        assert_eq!(counts.warning, 1);
        assert_eq!(counts.informative, 1);
        assert_eq!(counts.muted, 1);
        assert_eq!(counts.neutral, 0);
        assert_eq!(counts.total, 4);
    }

    #[test]
    fn selections_preserve_caller_order_and_cap() {
        let classified = classify(vec![
            item("a", 0.0, 2.0, "ต้องปรับปรุง"),
            item("b", 2.0, 2.0, "ดี"),
            item("c", 0.0, 2.0, "ต้องปรับปรุง"),
            item("d", 0.0, 2.0, "ต้องปรับปรุง"),
            item("e", 0.0, 2.0, "ต้องปรับปรุง"),
        ]);

        let attention = attention_items(&classified, PICK_CAP);
        let keys: Vec<&str> = attention.iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "c", "d"]);

        let strengths = strength_items(&classified, PICK_CAP);
        assert_eq!(strengths.len(), 1);
        assert_eq!(strengths[0].key, "b");
    }

    #[test]
    fn top_items_never_resort() {
        let items = vec![
            item("low", 0.0, 2.0, ""),
            item("high", 2.0, 2.0, ""),
            item("mid", 1.0, 2.0, ""),
            item("extra", 1.0, 2.0, ""),
        ];
        let top = top_items(&items, TOP_COUNT);
        let keys: Vec<&str> = top.iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, vec!["low", "high", "mid"]);
    }

    #[test]
    fn summary_on_the_worked_example() {
        // Two items: 8/10 "ดี", 2/10 "ต้องปรับปรุง" → 50%, one positive, one warning.
        let classified = classify(vec![
            item("a", 8.0, 10.0, "ดี"),
            item("b", 2.0, 10.0, "ต้องปรับปรุง"),
        ]);
        let summary = summarize(&classified);
        assert_eq!(summary.overall_percentage, 50.0);
        assert_eq!(summary.tone_counts.positive, 1);
        assert_eq!(summary.tone_counts.warning, 1);
        assert_eq!(summary.tone_counts.total, 2);
        assert_eq!(summary.attention.len(), 1);
        assert_eq!(summary.attention[0].key, "b");
    }
}
