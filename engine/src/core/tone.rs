//! Qualitative level labels → display tones.
//!
//! The upstream scorer emits free-text levels ("ดีมาก", "ต้องปรับปรุง",
//! "ขนาดใหญ่", ...). Classification is ordered substring matching over that
//! vocabulary, first matching rule wins. English equivalents are accepted so
//! translated labels classify the same way.

use serde::{Deserialize, Serialize};

/// Fixed health taxonomy for display grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Informative,
    Warning,
    Muted,
    Neutral,
}

/// Ordered rule table. "ดี" must stay ahead of the warning row so "ดีมาก"
/// never falls through, and the muted row catches "ไม่มีข้อมูล" before the
/// warning keywords get a chance.
const TONE_RULES: &[(&[&str], Tone)] = &[
    (&["ดี", "good"], Tone::Positive),
    (&["ใหญ่", "กลาง", "large", "medium"], Tone::Informative),
    (&["ไม่มี", "none", "no data"], Tone::Muted),
    (
        &["ต้องปรับปรุง", "ต่ำ", "needs improvement", "low"],
        Tone::Warning,
    ),
];

impl Tone {
    /// Classify a free-text level label. Total and stable: empty and
    /// unrecognized labels are neutral, never an error.
    pub fn classify(level: &str) -> Tone {
        if level.is_empty() {
            return Tone::Neutral;
        }
        let label = level.to_lowercase();
        for (keywords, tone) in TONE_RULES {
            if keywords.iter().any(|keyword| label.contains(keyword)) {
                return *tone;
            }
        }
        Tone::Neutral
    }

    /// CSS modifier for badge styling, e.g. `level-badge positive`.
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Positive => "positive",
            Tone::Informative => "informative",
            Tone::Warning => "warning",
            Tone::Muted => "muted",
            Tone::Neutral => "neutral",
        }
    }
}
