//! Risk signals.
//!
//! Each risk gets a category icon and a likelihood label. The raw category
//! string is carried through untouched so surfaces can style unknown
//! categories generically.

use serde::Serialize;

use crate::document::RiskSignal;
use crate::normalize::{default_label, non_empty};
use crate::types::{LegendEntry, SectionKind, SectionView, Tone};

use super::SectionTransformer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Regulatory,
    Market,
    Technology,
    Competitive,
    Legal,
    Operational,
    #[default]
    Other,
}

const CATEGORY_KEYS: &[(&str, RiskCategory)] = &[
    ("regulatory", RiskCategory::Regulatory),
    ("market", RiskCategory::Market),
    ("technology", RiskCategory::Technology),
    ("competitive", RiskCategory::Competitive),
    ("legal", RiskCategory::Legal),
    ("operational", RiskCategory::Operational),
    ("other", RiskCategory::Other),
];

impl RiskCategory {
    pub fn parse(raw: Option<&str>) -> Self {
        default_label(raw, CATEGORY_KEYS, "other")
            .copied()
            .unwrap_or_default()
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RiskCategory::Regulatory => "⚖️",
            RiskCategory::Market => "📊",
            RiskCategory::Technology => "💻",
            RiskCategory::Competitive => "🎯",
            RiskCategory::Legal => "📋",
            RiskCategory::Operational => "⚙️",
            RiskCategory::Other => "⚠️",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Likelihood {
    High,
    Medium,
    #[default]
    Low,
}

const LIKELIHOOD_KEYS: &[(&str, Likelihood)] = &[
    ("high", Likelihood::High),
    ("medium", Likelihood::Medium),
    ("low", Likelihood::Low),
];

impl Likelihood {
    pub fn parse(raw: Option<&str>) -> Self {
        default_label(raw, LIKELIHOOD_KEYS, "low")
            .copied()
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Likelihood::High => "Likely",
            Likelihood::Medium => "Possible",
            Likelihood::Low => "Emerging",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Likelihood::High => Tone::Red,
            Likelihood::Medium => Tone::Amber,
            Likelihood::Low => Tone::Green,
        }
    }
}

/// Legend shown above risk signals.
pub const RISK_LEGEND: &[LegendEntry] = &[
    LegendEntry {
        label: "Likely",
        tone: Tone::Red,
        meaning: Some("probable impact on business"),
    },
    LegendEntry {
        label: "Possible",
        tone: Tone::Amber,
        meaning: Some("monitor for escalation"),
    },
    LegendEntry {
        label: "Emerging",
        tone: Tone::Green,
        meaning: Some("early signal, low probability"),
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskSignalItem {
    /// Raw category as sent, `other` when missing
    pub category: String,
    pub category_kind: RiskCategory,
    pub icon: &'static str,
    pub likelihood: Likelihood,
    pub likelihood_label: &'static str,
    pub tone: Tone,
    pub description: String,
    pub recommended_monitoring: String,
}

pub struct RiskSignalsSection;

impl RiskSignalsSection {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RiskSignalsSection {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionTransformer for RiskSignalsSection {
    type Input = [RiskSignal];
    type Output = Vec<RiskSignalItem>;

    fn kind(&self) -> SectionKind {
        SectionKind::RiskSignals
    }

    fn transform(&self, input: Option<&[RiskSignal]>) -> SectionView<Vec<RiskSignalItem>> {
        let items = input
            .unwrap_or_default()
            .iter()
            .map(|risk| {
                let category = non_empty(risk.risk_category.as_deref()).unwrap_or("other");
                let category_kind = RiskCategory::parse(Some(category));
                let likelihood = Likelihood::parse(risk.likelihood.as_deref());
                RiskSignalItem {
                    category: category.to_string(),
                    category_kind,
                    icon: category_kind.icon(),
                    likelihood,
                    likelihood_label: likelihood.label(),
                    tone: likelihood.tone(),
                    description: risk.description.clone(),
                    recommended_monitoring: risk.recommended_monitoring.clone(),
                }
            })
            .collect();

        SectionView::from_items(items, self.kind().empty_reason())
    }
}
