//! Key themes and delta insights.

use serde::Serialize;

use crate::document::{DeltaInsight, KeyTheme};
use crate::normalize::{default_label, non_empty};
use crate::types::{LegendEntry, SectionKind, SectionView, Tone};

use super::SectionTransformer;

/// A theme card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyThemeItem {
    pub title: String,
    pub significance: String,
    pub affected_entities: Vec<String>,
}

pub struct KeyThemesSection;

impl KeyThemesSection {
    pub fn new() -> Self {
        Self
    }
}

impl Default for KeyThemesSection {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionTransformer for KeyThemesSection {
    type Input = [KeyTheme];
    type Output = Vec<KeyThemeItem>;

    fn kind(&self) -> SectionKind {
        SectionKind::KeyThemes
    }

    fn transform(&self, input: Option<&[KeyTheme]>) -> SectionView<Vec<KeyThemeItem>> {
        let items = input
            .unwrap_or_default()
            .iter()
            .map(|theme| KeyThemeItem {
                title: theme.title.clone(),
                significance: theme.significance.clone(),
                affected_entities: theme.affected_entities.clone(),
            })
            .collect();

        SectionView::from_items(items, self.kind().empty_reason())
    }
}

/// How urgently a change needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    High,
    Medium,
    #[default]
    Low,
}

const URGENCY_KEYS: &[(&str, Urgency)] = &[
    ("high", Urgency::High),
    ("medium", Urgency::Medium),
    ("low", Urgency::Low),
];

impl Urgency {
    /// Resolve a raw urgency level; unknown or missing values read as `Low`.
    pub fn parse(raw: Option<&str>) -> Self {
        default_label(raw, URGENCY_KEYS, "low")
            .copied()
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::High => "Breaking",
            Urgency::Medium => "New",
            Urgency::Low => "Ongoing",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Urgency::High => Tone::Red,
            Urgency::Medium => Tone::Amber,
            Urgency::Low => Tone::Green,
        }
    }
}

/// Legend shown above delta insights.
pub const DELTA_LEGEND: &[LegendEntry] = &[
    LegendEntry {
        label: "Breaking",
        tone: Tone::Red,
        meaning: Some("immediate attention"),
    },
    LegendEntry {
        label: "New",
        tone: Tone::Amber,
        meaning: Some("recent development"),
    },
    LegendEntry {
        label: "Ongoing",
        tone: Tone::Green,
        meaning: Some("continuing trend"),
    },
];

/// A change card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeltaInsightItem {
    pub theme: String,
    pub change_description: String,
    pub urgency: Urgency,
    /// Raw urgency level as sent, `low` when missing; used as a style key
    pub urgency_key: String,
    pub label: &'static str,
    pub tone: Tone,
}

pub struct DeltaInsightsSection;

impl DeltaInsightsSection {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DeltaInsightsSection {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionTransformer for DeltaInsightsSection {
    type Input = [DeltaInsight];
    type Output = Vec<DeltaInsightItem>;

    fn kind(&self) -> SectionKind {
        SectionKind::DeltaInsights
    }

    fn transform(&self, input: Option<&[DeltaInsight]>) -> SectionView<Vec<DeltaInsightItem>> {
        let items = input
            .unwrap_or_default()
            .iter()
            .map(|insight| {
                let key = non_empty(insight.urgency_level.as_deref()).unwrap_or("low");
                let urgency = Urgency::parse(Some(key));
                DeltaInsightItem {
                    theme: insight.theme.clone(),
                    change_description: insight.change_description.clone(),
                    urgency,
                    urgency_key: key.to_string(),
                    label: urgency.label(),
                    tone: urgency.tone(),
                }
            })
            .collect();

        SectionView::from_items(items, self.kind().empty_reason())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insight(level: Option<&str>) -> DeltaInsight {
        DeltaInsight {
            theme: "Chips".into(),
            change_description: "Export rules tightened".into(),
            urgency_level: level.map(str::to_string),
        }
    }

    #[test]
    fn test_key_themes_absent_and_empty() {
        let section = KeyThemesSection::new();
        assert_eq!(section.transform(None).empty_reason(), Some("No themes identified"));
        assert!(section.transform(Some(&[][..])).is_empty());
    }

    #[test]
    fn test_key_themes_keep_entities() {
        let themes = vec![KeyTheme {
            title: "Sovereign AI".into(),
            significance: "Governments fund local models".into(),
            affected_entities: vec!["Mistral".into(), "EU".into()],
        }];
        let view = KeyThemesSection::new().transform(Some(themes.as_slice()));
        let items = view.ready().unwrap();
        assert_eq!(items[0].title, "Sovereign AI");
        assert_eq!(items[0].affected_entities, vec!["Mistral", "EU"]);
    }

    #[test]
    fn test_delta_urgency_labels() {
        let insights = vec![insight(Some("high")), insight(Some("medium")), insight(None)];
        let view = DeltaInsightsSection::new().transform(Some(insights.as_slice()));
        let labels: Vec<_> = view.ready().unwrap().iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["Breaking", "New", "Ongoing"]);
    }

    #[test]
    fn test_delta_unknown_urgency_keeps_raw_key() {
        let insights = vec![insight(Some("critical"))];
        let view = DeltaInsightsSection::new().transform(Some(insights.as_slice()));
        let item = &view.ready().unwrap()[0];
        assert_eq!(item.urgency, Urgency::Low);
        assert_eq!(item.label, "Ongoing");
        assert_eq!(item.urgency_key, "critical");
        assert_eq!(item.tone, Tone::Green);
    }

    #[test]
    fn test_delta_missing_urgency_key_is_low() {
        let insights = vec![insight(Some(""))];
        let view = DeltaInsightsSection::new().transform(Some(insights.as_slice()));
        assert_eq!(view.ready().unwrap()[0].urgency_key, "low");
    }

    #[test]
    fn test_delta_empty_message() {
        let view = DeltaInsightsSection::new().transform(None);
        assert_eq!(view.empty_reason(), Some("No recent changes detected"));
    }
}
