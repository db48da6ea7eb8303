//! Temporal trends: rising, falling and newly emerging topics.
//!
//! Emerging topics always lead, followed by entity trends and then theme
//! trends. Stable entity and theme trends carry no signal and are dropped;
//! emerging topics are never filtered.

use serde::Serialize;

use crate::document::{TemporalTrends, TrendEntry};
use crate::normalize::{default_label, non_empty};
use crate::types::{LegendEntry, SectionKind, SectionView, Tone};

use super::SectionTransformer;

/// Maximum number of trends shown.
pub const MAX_TRENDS: usize = 8;

const NO_SIGNIFICANT_TRENDS: &str = "No significant trends detected";
const DEFAULT_ICON: &str = "→";
const DEFAULT_BADGE: &str = "Topic";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Rising,
    Falling,
    Stable,
    Emerging,
    #[default]
    Unknown,
}

const DIRECTION_KEYS: &[(&str, TrendDirection)] = &[
    ("rising", TrendDirection::Rising),
    ("falling", TrendDirection::Falling),
    ("stable", TrendDirection::Stable),
    ("emerging", TrendDirection::Emerging),
    ("unknown", TrendDirection::Unknown),
];

impl TrendDirection {
    pub fn parse(raw: Option<&str>) -> Self {
        default_label(raw, DIRECTION_KEYS, "unknown")
            .copied()
            .unwrap_or_default()
    }

    pub fn tone(&self) -> Tone {
        match self {
            TrendDirection::Rising => Tone::Green,
            TrendDirection::Falling => Tone::Red,
            TrendDirection::Emerging => Tone::Amber,
            TrendDirection::Stable | TrendDirection::Unknown => Tone::Muted,
        }
    }
}

/// Legend shown above the trend list.
pub const TREND_LEGEND: &[LegendEntry] = &[
    LegendEntry {
        label: "↑ Rising",
        tone: Tone::Green,
        meaning: None,
    },
    LegendEntry {
        label: "↓ Falling",
        tone: Tone::Red,
        meaning: None,
    },
    LegendEntry {
        label: "★ Emerging",
        tone: Tone::Amber,
        meaning: None,
    },
    LegendEntry {
        label: "→ Stable",
        tone: Tone::Muted,
        meaning: None,
    },
];

/// Which list a trend came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendOrigin {
    EmergingTopic,
    Entity,
    Theme,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendItem {
    pub name: String,
    pub origin: TrendOrigin,
    pub direction: TrendDirection,
    pub icon: String,
    pub tone: Tone,
    pub badge: String,
    pub current_mentions: u64,
    /// Only present when the document carried a previous count
    pub previous_mentions: Option<u64>,
}

impl TrendItem {
    fn from_entry(entry: &TrendEntry, origin: TrendOrigin) -> Self {
        let direction = TrendDirection::parse(entry.direction.as_deref());
        Self {
            name: entry.name.clone(),
            origin,
            direction,
            icon: non_empty(entry.direction_icon.as_deref())
                .unwrap_or(DEFAULT_ICON)
                .to_string(),
            tone: direction.tone(),
            badge: non_empty(entry.kind.as_deref())
                .unwrap_or(DEFAULT_BADGE)
                .to_string(),
            current_mentions: entry.current_mentions,
            previous_mentions: entry.previous_mentions,
        }
    }
}

pub struct TemporalTrendsSection;

impl TemporalTrendsSection {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TemporalTrendsSection {
    fn default() -> Self {
        Self::new()
    }
}

fn is_moving(entry: &&TrendEntry) -> bool {
    entry.direction.as_deref() != Some("stable")
}

impl SectionTransformer for TemporalTrendsSection {
    type Input = TemporalTrends;
    type Output = Vec<TrendItem>;

    fn kind(&self) -> SectionKind {
        SectionKind::TemporalTrends
    }

    fn transform(&self, input: Option<&TemporalTrends>) -> SectionView<Vec<TrendItem>> {
        let Some(trends) = input else {
            return self.empty();
        };

        let emerging = trends
            .emerging_topics
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|t| TrendItem::from_entry(t, TrendOrigin::EmergingTopic));
        let entities = trends
            .entity_trends
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter(is_moving)
            .map(|t| TrendItem::from_entry(t, TrendOrigin::Entity));
        let themes = trends
            .theme_trends
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter(is_moving)
            .map(|t| TrendItem::from_entry(t, TrendOrigin::Theme));

        let items: Vec<TrendItem> = emerging.chain(entities).chain(themes).take(MAX_TRENDS).collect();

        SectionView::from_items(items, NO_SIGNIFICANT_TRENDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, direction: &str) -> TrendEntry {
        TrendEntry {
            name: name.into(),
            direction: Some(direction.into()),
            direction_icon: None,
            kind: None,
            current_mentions: 4,
            previous_mentions: None,
        }
    }

    #[test]
    fn test_absent_vs_insignificant() {
        let section = TemporalTrendsSection::new();
        assert_eq!(section.transform(None).empty_reason(), Some("No trend data available"));

        let only_stable = TemporalTrends {
            emerging_topics: None,
            entity_trends: Some(vec![entry("a", "stable")]),
            theme_trends: Some(vec![entry("b", "stable")]),
        };
        assert_eq!(
            section.transform(Some(&only_stable)).empty_reason(),
            Some("No significant trends detected")
        );
    }

    #[test]
    fn test_order_and_stable_filter() {
        let trends = TemporalTrends {
            emerging_topics: Some(vec![entry("new", "stable")]),
            entity_trends: Some(vec![entry("e-up", "rising"), entry("e-flat", "stable")]),
            theme_trends: Some(vec![entry("t-down", "falling")]),
        };
        let view = TemporalTrendsSection::new().transform(Some(&trends));
        let names: Vec<_> = view.ready().unwrap().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["new", "e-up", "t-down"]);
    }

    #[test]
    fn test_capped_at_eight() {
        let trends = TemporalTrends {
            emerging_topics: Some((0..5).map(|i| entry(&format!("n{i}"), "emerging")).collect()),
            entity_trends: Some((0..5).map(|i| entry(&format!("e{i}"), "rising")).collect()),
            theme_trends: None,
        };
        let view = TemporalTrendsSection::new().transform(Some(&trends));
        let items = view.ready().unwrap();
        assert_eq!(items.len(), MAX_TRENDS);
        assert_eq!(items[5].name, "e0");
        assert_eq!(items[7].name, "e2");
    }

    #[test]
    fn test_defaults_and_previous_mentions() {
        let mut with_prev = entry("x", "rising");
        with_prev.previous_mentions = Some(0);
        with_prev.direction_icon = Some("↑".into());
        with_prev.kind = Some("Entity".into());
        let mut odd = entry("y", "sideways");
        odd.direction_icon = Some(String::new());

        let trends = TemporalTrends {
            emerging_topics: Some(vec![with_prev, odd]),
            ..Default::default()
        };
        let view = TemporalTrendsSection::new().transform(Some(&trends));
        let items = view.ready().unwrap();

        assert_eq!(items[0].previous_mentions, Some(0));
        assert_eq!(items[0].icon, "↑");
        assert_eq!(items[0].badge, "Entity");
        assert_eq!(items[0].tone, Tone::Green);

        assert_eq!(items[1].previous_mentions, None);
        assert_eq!(items[1].icon, "→");
        assert_eq!(items[1].badge, "Topic");
        assert_eq!(items[1].direction, TrendDirection::Unknown);
        assert_eq!(items[1].tone, Tone::Muted);
    }

    #[test]
    fn test_null_previous_mentions_reads_as_absent() {
        let trends: TemporalTrends = serde_json::from_str(
            r#"{"emerging_topics": [
                {"name": "a", "current_mentions": 3, "previous_mentions": null},
                {"name": "b", "current_mentions": 3, "previous_mentions": 0}
            ]}"#,
        )
        .unwrap();
        let view = TemporalTrendsSection::new().transform(Some(&trends));
        let items = view.ready().unwrap();

        assert_eq!(items[0].previous_mentions, None);
        assert_eq!(items[1].previous_mentions, Some(0));
    }

    #[test]
    fn test_legend_is_labels_only() {
        assert_eq!(TREND_LEGEND.len(), 4);
        assert!(TREND_LEGEND.iter().all(|entry| entry.meaning.is_none()));
    }
}
