//! Audit trails: which evidence backs each generated claim.

use serde::Serialize;

use crate::document::AuditTrail;
use crate::normalize::{non_empty, percent, truncate};
use crate::types::{SectionKind, SectionView};

use super::{group_by_first_seen, SectionTransformer};

pub const MAX_TRAILS_PER_GROUP: usize = 3;
pub const SUMMARY_MAX_CHARS: usize = 40;
pub const SOURCE_TITLE_MAX_CHARS: usize = 25;

const TYPE_HEADINGS: &[(&str, &str)] = &[
    ("theme", "Themes"),
    ("competitive_intel", "Competitive Intel"),
    ("risk", "Risks"),
];

fn heading_for(kind: &str) -> String {
    TYPE_HEADINGS
        .iter()
        .find(|(k, _)| *k == kind)
        .map_or(kind, |(_, heading)| *heading)
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditSource {
    pub url: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditTrailItem {
    pub summary: String,
    pub entity_count: usize,
    /// Confidence bar width, 0 - 100
    pub confidence_pct: i64,
    pub sources: Vec<AuditSource>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditGroup {
    /// Raw trail type, `other` when missing
    pub kind: String,
    pub heading: String,
    pub trails: Vec<AuditTrailItem>,
}

pub struct AuditTrailsSection;

impl AuditTrailsSection {
    pub fn new() -> Self {
        Self
    }

    fn trail_item(trail: &AuditTrail) -> AuditTrailItem {
        AuditTrailItem {
            summary: truncate(Some(&trail.summary), SUMMARY_MAX_CHARS),
            entity_count: trail.supporting_entities.len(),
            confidence_pct: percent(trail.confidence),
            sources: trail
                .sources
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(|src| AuditSource {
                    url: src.url.clone(),
                    title: truncate(Some(&src.title), SOURCE_TITLE_MAX_CHARS),
                })
                .collect(),
        }
    }
}

impl Default for AuditTrailsSection {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionTransformer for AuditTrailsSection {
    type Input = [AuditTrail];
    type Output = Vec<AuditGroup>;

    fn kind(&self) -> SectionKind {
        SectionKind::AuditTrails
    }

    fn transform(&self, input: Option<&[AuditTrail]>) -> SectionView<Vec<AuditGroup>> {
        let trails = input.unwrap_or_default();
        let groups = group_by_first_seen(trails, |t| {
            non_empty(t.kind.as_deref()).unwrap_or("other").to_string()
        })
        .into_iter()
        .map(|(kind, members)| AuditGroup {
            heading: heading_for(&kind),
            trails: members
                .into_iter()
                .take(MAX_TRAILS_PER_GROUP)
                .map(Self::trail_item)
                .collect(),
            kind,
        })
        .collect();

        SectionView::from_items(groups, self.kind().empty_reason())
    }
}
