//! Entity resolution and entity communities.
//!
//! Both panels show aggregate counts next to a short list. The counts alone
//! are not worth a panel: without merges (or communities) the section is empty.

use serde::Serialize;

use crate::document::{CommunitySummary, EntityResolution};
use crate::types::{SectionKind, SectionView};

use super::SectionTransformer;

pub const MAX_MERGES: usize = 5;
pub const MAX_VARIANTS: usize = 3;
pub const MAX_COMMUNITIES: usize = 4;
pub const MAX_CORE_ENTITIES: usize = 3;
pub const MAX_COMMUNITY_THEMES: usize = 2;

/// Count of items beyond the first `shown`, if any.
fn overflow(total: usize, shown: usize) -> Option<usize> {
    (total > shown).then(|| total - shown)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergeItem {
    pub canonical: String,
    pub variants: Vec<String>,
    /// Variants not listed
    pub more_variants: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityResolutionPanel {
    pub original_entity_count: u64,
    pub resolved_entity_count: u64,
    pub entities_merged: u64,
    pub merges: Vec<MergeItem>,
}

pub struct EntityResolutionSection;

impl EntityResolutionSection {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EntityResolutionSection {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionTransformer for EntityResolutionSection {
    type Input = EntityResolution;
    type Output = EntityResolutionPanel;

    fn kind(&self) -> SectionKind {
        SectionKind::EntityResolution
    }

    fn transform(&self, input: Option<&EntityResolution>) -> SectionView<EntityResolutionPanel> {
        let Some(resolution) = input else {
            return self.empty();
        };
        let merges = resolution.notable_merges.as_deref().unwrap_or_default();
        if merges.is_empty() {
            return self.empty();
        }

        SectionView::Ready(EntityResolutionPanel {
            original_entity_count: resolution.original_entity_count,
            resolved_entity_count: resolution.resolved_entity_count,
            entities_merged: resolution.entities_merged,
            merges: merges
                .iter()
                .take(MAX_MERGES)
                .map(|merge| MergeItem {
                    canonical: merge.canonical.clone(),
                    variants: merge.variants.iter().take(MAX_VARIANTS).cloned().collect(),
                    more_variants: overflow(merge.variants.len(), MAX_VARIANTS),
                })
                .collect(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommunityItem {
    pub name: String,
    pub size: u64,
    pub core_entities: Vec<String>,
    /// Members beyond the first three, counted from the full member list
    pub more_members: Option<usize>,
    pub shared_themes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommunitiesPanel {
    pub total_entities: u64,
    pub community_count: u64,
    pub clustered_entities: u64,
    pub communities: Vec<CommunityItem>,
}

pub struct CommunitiesSection;

impl CommunitiesSection {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CommunitiesSection {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionTransformer for CommunitiesSection {
    type Input = CommunitySummary;
    type Output = CommunitiesPanel;

    fn kind(&self) -> SectionKind {
        SectionKind::Communities
    }

    fn transform(&self, input: Option<&CommunitySummary>) -> SectionView<CommunitiesPanel> {
        let Some(summary) = input else {
            return self.empty();
        };
        let communities = summary.communities.as_deref().unwrap_or_default();
        if communities.is_empty() {
            return self.empty();
        }

        SectionView::Ready(CommunitiesPanel {
            total_entities: summary.total_entities,
            community_count: summary.community_count,
            clustered_entities: summary.clustered_entities,
            communities: communities
                .iter()
                .take(MAX_COMMUNITIES)
                .map(|c| CommunityItem {
                    name: c.name.clone(),
                    size: c.size,
                    core_entities: c.core_entities.iter().take(MAX_CORE_ENTITIES).cloned().collect(),
                    more_members: overflow(c.members.len(), MAX_CORE_ENTITIES),
                    shared_themes: c
                        .shared_themes
                        .as_deref()
                        .unwrap_or_default()
                        .iter()
                        .take(MAX_COMMUNITY_THEMES)
                        .cloned()
                        .collect(),
                })
                .collect(),
        })
    }
}
