//! Section transformers.
//!
//! Each transformer turns one optional slice of the report document into a
//! [`SectionView`]. Transformers are stateless, never read another section's
//! input or output, and may run in any order.
//!
//! | Transformer | Input | Output |
//! |-------------|-------|--------|
//! | [`ExecutiveSummarySection`] | text or paragraphs | paragraphs |
//! | [`RecommendedActionsSection`] | action strings | actions |
//! | [`KeyThemesSection`] | themes | theme cards |
//! | [`DeltaInsightsSection`] | insights | urgency-labelled cards |
//! | [`CompetitiveIntelSection`] | competitor moves | move cards |
//! | [`RiskSignalsSection`] | risks | likelihood-labelled cards |
//! | [`TemporalTrendsSection`] | trend lists | up to 8 trends |
//! | [`EntityResolutionSection`] | merge stats | merge panel |
//! | [`CommunitiesSection`] | community stats | community panel |
//! | [`AuditTrailsSection`] | trails | trails grouped by type |

mod audit;
mod competitive;
mod entities;
mod risk;
mod summary;
mod themes;
mod trends;

pub use audit::{AuditGroup, AuditSource, AuditTrailItem, AuditTrailsSection};
pub use competitive::{CompetitiveIntelSection, CompetitiveMoveItem, MoveType};
pub use entities::{
    CommunitiesPanel, CommunitiesSection, CommunityItem, EntityResolutionPanel,
    EntityResolutionSection, MergeItem,
};
pub use risk::{Likelihood, RiskCategory, RiskSignalItem, RiskSignalsSection, RISK_LEGEND};
pub use summary::{ExecutiveSummarySection, RecommendedActionsSection};
pub use themes::{
    DeltaInsightItem, DeltaInsightsSection, KeyThemeItem, KeyThemesSection, Urgency,
    DELTA_LEGEND,
};
pub use trends::{TemporalTrendsSection, TrendDirection, TrendItem, TrendOrigin, TREND_LEGEND};

use crate::types::{SectionKind, SectionView};

/// A pure transformer for one report section.
pub trait SectionTransformer {
    /// Raw section payload.
    type Input: ?Sized;

    /// Resolved display content.
    type Output;

    /// The section this transformer fills.
    fn kind(&self) -> SectionKind;

    /// Resolve the section. Absent input is not an error.
    fn transform(&self, input: Option<&Self::Input>) -> SectionView<Self::Output>;

    /// The section's standard empty marker.
    fn empty<T>(&self) -> SectionView<T> {
        SectionView::empty(self.kind().empty_reason())
    }
}

/// Group items under a key, keeping groups in first-seen order and items
/// in their original order within each group.
pub(crate) fn group_by_first_seen<'a, T, K, F>(items: &'a [T], key: F) -> Vec<(K, Vec<&'a T>)>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut groups: Vec<(K, Vec<&T>)> = Vec::new();
    for item in items {
        let k = key(item);
        match groups.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, members)) => members.push(item),
            None => groups.push((k, vec![item])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_first_seen_keeps_order() {
        let items = [("b", 1), ("a", 2), ("b", 3), ("c", 4), ("a", 5)];
        let groups = group_by_first_seen(&items, |(k, _)| *k);

        let keys: Vec<_> = groups.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);

        let b: Vec<_> = groups[0].1.iter().map(|(_, v)| *v).collect();
        assert_eq!(b, vec![1, 3]);
    }

    #[test]
    fn test_group_by_first_seen_empty() {
        let items: [(&str, i32); 0] = [];
        assert!(group_by_first_seen(&items, |(k, _)| *k).is_empty());
    }
}
