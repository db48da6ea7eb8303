//! Knowledge graph views.
//!
//! The knowledge graph is one optional object holding four unrelated lists.
//! Each list gets its own transformer; [`KnowledgeGraphTransformer`] runs
//! all four and resolves every one of them to `Empty` when the graph itself
//! is missing.
//!
//! | Sub-view | Rule |
//! |----------|------|
//! | Executives | grouped by company, first-seen order |
//! | Competitive clusters | strength descending (stable), top 10 |
//! | Multi-hop insights | first 6, original order |
//! | Theme validations | original order, support as percent |

use serde::Serialize;

use crate::document::{CompetitiveCluster, Executive, KnowledgeGraph, ThemeValidation};
use crate::normalize::percent;
use crate::sections::{group_by_first_seen, SectionTransformer};
use crate::types::{SectionKind, SectionView, Tone};

pub const MAX_CLUSTERS: usize = 10;
pub const MAX_MULTI_HOP_INSIGHTS: usize = 6;

/// All four knowledge graph sub-views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KnowledgeGraphView {
    pub executives: SectionView<Vec<CompanyExecutives>>,
    pub competitive_clusters: SectionView<Vec<ClusterItem>>,
    pub multi_hop_insights: SectionView<Vec<String>>,
    pub theme_validations: SectionView<Vec<ValidationItem>>,
}

// ---------------------------------------------------------------------------
// Executives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutiveItem {
    pub person: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyExecutives {
    pub company: String,
    pub executives: Vec<ExecutiveItem>,
}

pub struct ExecutivesSection;

impl ExecutivesSection {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ExecutivesSection {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionTransformer for ExecutivesSection {
    type Input = [Executive];
    type Output = Vec<CompanyExecutives>;

    fn kind(&self) -> SectionKind {
        SectionKind::Executives
    }

    fn transform(&self, input: Option<&[Executive]>) -> SectionView<Vec<CompanyExecutives>> {
        let companies = group_by_first_seen(input.unwrap_or_default(), |e| e.company.clone())
            .into_iter()
            .map(|(company, members)| CompanyExecutives {
                company,
                executives: members
                    .into_iter()
                    .map(|e| ExecutiveItem {
                        person: e.person.clone(),
                        role: e.role.clone(),
                    })
                    .collect(),
            })
            .collect();

        SectionView::from_items(companies, self.kind().empty_reason())
    }
}

// ---------------------------------------------------------------------------
// Competitive clusters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterItem {
    pub company1: String,
    pub company2: String,
    pub strength: u64,
    /// "1 theme" / "3 themes"
    pub strength_label: String,
    pub shared_themes: Vec<String>,
}

pub struct CompetitiveClustersSection;

impl CompetitiveClustersSection {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CompetitiveClustersSection {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionTransformer for CompetitiveClustersSection {
    type Input = [CompetitiveCluster];
    type Output = Vec<ClusterItem>;

    fn kind(&self) -> SectionKind {
        SectionKind::CompetitiveClusters
    }

    fn transform(&self, input: Option<&[CompetitiveCluster]>) -> SectionView<Vec<ClusterItem>> {
        let mut clusters: Vec<&CompetitiveCluster> = input.unwrap_or_default().iter().collect();
        // sort_by is stable: equal strengths keep their document order
        clusters.sort_by(|a, b| b.strength.cmp(&a.strength));

        let items = clusters
            .into_iter()
            .take(MAX_CLUSTERS)
            .map(|c| ClusterItem {
                company1: c.company1.clone(),
                company2: c.company2.clone(),
                strength: c.strength,
                strength_label: format!(
                    "{} {}",
                    c.strength,
                    if c.strength == 1 { "theme" } else { "themes" }
                ),
                shared_themes: c.shared_themes.clone(),
            })
            .collect();

        SectionView::from_items(items, self.kind().empty_reason())
    }
}

// ---------------------------------------------------------------------------
// Multi-hop insights
// ---------------------------------------------------------------------------

pub struct MultiHopInsightsSection;

impl MultiHopInsightsSection {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MultiHopInsightsSection {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionTransformer for MultiHopInsightsSection {
    type Input = [String];
    type Output = Vec<String>;

    fn kind(&self) -> SectionKind {
        SectionKind::MultiHopInsights
    }

    fn transform(&self, input: Option<&[String]>) -> SectionView<Vec<String>> {
        let insights = input
            .unwrap_or_default()
            .iter()
            .take(MAX_MULTI_HOP_INSIGHTS)
            .cloned()
            .collect();
        SectionView::from_items(insights, self.kind().empty_reason())
    }
}

// ---------------------------------------------------------------------------
// Theme validations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationItem {
    pub theme: String,
    pub verified: bool,
    /// "Verified" / "Unverified"
    pub status: &'static str,
    pub tone: Tone,
    /// Support bar width, 0 - 100
    pub support_pct: i64,
}

pub struct ThemeValidationsSection;

impl ThemeValidationsSection {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ThemeValidationsSection {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionTransformer for ThemeValidationsSection {
    type Input = [ThemeValidation];
    type Output = Vec<ValidationItem>;

    fn kind(&self) -> SectionKind {
        SectionKind::ThemeValidations
    }

    fn transform(&self, input: Option<&[ThemeValidation]>) -> SectionView<Vec<ValidationItem>> {
        let items = input
            .unwrap_or_default()
            .iter()
            .map(|v| ValidationItem {
                theme: v.theme.clone(),
                verified: v.is_validated,
                status: if v.is_validated { "Verified" } else { "Unverified" },
                tone: if v.is_validated { Tone::Green } else { Tone::Amber },
                support_pct: percent(v.graph_support),
            })
            .collect();

        SectionView::from_items(items, self.kind().empty_reason())
    }
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Runs the four knowledge graph transformers over one optional graph.
pub struct KnowledgeGraphTransformer {
    executives: ExecutivesSection,
    clusters: CompetitiveClustersSection,
    insights: MultiHopInsightsSection,
    validations: ThemeValidationsSection,
}

impl KnowledgeGraphTransformer {
    pub fn new() -> Self {
        Self {
            executives: ExecutivesSection::new(),
            clusters: CompetitiveClustersSection::new(),
            insights: MultiHopInsightsSection::new(),
            validations: ThemeValidationsSection::new(),
        }
    }

    pub fn transform(&self, graph: Option<&KnowledgeGraph>) -> KnowledgeGraphView {
        let Some(graph) = graph else {
            return KnowledgeGraphView {
                executives: self.executives.empty(),
                competitive_clusters: self.clusters.empty(),
                multi_hop_insights: self.insights.empty(),
                theme_validations: self.validations.empty(),
            };
        };

        KnowledgeGraphView {
            executives: self.executives.transform(graph.executives.as_deref()),
            competitive_clusters: self.clusters.transform(graph.competitive_clusters.as_deref()),
            multi_hop_insights: self.insights.transform(graph.multi_hop_insights.as_deref()),
            theme_validations: self.validations.transform(graph.theme_validations.as_deref()),
        }
    }
}

impl Default for KnowledgeGraphTransformer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cluster(a: &str, strength: u64) -> CompetitiveCluster {
        CompetitiveCluster {
            company1: a.into(),
            company2: "Rival".into(),
            strength,
            shared_themes: vec!["AI".into()],
        }
    }

    #[test]
    fn test_missing_graph_empties_everything() {
        let view = KnowledgeGraphTransformer::new().transform(None);
        assert_eq!(view.executives.empty_reason(), Some("No executives identified"));
        assert_eq!(
            view.competitive_clusters.empty_reason(),
            Some("No competitive clusters identified")
        );
        assert_eq!(
            view.multi_hop_insights.empty_reason(),
            Some("No hidden connections discovered")
        );
        assert_eq!(view.theme_validations.empty_reason(), Some("No theme validation data"));
    }

    #[test]
    fn test_executives_grouped_by_first_seen_company() {
        let execs = vec![
            Executive { person: "Ada".into(), company: "Beta".into(), role: "CEO".into() },
            Executive { person: "Bob".into(), company: "Alpha".into(), role: String::new() },
            Executive { person: "Cy".into(), company: "Beta".into(), role: "CTO".into() },
        ];
        let view = ExecutivesSection::new().transform(Some(execs.as_slice()));
        let companies = view.ready().unwrap();

        assert_eq!(companies.len(), 2);
        assert_eq!(companies[0].company, "Beta");
        let people: Vec<_> = companies[0].executives.iter().map(|e| e.person.as_str()).collect();
        assert_eq!(people, vec!["Ada", "Cy"]);
        assert_eq!(companies[1].executives[0].role, "");
    }

    #[test]
    fn test_clusters_sorted_stable() {
        let clusters = vec![cluster("c3", 3), cluster("c5a", 5), cluster("c5b", 5), cluster("c1", 1)];
        let view = CompetitiveClustersSection::new().transform(Some(clusters.as_slice()));
        let items = view.ready().unwrap();

        let order: Vec<_> = items.iter().map(|c| c.company1.as_str()).collect();
        assert_eq!(order, vec!["c5a", "c5b", "c3", "c1"]);
        assert_eq!(items[3].strength_label, "1 theme");
        assert_eq!(items[0].strength_label, "5 themes");
    }

    #[test]
    fn test_clusters_capped() {
        let clusters: Vec<_> = (0..15).map(|i| cluster(&format!("c{i}"), i)).collect();
        let view = CompetitiveClustersSection::new().transform(Some(clusters.as_slice()));
        let items = view.ready().unwrap();
        assert_eq!(items.len(), MAX_CLUSTERS);
        assert_eq!(items[0].strength, 14);
        assert_eq!(items[9].strength, 5);
    }

    #[test]
    fn test_multi_hop_first_six() {
        let insights: Vec<String> = (0..9).map(|i| format!("insight {i}")).collect();
        let view = MultiHopInsightsSection::new().transform(Some(insights.as_slice()));
        assert_eq!(view.ready().unwrap(), &insights[..6].to_vec());
    }

    #[test]
    fn test_theme_validations() {
        let validations = vec![
            ThemeValidation { theme: "AI".into(), is_validated: true, graph_support: 0.9 },
            ThemeValidation { theme: "Hype".into(), is_validated: false, graph_support: 0.1 },
        ];
        let view = ThemeValidationsSection::new().transform(Some(validations.as_slice()));
        let items = view.ready().unwrap();

        assert_eq!(items[0].status, "Verified");
        assert_eq!(items[0].support_pct, 90);
        assert_eq!(items[1].status, "Unverified");
        assert_eq!(items[1].tone, Tone::Amber);
        assert_eq!(items[1].support_pct, 10);
    }

    #[test]
    fn test_partial_graph() {
        let graph = KnowledgeGraph {
            multi_hop_insights: Some(vec!["A links to C via B".into()]),
            ..Default::default()
        };
        let view = KnowledgeGraphTransformer::new().transform(Some(&graph));
        assert!(view.executives.is_empty());
        assert_eq!(view.multi_hop_insights.len(), 1);
    }
}
