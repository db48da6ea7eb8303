//! Report assembler: runs every section transformer over one document.
//!
//! Fan-out is flat. Each transformer receives only its own slice of the
//! document, so the order below is presentation order and nothing more.

use serde::Serialize;
use tracing::debug;

use crate::document::ReportDocument;
use crate::knowledge_graph::{KnowledgeGraphTransformer, KnowledgeGraphView};
use crate::metadata::{MetadataTransformer, MetadataView};
use crate::sections::{
    AuditGroup, AuditTrailsSection, CommunitiesPanel, CommunitiesSection, CompetitiveIntelSection,
    CompetitiveMoveItem, DeltaInsightItem, DeltaInsightsSection, EntityResolutionPanel,
    EntityResolutionSection, ExecutiveSummarySection, KeyThemeItem, KeyThemesSection,
    RecommendedActionsSection, RiskSignalItem, RiskSignalsSection, SectionTransformer,
    TemporalTrendsSection, TrendItem,
};
use crate::types::{SectionKind, SectionView};

/// The complete view model for one report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedReport {
    pub title: String,
    pub header_date: String,
    pub metadata: Vec<String>,
    pub executive_summary: SectionView<Vec<String>>,
    pub recommended_actions: SectionView<Vec<String>>,
    pub key_themes: SectionView<Vec<KeyThemeItem>>,
    pub delta_insights: SectionView<Vec<DeltaInsightItem>>,
    pub competitive_intel: SectionView<Vec<CompetitiveMoveItem>>,
    pub risk_signals: SectionView<Vec<RiskSignalItem>>,
    pub knowledge_graph: KnowledgeGraphView,
    pub temporal_trends: SectionView<Vec<TrendItem>>,
    pub entity_resolution: SectionView<EntityResolutionPanel>,
    pub communities: SectionView<CommunitiesPanel>,
    pub audit_trails: SectionView<Vec<AuditGroup>>,
}

impl RenderedReport {
    /// Kinds of all sections that resolved to `Empty`, in display order.
    pub fn empty_sections(&self) -> Vec<SectionKind> {
        let checks = [
            (SectionKind::ExecutiveSummary, self.executive_summary.is_empty()),
            (SectionKind::RecommendedActions, self.recommended_actions.is_empty()),
            (SectionKind::KeyThemes, self.key_themes.is_empty()),
            (SectionKind::DeltaInsights, self.delta_insights.is_empty()),
            (SectionKind::CompetitiveIntel, self.competitive_intel.is_empty()),
            (SectionKind::RiskSignals, self.risk_signals.is_empty()),
            (SectionKind::Executives, self.knowledge_graph.executives.is_empty()),
            (
                SectionKind::CompetitiveClusters,
                self.knowledge_graph.competitive_clusters.is_empty(),
            ),
            (
                SectionKind::MultiHopInsights,
                self.knowledge_graph.multi_hop_insights.is_empty(),
            ),
            (
                SectionKind::ThemeValidations,
                self.knowledge_graph.theme_validations.is_empty(),
            ),
            (SectionKind::TemporalTrends, self.temporal_trends.is_empty()),
            (SectionKind::EntityResolution, self.entity_resolution.is_empty()),
            (SectionKind::Communities, self.communities.is_empty()),
            (SectionKind::AuditTrails, self.audit_trails.is_empty()),
        ];

        checks
            .into_iter()
            .filter_map(|(kind, empty)| empty.then_some(kind))
            .collect()
    }

    /// Serialize the view model as pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Runs all transformers and composes their output.
pub struct ReportAssembler {
    summary: ExecutiveSummarySection,
    actions: RecommendedActionsSection,
    themes: KeyThemesSection,
    deltas: DeltaInsightsSection,
    competitive: CompetitiveIntelSection,
    risks: RiskSignalsSection,
    graph: KnowledgeGraphTransformer,
    trends: TemporalTrendsSection,
    resolution: EntityResolutionSection,
    communities: CommunitiesSection,
    audit: AuditTrailsSection,
    metadata: MetadataTransformer,
}

impl ReportAssembler {
    pub fn new() -> Self {
        Self {
            summary: ExecutiveSummarySection::new(),
            actions: RecommendedActionsSection::new(),
            themes: KeyThemesSection::new(),
            deltas: DeltaInsightsSection::new(),
            competitive: CompetitiveIntelSection::new(),
            risks: RiskSignalsSection::new(),
            graph: KnowledgeGraphTransformer::new(),
            trends: TemporalTrendsSection::new(),
            resolution: EntityResolutionSection::new(),
            communities: CommunitiesSection::new(),
            audit: AuditTrailsSection::new(),
            metadata: MetadataTransformer::new(),
        }
    }

    /// Build the view model for `document`.
    ///
    /// Never fails: missing or malformed sections resolve to `Empty`.
    pub fn assemble(&self, document: &ReportDocument) -> RenderedReport {
        let sections = document.sections.as_ref();

        let MetadataView {
            items,
            header_date,
            title,
        } = self
            .metadata
            .transform(document.generated_at.as_deref(), document.metadata.as_ref());

        let report = RenderedReport {
            title,
            header_date,
            metadata: items,
            executive_summary: self.summary.transform(document.executive_summary.as_ref()),
            recommended_actions: self
                .actions
                .transform(document.recommended_actions.as_deref()),
            key_themes: self
                .themes
                .transform(sections.and_then(|s| s.key_themes.as_deref())),
            delta_insights: self
                .deltas
                .transform(sections.and_then(|s| s.delta_insights.as_deref())),
            competitive_intel: self
                .competitive
                .transform(sections.and_then(|s| s.competitive_intel.as_deref())),
            risk_signals: self
                .risks
                .transform(sections.and_then(|s| s.risk_signals.as_deref())),
            knowledge_graph: self
                .graph
                .transform(sections.and_then(|s| s.knowledge_graph.as_ref())),
            temporal_trends: self
                .trends
                .transform(sections.and_then(|s| s.temporal_trends.as_ref())),
            entity_resolution: self
                .resolution
                .transform(sections.and_then(|s| s.entity_resolution.as_ref())),
            communities: self
                .communities
                .transform(sections.and_then(|s| s.communities.as_ref())),
            audit_trails: self
                .audit
                .transform(sections.and_then(|s| s.audit_trails.as_deref())),
        };

        let empty = report.empty_sections();
        for kind in &empty {
            debug!(section = %kind, "section empty");
        }
        debug!(
            title = %report.title,
            empty_sections = empty.len(),
            "report assembled"
        );

        report
    }
}

impl Default for ReportAssembler {
    fn default() -> Self {
        Self::new()
    }
}
