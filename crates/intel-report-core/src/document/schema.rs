//! Wire model of a report document.
//!
//! Every member is optional. `null` is read the same as a missing key, so
//! a sparse document from the upstream pipeline never fails to parse just
//! because a field was left out.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize `null` (or a missing key, together with `#[serde(default)]`)
/// as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A complete report document as produced upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportDocument {
    /// Generation timestamp (RFC 3339 or naive ISO 8601)
    #[serde(default)]
    pub generated_at: Option<String>,

    /// Executive summary as free text or pre-split paragraphs
    #[serde(default)]
    pub executive_summary: Option<ExecutiveSummary>,

    /// Actions the reader should take
    #[serde(default)]
    pub recommended_actions: Option<Vec<String>>,

    /// Named report sections
    #[serde(default)]
    pub sections: Option<Sections>,

    /// Run metadata
    #[serde(default)]
    pub metadata: Option<ReportMetadata>,
}

/// The two accepted shapes of an executive summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ExecutiveSummary {
    /// Paragraphs separated by blank lines
    Text(String),

    /// One string per paragraph
    Paragraphs(Vec<String>),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Sections {
    #[serde(default)]
    pub key_themes: Option<Vec<KeyTheme>>,

    #[serde(default)]
    pub delta_insights: Option<Vec<DeltaInsight>>,

    #[serde(default)]
    pub competitive_intel: Option<Vec<CompetitiveMove>>,

    #[serde(default)]
    pub risk_signals: Option<Vec<RiskSignal>>,

    #[serde(default)]
    pub knowledge_graph: Option<KnowledgeGraph>,

    #[serde(default)]
    pub temporal_trends: Option<TemporalTrends>,

    #[serde(default)]
    pub entity_resolution: Option<EntityResolution>,

    #[serde(default)]
    pub communities: Option<CommunitySummary>,

    #[serde(default)]
    pub audit_trails: Option<Vec<AuditTrail>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct KeyTheme {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub significance: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub affected_entities: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DeltaInsight {
    #[serde(default, deserialize_with = "null_as_default")]
    pub theme: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub change_description: String,

    /// `high`, `medium` or `low`; anything else reads as `low`
    #[serde(default)]
    pub urgency_level: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CompetitiveMove {
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,

    #[serde(default)]
    pub move_type: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub strategic_implication: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RiskSignal {
    #[serde(default)]
    pub risk_category: Option<String>,

    #[serde(default)]
    pub likelihood: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub recommended_monitoring: String,
}

/// Entity and relationship derived insights.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct KnowledgeGraph {
    #[serde(default)]
    pub executives: Option<Vec<Executive>>,

    #[serde(default)]
    pub competitive_clusters: Option<Vec<CompetitiveCluster>>,

    #[serde(default)]
    pub multi_hop_insights: Option<Vec<String>>,

    #[serde(default)]
    pub theme_validations: Option<Vec<ThemeValidation>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Executive {
    #[serde(default, deserialize_with = "null_as_default")]
    pub person: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CompetitiveCluster {
    #[serde(default, deserialize_with = "null_as_default")]
    pub company1: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub company2: String,

    /// Number of themes the two companies share
    #[serde(default, deserialize_with = "null_as_default")]
    pub strength: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub shared_themes: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ThemeValidation {
    #[serde(default, deserialize_with = "null_as_default")]
    pub theme: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub is_validated: bool,

    /// Fraction of graph evidence backing the theme, 0.0 - 1.0
    #[serde(default, deserialize_with = "null_as_default")]
    pub graph_support: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TemporalTrends {
    #[serde(default)]
    pub emerging_topics: Option<Vec<TrendEntry>>,

    #[serde(default)]
    pub entity_trends: Option<Vec<TrendEntry>>,

    #[serde(default)]
    pub theme_trends: Option<Vec<TrendEntry>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrendEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// `rising`, `falling`, `stable` or `emerging`
    #[serde(default)]
    pub direction: Option<String>,

    #[serde(default)]
    pub direction_icon: Option<String>,

    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub current_mentions: u64,

    /// Absent is not the same as zero
    #[serde(default)]
    pub previous_mentions: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EntityResolution {
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_entity_count: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub resolved_entity_count: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub entities_merged: u64,

    #[serde(default)]
    pub notable_merges: Option<Vec<EntityMerge>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EntityMerge {
    #[serde(default, deserialize_with = "null_as_default")]
    pub canonical: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub variants: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CommunitySummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_entities: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub community_count: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub clustered_entities: u64,

    #[serde(default)]
    pub communities: Option<Vec<Community>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Community {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub size: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub core_entities: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub members: Vec<String>,

    #[serde(default)]
    pub shared_themes: Option<Vec<String>>,
}

/// Evidence explaining a generated claim.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AuditTrail {
    /// `theme`, `competitive_intel`, `risk` or `other`
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub supporting_entities: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub confidence: f64,

    #[serde(default)]
    pub sources: Option<Vec<SourceLink>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SourceLink {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportMetadata {
    #[serde(default)]
    pub article_count: Option<u64>,

    #[serde(default)]
    pub source_count: Option<u64>,

    #[serde(default)]
    pub model: Option<String>,
}
