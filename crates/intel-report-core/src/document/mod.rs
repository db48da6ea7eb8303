//! Report document parsing.
//!
//! Documents arrive as loosely-typed JSON. This module owns the wire model
//! and the entry points that turn raw bytes into a [`ReportDocument`].

mod parser;
mod schema;

pub use parser::DocumentError;
pub use schema::{
    AuditTrail, Community, CommunitySummary, CompetitiveCluster, CompetitiveMove, DeltaInsight,
    EntityMerge, EntityResolution, Executive, ExecutiveSummary, KeyTheme, KnowledgeGraph,
    ReportDocument, ReportMetadata, RiskSignal, Sections, SourceLink, TemporalTrends,
    ThemeValidation, TrendEntry,
};
