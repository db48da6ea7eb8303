//! Shared view-model types.

use serde::Serialize;

/// Resolved output of one section: either ready content or an explicit
/// "no data" marker carrying a human-readable reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionView<T> {
    /// Content ready for display
    Ready(T),

    /// Nothing to show, and why
    Empty { reason: String },
}

impl<T> SectionView<T> {
    /// Create an empty marker.
    pub fn empty(reason: impl Into<String>) -> Self {
        Self::Empty {
            reason: reason.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    /// The ready content, if any.
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(content) => Some(content),
            Self::Empty { .. } => None,
        }
    }

    /// The empty reason, if any.
    pub fn empty_reason(&self) -> Option<&str> {
        match self {
            Self::Ready(_) => None,
            Self::Empty { reason } => Some(reason),
        }
    }
}

impl<T> SectionView<Vec<T>> {
    /// Wrap a list of items, resolving to `Empty` when there are none.
    pub fn from_items(items: Vec<T>, reason: &str) -> Self {
        if items.is_empty() {
            Self::empty(reason)
        } else {
            Self::Ready(items)
        }
    }

    /// Number of ready items (zero when empty).
    pub fn len(&self) -> usize {
        self.ready().map_or(0, Vec::len)
    }
}

/// The display sections of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    ExecutiveSummary,
    RecommendedActions,
    KeyThemes,
    DeltaInsights,
    CompetitiveIntel,
    RiskSignals,
    Executives,
    CompetitiveClusters,
    MultiHopInsights,
    ThemeValidations,
    TemporalTrends,
    EntityResolution,
    Communities,
    AuditTrails,
}

impl SectionKind {
    /// Heading shown above the section.
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::ExecutiveSummary => "Executive Summary",
            SectionKind::RecommendedActions => "Recommended Actions",
            SectionKind::KeyThemes => "Key Themes",
            SectionKind::DeltaInsights => "What's Changed",
            SectionKind::CompetitiveIntel => "Competitive Intelligence",
            SectionKind::RiskSignals => "Risk Signals",
            SectionKind::Executives => "Key Executives",
            SectionKind::CompetitiveClusters => "Competitive Clusters",
            SectionKind::MultiHopInsights => "Connecting the Dots",
            SectionKind::ThemeValidations => "Theme Validation",
            SectionKind::TemporalTrends => "Trending Topics",
            SectionKind::EntityResolution => "Entity Resolution",
            SectionKind::Communities => "Entity Clusters",
            SectionKind::AuditTrails => "Audit Trails",
        }
    }

    /// Message used when the section has nothing to show.
    pub fn empty_reason(&self) -> &'static str {
        match self {
            SectionKind::ExecutiveSummary => "No summary available",
            SectionKind::RecommendedActions => "No actions recommended",
            SectionKind::KeyThemes => "No themes identified",
            SectionKind::DeltaInsights => "No recent changes detected",
            SectionKind::CompetitiveIntel => "No competitive moves detected",
            SectionKind::RiskSignals => "No significant risks detected",
            SectionKind::Executives => "No executives identified",
            SectionKind::CompetitiveClusters => "No competitive clusters identified",
            SectionKind::MultiHopInsights => "No hidden connections discovered",
            SectionKind::ThemeValidations => "No theme validation data",
            SectionKind::TemporalTrends => "No trend data available",
            SectionKind::EntityResolution => "No entity merges performed",
            SectionKind::Communities => "No entity clusters detected",
            SectionKind::AuditTrails => "No audit trail data",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Semantic color token for badges, icons and bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Red,
    Amber,
    Green,
    Blue,
    Purple,
    Cyan,
    Indigo,
    Gray,
    Muted,
}

/// One entry of a static section legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub tone: Tone,
    /// Explanation shown after the label; some legends are labels only
    pub meaning: Option<&'static str>,
}
