//! # intel-report-core
//!
//! Deterministic transformation of intelligence report documents into a
//! presentation-ready view model.
//!
//! A report document is a loosely structured JSON object produced by an
//! upstream analysis pipeline. Every part of it is optional. This crate
//! turns it into a [`RenderedReport`] in which each display section is
//! either ready content or an explicit `Empty` marker with a reason.
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same document always produces the same view model
//! 2. **Total**: Missing, null or unrecognized data never fails a render
//! 3. **Independent**: Each section transformer reads only its own input
//!
//! ## Example
//!
//! ```rust,ignore
//! use intel_report_core::{render_str, SectionView};
//!
//! let report = render_str(r#"{"executive_summary": "Quiet week."}"#)?;
//!
//! match &report.executive_summary {
//!     SectionView::Ready(paragraphs) => println!("{}", paragraphs.join("\n\n")),
//!     SectionView::Empty { reason } => println!("{}", reason),
//! }
//! ```

pub mod assembler;
pub mod document;
pub mod knowledge_graph;
pub mod metadata;
pub mod normalize;
pub mod sections;
pub mod types;

// Re-export main types at crate root
pub use assembler::{RenderedReport, ReportAssembler};
pub use document::{DocumentError, ReportDocument};
pub use knowledge_graph::{
    ClusterItem, CompanyExecutives, ExecutiveItem, KnowledgeGraphTransformer, KnowledgeGraphView,
    ValidationItem,
};
pub use metadata::{MetadataTransformer, MetadataView};
pub use sections::SectionTransformer;
pub use types::{LegendEntry, SectionKind, SectionView, Tone};

/// Render a parsed document.
///
/// This is the main entry point for report rendering.
pub fn render(document: &ReportDocument) -> RenderedReport {
    ReportAssembler::new().assemble(document)
}

/// Parse and render a JSON document.
///
/// Only a payload that is not a JSON object fails; absent content inside a
/// valid object does not.
pub fn render_str(json: &str) -> Result<RenderedReport, DocumentError> {
    let document = ReportDocument::from_json(json)?;
    Ok(render(&document))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_str_empty_object() {
        let report = render_str("{}").unwrap();
        assert!(report.executive_summary.is_empty());
        assert!(report.audit_trails.is_empty());
        assert_eq!(report.title, "Intelligence Report - N/A - Sovereign Intel");
    }

    #[test]
    fn test_render_str_rejects_malformed() {
        assert!(matches!(render_str("not json"), Err(DocumentError::JsonError(_))));
        assert!(render_str("[1, 2]").is_err());
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let report = render_str(
            r#"{"sections": {
                "competitive_intel": [{"company": "Acme", "move_type": "joint_venture_plus"}],
                "delta_insights": [{"theme": "Chips", "urgency_level": "whenever"}]
            }}"#,
        )
        .unwrap();

        let mv = &report.competitive_intel.ready().unwrap()[0];
        assert_eq!(mv.move_label, "joint venture plus");
        assert_eq!(mv.tone, Tone::Gray);

        let delta = &report.delta_insights.ready().unwrap()[0];
        assert_eq!(delta.label, "Ongoing");
    }
}
