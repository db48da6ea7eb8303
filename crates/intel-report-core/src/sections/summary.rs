//! Executive summary and recommended actions.

use crate::document::ExecutiveSummary;
use crate::normalize::split_paragraphs;
use crate::types::{SectionKind, SectionView};

use super::SectionTransformer;

/// Normalizes the executive summary into trimmed paragraphs.
pub struct ExecutiveSummarySection;

impl ExecutiveSummarySection {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ExecutiveSummarySection {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionTransformer for ExecutiveSummarySection {
    type Input = ExecutiveSummary;
    type Output = Vec<String>;

    fn kind(&self) -> SectionKind {
        SectionKind::ExecutiveSummary
    }

    fn transform(&self, input: Option<&ExecutiveSummary>) -> SectionView<Vec<String>> {
        let paragraphs = match input {
            None => return self.empty(),
            Some(ExecutiveSummary::Text(text)) => split_paragraphs(text),
            Some(ExecutiveSummary::Paragraphs(list)) => list
                .iter()
                .map(|p| p.trim())
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect(),
        };

        SectionView::from_items(paragraphs, self.kind().empty_reason())
    }
}

/// Passes recommended actions through in order.
pub struct RecommendedActionsSection;

impl RecommendedActionsSection {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RecommendedActionsSection {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionTransformer for RecommendedActionsSection {
    type Input = [String];
    type Output = Vec<String>;

    fn kind(&self) -> SectionKind {
        SectionKind::RecommendedActions
    }

    fn transform(&self, input: Option<&[String]>) -> SectionView<Vec<String>> {
        let actions = input.map(<[String]>::to_vec).unwrap_or_default();
        SectionView::from_items(actions, self.kind().empty_reason())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_absent() {
        let view = ExecutiveSummarySection::new().transform(None);
        assert_eq!(view.empty_reason(), Some("No summary available"));
    }

    #[test]
    fn test_summary_text_split_on_blank_lines() {
        let summary = ExecutiveSummary::Text("Markets moved.\n\nRegulators reacted.\n\n".into());
        let view = ExecutiveSummarySection::new().transform(Some(&summary));
        assert_eq!(
            view.ready().unwrap(),
            &vec!["Markets moved.".to_string(), "Regulators reacted.".to_string()]
        );
    }

    #[test]
    fn test_summary_paragraphs_trimmed_and_filtered() {
        let summary = ExecutiveSummary::Paragraphs(vec![
            "  one ".into(),
            "   ".into(),
            "two".into(),
        ]);
        let view = ExecutiveSummarySection::new().transform(Some(&summary));
        assert_eq!(view.ready().unwrap(), &vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn test_summary_all_blank_is_empty() {
        let summary = ExecutiveSummary::Text(" \n\n ".into());
        let view = ExecutiveSummarySection::new().transform(Some(&summary));
        assert!(view.is_empty());
    }

    #[test]
    fn test_actions() {
        let section = RecommendedActionsSection::new();
        assert_eq!(
            section.transform(Some(&[][..])).empty_reason(),
            Some("No actions recommended")
        );

        let actions = vec!["Brief the board".to_string(), "Watch filings".to_string()];
        let view = section.transform(Some(actions.as_slice()));
        assert_eq!(view.ready().unwrap(), &actions);
    }
}
