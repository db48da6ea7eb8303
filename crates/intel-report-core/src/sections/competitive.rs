//! Competitive intelligence: moves made by other companies.

use serde::Serialize;

use crate::document::CompetitiveMove;
use crate::normalize::{default_label, humanize_token, non_empty};
use crate::types::{SectionKind, SectionView, Tone};

use super::SectionTransformer;

/// Kind of competitive move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveType {
    ProductLaunch,
    Acquisition,
    Partnership,
    ExecutiveChange,
    Funding,
    Expansion,
    #[default]
    Other,
}

const MOVE_TYPE_KEYS: &[(&str, MoveType)] = &[
    ("product_launch", MoveType::ProductLaunch),
    ("acquisition", MoveType::Acquisition),
    ("partnership", MoveType::Partnership),
    ("executive_change", MoveType::ExecutiveChange),
    ("funding", MoveType::Funding),
    ("expansion", MoveType::Expansion),
    ("other", MoveType::Other),
];

impl MoveType {
    /// Resolve a raw move type; unknown or missing values read as `Other`.
    pub fn parse(raw: Option<&str>) -> Self {
        default_label(raw, MOVE_TYPE_KEYS, "other")
            .copied()
            .unwrap_or_default()
    }

    pub fn tone(&self) -> Tone {
        match self {
            MoveType::ProductLaunch => Tone::Blue,
            MoveType::Acquisition => Tone::Purple,
            MoveType::Partnership => Tone::Cyan,
            MoveType::ExecutiveChange => Tone::Amber,
            MoveType::Funding => Tone::Green,
            MoveType::Expansion => Tone::Indigo,
            MoveType::Other => Tone::Gray,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitiveMoveItem {
    pub company: String,
    pub move_type: MoveType,
    /// Raw move type with underscores shown as spaces
    pub move_label: String,
    pub tone: Tone,
    pub description: String,
    pub strategic_implication: String,
}

pub struct CompetitiveIntelSection;

impl CompetitiveIntelSection {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CompetitiveIntelSection {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionTransformer for CompetitiveIntelSection {
    type Input = [CompetitiveMove];
    type Output = Vec<CompetitiveMoveItem>;

    fn kind(&self) -> SectionKind {
        SectionKind::CompetitiveIntel
    }

    fn transform(
        &self,
        input: Option<&[CompetitiveMove]>,
    ) -> SectionView<Vec<CompetitiveMoveItem>> {
        let items = input
            .unwrap_or_default()
            .iter()
            .map(|item| {
                let raw = non_empty(item.move_type.as_deref()).unwrap_or("other");
                let move_type = MoveType::parse(Some(raw));
                CompetitiveMoveItem {
                    company: item.company.clone(),
                    move_type,
                    move_label: humanize_token(raw),
                    tone: move_type.tone(),
                    description: item.description.clone(),
                    strategic_implication: item.strategic_implication.clone(),
                }
            })
            .collect();

        SectionView::from_items(items, self.kind().empty_reason())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn competitive_move(move_type: Option<&str>) -> CompetitiveMove {
        CompetitiveMove {
            company: "Acme".into(),
            move_type: move_type.map(str::to_string),
            description: "Launched a model".into(),
            strategic_implication: "Pricing pressure".into(),
        }
    }

    #[test]
    fn test_empty() {
        let view = CompetitiveIntelSection::new().transform(None);
        assert_eq!(view.empty_reason(), Some("No competitive moves detected"));
    }

    #[test]
    fn test_known_move_type() {
        let moves = vec![competitive_move(Some("product_launch"))];
        let view = CompetitiveIntelSection::new().transform(Some(moves.as_slice()));
        let item = &view.ready().unwrap()[0];
        assert_eq!(item.move_type, MoveType::ProductLaunch);
        assert_eq!(item.move_label, "product launch");
        assert_eq!(item.tone, Tone::Blue);
    }

    #[test]
    fn test_unknown_move_type_falls_back_but_keeps_label() {
        let moves = vec![competitive_move(Some("joint_venture_deal")), competitive_move(None)];
        let view = CompetitiveIntelSection::new().transform(Some(moves.as_slice()));
        let items = view.ready().unwrap();

        assert_eq!(items[0].move_type, MoveType::Other);
        assert_eq!(items[0].tone, Tone::Gray);
        assert_eq!(items[0].move_label, "joint venture deal");

        assert_eq!(items[1].move_type, MoveType::Other);
        assert_eq!(items[1].move_label, "other");
    }
}
