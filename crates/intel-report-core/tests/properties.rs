//! Property-based tests for the report transformers.

use proptest::prelude::*;

use intel_report_core::document::{
    AuditTrail, CompetitiveCluster, KnowledgeGraph, ReportDocument, Sections, TemporalTrends,
    TrendEntry,
};
use intel_report_core::knowledge_graph::{CompetitiveClustersSection, MAX_CLUSTERS};
use intel_report_core::sections::{AuditTrailsSection, TemporalTrendsSection, TrendOrigin};
use intel_report_core::{render, SectionTransformer};

fn cluster_strategy() -> impl Strategy<Value = Vec<CompetitiveCluster>> {
    prop::collection::vec(0u64..6, 0..25).prop_map(|strengths| {
        strengths
            .into_iter()
            .enumerate()
            .map(|(i, strength)| CompetitiveCluster {
                company1: format!("c{i}"),
                company2: "rival".into(),
                strength,
                shared_themes: vec![],
            })
            .collect()
    })
}

fn direction_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("rising".to_string())),
        Just(Some("falling".to_string())),
        Just(Some("stable".to_string())),
        Just(Some("emerging".to_string())),
    ]
}

fn trend_list(prefix: &'static str) -> impl Strategy<Value = Vec<TrendEntry>> {
    prop::collection::vec((direction_strategy(), 0u64..50), 0..8).prop_map(move |entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (direction, mentions))| TrendEntry {
                name: format!("{prefix}{i}"),
                direction,
                current_mentions: mentions,
                ..Default::default()
            })
            .collect()
    })
}

#[test]
fn clusters_capped_sorted_and_stable() {
    proptest!(|(clusters in cluster_strategy())| {
        let view = CompetitiveClustersSection::new().transform(Some(clusters.as_slice()));
        let items = view.ready().cloned().unwrap_or_default();

        prop_assert_eq!(items.len(), clusters.len().min(MAX_CLUSTERS));
        for pair in items.windows(2) {
            prop_assert!(pair[0].strength >= pair[1].strength);
            if pair[0].strength == pair[1].strength {
                // company1 encodes the original index
                let a: usize = pair[0].company1[1..].parse().unwrap();
                let b: usize = pair[1].company1[1..].parse().unwrap();
                prop_assert!(a < b);
            }
        }
    });
}

#[test]
fn trends_capped_and_stable_filtered() {
    proptest!(|(emerging in trend_list("n"), entities in trend_list("e"), themes in trend_list("t"))| {
        let trends = TemporalTrends {
            emerging_topics: Some(emerging.clone()),
            entity_trends: Some(entities),
            theme_trends: Some(themes),
        };
        let view = TemporalTrendsSection::new().transform(Some(&trends));
        let items = view.ready().cloned().unwrap_or_default();

        prop_assert!(items.len() <= 8);

        // emerging topics are never dropped and always lead
        let leading = emerging.len().min(8);
        for (item, entry) in items.iter().zip(emerging.iter()).take(leading) {
            prop_assert_eq!(item.origin, TrendOrigin::EmergingTopic);
            prop_assert_eq!(&item.name, &entry.name);
        }

        for item in items.iter().filter(|t| t.origin != TrendOrigin::EmergingTopic) {
            let source = if item.origin == TrendOrigin::Entity { &trends.entity_trends } else { &trends.theme_trends };
            let entry = source
                .as_ref()
                .and_then(|list| list.iter().find(|e| e.name == item.name))
                .unwrap();
            prop_assert_ne!(entry.direction.as_deref(), Some("stable"));
        }
    });
}

#[test]
fn audit_summaries_never_exceed_limit() {
    proptest!(|(summaries in prop::collection::vec(".{0,80}", 1..10))| {
        let trails: Vec<AuditTrail> = summaries
            .iter()
            .map(|s| AuditTrail {
                kind: Some("theme".into()),
                summary: s.clone(),
                ..Default::default()
            })
            .collect();
        let view = AuditTrailsSection::new().transform(Some(trails.as_slice()));
        let groups = view.ready().cloned().unwrap_or_default();

        for trail in groups.iter().flat_map(|g| g.trails.iter()) {
            let body = trail.summary.strip_suffix("...").unwrap_or(&trail.summary);
            prop_assert!(body.chars().count() <= 40);
        }
    });
}

#[test]
fn rendering_is_deterministic() {
    proptest!(|(clusters in cluster_strategy(), emerging in trend_list("n"), ts in prop::option::of("[0-9T:Z-]{0,25}"))| {
        let doc = ReportDocument {
            generated_at: ts,
            sections: Some(Sections {
                knowledge_graph: Some(KnowledgeGraph {
                    competitive_clusters: Some(clusters),
                    ..Default::default()
                }),
                temporal_trends: Some(TemporalTrends {
                    emerging_topics: Some(emerging),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        prop_assert_eq!(render(&doc), render(&doc));
    });
}
