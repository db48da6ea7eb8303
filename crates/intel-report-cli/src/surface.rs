//! Plain-text presentation of a rendered report.

use std::fmt::{self, Write};

use intel_report_core::sections::{DELTA_LEGEND, RISK_LEGEND, TREND_LEGEND};
use intel_report_core::{LegendEntry, RenderedReport, SectionKind, SectionView};

/// Render `report` as terminal text.
pub fn render_text(report: &RenderedReport) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_report(&mut out, report).map(|()| out)
}

fn write_report(out: &mut String, report: &RenderedReport) -> fmt::Result {
    writeln!(out, "{}", report.title)?;
    writeln!(out, "{}", report.header_date)?;
    if !report.metadata.is_empty() {
        writeln!(out, "{}", report.metadata.join(" | "))?;
    }

    section(out, SectionKind::ExecutiveSummary, &report.executive_summary, &[], |out, paragraphs| {
        for paragraph in paragraphs {
            writeln!(out, "{}\n", paragraph)?;
        }
        Ok(())
    })?;

    section(out, SectionKind::RecommendedActions, &report.recommended_actions, &[], |out, actions| {
        for (i, action) in actions.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, action)?;
        }
        Ok(())
    })?;

    section(out, SectionKind::KeyThemes, &report.key_themes, &[], |out, themes| {
        for theme in themes {
            writeln!(out, "* {}", theme.title)?;
            if !theme.significance.is_empty() {
                writeln!(out, "  {}", theme.significance)?;
            }
            if !theme.affected_entities.is_empty() {
                writeln!(out, "  Entities: {}", theme.affected_entities.join(", "))?;
            }
        }
        Ok(())
    })?;

    section(out, SectionKind::DeltaInsights, &report.delta_insights, DELTA_LEGEND, |out, deltas| {
        for delta in deltas {
            writeln!(out, "[{}] {}", delta.label, delta.theme)?;
            writeln!(out, "  {}", delta.change_description)?;
        }
        Ok(())
    })?;

    section(out, SectionKind::CompetitiveIntel, &report.competitive_intel, &[], |out, moves| {
        for mv in moves {
            writeln!(out, "{} ({})", mv.company, mv.move_label)?;
            writeln!(out, "  {}", mv.description)?;
            if !mv.strategic_implication.is_empty() {
                writeln!(out, "  Implication: {}", mv.strategic_implication)?;
            }
        }
        Ok(())
    })?;

    section(out, SectionKind::RiskSignals, &report.risk_signals, RISK_LEGEND, |out, risks| {
        for risk in risks {
            writeln!(out, "{} {} [{}]", risk.icon, risk.category, risk.likelihood_label)?;
            writeln!(out, "  {}", risk.description)?;
            if !risk.recommended_monitoring.is_empty() {
                writeln!(out, "  Monitor: {}", risk.recommended_monitoring)?;
            }
        }
        Ok(())
    })?;

    let graph = &report.knowledge_graph;
    section(out, SectionKind::Executives, &graph.executives, &[], |out, companies| {
        for company in companies {
            writeln!(out, "{}", company.company)?;
            for exec in &company.executives {
                if exec.role.is_empty() {
                    writeln!(out, "  - {}", exec.person)?;
                } else {
                    writeln!(out, "  - {}, {}", exec.person, exec.role)?;
                }
            }
        }
        Ok(())
    })?;

    section(out, SectionKind::CompetitiveClusters, &graph.competitive_clusters, &[], |out, clusters| {
        for cluster in clusters {
            writeln!(
                out,
                "{} <-> {} ({})",
                cluster.company1, cluster.company2, cluster.strength_label
            )?;
            if !cluster.shared_themes.is_empty() {
                writeln!(out, "  {}", cluster.shared_themes.join(", "))?;
            }
        }
        Ok(())
    })?;

    section(out, SectionKind::MultiHopInsights, &graph.multi_hop_insights, &[], |out, insights| {
        for insight in insights {
            writeln!(out, "* {}", insight)?;
        }
        Ok(())
    })?;

    section(out, SectionKind::ThemeValidations, &graph.theme_validations, &[], |out, validations| {
        for v in validations {
            writeln!(out, "{} [{}] {}% support", v.theme, v.status, v.support_pct)?;
        }
        Ok(())
    })?;

    section(out, SectionKind::TemporalTrends, &report.temporal_trends, TREND_LEGEND, |out, trends| {
        for trend in trends {
            write!(out, "{} {} [{}] {} mentions", trend.icon, trend.name, trend.badge, trend.current_mentions)?;
            match trend.previous_mentions {
                Some(previous) => writeln!(out, " (was {})", previous)?,
                None => writeln!(out)?,
            }
        }
        Ok(())
    })?;

    section(out, SectionKind::EntityResolution, &report.entity_resolution, &[], |out, panel| {
        writeln!(
            out,
            "{} entities resolved to {} ({} merged)",
            panel.original_entity_count, panel.resolved_entity_count, panel.entities_merged
        )?;
        for merge in &panel.merges {
            write!(out, "  {} <- {}", merge.canonical, merge.variants.join(", "))?;
            match merge.more_variants {
                Some(more) => writeln!(out, " +{} more", more)?,
                None => writeln!(out)?,
            }
        }
        Ok(())
    })?;

    section(out, SectionKind::Communities, &report.communities, &[], |out, panel| {
        writeln!(
            out,
            "{} communities, {} of {} entities clustered",
            panel.community_count, panel.clustered_entities, panel.total_entities
        )?;
        for community in &panel.communities {
            write!(out, "  {} ({}): {}", community.name, community.size, community.core_entities.join(", "))?;
            match community.more_members {
                Some(more) => writeln!(out, " +{} more", more)?,
                None => writeln!(out)?,
            }
            if !community.shared_themes.is_empty() {
                writeln!(out, "    Themes: {}", community.shared_themes.join(", "))?;
            }
        }
        Ok(())
    })?;

    section(out, SectionKind::AuditTrails, &report.audit_trails, &[], |out, groups| {
        for group in groups {
            writeln!(out, "{}", group.heading)?;
            for trail in &group.trails {
                writeln!(
                    out,
                    "  {} ({} entities, {}% confidence)",
                    trail.summary, trail.entity_count, trail.confidence_pct
                )?;
                for source in &trail.sources {
                    writeln!(out, "    {} <{}>", source.title, source.url)?;
                }
            }
        }
        Ok(())
    })
}

fn section<T>(
    out: &mut String,
    kind: SectionKind,
    view: &SectionView<T>,
    legend: &[LegendEntry],
    body: impl FnOnce(&mut String, &T) -> fmt::Result,
) -> fmt::Result {
    writeln!(out, "\n== {} ==", kind)?;
    match view {
        SectionView::Empty { reason } => writeln!(out, "{}", reason),
        SectionView::Ready(content) => {
            if !legend.is_empty() {
                let entries: Vec<String> = legend
                    .iter()
                    .map(|entry| match entry.meaning {
                        Some(meaning) => format!("{}: {}", entry.label, meaning),
                        None => entry.label.to_string(),
                    })
                    .collect();
                writeln!(out, "({})", entries.join("; "))?;
            }
            body(out, content)
        }
    }
}
