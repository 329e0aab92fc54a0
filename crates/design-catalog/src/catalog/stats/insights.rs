use super::views::CatalogStats;
use crate::catalog::domain::AiQuality;
use crate::catalog::format::{format_thousands, percent};

pub(crate) fn generate_insights(stats: &CatalogStats) -> Vec<String> {
    let total = stats.overview.total_systems;
    if total == 0 {
        return Vec::new();
    }

    let mut insights = Vec::new();

    if let Some(leader) = stats.frameworks.first() {
        insights.push(format!(
            "{} dominates with {} systems ({:.1}% support)",
            leader.label, leader.share.count, leader.share.percent
        ));
    }

    insights.push(format!(
        "{} of {} systems work with AI coding tools ({} excellent, {} good quality)",
        stats.ai_supported.count,
        total,
        stats.quality_count(AiQuality::Excellent),
        stats.quality_count(AiQuality::Good)
    ));

    insights.push(format!("{:.1}% support TypeScript", stats.typescript.percent));

    if let Some(top) = stats.top_by_stars.first() {
        insights.push(format!(
            "{} leads with {}+ stars",
            top.name,
            format_thousands(u64::from(top.stars))
        ));
    }

    insights.push(format!(
        "Average system has {:.1} components",
        stats.components.average
    ));

    insights.push(match stats.accessibility.wcag21_aaa.count {
        0 => "No system achieves WCAG AAA compliance".to_string(),
        1 => "1 system achieves WCAG AAA compliance".to_string(),
        count => format!("{count} systems achieve WCAG AAA compliance"),
    });

    let mit = CatalogStats::distribution_count(&stats.licenses, "MIT");
    insights.push(format!(
        "{:.1}% use permissive MIT license",
        percent(mit, total)
    ));

    insights.push(format!(
        "{} generic systems work with any project, {} are product-specific",
        stats.system_types.generic.count, stats.system_types.product_specific.count
    ));

    let average_stars = (stats.overview.total_stars as f64 / total as f64).round() as u64;
    insights.push(format!(
        "Average {} stars per system",
        format_thousands(average_stars)
    ));

    let figma = stats.design_tools.figma.count;
    let storybook = stats.design_tools.storybook.count;
    let leader = if figma > storybook { "Figma" } else { "Storybook" };
    insights.push(format!(
        "{leader} is more popular ({} vs {})",
        figma.max(storybook),
        figma.min(storybook)
    ));

    insights
}
