use super::insights::generate_insights;
use super::views::{
    AccessibilityCounts, CatalogStats, ComponentSummary, DesignTools, DistributionEntry, Extreme,
    Overview, QualityEntry, Ratio, SystemTypes, TopEntry,
};
use crate::catalog::dataset::Catalog;
use crate::catalog::domain::{AccessibilityLevel, AiQuality, SystemRecord};
use std::collections::HashSet;

pub const TOP_BY_STARS: usize = 10;

/// Label counts in first-seen order.
#[derive(Debug, Default)]
struct Tally {
    entries: Vec<(String, usize)>,
}

impl Tally {
    fn add(&mut self, label: &str) {
        match self.entries.iter_mut().find(|(seen, _)| seen == label) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((label.to_string(), 1)),
        }
    }

    /// Count descending; ties keep first-seen order.
    fn into_distribution(mut self, total: usize) -> Vec<DistributionEntry> {
        self.entries.sort_by(|(_, left), (_, right)| right.cmp(left));
        self.entries
            .into_iter()
            .map(|(label, count)| DistributionEntry {
                label,
                share: Ratio::of(count, total),
            })
            .collect()
    }
}

fn count_where(systems: &[SystemRecord], predicate: impl Fn(&SystemRecord) -> bool) -> usize {
    systems.iter().filter(|system| predicate(system)).count()
}

pub fn catalog_stats(catalog: &Catalog) -> CatalogStats {
    let systems = catalog.systems();
    let total = systems.len();

    let overview = Overview {
        total_systems: total,
        total_components: systems
            .iter()
            .map(|system| u64::from(system.component_count))
            .sum(),
        total_stars: systems
            .iter()
            .map(|system| u64::from(system.github_stars))
            .sum(),
        unique_maintainers: systems
            .iter()
            .map(|system| system.maintainer.as_str())
            .collect::<HashSet<_>>()
            .len(),
    };

    let mut frameworks = Tally::default();
    let mut licenses = Tally::default();
    let mut theming = Tally::default();
    let mut products = Tally::default();
    for system in systems {
        for framework in &system.frameworks {
            frameworks.add(framework);
        }
        licenses.add(&system.license);
        theming.add(system.theming.label());
        if let Some(cms) = system.cms.as_deref().filter(|_| system.is_product_specific()) {
            products.add(cms.trim());
        }
    }

    let product_specific = count_where(systems, SystemRecord::is_product_specific);

    let mut stats = CatalogStats {
        overview,
        ai_supported: Ratio::of(count_where(systems, SystemRecord::ai_supported), total),
        typescript: Ratio::of(count_where(systems, |system| system.typescript), total),
        ai_quality: quality_breakdown(systems),
        frameworks: frameworks.into_distribution(total),
        licenses: licenses.into_distribution(total),
        theming: theming.into_distribution(total),
        accessibility: AccessibilityCounts {
            wcag21_aa: accessibility_ratio(systems, AccessibilityLevel::Wcag21Aa),
            wcag22_aa: accessibility_ratio(systems, AccessibilityLevel::Wcag22Aa),
            wcag21_aaa: accessibility_ratio(systems, AccessibilityLevel::Wcag21Aaa),
        },
        design_tools: DesignTools {
            figma: Ratio::of(count_where(systems, SystemRecord::has_figma), total),
            storybook: Ratio::of(count_where(systems, SystemRecord::has_storybook), total),
            demo: Ratio::of(count_where(systems, SystemRecord::has_demo), total),
        },
        components: component_summary(systems),
        system_types: SystemTypes {
            generic: Ratio::of(total - product_specific, total),
            product_specific: Ratio::of(product_specific, total),
            products: products.into_distribution(total),
        },
        top_by_stars: top_by_stars(systems),
        insights: Vec::new(),
    };

    stats.insights = generate_insights(&stats);
    stats
}

fn accessibility_ratio(systems: &[SystemRecord], level: AccessibilityLevel) -> Ratio {
    Ratio::of(
        count_where(systems, |system| system.accessibility == level),
        systems.len(),
    )
}

fn quality_breakdown(systems: &[SystemRecord]) -> Vec<QualityEntry> {
    let mut counts: Vec<(AiQuality, usize)> = Vec::new();
    for quality in systems.iter().filter_map(SystemRecord::ai_quality) {
        match counts.iter_mut().find(|(seen, _)| *seen == quality) {
            Some((_, count)) => *count += 1,
            None => counts.push((quality, 1)),
        }
    }
    counts.sort_by(|(_, left), (_, right)| right.cmp(left));

    counts
        .into_iter()
        .map(|(quality, count)| QualityEntry {
            quality,
            title: quality.title(),
            description: quality.description(),
            share: Ratio::of(count, systems.len()),
        })
        .collect()
}

fn component_summary(systems: &[SystemRecord]) -> ComponentSummary {
    if systems.is_empty() {
        return ComponentSummary {
            average: 0.0,
            median: 0.0,
            min: None,
            max: None,
        };
    }

    let sum: u64 = systems
        .iter()
        .map(|system| u64::from(system.component_count))
        .sum();
    let average = ((sum as f64 / systems.len() as f64) * 10.0).round() / 10.0;

    let mut counts: Vec<u32> = systems.iter().map(|system| system.component_count).collect();
    counts.sort_unstable();
    let mid = counts.len() / 2;
    let median = if counts.len() % 2 == 0 {
        (f64::from(counts[mid - 1]) + f64::from(counts[mid])) / 2.0
    } else {
        f64::from(counts[mid])
    };

    // First system holding the extreme value wins.
    let extreme = |target: Option<u32>| {
        target.and_then(|count| {
            systems
                .iter()
                .find(|system| system.component_count == count)
                .map(|system| Extreme {
                    count,
                    system: system.name.clone(),
                })
        })
    };

    ComponentSummary {
        average,
        median,
        min: extreme(counts.first().copied()),
        max: extreme(counts.last().copied()),
    }
}

fn top_by_stars(systems: &[SystemRecord]) -> Vec<TopEntry> {
    let mut ranked: Vec<&SystemRecord> = systems.iter().collect();
    ranked.sort_by(|left, right| right.github_stars.cmp(&left.github_stars));
    ranked
        .into_iter()
        .take(TOP_BY_STARS)
        .enumerate()
        .map(|(index, system)| TopEntry::ranked(index + 1, system))
        .collect()
}
