use crate::catalog::domain::{AiQuality, SystemId, SystemRecord};
use crate::catalog::format::percent;
use serde::Serialize;

/// `count` out of `total`, with the share rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ratio {
    pub count: usize,
    pub total: usize,
    pub percent: f64,
}

impl Ratio {
    pub fn of(count: usize, total: usize) -> Self {
        Self {
            count,
            total,
            percent: percent(count, total),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_systems: usize,
    pub total_components: u64,
    pub total_stars: u64,
    pub unique_maintainers: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityEntry {
    pub quality: AiQuality,
    pub title: &'static str,
    pub description: &'static str,
    pub share: Ratio,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionEntry {
    pub label: String,
    pub share: Ratio,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityCounts {
    pub wcag21_aa: Ratio,
    pub wcag22_aa: Ratio,
    pub wcag21_aaa: Ratio,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignTools {
    pub figma: Ratio,
    pub storybook: Ratio,
    pub demo: Ratio,
}

/// Component count held by a named system.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extreme {
    pub count: u32,
    pub system: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentSummary {
    pub average: f64,
    pub median: f64,
    pub min: Option<Extreme>,
    pub max: Option<Extreme>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemTypes {
    pub generic: Ratio,
    pub product_specific: Ratio,
    pub products: Vec<DistributionEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopEntry {
    pub rank: usize,
    pub id: SystemId,
    pub name: String,
    pub stars: u32,
}

impl TopEntry {
    pub(crate) fn ranked(rank: usize, system: &SystemRecord) -> Self {
        Self {
            rank,
            id: system.id.clone(),
            name: system.name.clone(),
            stars: system.github_stars,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub overview: Overview,
    pub ai_supported: Ratio,
    pub typescript: Ratio,
    pub ai_quality: Vec<QualityEntry>,
    pub frameworks: Vec<DistributionEntry>,
    pub licenses: Vec<DistributionEntry>,
    pub theming: Vec<DistributionEntry>,
    pub accessibility: AccessibilityCounts,
    pub design_tools: DesignTools,
    pub components: ComponentSummary,
    pub system_types: SystemTypes,
    pub top_by_stars: Vec<TopEntry>,
    pub insights: Vec<String>,
}

impl CatalogStats {
    pub fn distribution_count(entries: &[DistributionEntry], label: &str) -> usize {
        entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.share.count)
            .unwrap_or(0)
    }

    pub fn quality_count(&self, quality: AiQuality) -> usize {
        self.ai_quality
            .iter()
            .find(|entry| entry.quality == quality)
            .map(|entry| entry.share.count)
            .unwrap_or(0)
    }
}
