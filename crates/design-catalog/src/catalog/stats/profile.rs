use crate::catalog::dataset::Catalog;
use crate::catalog::domain::{CatalogError, ComponentAudit, SystemRecord};
use chrono::NaiveDate;
use serde::Serialize;

/// 1-based position out of the catalog size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rank {
    pub position: usize,
    pub of: usize,
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} of {}", self.position, self.of)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resources {
    pub docs: bool,
    pub storybook: bool,
    pub figma: bool,
    pub penpot: bool,
    pub demo: bool,
    pub github: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentLink {
    pub label: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentLine {
    pub name: String,
    pub description: String,
    pub documented: bool,
    pub accessibility: String,
    pub link: Option<ComponentLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub category: String,
    pub count: usize,
    pub components: Vec<ComponentLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditSummary {
    pub last_updated: Option<String>,
    pub total_components: u32,
    pub notes: Option<String>,
    pub categories: Vec<CategorySummary>,
}

impl AuditSummary {
    fn from_audit(audit: ComponentAudit) -> Self {
        let total_components = audit.total();
        let categories = audit
            .components
            .into_iter()
            .map(|category| CategorySummary {
                count: category.items.len(),
                components: category
                    .items
                    .iter()
                    .map(|entry| ComponentLine {
                        name: entry.name.clone(),
                        description: entry.description.clone(),
                        documented: entry.documented,
                        accessibility: entry.accessibility_label().to_string(),
                        link: entry.link().map(|(label, url)| ComponentLink {
                            label,
                            url: url.to_string(),
                        }),
                    })
                    .collect(),
                category: category.category,
            })
            .collect();

        Self {
            last_updated: audit.last_updated,
            total_components,
            notes: audit.notes.filter(|notes| !notes.trim().is_empty()),
            categories,
        }
    }
}

/// Detail page for one system, positioned against the rest of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemProfile {
    pub system: SystemRecord,
    pub popularity_rank: Rank,
    pub size_rank: Rank,
    pub stars_vs_average: Option<i64>,
    pub components_vs_average: Option<i64>,
    pub ai_quality: String,
    pub resources: Resources,
    pub license_anchor: String,
    pub days_since_update: Option<i64>,
    pub audit: Option<AuditSummary>,
}

impl SystemProfile {
    pub fn build(
        catalog: &Catalog,
        id: &str,
        audit: Option<ComponentAudit>,
        today: NaiveDate,
    ) -> Result<Self, CatalogError> {
        let system = catalog.require(id)?;
        let systems = catalog.systems();

        let popularity_rank = rank_by(systems, system, |record| record.github_stars);
        let size_rank = rank_by(systems, system, |record| record.component_count);

        let stars: Vec<u32> = systems.iter().map(|record| record.github_stars).collect();
        let components: Vec<u32> = systems.iter().map(|record| record.component_count).collect();

        Ok(Self {
            popularity_rank,
            size_rank,
            stars_vs_average: versus_average(system.github_stars, &stars),
            components_vs_average: versus_average(system.component_count, &components),
            ai_quality: system
                .ai_quality()
                .map(|quality| quality.title().to_string())
                .unwrap_or_else(|| "Not specified".to_string()),
            resources: Resources {
                docs: system.has_docs(),
                storybook: system.has_storybook(),
                figma: system.has_figma(),
                penpot: system.has_penpot(),
                demo: system.has_demo(),
                github: system
                    .github_url
                    .as_deref()
                    .is_some_and(|url| !url.trim().is_empty()),
            },
            license_anchor: license_anchor(&system.license),
            days_since_update: system
                .last_updated_on()
                .map(|updated| (today - updated).num_days()),
            audit: audit.map(AuditSummary::from_audit),
            system: system.clone(),
        })
    }
}

/// Descending by `key`; ties keep dataset order.
fn rank_by<K: Ord>(
    systems: &[SystemRecord],
    target: &SystemRecord,
    key: impl Fn(&SystemRecord) -> K,
) -> Rank {
    let mut ordered: Vec<&SystemRecord> = systems.iter().collect();
    ordered.sort_by(|left, right| key(right).cmp(&key(left)));
    let position = ordered
        .iter()
        .position(|record| record.id == target.id)
        .map(|index| index + 1)
        .unwrap_or(0);
    Rank {
        position,
        of: systems.len(),
    }
}

/// Signed percentage against the integer-rounded catalog average.
fn versus_average(value: u32, all: &[u32]) -> Option<i64> {
    if all.is_empty() {
        return None;
    }
    let sum: u64 = all.iter().map(|count| u64::from(*count)).sum();
    let average = (sum as f64 / all.len() as f64).round();
    if average == 0.0 {
        return None;
    }
    Some(((f64::from(value) / average - 1.0) * 100.0).round() as i64)
}

/// Lowercased license with every whitespace run, leading and trailing ones included, replaced by `-`.
pub fn license_anchor(license: &str) -> String {
    let mut anchor = String::with_capacity(license.len());
    let mut in_run = false;
    for ch in license.to_lowercase().chars() {
        if ch.is_whitespace() {
            if !in_run {
                anchor.push('-');
            }
            in_run = true;
        } else {
            anchor.push(ch);
            in_run = false;
        }
    }
    anchor
}
