//! Side-by-side diff of two catalog entries.

mod frameworks;

pub use frameworks::{classify_frameworks, FrameworkEntry, FrameworkPresence};

use crate::catalog::domain::{ComponentAudit, SystemId, SystemRecord};
use crate::catalog::format::{format_stars, format_thousands};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    #[error("comparison needs exactly 2 systems, {selected} selected")]
    SelectionSize { selected: usize },
    #[error("system {0} not found")]
    UnknownSystem(SystemId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DiffField {
    Maintainer,
    License,
    ComponentCount,
    GithubStars,
    Accessibility,
    Theming,
    AiQuality,
    Figma,
    Storybook,
    Typescript,
    Maturity,
}

impl DiffField {
    pub const fn ordered() -> [Self; 11] {
        [
            Self::Maintainer,
            Self::License,
            Self::ComponentCount,
            Self::GithubStars,
            Self::Accessibility,
            Self::Theming,
            Self::AiQuality,
            Self::Figma,
            Self::Storybook,
            Self::Typescript,
            Self::Maturity,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Maintainer => "Maintainer",
            Self::License => "License",
            Self::ComponentCount => "Components",
            Self::GithubStars => "GitHub Stars",
            Self::Accessibility => "Accessibility",
            Self::Theming => "Theming",
            Self::AiQuality => "AI Support",
            Self::Figma => "Figma",
            Self::Storybook => "Storybook",
            Self::Typescript => "TypeScript",
            Self::Maturity => "Maturity",
        }
    }

    /// Display value plus the raw value used for equality.
    fn value(self, record: &SystemRecord) -> (String, String) {
        match self {
            Self::Maintainer => same(record.maintainer.clone()),
            Self::License => same(record.license.clone()),
            Self::ComponentCount => (
                format!("{}+", format_thousands(u64::from(record.component_count))),
                record.component_count.to_string(),
            ),
            Self::GithubStars => (
                format_stars(record.github_stars),
                record.github_stars.to_string(),
            ),
            Self::Accessibility => same(record.accessibility.label().to_string()),
            Self::Theming => same(record.theming.label().to_string()),
            Self::AiQuality => same(
                record
                    .ai_quality()
                    .map(|quality| quality.label().to_string())
                    .unwrap_or_else(|| "N/A".to_string()),
            ),
            Self::Figma => same(yes_no(record.has_figma())),
            Self::Storybook => same(yes_no(record.has_storybook())),
            Self::Typescript => same(yes_no(record.typescript)),
            Self::Maturity => same(
                record
                    .maturity
                    .clone()
                    .unwrap_or_else(|| "N/A".to_string()),
            ),
        }
    }
}

fn same(value: String) -> (String, String) {
    (value.clone(), value)
}

fn yes_no(flag: bool) -> String {
    if flag { "Yes" } else { "No" }.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDiff {
    pub field: DiffField,
    pub label: &'static str,
    pub left: String,
    pub right: String,
    pub changed: bool,
}

/// Component names by side, matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentComparison {
    pub common: Vec<String>,
    pub left_only: Vec<String>,
    pub right_only: Vec<String>,
}

impl ComponentComparison {
    pub fn between(left: &ComponentAudit, right: &ComponentAudit) -> Self {
        let left_names = lowered(left);
        let right_names = lowered(right);

        let mut comparison = Self::default();
        for (key, name) in &left_names {
            if right_names.contains_key(key) {
                comparison.common.push(name.clone());
            } else {
                comparison.left_only.push(name.clone());
            }
        }
        comparison.right_only = right_names
            .iter()
            .filter(|(key, _)| !left_names.contains_key(*key))
            .map(|(_, name)| name.clone())
            .collect();
        comparison
    }
}

fn lowered(audit: &ComponentAudit) -> BTreeMap<String, String> {
    let mut names = BTreeMap::new();
    for name in audit.component_names() {
        names
            .entry(name.to_lowercase())
            .or_insert_with(|| name.to_string());
    }
    names
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemDiff {
    pub left_id: SystemId,
    pub right_id: SystemId,
    pub left_name: String,
    pub right_name: String,
    pub fields: Vec<FieldDiff>,
    pub left_frameworks: Vec<FrameworkEntry>,
    pub right_frameworks: Vec<FrameworkEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<ComponentComparison>,
}

impl SystemDiff {
    pub fn field(&self, field: DiffField) -> Option<&FieldDiff> {
        self.fields.iter().find(|diff| diff.field == field)
    }

    pub fn changed_fields(&self) -> impl Iterator<Item = &FieldDiff> {
        self.fields.iter().filter(|diff| diff.changed)
    }

    /// Attaches the component section only when both audits exist.
    pub fn with_audits(
        mut self,
        left: Option<&ComponentAudit>,
        right: Option<&ComponentAudit>,
    ) -> Self {
        self.components = match (left, right) {
            (Some(left), Some(right)) => Some(ComponentComparison::between(left, right)),
            _ => None,
        };
        self
    }
}

pub fn diff_systems(left: &SystemRecord, right: &SystemRecord) -> SystemDiff {
    let fields = DiffField::ordered()
        .into_iter()
        .map(|field| {
            let (left_display, left_raw) = field.value(left);
            let (right_display, right_raw) = field.value(right);
            FieldDiff {
                field,
                label: field.label(),
                left: left_display,
                right: right_display,
                changed: left_raw != right_raw,
            }
        })
        .collect();

    SystemDiff {
        left_id: left.id.clone(),
        right_id: right.id.clone(),
        left_name: left.name.clone(),
        right_name: right.name.clone(),
        fields,
        left_frameworks: classify_frameworks(&left.frameworks, &right.frameworks),
        right_frameworks: classify_frameworks(&right.frameworks, &left.frameworks),
        components: None,
    }
}

/// Diffs a selection; anything but exactly two records is an error.
pub fn diff_selected(records: &[&SystemRecord]) -> Result<SystemDiff, CompareError> {
    match records {
        [left, right] => Ok(diff_systems(left, right)),
        _ => Err(CompareError::SelectionSize {
            selected: records.len(),
        }),
    }
}
