use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Identifier wrapper for catalog entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SystemId(pub String);

impl SystemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SystemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Compliance level advertised by a design system.
///
/// Only the three levels below carry scoring weight. Anything else is kept
/// verbatim for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccessibilityLevel {
    Wcag21Aa,
    Wcag22Aa,
    Wcag21Aaa,
    Other(String),
}

impl AccessibilityLevel {
    pub fn label(&self) -> &str {
        match self {
            Self::Wcag21Aa => "WCAG 2.1 AA",
            Self::Wcag22Aa => "WCAG 2.2 AA",
            Self::Wcag21Aaa => "WCAG 2.1 AAA",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for AccessibilityLevel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "WCAG 2.1 AA" => Self::Wcag21Aa,
            "WCAG 2.2 AA" => Self::Wcag22Aa,
            "WCAG 2.1 AAA" => Self::Wcag21Aaa,
            _ => Self::Other(value),
        }
    }
}

impl From<AccessibilityLevel> for String {
    fn from(value: AccessibilityLevel) -> Self {
        match value {
            AccessibilityLevel::Other(raw) => raw,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for AccessibilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Theming {
    Basic,
    Advanced,
    Other(String),
}

impl Theming {
    pub fn label(&self) -> &str {
        match self {
            Self::Basic => "Basic",
            Self::Advanced => "Advanced",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Theming {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Basic" => Self::Basic,
            "Advanced" => Self::Advanced,
            _ => Self::Other(value),
        }
    }
}

impl From<Theming> for String {
    fn from(value: Theming) -> Self {
        match value {
            Theming::Other(raw) => raw,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for Theming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How well AI coding assistants generate code for a system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiQuality {
    Excellent,
    Good,
    Fair,
}

impl AiQuality {
    pub const fn ordered() -> [Self; 3] {
        [Self::Excellent, Self::Good, Self::Fair]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Excellent => "High accuracy, extensive training data, idiomatic patterns",
            Self::Good => "Mostly correct code, may need occasional corrections",
            Self::Fair => "Works but more niche, requires more manual refinement",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiCodeGen {
    pub supported: bool,
    #[serde(default)]
    pub quality: Option<AiQuality>,
    #[serde(default)]
    pub notes: String,
}

/// One design system entry from `systems.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemRecord {
    pub id: SystemId,
    pub name: String,
    pub maintainer: String,
    pub license: String,
    pub frameworks: Vec<String>,
    pub component_count: u32,
    pub github_stars: u32,
    pub accessibility: AccessibilityLevel,
    pub theming: Theming,
    pub typescript: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cms: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_code_gen: Option<AiCodeGen>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub figma_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penpot_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storybook_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity: Option<String>,
}

fn present(url: &Option<String>) -> bool {
    url.as_deref().is_some_and(|value| !value.trim().is_empty())
}

impl SystemRecord {
    pub fn supports_framework(&self, framework: &str) -> bool {
        self.frameworks.iter().any(|candidate| candidate == framework)
    }

    pub fn ai_quality(&self) -> Option<AiQuality> {
        self.ai_code_gen.as_ref().and_then(|ai| ai.quality)
    }

    pub fn ai_supported(&self) -> bool {
        self.ai_code_gen.as_ref().is_some_and(|ai| ai.supported)
    }

    /// Product-specific systems are tied to a CMS; generic ones are not.
    pub fn is_product_specific(&self) -> bool {
        self.cms
            .as_deref()
            .is_some_and(|cms| !cms.trim().is_empty())
    }

    pub fn has_figma(&self) -> bool {
        present(&self.figma_url)
    }

    pub fn has_penpot(&self) -> bool {
        present(&self.penpot_url)
    }

    pub fn has_storybook(&self) -> bool {
        present(&self.storybook_url)
    }

    pub fn has_docs(&self) -> bool {
        present(&self.docs_url)
    }

    pub fn has_demo(&self) -> bool {
        present(&self.demo_url)
    }

    /// Parses `lastUpdated` as `YYYY-MM-DD` or `YYYY-MM`.
    pub fn last_updated_on(&self) -> Option<NaiveDate> {
        let trimmed = self.last_updated.trim();
        if trimmed.is_empty() {
            return None;
        }

        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d"))
            .ok()
    }
}

/// Per-system component audit loaded from `components/<id>.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentAudit {
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub total_components: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub components: Vec<ComponentCategory>,
}

impl ComponentAudit {
    /// Aggregate component names across every category.
    pub fn component_names(&self) -> impl Iterator<Item = &str> {
        self.components
            .iter()
            .flat_map(|category| category.items.iter())
            .map(|item| item.name.as_str())
    }

    pub fn total(&self) -> u32 {
        self.total_components.unwrap_or_else(|| {
            self.components
                .iter()
                .map(|category| category.items.len() as u32)
                .sum()
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentCategory {
    pub category: String,
    #[serde(default)]
    pub items: Vec<ComponentEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub documented: bool,
    #[serde(default)]
    pub accessibility: Option<String>,
    #[serde(default)]
    pub docs_url: Option<String>,
    #[serde(default)]
    pub storybook_url: Option<String>,
}

impl ComponentEntry {
    pub fn accessibility_label(&self) -> &str {
        match self.accessibility.as_deref() {
            Some(level) if !level.trim().is_empty() => level,
            _ => "Full",
        }
    }

    /// Storybook wins over docs when both exist.
    pub fn link(&self) -> Option<(&'static str, &str)> {
        if present(&self.storybook_url) {
            return self.storybook_url.as_deref().map(|url| ("Storybook", url));
        }
        if present(&self.docs_url) {
            return self.docs_url.as_deref().map(|url| ("Docs", url));
        }
        None
    }
}

/// Failures raised while loading or querying the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("system id {0} appears more than once")]
    DuplicateId(SystemId),
    #[error("system {0} lists no frameworks")]
    EmptyFrameworks(SystemId),
    #[error("system {0} not found")]
    SystemNotFound(SystemId),
}
