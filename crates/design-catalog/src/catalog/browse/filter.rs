use crate::catalog::domain::SystemRecord;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Tri-state product filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CmsFilter {
    #[default]
    Any,
    Cms,
    NonCms,
}

impl FromStr for CmsFilter {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "any" => Ok(Self::Any),
            "cms" => Ok(Self::Cms),
            "non-cms" | "noncms" | "generic" => Ok(Self::NonCms),
            other => Err(format!("unknown cms filter '{other}' (any, cms, non-cms)")),
        }
    }
}

/// Conjunction of browse predicates. Empty or default fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    pub search: String,
    pub framework: Option<String>,
    pub license: Option<String>,
    pub maintainer: Option<String>,
    pub cms: CmsFilter,
    pub ai_required: bool,
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

impl FilterCriteria {
    pub fn is_active(&self) -> bool {
        !self.search.is_empty()
            || active(&self.framework).is_some()
            || active(&self.license).is_some()
            || active(&self.maintainer).is_some()
            || self.cms != CmsFilter::Any
            || self.ai_required
    }

    pub fn matches(&self, system: &SystemRecord) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let hit = system.name.to_lowercase().contains(&needle)
                || system.maintainer.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }

        if let Some(framework) = active(&self.framework) {
            if !system.supports_framework(framework) {
                return false;
            }
        }

        if let Some(license) = active(&self.license) {
            if system.license != license {
                return false;
            }
        }

        if let Some(maintainer) = active(&self.maintainer) {
            if system.maintainer != maintainer {
                return false;
            }
        }

        let cms_ok = match self.cms {
            CmsFilter::Any => true,
            CmsFilter::Cms => system.is_product_specific(),
            CmsFilter::NonCms => !system.is_product_specific(),
        };

        cms_ok && (!self.ai_required || system.ai_supported())
    }

    /// Keeps dataset order.
    pub fn apply<'a>(&self, systems: &'a [SystemRecord]) -> Vec<&'a SystemRecord> {
        systems
            .iter()
            .filter(|system| self.matches(system))
            .collect()
    }
}
