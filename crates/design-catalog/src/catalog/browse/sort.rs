use crate::catalog::domain::SystemRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Name,
    Maintainer,
    License,
    ComponentCount,
    GithubStars,
    Accessibility,
    Theming,
    LastUpdated,
}

impl SortKey {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Name,
            Self::Maintainer,
            Self::License,
            Self::ComponentCount,
            Self::GithubStars,
            Self::Accessibility,
            Self::Theming,
            Self::LastUpdated,
        ]
    }

    /// Dataset field name the key sorts on.
    pub const fn field(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Maintainer => "maintainer",
            Self::License => "license",
            Self::ComponentCount => "componentCount",
            Self::GithubStars => "githubStars",
            Self::Accessibility => "accessibility",
            Self::Theming => "theming",
            Self::LastUpdated => "lastUpdated",
        }
    }

    fn compare(self, left: &SystemRecord, right: &SystemRecord) -> Ordering {
        match self {
            Self::ComponentCount => left.component_count.cmp(&right.component_count),
            Self::GithubStars => left.github_stars.cmp(&right.github_stars),
            Self::Name => compare_text(&left.name, &right.name),
            Self::Maintainer => compare_text(&left.maintainer, &right.maintainer),
            Self::License => compare_text(&left.license, &right.license),
            Self::Accessibility => {
                compare_text(left.accessibility.label(), right.accessibility.label())
            }
            Self::Theming => compare_text(left.theming.label(), right.theming.label()),
            Self::LastUpdated => compare_text(&left.last_updated, &right.last_updated),
        }
    }
}

fn compare_text(left: &str, right: &str) -> Ordering {
    left.to_lowercase().cmp(&right.to_lowercase())
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        let normalized = wanted.to_ascii_lowercase().replace(['-', '_'], "");
        Self::ordered()
            .into_iter()
            .find(|key| key.field().to_ascii_lowercase() == normalized)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ordered().iter().map(|key| key.field()).collect();
                format!("unknown sort key '{wanted}' (expected one of {})", known.join(", "))
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Asc => "ascending",
            Self::Desc => "descending",
        }
    }
}

/// Current column sort. `key == None` leaves dataset order untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortState {
    pub const fn by(key: SortKey, direction: SortDirection) -> Self {
        Self {
            key: Some(key),
            direction,
        }
    }

    /// Column-header click: same key flips, a new key starts ascending.
    pub fn toggled(self, key: SortKey) -> Self {
        match self.key {
            Some(current) if current == key => Self::by(key, self.direction.flipped()),
            _ => Self::by(key, SortDirection::Asc),
        }
    }

    pub fn apply(&self, rows: &mut [&SystemRecord]) {
        if let Some(key) = self.key {
            sort_systems(rows, key, self.direction);
        }
    }
}

/// Stable sort; equal keys keep their incoming relative order in both directions.
pub fn sort_systems(rows: &mut [&SystemRecord], key: SortKey, direction: SortDirection) {
    rows.sort_by(|left, right| {
        let ordering = key.compare(left, right);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}
