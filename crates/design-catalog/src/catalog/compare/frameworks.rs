use serde::Serialize;
use std::collections::BTreeSet;

/// Where a framework appears, seen from one side of the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameworkPresence {
    Common,
    Added,
    Removed,
}

impl FrameworkPresence {
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Common => " ",
            Self::Added => "+",
            Self::Removed => "-",
        }
    }

    pub const fn flipped(self) -> Self {
        match self {
            Self::Common => Self::Common,
            Self::Added => Self::Removed,
            Self::Removed => Self::Added,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameworkEntry {
    pub name: String,
    pub presence: FrameworkPresence,
}

/// Union of both framework sets, alphabetical, classified from `own`'s point of view.
pub fn classify_frameworks(own: &[String], other: &[String]) -> Vec<FrameworkEntry> {
    let own_set: BTreeSet<&str> = own.iter().map(String::as_str).collect();
    let other_set: BTreeSet<&str> = other.iter().map(String::as_str).collect();

    own_set
        .union(&other_set)
        .map(|name| {
            let presence = match (own_set.contains(name), other_set.contains(name)) {
                (true, true) => FrameworkPresence::Common,
                (true, false) => FrameworkPresence::Added,
                _ => FrameworkPresence::Removed,
            };
            FrameworkEntry {
                name: (*name).to_string(),
                presence,
            }
        })
        .collect()
}
