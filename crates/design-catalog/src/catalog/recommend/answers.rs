use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Priorities a user may pick on the fourth wizard step.
pub const MAX_PRIORITIES: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FrameworkChoice {
    #[default]
    Any,
    Named(String),
}

impl FrameworkChoice {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Any => "any",
            Self::Named(name) => name,
        }
    }
}

impl From<String> for FrameworkChoice {
    fn from(value: String) -> Self {
        if value == "any" {
            Self::Any
        } else {
            Self::Named(value)
        }
    }
}

impl From<&str> for FrameworkChoice {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<FrameworkChoice> for String {
    fn from(value: FrameworkChoice) -> Self {
        match value {
            FrameworkChoice::Any => "any".to_string(),
            FrameworkChoice::Named(name) => name,
        }
    }
}

impl fmt::Display for FrameworkChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrameworkChoice {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(value.trim()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeScriptPreference {
    Required,
    #[default]
    Nice,
    No,
}

impl TypeScriptPreference {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Nice => "nice",
            Self::No => "no",
        }
    }
}

impl FromStr for TypeScriptPreference {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "required" => Ok(Self::Required),
            "nice" => Ok(Self::Nice),
            "no" => Ok(Self::No),
            other => Err(format!(
                "unknown typescript preference '{other}' (required, nice, no)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(format!(
                "unknown experience level '{other}' (beginner, intermediate, advanced)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Speed,
    Customization,
    Components,
    Community,
    Accessibility,
    Ai,
}

impl Priority {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Speed,
            Self::Customization,
            Self::Components,
            Self::Community,
            Self::Accessibility,
            Self::Ai,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Speed => "speed",
            Self::Customization => "customization",
            Self::Components => "components",
            Self::Community => "community",
            Self::Accessibility => "accessibility",
            Self::Ai => "ai",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|priority| priority.label() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown priority '{wanted}' (speed, customization, components, community, accessibility, ai)"
                )
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("framework must be \"any\" or a framework name")]
    EmptyFramework,
    #[error("select at least one priority")]
    NoPriorities,
    #[error("select at most 2 priorities, got {count}")]
    TooManyPriorities { count: usize },
    #[error("priority {0} selected more than once")]
    DuplicatePriority(Priority),
}

/// Completed wizard answers, as handed to the scoring engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardAnswers {
    pub framework: FrameworkChoice,
    pub typescript: TypeScriptPreference,
    pub experience: ExperienceLevel,
    pub priorities: Vec<Priority>,
    pub components: Vec<String>,
}

impl WizardAnswers {
    /// Checks answers that did not come through the wizard and drops blank
    /// component names.
    pub fn validated(mut self) -> Result<Self, AnswerError> {
        if let FrameworkChoice::Named(name) = &self.framework {
            if name.trim().is_empty() {
                return Err(AnswerError::EmptyFramework);
            }
        }

        if self.priorities.is_empty() {
            return Err(AnswerError::NoPriorities);
        }
        if self.priorities.len() > MAX_PRIORITIES {
            return Err(AnswerError::TooManyPriorities {
                count: self.priorities.len(),
            });
        }
        let mut seen = HashSet::new();
        for priority in &self.priorities {
            if !seen.insert(*priority) {
                return Err(AnswerError::DuplicatePriority(*priority));
            }
        }

        self.components = self
            .components
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(priorities: Vec<Priority>) -> WizardAnswers {
        WizardAnswers {
            framework: FrameworkChoice::from("React"),
            priorities,
            components: vec![" Button ".to_string(), "  ".to_string()],
            ..WizardAnswers::default()
        }
    }

    #[test]
    fn answers_parse_from_json() {
        let parsed: WizardAnswers = serde_json::from_str(
            r#"{"framework":"any","typescript":"required","experience":"advanced","priorities":["ai","community"]}"#,
        )
        .expect("answers parse");

        assert_eq!(parsed.framework, FrameworkChoice::Any);
        assert_eq!(parsed.typescript, TypeScriptPreference::Required);
        assert_eq!(parsed.experience, ExperienceLevel::Advanced);
        assert_eq!(parsed.priorities, vec![Priority::Ai, Priority::Community]);
        assert!(parsed.components.is_empty());
    }

    #[test]
    fn validation_bounds_priorities() {
        assert_eq!(
            answers(vec![]).validated(),
            Err(AnswerError::NoPriorities)
        );
        assert_eq!(
            answers(vec![Priority::Ai, Priority::Speed, Priority::Community]).validated(),
            Err(AnswerError::TooManyPriorities { count: 3 })
        );
        assert_eq!(
            answers(vec![Priority::Ai, Priority::Ai]).validated(),
            Err(AnswerError::DuplicatePriority(Priority::Ai))
        );
    }

    #[test]
    fn validation_trims_component_names() {
        let validated = answers(vec![Priority::Speed])
            .validated()
            .expect("valid answers");
        assert_eq!(validated.components, vec!["Button".to_string()]);
    }

    #[test]
    fn blank_framework_is_rejected() {
        let mut blank = answers(vec![Priority::Speed]);
        blank.framework = FrameworkChoice::Named("  ".to_string());
        assert_eq!(blank.validated(), Err(AnswerError::EmptyFramework));
    }

    #[test]
    fn priorities_parse_case_insensitively() {
        assert_eq!("AI".parse::<Priority>(), Ok(Priority::Ai));
        assert!("fast".parse::<Priority>().is_err());
    }
}
