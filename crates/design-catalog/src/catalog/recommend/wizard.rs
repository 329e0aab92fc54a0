use super::answers::{
    ExperienceLevel, FrameworkChoice, Priority, TypeScriptPreference, WizardAnswers,
    MAX_PRIORITIES,
};
use serde::Serialize;

/// Question steps; `Results` is terminal until `back` or `start_over`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Framework,
    TypeScript,
    Experience,
    Priorities,
    Components,
    Results,
}

impl WizardStep {
    pub const QUESTIONS: u8 = 5;

    pub const fn number(self) -> u8 {
        match self {
            Self::Framework => 1,
            Self::TypeScript => 2,
            Self::Experience => 3,
            Self::Priorities => 4,
            Self::Components => 5,
            Self::Results => 6,
        }
    }

    const fn next(self) -> Self {
        match self {
            Self::Framework => Self::TypeScript,
            Self::TypeScript => Self::Experience,
            Self::Experience => Self::Priorities,
            Self::Priorities => Self::Components,
            Self::Components | Self::Results => Self::Results,
        }
    }

    const fn previous(self) -> Self {
        match self {
            Self::Framework | Self::TypeScript => Self::Framework,
            Self::Experience => Self::TypeScript,
            Self::Priorities => Self::Experience,
            Self::Components => Self::Priorities,
            Self::Results => Self::Components,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("action expects step {expected:?} but the wizard is at {actual:?}")]
    WrongStep {
        expected: WizardStep,
        actual: WizardStep,
    },
    #[error("step {0:?} needs a selection before moving on")]
    IncompleteStep(WizardStep),
    #[error("at most 2 priorities can be selected")]
    PriorityLimit,
}

/// Step-by-step answer collection. Rejected actions leave the state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wizard {
    step: WizardStep,
    framework: Option<FrameworkChoice>,
    typescript: Option<TypeScriptPreference>,
    experience: Option<ExperienceLevel>,
    priorities: Vec<Priority>,
    components: Vec<String>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Framework,
            framework: None,
            typescript: None,
            experience: None,
            priorities: Vec::new(),
            components: Vec::new(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn priorities(&self) -> &[Priority] {
        &self.priorities
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// `step / 5` as a percentage, capped at 100.
    pub fn progress_percent(&self) -> u8 {
        let percent = u16::from(self.step.number()) * 100 / u16::from(WizardStep::QUESTIONS);
        percent.min(100) as u8
    }

    fn expect_step(&self, expected: WizardStep) -> Result<(), WizardError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::WrongStep {
                expected,
                actual: self.step,
            })
        }
    }

    pub fn choose_framework(&mut self, framework: FrameworkChoice) -> Result<(), WizardError> {
        self.expect_step(WizardStep::Framework)?;
        if framework.as_str().trim().is_empty() {
            return Err(WizardError::IncompleteStep(WizardStep::Framework));
        }
        self.framework = Some(framework);
        self.step = self.step.next();
        Ok(())
    }

    pub fn choose_typescript(
        &mut self,
        preference: TypeScriptPreference,
    ) -> Result<(), WizardError> {
        self.expect_step(WizardStep::TypeScript)?;
        self.typescript = Some(preference);
        self.step = self.step.next();
        Ok(())
    }

    pub fn choose_experience(&mut self, level: ExperienceLevel) -> Result<(), WizardError> {
        self.expect_step(WizardStep::Experience)?;
        self.experience = Some(level);
        self.step = self.step.next();
        Ok(())
    }

    /// Selects or deselects a priority; a third selection is rejected.
    pub fn toggle_priority(&mut self, priority: Priority) -> Result<(), WizardError> {
        self.expect_step(WizardStep::Priorities)?;
        if let Some(position) = self.priorities.iter().position(|p| *p == priority) {
            self.priorities.remove(position);
            return Ok(());
        }
        if self.priorities.len() >= MAX_PRIORITIES {
            return Err(WizardError::PriorityLimit);
        }
        self.priorities.push(priority);
        Ok(())
    }

    /// Manual advance out of the priorities step.
    pub fn next(&mut self) -> Result<(), WizardError> {
        self.expect_step(WizardStep::Priorities)?;
        if self.priorities.is_empty() {
            return Err(WizardError::IncompleteStep(WizardStep::Priorities));
        }
        self.step = self.step.next();
        Ok(())
    }

    pub fn toggle_component(&mut self, name: &str) -> Result<(), WizardError> {
        self.expect_step(WizardStep::Components)?;
        let name = name.trim();
        if name.is_empty() {
            return Ok(());
        }
        if let Some(position) = self.components.iter().position(|c| c == name) {
            self.components.remove(position);
        } else {
            self.components.push(name.to_string());
        }
        Ok(())
    }

    /// Finishes the components step and returns the completed answer set.
    pub fn find(&mut self) -> Result<WizardAnswers, WizardError> {
        self.expect_step(WizardStep::Components)?;
        let answers = self.answers()?;
        self.step = WizardStep::Results;
        Ok(answers)
    }

    fn answers(&self) -> Result<WizardAnswers, WizardError> {
        let framework = self
            .framework
            .clone()
            .ok_or(WizardError::IncompleteStep(WizardStep::Framework))?;
        let typescript = self
            .typescript
            .ok_or(WizardError::IncompleteStep(WizardStep::TypeScript))?;
        let experience = self
            .experience
            .ok_or(WizardError::IncompleteStep(WizardStep::Experience))?;
        if self.priorities.is_empty() {
            return Err(WizardError::IncompleteStep(WizardStep::Priorities));
        }

        Ok(WizardAnswers {
            framework,
            typescript,
            experience,
            priorities: self.priorities.clone(),
            components: self.components.clone(),
        })
    }

    /// One step back; earlier answers are kept. Results return to the components step.
    pub fn back(&mut self) {
        self.step = self.step.previous();
    }

    pub fn start_over(&mut self) {
        *self = Self::new();
    }
}
