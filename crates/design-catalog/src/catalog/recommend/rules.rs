use super::answers::{
    ExperienceLevel, FrameworkChoice, Priority, TypeScriptPreference, WizardAnswers,
};
use super::{Criterion, ScoreCard, ScoreComponent};
use crate::catalog::components::ComponentIndex;
use crate::catalog::domain::{AccessibilityLevel, AiQuality, SystemRecord, Theming};

struct Tally {
    components: Vec<ScoreComponent>,
    total: i32,
}

impl Tally {
    fn new() -> Self {
        Self {
            components: Vec::new(),
            total: 0,
        }
    }

    fn award(&mut self, criterion: Criterion, points: i32, note: impl Into<String>) {
        self.components.push(ScoreComponent {
            criterion,
            points,
            note: note.into(),
        });
        self.total += points;
    }

    fn finish(self) -> ScoreCard {
        ScoreCard {
            total: self.total,
            excluded: false,
            components: self.components,
        }
    }
}

pub(crate) fn score_system(
    system: &SystemRecord,
    answers: &WizardAnswers,
    index: &ComponentIndex,
) -> ScoreCard {
    let mut tally = Tally::new();

    match &answers.framework {
        FrameworkChoice::Any => tally.award(Criterion::Framework, 20, "any framework accepted"),
        FrameworkChoice::Named(framework) if system.supports_framework(framework) => {
            tally.award(Criterion::Framework, 40, format!("supports {framework}"))
        }
        FrameworkChoice::Named(framework) => {
            return ScoreCard {
                total: 0,
                excluded: true,
                components: vec![ScoreComponent {
                    criterion: Criterion::Framework,
                    points: 0,
                    note: format!("does not support {framework}"),
                }],
            };
        }
    }

    match (answers.typescript, system.typescript) {
        (TypeScriptPreference::Required, true) => {
            tally.award(Criterion::TypeScript, 15, "TypeScript required and supported")
        }
        (TypeScriptPreference::Required, false) => {
            tally.award(Criterion::TypeScript, -20, "TypeScript required but missing")
        }
        (TypeScriptPreference::Nice, true) => {
            tally.award(Criterion::TypeScript, 10, "TypeScript nice to have and supported")
        }
        _ => {}
    }

    score_experience(system, answers.experience, &mut tally);

    for priority in &answers.priorities {
        score_priority(system, *priority, &mut tally);
    }

    if !answers.components.is_empty() {
        let mut matched = 0;
        for requested in &answers.components {
            if index.has_component(&system.id, requested) {
                matched += 1;
                tally.award(Criterion::Components, 5, format!("has {requested}"));
            }
        }
        if matched == answers.components.len() {
            tally.award(
                Criterion::Components,
                10,
                "all requested components available",
            );
        }
    }

    tally.finish()
}

fn score_experience(system: &SystemRecord, experience: ExperienceLevel, tally: &mut Tally) {
    let criterion = Criterion::Experience(experience);
    let advanced_theming = system.theming == Theming::Advanced;

    match experience {
        ExperienceLevel::Beginner => {
            if system.github_stars > 20_000 {
                tally.award(criterion, 10, "more than 20k stars");
            }
            if system.ai_quality() == Some(AiQuality::Excellent) {
                tally.award(criterion, 8, "excellent AI code generation");
            }
            if system.has_storybook() || system.has_figma() {
                tally.award(criterion, 5, "Storybook or Figma available");
            }
        }
        ExperienceLevel::Intermediate => {
            if system.github_stars > 5_000 {
                tally.award(criterion, 8, "more than 5k stars");
            }
            if advanced_theming {
                tally.award(criterion, 5, "advanced theming");
            }
        }
        ExperienceLevel::Advanced => {
            if advanced_theming {
                tally.award(criterion, 10, "advanced theming");
            }
            if system.component_count > 60 {
                tally.award(criterion, 8, "more than 60 components");
            }
        }
    }
}

fn score_priority(system: &SystemRecord, priority: Priority, tally: &mut Tally) {
    let criterion = Criterion::Priority(priority);

    match priority {
        Priority::Speed => {
            if system.ai_quality() == Some(AiQuality::Excellent) {
                tally.award(criterion, 10, "excellent AI code generation");
            }
            if system.component_count > 50 {
                tally.award(criterion, 5, "more than 50 components");
            }
        }
        Priority::Customization => {
            if system.theming == Theming::Advanced {
                tally.award(criterion, 10, "advanced theming");
            }
            // React without Storybook stands in for "headless".
            if system.supports_framework("React") && !system.has_storybook() {
                tally.award(criterion, 5, "headless React library");
            }
        }
        Priority::Components => {
            let count = system.component_count;
            let points = if count > 70 {
                15
            } else if count > 50 {
                10
            } else if count > 30 {
                5
            } else {
                0
            };
            if points > 0 {
                tally.award(criterion, points, format!("{count} components"));
            }
        }
        Priority::Community => {
            let stars = system.github_stars;
            let points = if stars > 50_000 {
                15
            } else if stars > 20_000 {
                10
            } else if stars > 5_000 {
                5
            } else {
                0
            };
            if points > 0 {
                tally.award(criterion, points, format!("{stars} GitHub stars"));
            }
        }
        Priority::Accessibility => {
            let points = match system.accessibility {
                AccessibilityLevel::Wcag21Aaa => 15,
                AccessibilityLevel::Wcag22Aa => 12,
                AccessibilityLevel::Wcag21Aa => 10,
                AccessibilityLevel::Other(_) => 0,
            };
            if points > 0 {
                tally.award(criterion, points, system.accessibility.label().to_string());
            }
        }
        Priority::Ai => {
            if let Some(quality) = system.ai_quality() {
                let points = match quality {
                    AiQuality::Excellent => 15,
                    AiQuality::Good => 10,
                    AiQuality::Fair => 5,
                };
                tally.award(criterion, points, format!("{} AI quality", quality.label()));
            }
        }
    }
}
