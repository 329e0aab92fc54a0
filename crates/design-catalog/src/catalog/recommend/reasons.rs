use super::answers::{FrameworkChoice, Priority, TypeScriptPreference, WizardAnswers};
use crate::catalog::components::ComponentIndex;
use crate::catalog::domain::{AiQuality, SystemRecord, Theming};
use crate::catalog::format::format_stars;

pub const MAX_REASONS: usize = 6;

/// Explanation trace in scoring-rule order, truncated to [`MAX_REASONS`].
pub(crate) fn explain(
    system: &SystemRecord,
    answers: &WizardAnswers,
    index: &ComponentIndex,
) -> Vec<String> {
    let mut reasons = Vec::new();

    match &answers.framework {
        FrameworkChoice::Any => {
            reasons.push(format!("Supports {}", system.frameworks.join(", ")))
        }
        FrameworkChoice::Named(framework) if system.supports_framework(framework) => {
            reasons.push(format!("Supports {framework}"))
        }
        FrameworkChoice::Named(_) => {}
    }

    if system.typescript && answers.typescript != TypeScriptPreference::No {
        reasons.push("TypeScript support".to_string());
    }

    for priority in &answers.priorities {
        match priority {
            Priority::Speed => {
                if system.ai_quality() == Some(AiQuality::Excellent) {
                    reasons.push("Excellent AI code generation".to_string());
                }
            }
            Priority::Customization => {
                if system.theming == Theming::Advanced {
                    reasons.push("Advanced theming capabilities".to_string());
                }
            }
            Priority::Components => {
                reasons.push(format!("{}+ components", system.component_count));
            }
            Priority::Community => {
                reasons.push(format!("{} GitHub stars", format_stars(system.github_stars)));
            }
            Priority::Accessibility => {
                reasons.push(format!("{} compliant", system.accessibility.label()));
            }
            Priority::Ai => {
                if let Some(quality) = system.ai_quality() {
                    reasons.push(format!("{} AI compatibility", quality.label()));
                }
            }
        }
    }

    if system.has_figma() {
        reasons.push("Figma components available".to_string());
    }
    if system.has_storybook() {
        reasons.push("Storybook documentation".to_string());
    }

    let requested = answers.components.len();
    if requested > 0 {
        let matched = answers
            .components
            .iter()
            .filter(|name| index.has_component(&system.id, name))
            .count();
        if matched == requested {
            reasons.push(format!("Has all {matched} requested components"));
        } else if matched > 0 {
            reasons.push(format!("Has {matched} of {requested} requested components"));
        }
    }

    reasons.truncate(MAX_REASONS);
    reasons
}
