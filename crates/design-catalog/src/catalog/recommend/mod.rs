//! Guided wizard and weighted scoring that ranks catalog entries against answers.

mod answers;
mod reasons;
mod rules;
mod wizard;

pub use answers::{
    AnswerError, ExperienceLevel, FrameworkChoice, Priority, TypeScriptPreference, WizardAnswers,
    MAX_PRIORITIES,
};
pub use reasons::MAX_REASONS;
pub use wizard::{Wizard, WizardError, WizardStep};

use crate::catalog::components::ComponentIndex;
use crate::catalog::dataset::Catalog;
use crate::catalog::domain::SystemRecord;
use serde::Serialize;
use tracing::debug;

/// Recommendations returned per request.
pub const TOP_MATCHES: usize = 3;

/// Rule group a score component came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Criterion {
    Framework,
    TypeScript,
    Experience(ExperienceLevel),
    Priority(Priority),
    Components,
}

/// Discrete contribution to a score, so results can be audited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub criterion: Criterion,
    pub points: i32,
    pub note: String,
}

/// Total plus the components that add up to it. `excluded` marks a framework mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreCard {
    pub total: i32,
    pub excluded: bool,
    pub components: Vec<ScoreComponent>,
}

impl ScoreCard {
    pub fn match_percent(&self) -> u8 {
        self.total.clamp(0, 100) as u8
    }

    pub fn is_candidate(&self) -> bool {
        !self.excluded && self.total > 0
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation<'a> {
    pub system: &'a SystemRecord,
    pub score: i32,
    pub match_percent: u8,
    pub reasons: Vec<String>,
    pub breakdown: Vec<ScoreComponent>,
}

/// Stateless scorer over a prepared component index.
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    index: ComponentIndex,
}

impl Recommender {
    pub fn new(index: ComponentIndex) -> Self {
        Self { index }
    }

    pub fn score(&self, system: &SystemRecord, answers: &WizardAnswers) -> ScoreCard {
        rules::score_system(system, answers, &self.index)
    }

    pub fn reasons(&self, system: &SystemRecord, answers: &WizardAnswers) -> Vec<String> {
        reasons::explain(system, answers, &self.index)
    }

    /// Top matches by descending score; equal scores keep dataset order.
    pub fn rank<'a>(&self, catalog: &'a Catalog, answers: &WizardAnswers) -> Vec<Recommendation<'a>> {
        let mut scored: Vec<(&'a SystemRecord, ScoreCard)> = catalog
            .systems()
            .iter()
            .map(|system| (system, self.score(system, answers)))
            .filter(|(_, card)| card.is_candidate())
            .collect();

        scored.sort_by(|(_, left), (_, right)| right.total.cmp(&left.total));
        debug!(
            candidates = scored.len(),
            framework = %answers.framework,
            "scored catalog"
        );

        scored
            .into_iter()
            .take(TOP_MATCHES)
            .map(|(system, card)| Recommendation {
                system,
                score: card.total,
                match_percent: card.match_percent(),
                reasons: self.reasons(system, answers),
                breakdown: card.components,
            })
            .collect()
    }
}
