use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use super::browse::{BrowsePage, BrowseView, CompareSelection};
use super::compare::{diff_systems, CompareError, SystemDiff};
use super::components::{load_audit, ComponentIndex, ComponentSource};
use super::dataset::Catalog;
use super::domain::{CatalogError, SystemId, SystemRecord};
use super::recommend::{AnswerError, Recommendation, Recommender, WizardAnswers};
use super::stats::{catalog_stats, CatalogStats, SystemProfile};

/// Read-only facade over the dataset and its component audits.
pub struct CatalogService<S> {
    catalog: Arc<Catalog>,
    components: Arc<S>,
}

impl<S> CatalogService<S>
where
    S: ComponentSource + 'static,
{
    pub fn new(catalog: Arc<Catalog>, components: Arc<S>) -> Self {
        Self {
            catalog,
            components,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn browse(&self, view: &BrowseView) -> BrowsePage {
        let page = view.page(&self.catalog);
        debug!(
            matched = page.matched,
            total = page.total,
            filtered = view.criteria.is_active(),
            "browse view rendered"
        );
        page
    }

    pub fn profile(&self, id: &str, today: NaiveDate) -> Result<SystemProfile, CatalogServiceError> {
        let system = self.catalog.require(id)?;
        let audit = load_audit(self.components.as_ref(), &system.id);
        Ok(SystemProfile::build(&self.catalog, id, audit, today)?)
    }

    pub fn compare(&self, left: &str, right: &str) -> Result<SystemDiff, CatalogServiceError> {
        let left = self.resolve(left)?;
        let right = self.resolve(right)?;

        let left_audit = load_audit(self.components.as_ref(), &left.id);
        let right_audit = load_audit(self.components.as_ref(), &right.id);

        let diff = diff_systems(left, right).with_audits(left_audit.as_ref(), right_audit.as_ref());
        info!(
            left = %left.id,
            right = %right.id,
            changed = diff.changed_fields().count(),
            "systems compared"
        );
        Ok(diff)
    }

    pub fn compare_selection(
        &self,
        selection: &CompareSelection,
    ) -> Result<SystemDiff, CatalogServiceError> {
        let (left, right) = selection.pair().ok_or(CompareError::SelectionSize {
            selected: selection.len(),
        })?;
        self.compare(left.as_str(), right.as_str())
    }

    /// Validates the answers, then ranks the catalog. Component audits are only
    /// read when the answers request components.
    pub fn recommend(
        &self,
        answers: WizardAnswers,
    ) -> Result<(WizardAnswers, Vec<Recommendation<'_>>), CatalogServiceError> {
        let answers = answers.validated()?;
        let index = if answers.components.is_empty() {
            ComponentIndex::default()
        } else {
            ComponentIndex::load(self.components.as_ref(), self.catalog.systems())
        };

        let results = Recommender::new(index).rank(&self.catalog, &answers);
        info!(
            framework = %answers.framework,
            priorities = answers.priorities.len(),
            components = answers.components.len(),
            matches = results.len(),
            "recommendations ranked"
        );
        Ok((answers, results))
    }

    pub fn stats(&self) -> CatalogStats {
        catalog_stats(&self.catalog)
    }

    fn resolve(&self, id: &str) -> Result<&SystemRecord, CompareError> {
        self.catalog
            .get(id)
            .ok_or_else(|| CompareError::UnknownSystem(SystemId::from(id)))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Compare(#[from] CompareError),
    #[error(transparent)]
    Answers(#[from] AnswerError),
}

impl CatalogServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Catalog(CatalogError::SystemNotFound(_))
                | Self::Compare(CompareError::UnknownSystem(_))
        )
    }
}
