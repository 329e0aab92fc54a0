use super::filter::FilterCriteria;
use super::selection::{CompareSelection, SelectionError};
use super::sort::{SortKey, SortState};
use crate::catalog::dataset::{Catalog, FilterOptions};
use crate::catalog::domain::{AiQuality, SystemId, SystemRecord};
use serde::{Deserialize, Serialize};

/// Browse table state. Every transition returns a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowseView {
    pub criteria: FilterCriteria,
    pub sort: SortState,
    pub selection: CompareSelection,
}

impl BrowseView {
    pub fn with_criteria(&self, criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            ..self.clone()
        }
    }

    /// Header click on `key`.
    pub fn sorted_by(&self, key: SortKey) -> Self {
        Self {
            sort: self.sort.toggled(key),
            ..self.clone()
        }
    }

    pub fn with_sort(&self, sort: SortState) -> Self {
        Self {
            sort,
            ..self.clone()
        }
    }

    pub fn with_checked(&self, id: SystemId) -> Result<Self, SelectionError> {
        let mut selection = self.selection.clone();
        selection.check(id)?;
        Ok(Self {
            selection,
            ..self.clone()
        })
    }

    pub fn with_unchecked(&self, id: &SystemId) -> Self {
        let mut selection = self.selection.clone();
        selection.uncheck(id);
        Self {
            selection,
            ..self.clone()
        }
    }

    /// Filtered rows with the current sort re-applied.
    pub fn rows<'a>(&self, catalog: &'a Catalog) -> Vec<&'a SystemRecord> {
        let mut rows = self.criteria.apply(catalog.systems());
        self.sort.apply(&mut rows);
        rows
    }

    pub fn page(&self, catalog: &Catalog) -> BrowsePage {
        let rows: Vec<SystemRow> = self
            .rows(catalog)
            .into_iter()
            .map(|record| SystemRow::from_record(record, self.selection.contains(&record.id)))
            .collect();

        BrowsePage {
            total: catalog.len(),
            matched: rows.len(),
            rows,
            options: catalog.filter_options(),
            sort: self.sort,
            selected: self.selection.ids().to_vec(),
            can_compare: self.selection.is_ready(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemRow {
    pub id: SystemId,
    pub name: String,
    pub maintainer: String,
    pub license: String,
    pub frameworks: Vec<String>,
    pub component_count: u32,
    pub github_stars: u32,
    pub accessibility: String,
    pub theming: String,
    pub typescript: bool,
    pub ai_quality: Option<AiQuality>,
    pub cms: Option<String>,
    pub last_updated: String,
    pub selected: bool,
}

impl SystemRow {
    pub fn from_record(record: &SystemRecord, selected: bool) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            maintainer: record.maintainer.clone(),
            license: record.license.clone(),
            frameworks: record.frameworks.clone(),
            component_count: record.component_count,
            github_stars: record.github_stars,
            accessibility: record.accessibility.label().to_string(),
            theming: record.theming.label().to_string(),
            typescript: record.typescript,
            ai_quality: record.ai_quality(),
            cms: record.cms.clone(),
            last_updated: record.last_updated.clone(),
            selected,
        }
    }
}

/// Rendered browse table plus the metadata the filter bar needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowsePage {
    pub rows: Vec<SystemRow>,
    pub total: usize,
    pub matched: usize,
    pub options: FilterOptions,
    pub sort: SortState,
    pub selected: Vec<SystemId>,
    pub can_compare: bool,
}
