use super::domain::{CatalogError, SystemId, SystemRecord};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    systems: Vec<SystemRecord>,
}

/// Immutable, validated set of design systems in dataset order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    systems: Vec<SystemRecord>,
}

impl Catalog {
    /// Validates id uniqueness and non-empty framework sets.
    pub fn new(systems: Vec<SystemRecord>) -> Result<Self, CatalogError> {
        let mut seen: HashSet<&SystemId> = HashSet::new();
        for system in &systems {
            if !seen.insert(&system.id) {
                return Err(CatalogError::DuplicateId(system.id.clone()));
            }
            if system.frameworks.is_empty() {
                return Err(CatalogError::EmptyFrameworks(system.id.clone()));
            }
        }

        Ok(Self { systems })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_reader(BufReader::new(file))?;
        info!(path = %path.display(), systems = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_reader(reader)?;
        Self::new(file.systems)
    }

    pub fn systems(&self) -> &[SystemRecord] {
        &self.systems
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&SystemRecord> {
        self.systems.iter().find(|system| system.id.as_str() == id)
    }

    pub fn require(&self, id: &str) -> Result<&SystemRecord, CatalogError> {
        self.get(id)
            .ok_or_else(|| CatalogError::SystemNotFound(SystemId::from(id)))
    }

    pub fn filter_options(&self) -> FilterOptions {
        let mut frameworks = BTreeSet::new();
        let mut licenses = BTreeSet::new();
        let mut maintainers = BTreeSet::new();

        for system in &self.systems {
            frameworks.extend(system.frameworks.iter().cloned());
            licenses.insert(system.license.clone());
            maintainers.insert(system.maintainer.clone());
        }

        FilterOptions {
            frameworks: frameworks.into_iter().collect(),
            licenses: licenses.into_iter().collect(),
            maintainers: maintainers.into_iter().collect(),
        }
    }
}

/// Distinct values offered by the browse filters, each sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub frameworks: Vec<String>,
    pub licenses: Vec<String>,
    pub maintainers: Vec<String>,
}
