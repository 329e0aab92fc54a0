use super::domain::{CatalogError, ComponentAudit, SystemId, SystemRecord};
use std::collections::HashMap;
use std::io::{BufReader, ErrorKind};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Source of per-system component audits so callers can swap the filesystem for memory.
pub trait ComponentSource: Send + Sync {
    /// `Ok(None)` means the system simply has no audit.
    fn audit(&self, id: &SystemId) -> Result<Option<ComponentAudit>, CatalogError>;
}

/// Reads `<root>/<id>.json`.
#[derive(Debug, Clone)]
pub struct DirectoryComponentSource {
    root: PathBuf,
}

impl DirectoryComponentSource {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }
}

/// Any id maps to a file name unless it could leave the audit directory.
fn is_safe_id(id: &SystemId) -> bool {
    let raw = id.as_str();
    !raw.is_empty()
        && raw != "."
        && !raw.contains("..")
        && !raw
            .chars()
            .any(|ch| ch == '/' || ch == '\\' || ch.is_control())
}

impl ComponentSource for DirectoryComponentSource {
    fn audit(&self, id: &SystemId) -> Result<Option<ComponentAudit>, CatalogError> {
        if !is_safe_id(id) {
            warn!(
                system_id = %id,
                "skipping component lookup for id that is not a plain file name"
            );
            return Ok(None);
        }

        let path = self.root.join(format!("{}.json", id.as_str()));
        let file = match std::fs::File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(CatalogError::Read { path, source }),
        };

        let audit = serde_json::from_reader(BufReader::new(file))?;
        Ok(Some(audit))
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryComponentSource {
    audits: HashMap<SystemId, ComponentAudit>,
}

impl InMemoryComponentSource {
    pub fn with_audit(mut self, id: impl Into<SystemId>, audit: ComponentAudit) -> Self {
        self.audits.insert(id.into(), audit);
        self
    }
}

impl ComponentSource for InMemoryComponentSource {
    fn audit(&self, id: &SystemId) -> Result<Option<ComponentAudit>, CatalogError> {
        Ok(self.audits.get(id).cloned())
    }
}

/// Reads one audit, degrading any failure to "not available".
pub fn load_audit<S>(source: &S, id: &SystemId) -> Option<ComponentAudit>
where
    S: ComponentSource + ?Sized,
{
    match source.audit(id) {
        Ok(audit) => audit,
        Err(err) => {
            warn!(system_id = %id, error = %err, "component data unavailable");
            None
        }
    }
}

/// Lowercased component names per system, used for requested-component matching.
#[derive(Debug, Clone, Default)]
pub struct ComponentIndex {
    names: HashMap<SystemId, Vec<String>>,
}

impl ComponentIndex {
    pub fn load<S>(source: &S, systems: &[SystemRecord]) -> Self
    where
        S: ComponentSource + ?Sized,
    {
        let mut index = Self::default();
        for system in systems {
            if let Some(audit) = load_audit(source, &system.id) {
                index.insert(system.id.clone(), &audit);
            }
        }
        debug!(
            systems = systems.len(),
            audited = index.names.len(),
            "component index built"
        );
        index
    }

    pub fn insert(&mut self, id: SystemId, audit: &ComponentAudit) {
        let names = audit
            .component_names()
            .map(|name| name.to_lowercase())
            .collect();
        self.names.insert(id, names);
    }

    pub fn is_indexed(&self, id: &SystemId) -> bool {
        self.names.contains_key(id)
    }

    /// Case-insensitive substring match in either direction.
    pub fn has_component(&self, id: &SystemId, requested: &str) -> bool {
        let Some(names) = self.names.get(id) else {
            return false;
        };

        let wanted = requested.to_lowercase();
        names
            .iter()
            .any(|name| name.contains(&wanted) || wanted.contains(name.as_str()))
    }
}
