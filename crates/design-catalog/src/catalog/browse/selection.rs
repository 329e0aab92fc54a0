use crate::catalog::domain::SystemId;
use serde::{Deserialize, Serialize};

/// Systems that can be checked for comparison at once.
pub const MAX_COMPARE: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("only 2 systems can be compared at once; {rejected} was not selected")]
    Full { rejected: SystemId },
}

/// Checked rows in the browse table, in the order they were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompareSelection {
    ids: Vec<SystemId>,
}

impl CompareSelection {
    /// Re-checking an already selected id is a no-op. A third id is rejected and
    /// the current pair stays selected.
    pub fn check(&mut self, id: SystemId) -> Result<(), SelectionError> {
        if self.contains(&id) {
            return Ok(());
        }
        if self.ids.len() >= MAX_COMPARE {
            return Err(SelectionError::Full { rejected: id });
        }
        self.ids.push(id);
        Ok(())
    }

    pub fn uncheck(&mut self, id: &SystemId) {
        self.ids.retain(|selected| selected != id);
    }

    pub fn ids(&self) -> &[SystemId] {
        &self.ids
    }

    pub fn contains(&self, id: &SystemId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_ready(&self) -> bool {
        self.ids.len() == MAX_COMPARE
    }

    pub fn pair(&self) -> Option<(&SystemId, &SystemId)> {
        match self.ids.as_slice() {
            [left, right] => Some((left, right)),
            _ => None,
        }
    }
}
