//! In-memory SaveRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use gacha_core::GachaSnapshot;

use crate::repository::{RepositoryError, Result, SaveRepository};

/// In-memory implementation of SaveRepository.
pub struct InMemorySaveRepo {
    slots: RwLock<HashMap<String, GachaSnapshot>>,
}

impl InMemorySaveRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySaveRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl SaveRepository for InMemorySaveRepo {
    fn save(&self, slot: &str, snapshot: &GachaSnapshot) -> Result<()> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        slots.insert(slot.to_string(), snapshot.clone());
        Ok(())
    }

    fn load(&self, slot: &str) -> Result<Option<GachaSnapshot>> {
        let slots = self
            .slots
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(slots.get(slot).cloned())
    }

    fn exists(&self, slot: &str) -> bool {
        self.slots
            .read()
            .map(|slots| slots.contains_key(slot))
            .unwrap_or(false)
    }

    fn delete(&self, slot: &str) -> Result<()> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        slots.remove(slot);
        Ok(())
    }

    fn list_slots(&self) -> Result<Vec<String>> {
        let slots = self
            .slots
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut names: Vec<String> = slots.keys().cloned().collect();
        names.sort_unstable();
        Ok(names)
    }
}
