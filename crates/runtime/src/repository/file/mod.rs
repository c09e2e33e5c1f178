//! File-based SaveRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use gacha_core::GachaSnapshot;

use crate::repository::{RepositoryError, Result, SaveRepository};

/// File-based implementation of SaveRepository.
///
/// # File Format
///
/// Each slot is stored as `{slot}.json`, pretty-printed JSON of the
/// snapshot's `pity` and `stock` maps. Writes go to a temp file that is then
/// renamed over the target, so a crash never leaves a half-written save.
pub struct FileSaveRepository {
    base_dir: PathBuf,
}

impl FileSaveRepository {
    /// Create a new file-based save repository.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Get the path to a slot file.
    fn slot_path(&self, slot: &str) -> Result<PathBuf> {
        let valid = !slot.is_empty()
            && slot
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(RepositoryError::InvalidSlot(slot.to_string()));
        }
        Ok(self.base_dir.join(format!("{slot}.json")))
    }
}

impl SaveRepository for FileSaveRepository {
    fn save(&self, slot: &str, snapshot: &GachaSnapshot) -> Result<()> {
        let path = self.slot_path(slot)?;
        let temp_path = path.with_extension("json.tmp");

        let bytes = serde_json::to_vec_pretty(snapshot)?;

        // Write to temp file
        fs::write(&temp_path, bytes)?;

        // Atomic rename
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved slot[{}] to {}", slot, path.display());

        Ok(())
    }

    fn load(&self, slot: &str) -> Result<Option<GachaSnapshot>> {
        let path = self.slot_path(slot)?;

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path)?;
        let snapshot: GachaSnapshot = serde_json::from_slice(&bytes)?;

        tracing::debug!("Loaded slot[{}] from {}", slot, path.display());

        Ok(Some(snapshot))
    }

    fn exists(&self, slot: &str) -> bool {
        self.slot_path(slot).is_ok_and(|path| path.exists())
    }

    fn delete(&self, slot: &str) -> Result<()> {
        let path = self.slot_path(slot)?;

        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("Deleted slot[{}]", slot);
        }

        Ok(())
    }

    fn list_slots(&self) -> Result<Vec<String>> {
        let mut slots = Vec::new();

        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(slot) = filename.strip_suffix(".json")
                && self.slot_path(slot).is_ok()
            {
                slots.push(slot.to_string());
            }
        }

        slots.sort_unstable();
        Ok(slots)
    }
}
