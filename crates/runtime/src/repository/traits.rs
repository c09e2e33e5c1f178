//! Repository contract for saving and loading gacha progress.

use gacha_core::GachaSnapshot;

use super::Result;

/// Snapshot storage keyed by save slot.
pub trait SaveRepository: Send + Sync {
    /// Save a snapshot, replacing whatever the slot held
    fn save(&self, slot: &str, snapshot: &GachaSnapshot) -> Result<()>;

    /// Load a slot's snapshot
    fn load(&self, slot: &str) -> Result<Option<GachaSnapshot>>;

    /// Check if a slot exists
    fn exists(&self, slot: &str) -> bool;

    /// Delete a slot; deleting a missing slot is not an error
    fn delete(&self, slot: &str) -> Result<()>;

    /// List all slot names, sorted
    fn list_slots(&self) -> Result<Vec<String>> {
        Ok(vec![])
    }
}
