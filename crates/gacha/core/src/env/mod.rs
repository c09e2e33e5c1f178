//! Traits describing the collaborators a draw consults.
//!
//! Oracles expose the random source and the inventory ownership query. The
//! [`GachaEnv`] aggregate bundles them so the engine can resolve draws without
//! hard coupling to concrete host implementations.
mod inventory;
mod rng;

pub use inventory::{EmptyInventory, InventoryOracle};
pub use rng::{PcgRng, RandomSource};

/// Aggregates the oracles required by the pity engine.
pub struct GachaEnv<'a> {
    rng: &'a mut dyn RandomSource,
    inventory: &'a dyn InventoryOracle,
}

impl<'a> GachaEnv<'a> {
    pub fn new(rng: &'a mut dyn RandomSource, inventory: &'a dyn InventoryOracle) -> Self {
        Self { rng, inventory }
    }

    /// Returns the random source.
    pub fn rng(&mut self) -> &mut dyn RandomSource {
        &mut *self.rng
    }

    /// True if the item is not in the inventory yet.
    pub fn is_new(&self, item: &crate::banner::ItemId) -> bool {
        !self.inventory.has(item)
    }
}
