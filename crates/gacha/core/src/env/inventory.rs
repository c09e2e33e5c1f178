use std::collections::BTreeSet;

use crate::banner::ItemId;

/// Oracle answering ownership queries against the player's inventory.
///
/// The engine only needs to know whether an item is already owned so it can
/// flag first-time drops. Crediting items is the host's job.
pub trait InventoryOracle {
    fn has(&self, item: &ItemId) -> bool;
}

/// Inventory that owns nothing; every drop is reported as new.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyInventory;

impl InventoryOracle for EmptyInventory {
    fn has(&self, _item: &ItemId) -> bool {
        false
    }
}

impl InventoryOracle for BTreeSet<ItemId> {
    fn has(&self, item: &ItemId) -> bool {
        self.contains(item)
    }
}

impl<T: InventoryOracle + ?Sized> InventoryOracle for &T {
    fn has(&self, item: &ItemId) -> bool {
        (**self).has(item)
    }
}
