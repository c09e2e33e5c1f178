//! Mutable per-session gacha state.
//!
//! [`GachaState`] owns the pity counters and stock ledgers for one save or
//! session. There is no ambient global: hosts keep one instance per save and
//! hand it to [`crate::GachaEngine`] explicitly, so independent sessions and
//! test fixtures never share counters.
mod pity;
mod stock;

use std::collections::BTreeMap;

pub use pity::PityStore;
pub use stock::StockStore;

use crate::banner::{BannerId, ItemId};

/// Canonical snapshot of all mutable gacha progress.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GachaState {
    pub pity: PityStore,
    pub stock: StockStore,
}

impl GachaState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exports both maps for the host's save system.
    pub fn snapshot(&self) -> GachaSnapshot {
        GachaSnapshot {
            pity: self.pity.export(),
            stock: self.stock.export(),
        }
    }

    pub fn from_snapshot(snapshot: GachaSnapshot) -> Self {
        let mut state = Self::new();
        state.restore(snapshot);
        state
    }

    /// Replaces all progress with the snapshot's contents.
    pub fn restore(&mut self, snapshot: GachaSnapshot) {
        self.pity.import(snapshot.pity);
        self.stock.import(snapshot.stock);
    }
}

/// Persisted layout: `banner -> pity` and `banner -> item -> remaining`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GachaSnapshot {
    #[cfg_attr(feature = "serde", serde(default))]
    pub pity: BTreeMap<BannerId, u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stock: BTreeMap<BannerId, BTreeMap<ItemId, u32>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::{BannerConfig, PoolEntry};

    #[test]
    fn snapshot_restores_identical_state() {
        let banner = BannerConfig::new(
            "b",
            vec![PoolEntry::new("x", 1.0, 5).with_stock_limit(3)],
        );
        let mut state = GachaState::new();
        state.pity.set(&banner.id, 12);
        state.stock.ensure_seeded(&banner);
        state.stock.decrement(&banner.id, &ItemId::new("x"));

        let restored = GachaState::from_snapshot(state.snapshot());
        assert_eq!(restored, state);
        assert_eq!(restored.stock.remaining(&banner.id, &ItemId::new("x")), Some(2));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn snapshot_json_uses_plain_maps() {
        let mut state = GachaState::new();
        state.pity.set(&BannerId::new("standard"), 4);
        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["pity"]["standard"], 4);
        assert!(json["stock"].as_object().unwrap().is_empty());
    }
}
