use std::collections::BTreeMap;

use crate::banner::BannerId;

/// Per-banner pity counters.
///
/// A counter equals the number of draws made on the banner since its last
/// reset (hard-pity trigger or high-rarity drop). Unknown banners read as 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct PityStore {
    counters: BTreeMap<BannerId, u32>,
}

impl PityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, banner: &BannerId) -> u32 {
        self.counters.get(banner).copied().unwrap_or(0)
    }

    pub fn set(&mut self, banner: &BannerId, count: u32) {
        self.counters.insert(banner.clone(), count);
    }

    /// Increments the counter and returns the new value.
    pub fn increment(&mut self, banner: &BannerId) -> u32 {
        let counter = self.counters.entry(banner.clone()).or_insert(0);
        *counter = counter.saturating_add(1);
        *counter
    }

    pub fn reset(&mut self, banner: &BannerId) {
        self.counters.insert(banner.clone(), 0);
    }

    /// Exports the counters verbatim.
    pub fn export(&self) -> BTreeMap<BannerId, u32> {
        self.counters.clone()
    }

    /// Replaces every counter with the imported map.
    pub fn import(&mut self, counters: BTreeMap<BannerId, u32>) {
        self.counters = counters;
    }
}
