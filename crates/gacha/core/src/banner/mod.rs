//! Banner definitions handed to the engine by the catalog layer.
//!
//! A [`BannerConfig`] is immutable once built: the engine borrows it for every
//! draw and never mutates it. Mutable progress (pity, stock) lives in
//! [`crate::state::GachaState`].
mod catalog;
mod error;
mod rates;
mod unlock;

use std::collections::BTreeSet;
use std::fmt;

pub use catalog::BannerCatalog;
pub use error::BannerError;
pub use rates::{RateTable, rarity_rate};
pub use unlock::{UnlockRule, is_all_pool_items_owned, is_banner_unlocked, pool_progress};

use crate::config::GachaConfig;

/// Unique identifier of a banner.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct BannerId(pub String);

impl BannerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BannerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BannerId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Unique identifier of a lootable item.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Currency a banner is billed in.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CurrencyType {
    /// Soft currency earned through play.
    Lmd,
    /// Premium pull currency.
    #[default]
    Certificate,
    /// Hard currency.
    Originium,
}

/// Price list of a banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PullCost {
    pub currency: CurrencyType,
    pub single: u64,
    pub ten: u64,
}

impl PullCost {
    pub const fn new(currency: CurrencyType, single: u64, ten: u64) -> Self {
        Self {
            currency,
            single,
            ten,
        }
    }

    /// Price of a batch of `count` pulls.
    ///
    /// A batch of exactly [`GachaConfig::BULK_PULL_COUNT`] is billed at the
    /// discounted bulk price; any other count pays the single price per pull.
    pub fn for_count(&self, count: u32) -> u64 {
        if count == GachaConfig::BULK_PULL_COUNT {
            self.ten
        } else {
            self.single.saturating_mul(u64::from(count))
        }
    }
}

impl Default for PullCost {
    fn default() -> Self {
        Self::new(
            CurrencyType::default(),
            GachaConfig::DEFAULT_COST_SINGLE,
            GachaConfig::DEFAULT_COST_TEN,
        )
    }
}

/// One lootable item within a banner's pool.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolEntry {
    pub item_id: ItemId,
    /// Authored selection weight. Values `<= 0` fall back to
    /// [`GachaConfig::DEFAULT_WEIGHT`].
    pub weight: f64,
    pub rarity: u8,
    pub is_pickup: bool,
    /// `None` means unlimited.
    pub stock_limit: Option<u32>,
}

impl PoolEntry {
    pub fn new(item_id: impl Into<ItemId>, weight: f64, rarity: u8) -> Self {
        Self {
            item_id: item_id.into(),
            weight,
            rarity,
            is_pickup: false,
            stock_limit: None,
        }
    }

    pub fn pickup(mut self) -> Self {
        self.is_pickup = true;
        self
    }

    pub fn with_stock_limit(mut self, limit: u32) -> Self {
        self.stock_limit = Some(limit);
        self
    }

    /// Authored weight with the bad-data fallback applied.
    pub fn base_weight(&self) -> f64 {
        if self.weight > 0.0 {
            self.weight
        } else {
            GachaConfig::DEFAULT_WEIGHT
        }
    }

    pub fn has_stock_limit(&self) -> bool {
        self.stock_limit.is_some()
    }
}

/// Immutable banner configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BannerConfig {
    pub id: BannerId,
    pub name: String,
    /// Time-limited banner (as opposed to a permanent one).
    pub is_limited: bool,
    pub cost: PullCost,

    pub has_pity: bool,
    /// Draws-to-guarantee.
    pub pity_count: u32,
    /// Counter value at which the soft-pity ramp starts.
    pub soft_pity_start: u32,
    /// Rarity at or above which a drop resets pity.
    pub high_rarity_threshold: u8,

    /// Pool in authored order; order is the lottery tie-break.
    pub pool: Vec<PoolEntry>,

    pub pickup_items: BTreeSet<ItemId>,
    pub pickup_rate_boost: f64,

    pub unlock: UnlockRule,
}

impl BannerConfig {
    /// Creates a banner with no pity, no pickup and default pricing.
    pub fn new(id: impl Into<BannerId>, pool: Vec<PoolEntry>) -> Self {
        let id = id.into();
        Self {
            name: id.0.clone(),
            id,
            is_limited: false,
            cost: PullCost::default(),
            has_pity: false,
            pity_count: GachaConfig::DEFAULT_PITY_COUNT,
            soft_pity_start: GachaConfig::DEFAULT_SOFT_PITY_START,
            high_rarity_threshold: GachaConfig::DEFAULT_HIGH_RARITY_THRESHOLD,
            pool,
            pickup_items: BTreeSet::new(),
            pickup_rate_boost: GachaConfig::DEFAULT_PICKUP_RATE_BOOST,
            unlock: UnlockRule::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn limited(mut self) -> Self {
        self.is_limited = true;
        self
    }

    pub fn with_cost(mut self, cost: PullCost) -> Self {
        self.cost = cost;
        self
    }

    /// Enables hard pity at `pity_count` with the ramp starting at
    /// `soft_pity_start`.
    pub fn with_pity(mut self, pity_count: u32, soft_pity_start: u32) -> Self {
        self.has_pity = true;
        self.pity_count = pity_count;
        self.soft_pity_start = soft_pity_start;
        self
    }

    pub fn with_pickup<I>(mut self, items: I, rate_boost: f64) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ItemId>,
    {
        self.pickup_items = items.into_iter().map(Into::into).collect();
        self.pickup_rate_boost = rate_boost;
        self
    }

    pub fn with_high_rarity_threshold(mut self, threshold: u8) -> Self {
        self.high_rarity_threshold = threshold;
        self
    }

    /// Applies engine-wide defaults from a [`GachaConfig`].
    pub fn with_config(self, config: &GachaConfig) -> Self {
        self.with_high_rarity_threshold(config.high_rarity_threshold)
    }

    pub fn with_unlock(mut self, unlock: UnlockRule) -> Self {
        self.unlock = unlock;
        self
    }

    pub fn is_high_rarity(&self, rarity: u8) -> bool {
        rarity >= self.high_rarity_threshold
    }

    /// True if any pool entry carries a stock limit.
    pub fn has_limited_stock(&self) -> bool {
        self.pool.iter().any(PoolEntry::has_stock_limit)
    }

    /// Sum of authored stock limits over stock-limited entries.
    pub fn total_stock(&self) -> u64 {
        self.pool
            .iter()
            .filter_map(|entry| entry.stock_limit)
            .map(u64::from)
            .sum()
    }

    /// Sum of fallback-adjusted weights, ignoring pity, pickup and stock.
    pub fn total_weight(&self) -> f64 {
        self.pool.iter().map(PoolEntry::base_weight).sum()
    }

    pub fn entry(&self, item: &ItemId) -> Option<&PoolEntry> {
        self.pool.iter().find(|entry| &entry.item_id == item)
    }

    /// Checks authoring invariants.
    ///
    /// The draw path never calls this and tolerates bad weights through the
    /// default-weight fallback. Catalog loaders should reject banners that
    /// fail here.
    pub fn validate(&self) -> Result<(), BannerError> {
        if self.pool.is_empty() {
            return Err(BannerError::EmptyPool(self.id.clone()));
        }

        if self.has_pity {
            if self.pity_count == 0 {
                return Err(BannerError::ZeroPityCount(self.id.clone()));
            }
            if self.soft_pity_start > self.pity_count {
                return Err(BannerError::SoftPityAfterHardPity {
                    banner: self.id.clone(),
                    soft_pity_start: self.soft_pity_start,
                    pity_count: self.pity_count,
                });
            }
        }

        if self.pickup_rate_boost.is_nan() || self.pickup_rate_boost < 0.0 {
            return Err(BannerError::NegativePickupBoost {
                banner: self.id.clone(),
                boost: self.pickup_rate_boost,
            });
        }

        if self.high_rarity_threshold == 0 {
            return Err(BannerError::ZeroHighRarityThreshold(self.id.clone()));
        }

        let mut seen = BTreeSet::new();
        for entry in &self.pool {
            if !seen.insert(&entry.item_id) {
                return Err(BannerError::DuplicateItem {
                    banner: self.id.clone(),
                    item: entry.item_id.clone(),
                });
            }
        }

        Ok(())
    }
}
