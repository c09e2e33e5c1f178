//! Deterministic gacha resolution logic shared across hosts.
//!
//! `gacha-core` defines the canonical draw rules (weighted lottery, pity and
//! soft-pity ramp, limited stock) and exposes pure APIs that can be reused by
//! the runtime, simulators, and offline balancing tools. All mutation of pity
//! counters and stock ledgers flows through [`engine::GachaEngine`], and
//! supporting crates depend on the types re-exported here.
pub mod banner;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use banner::{
    BannerCatalog, BannerConfig, BannerError, BannerId, CurrencyType, ItemId, PoolEntry, PullCost,
    RateTable, UnlockRule, is_all_pool_items_owned, is_banner_unlocked, pool_progress,
    rarity_rate,
};
pub use config::GachaConfig;
pub use engine::{
    Draw, DrawError, DrawSignal, GachaEngine, GachaSignal, PityEngine, PullOutcome, PullReport,
    effective_weight, effective_weights, select,
};
pub use env::{EmptyInventory, GachaEnv, InventoryOracle, PcgRng, RandomSource};
pub use error::{ErrorSeverity, GachaError};
pub use state::{GachaSnapshot, GachaState, PityStore, StockStore};
