//! Single-draw state machine.
//!
//! Per banner the counter is either below the hard-pity threshold (normal
//! lottery) or has reached it after the increment (guaranteed pick). Every
//! draw runs the same sequence:
//!
//! 1. sold-out check (before the increment, so a sold-out banner never burns pity)
//! 2. pity increment
//! 3. guaranteed pick on hard pity, weighted lottery otherwise
//! 4. stock decrement for stock-limited picks
//! 5. pity reset on any high-rarity pick

use crate::banner::{BannerConfig, PoolEntry};
use crate::env::GachaEnv;
use crate::state::{GachaState, StockStore};

use super::{Draw, DrawError, DrawSignal, PullOutcome, effective_weights, select};

/// Resolves one draw at a time against explicit state.
pub struct PityEngine<'a> {
    state: &'a mut GachaState,
}

impl<'a> PityEngine<'a> {
    pub fn new(state: &'a mut GachaState) -> Self {
        Self { state }
    }

    /// Resolves a single draw.
    ///
    /// # Errors
    ///
    /// - [`DrawError::SoldOut`] when every stock-limited entry is exhausted;
    ///   no counter is touched.
    /// - [`DrawError::NoEligibleEntry`] when nothing could be selected; the
    ///   pity increment stays.
    pub fn draw_one(
        &mut self,
        banner: &BannerConfig,
        env: &mut GachaEnv<'_>,
    ) -> Result<Draw, DrawError> {
        if banner.has_limited_stock() && self.state.stock.total_remaining(banner) == 0 {
            return Err(DrawError::SoldOut {
                banner: banner.id.clone(),
            });
        }

        let counter = self.state.pity.increment(&banner.id);
        let hard_pity = banner.has_pity && counter >= banner.pity_count;
        let mut signals = Vec::new();

        let selected = if hard_pity {
            let entry = highest_rarity_in_stock(banner, &mut self.state.stock);
            self.state.pity.reset(&banner.id);
            signals.push(DrawSignal::PityReached {
                banner: banner.id.clone(),
            });
            entry
        } else {
            let weights = effective_weights(banner, counter, &mut self.state.stock);
            select(&banner.pool, &weights, env.rng())
        };

        let Some(entry) = selected else {
            return Err(DrawError::NoEligibleEntry {
                banner: banner.id.clone(),
            });
        };

        if entry.has_stock_limit() {
            self.state.stock.decrement(&banner.id, &entry.item_id);
        }

        let outcome = PullOutcome::from_entry(entry, env.is_new(&entry.item_id));

        if banner.is_high_rarity(entry.rarity) {
            self.state.pity.reset(&banner.id);
            signals.push(DrawSignal::HighRarityPulled {
                outcome: outcome.clone(),
                rarity: entry.rarity,
            });
        }

        Ok(Draw {
            outcome,
            hard_pity,
            pity_after: self.state.pity.get(&banner.id),
            signals,
        })
    }
}

/// Highest-rarity entry that still has stock.
///
/// Among equal rarities a later pickup entry replaces the current pick.
/// Exhausted entries are skipped, so the pick degrades to the next rarity
/// down when the top rarity is sold out.
fn highest_rarity_in_stock<'b>(
    banner: &'b BannerConfig,
    stock: &mut StockStore,
) -> Option<&'b PoolEntry> {
    let mut best: Option<&PoolEntry> = None;

    for entry in &banner.pool {
        if entry.has_stock_limit() && stock.remaining_for(banner, &entry.item_id) == Some(0) {
            continue;
        }

        best = match best {
            None => Some(entry),
            Some(current) if entry.rarity > current.rarity => Some(entry),
            Some(current) if entry.rarity == current.rarity && entry.is_pickup => Some(entry),
            keep => keep,
        };
    }

    best
}
