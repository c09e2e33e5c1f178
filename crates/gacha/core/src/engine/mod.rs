//! Draw resolution pipeline.
//!
//! The [`GachaEngine`] is the authoritative reducer for [`GachaState`]. Batch
//! pulls run [`PityEngine::draw_one`] strictly in sequence, so draw *i + 1*
//! observes the counters exactly as draw *i* left them. Side effects such as a
//! pity hit or a high-rarity drop are returned as [`GachaSignal`]s in the
//! [`PullReport`]; hosts fan them out to their own event systems.

mod draw;
mod errors;
mod lottery;
mod outcome;
mod weight;

pub use draw::PityEngine;
pub use errors::DrawError;
pub use lottery::select;
pub use outcome::{Draw, DrawSignal, GachaSignal, PullOutcome, PullReport};
pub use weight::{effective_weight, effective_weights};

use crate::banner::{BannerConfig, BannerId, ItemId};
use crate::config::GachaConfig;
use crate::env::GachaEnv;
use crate::state::GachaState;

/// Batch façade over the pity engine plus progress queries.
pub struct GachaEngine<'a> {
    state: &'a mut GachaState,
}

impl<'a> GachaEngine<'a> {
    /// Creates a new engine over the given state.
    pub fn new(state: &'a mut GachaState) -> Self {
        Self { state }
    }

    /// Resolves `count` draws on `banner`.
    ///
    /// An empty pool or a zero count yields an empty report without touching
    /// state. Draws that fail (sold out, nothing eligible) are omitted, so the
    /// report may hold fewer outcomes than requested. Stock never refills
    /// inside a batch, so the first [`DrawError::SoldOut`] ends the loop and
    /// is the only sold-out failure recorded. The report always ends
    /// with [`GachaSignal::Pulled`] followed by
    /// [`GachaSignal::CountIncremented`] carrying the requested count.
    pub fn pull(
        &mut self,
        banner: &BannerConfig,
        count: u32,
        env: &mut GachaEnv<'_>,
    ) -> PullReport {
        if banner.pool.is_empty() || count == 0 {
            return PullReport::empty(banner.id.clone(), count);
        }

        let mut report = PullReport::empty(banner.id.clone(), count);

        for _ in 0..count {
            match self.draw_one(banner, env) {
                Ok(draw) => {
                    report
                        .signals
                        .extend(draw.signals.into_iter().map(GachaSignal::Draw));
                    report.outcomes.push(draw.outcome);
                }
                Err(error @ DrawError::SoldOut { .. }) => {
                    report.failures.push(error);
                    break;
                }
                Err(error) => report.failures.push(error),
            }
        }

        report.signals.push(GachaSignal::Pulled {
            banner: banner.id.clone(),
            outcomes: report.outcomes.clone(),
        });
        report
            .signals
            .push(GachaSignal::CountIncremented { requested: count });

        report
    }

    /// Resolves a single draw.
    pub fn draw_one(
        &mut self,
        banner: &BannerConfig,
        env: &mut GachaEnv<'_>,
    ) -> Result<Draw, DrawError> {
        PityEngine::new(self.state).draw_one(banner, env)
    }

    pub fn pity_count(&self, banner: &BannerId) -> u32 {
        self.state.pity.get(banner)
    }

    pub fn set_pity_count(&mut self, banner: &BannerId, count: u32) {
        self.state.pity.set(banner, count);
    }

    pub fn reset_pity_count(&mut self, banner: &BannerId) {
        self.state.pity.reset(banner);
    }

    /// Remaining stock of an item, or [`GachaConfig::UNLIMITED_STOCK`] for
    /// unlimited entries and items outside the pool.
    pub fn remaining_stock(&mut self, banner: &BannerConfig, item: &ItemId) -> i64 {
        self.state
            .stock
            .remaining_for(banner, item)
            .map_or(GachaConfig::UNLIMITED_STOCK, i64::from)
    }

    /// `(remaining, total)` over the banner's stock-limited entries.
    pub fn banner_stock_progress(&mut self, banner: &BannerConfig) -> (u64, u64) {
        let remaining = self.state.stock.total_remaining(banner);
        (remaining, banner.total_stock())
    }

    /// Clears the banner's stock ledger; the next touch reseeds it.
    pub fn reset_banner_stock(&mut self, banner: &BannerId) {
        self.state.stock.reset_banner(banner);
    }
}
