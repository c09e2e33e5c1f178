//! Session façade owning gacha progress for one player.
//!
//! A [`GachaSession`] holds the [`GachaState`] and random source for a save,
//! runs pulls through [`GachaEngine`], fans the resulting signals out on its
//! [`EventBus`], and moves snapshots in and out of a [`SaveRepository`].
//! Every method takes `&mut self` or `&self`; hosts serialize access.
use gacha_core::{
    BannerConfig, BannerId, GachaEngine, GachaEnv, GachaSnapshot, GachaState, InventoryOracle,
    ItemId, PullReport, RandomSource,
};
use tokio::sync::broadcast;

use crate::api::{InventoryLedger, Result, RuntimeError, Wallet};
use crate::config::RuntimeConfig;
use crate::events::{Event, EventBus, Topic, extract_events};
use crate::random::StdRandom;
use crate::repository::SaveRepository;

pub struct GachaSession<R = StdRandom> {
    state: GachaState,
    rng: R,
    bus: EventBus,
}

impl GachaSession<StdRandom> {
    /// Session with a random source and bus built from `config`.
    pub fn new(config: &RuntimeConfig) -> Self {
        Self::with_rng(
            StdRandom::from_seed(config.seed),
            EventBus::with_capacity(config.event_buffer_size),
        )
    }
}

impl<R: RandomSource> GachaSession<R> {
    pub fn with_rng(rng: R, bus: EventBus) -> Self {
        Self {
            state: GachaState::new(),
            rng,
            bus,
        }
    }

    /// Resolves `count` draws and publishes the resulting events.
    ///
    /// `inventory` only decides the `is_new` flag; nothing is credited.
    pub fn pull(
        &mut self,
        banner: &BannerConfig,
        count: u32,
        inventory: &dyn InventoryOracle,
    ) -> PullReport {
        if banner.pool.is_empty() || count == 0 {
            tracing::warn!(
                banner = %banner.id,
                pool = banner.pool.len(),
                count,
                "Ignoring pull on empty pool or zero count"
            );
        }

        let mut env = GachaEnv::new(&mut self.rng, inventory);
        let report = GachaEngine::new(&mut self.state).pull(banner, count, &mut env);

        tracing::debug!(
            banner = %banner.id,
            requested = count,
            produced = report.outcomes.len(),
            pity = self.state.pity.get(&banner.id),
            "Resolved pull"
        );

        if !report.failures.is_empty() {
            tracing::debug!(
                banner = %banner.id,
                failed = report.failures.len(),
                "Some draws produced nothing: {}",
                report.failures[0]
            );
        }

        self.publish(&report);
        report
    }

    /// Charges the wallet, pulls, and credits every outcome to the inventory.
    ///
    /// The full price for `count` is taken before drawing. A batch cut short
    /// by stock exhaustion is not refunded; [`PullReport::shortfall`] tells
    /// the host how many paid draws produced nothing.
    ///
    /// # Errors
    ///
    /// - [`RuntimeError::InvalidBanner`] when the banner fails validation
    /// - [`RuntimeError::InsufficientFunds`] when the wallet cannot cover the cost
    /// - [`RuntimeError::SpendFailed`] when the wallet refuses the spend
    ///
    /// No state is touched on any error. Only this paid path validates the
    /// banner; [`Self::pull`] resolves whatever the engine accepts.
    pub fn pull_with_cost<W, L>(
        &mut self,
        banner: &BannerConfig,
        count: u32,
        wallet: &mut W,
        inventory: &mut L,
    ) -> Result<PullReport>
    where
        W: Wallet + ?Sized,
        L: InventoryLedger,
    {
        if let Err(error) = banner.validate() {
            tracing::warn!(banner = %banner.id, "Rejected pull on invalid banner: {}", error);
            return Err(error.into());
        }

        let currency = banner.cost.currency;
        let cost = banner.cost.for_count(count);

        if !wallet.can_afford(cost, currency) {
            tracing::warn!(banner = %banner.id, cost, %currency, "Insufficient funds");
            return Err(RuntimeError::InsufficientFunds {
                banner: banner.id.clone(),
                currency,
                cost,
                count,
            });
        }

        if !wallet.spend(cost, currency) {
            tracing::warn!(banner = %banner.id, cost, %currency, "Wallet refused spend");
            return Err(RuntimeError::SpendFailed {
                banner: banner.id.clone(),
                currency,
                cost,
            });
        }

        let report = self.pull(banner, count, &*inventory);
        for outcome in &report.outcomes {
            inventory.add(&outcome.item_id, 1);
        }

        if report.shortfall() > 0 {
            tracing::warn!(
                banner = %banner.id,
                shortfall = report.shortfall(),
                "Paid draws produced no item"
            );
        }

        Ok(report)
    }

    fn publish(&self, report: &PullReport) {
        for event in extract_events(report) {
            match &event {
                Event::Pity(pity) => {
                    tracing::info!("Pity reached on banner {}", pity.banner);
                }
                Event::HighRarity(drop) => {
                    tracing::info!(
                        "High-rarity pull on banner {}: {} (rarity {})",
                        drop.banner,
                        drop.outcome.item_id,
                        drop.rarity
                    );
                }
                Event::Pull(_) | Event::Stats(_) => {}
            }
            self.bus.publish(event);
        }
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.bus.subscribe(topic)
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn pity_count(&self, banner: &BannerId) -> u32 {
        self.state.pity.get(banner)
    }

    pub fn set_pity_count(&mut self, banner: &BannerId, count: u32) {
        GachaEngine::new(&mut self.state).set_pity_count(banner, count);
    }

    pub fn reset_pity_count(&mut self, banner: &BannerId) {
        GachaEngine::new(&mut self.state).reset_pity_count(banner);
    }

    /// Remaining stock, `-1` for unlimited entries and unknown items.
    pub fn remaining_stock(&mut self, banner: &BannerConfig, item: &ItemId) -> i64 {
        GachaEngine::new(&mut self.state).remaining_stock(banner, item)
    }

    /// `(remaining, total)` over the banner's stock-limited entries.
    pub fn banner_stock_progress(&mut self, banner: &BannerConfig) -> (u64, u64) {
        GachaEngine::new(&mut self.state).banner_stock_progress(banner)
    }

    pub fn reset_banner_stock(&mut self, banner: &BannerId) {
        GachaEngine::new(&mut self.state).reset_banner_stock(banner);
    }

    pub fn state(&self) -> &GachaState {
        &self.state
    }

    pub fn snapshot(&self) -> GachaSnapshot {
        self.state.snapshot()
    }

    pub fn restore(&mut self, snapshot: GachaSnapshot) {
        self.state.restore(snapshot);
    }

    /// Writes the current snapshot to `slot`.
    pub fn save(&self, repo: &dyn SaveRepository, slot: &str) -> Result<()> {
        repo.save(slot, &self.snapshot())?;
        tracing::debug!("Saved gacha progress to slot {}", slot);
        Ok(())
    }

    /// Restores progress from `slot`. Returns `false` and leaves the state
    /// untouched when the slot does not exist.
    pub fn load(&mut self, repo: &dyn SaveRepository, slot: &str) -> Result<bool> {
        match repo.load(slot)? {
            Some(snapshot) => {
                self.restore(snapshot);
                tracing::debug!("Loaded gacha progress from slot {}", slot);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gacha_core::{EmptyInventory, PcgRng, PoolEntry};

    fn session() -> GachaSession<PcgRng> {
        GachaSession::with_rng(PcgRng::new(4), EventBus::with_capacity(16))
    }

    #[test]
    fn queries_delegate_to_engine() {
        let banner = BannerConfig::new(
            "b",
            vec![
                PoolEntry::new("free", 1.0, 3),
                PoolEntry::new("lim", 1.0, 4).with_stock_limit(3),
            ],
        );
        let mut session = session();

        session.set_pity_count(&banner.id, 7);
        assert_eq!(session.pity_count(&banner.id), 7);
        session.reset_pity_count(&banner.id);
        assert_eq!(session.pity_count(&banner.id), 0);

        assert_eq!(session.remaining_stock(&banner, &ItemId::new("free")), -1);
        assert_eq!(session.banner_stock_progress(&banner), (3, 3));
        session.reset_banner_stock(&banner.id);
        assert_eq!(session.remaining_stock(&banner, &ItemId::new("lim")), 3);
    }

    #[test]
    fn event_bus_receivers_see_session_pulls() {
        let banner = BannerConfig::new("b", vec![PoolEntry::new("c", 1.0, 3)]);
        let mut session = session();
        let mut receivers = session
            .event_bus()
            .subscribe_multiple(&[Topic::Pull, Topic::Stats]);

        session.pull(&banner, 2, &EmptyInventory);

        for (topic, rx) in &mut receivers {
            let event = rx.try_recv().unwrap();
            assert_eq!(event.topic(), *topic);
        }
    }

    #[test]
    fn pull_updates_state() {
        let banner = BannerConfig::new("b", vec![PoolEntry::new("c", 1.0, 3)]).with_pity(50, 40);
        let mut session = session();

        let report = session.pull(&banner, 3, &EmptyInventory);
        assert_eq!(report.outcomes.len(), 3);
        assert_eq!(session.pity_count(&banner.id), 3);
        assert_eq!(session.state().pity.get(&banner.id), 3);
    }
}
