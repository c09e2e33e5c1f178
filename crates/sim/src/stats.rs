//! Drop statistics accumulated over a simulation run.
use std::collections::BTreeMap;
use std::fmt;

use gacha_core::{ItemId, PullReport};

#[derive(Clone, Debug, Default)]
pub struct DropStats {
    pub requested: u64,
    pub produced: u64,
    pub spent: u64,
    pub pity_hits: u64,
    pub high_rarity: u64,
    pub new_items: u64,
    pub by_rarity: BTreeMap<u8, u64>,
    pub by_item: BTreeMap<ItemId, u64>,
}

impl DropStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one batch into the totals.
    pub fn record(&mut self, report: &PullReport, spent: u64) {
        self.requested += u64::from(report.requested);
        self.produced += report.outcomes.len() as u64;
        self.spent += spent;

        for outcome in &report.outcomes {
            *self.by_rarity.entry(outcome.rarity).or_default() += 1;
            *self.by_item.entry(outcome.item_id.clone()).or_default() += 1;
            if outcome.is_new {
                self.new_items += 1;
            }
        }
    }

    /// Share of produced items at `rarity`, in percent.
    pub fn rarity_share(&self, rarity: u8) -> f64 {
        if self.produced == 0 {
            return 0.0;
        }
        let count = self.by_rarity.get(&rarity).copied().unwrap_or(0);
        count as f64 * 100.0 / self.produced as f64
    }
}

impl fmt::Display for DropStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "draws: {} requested, {} produced, {} spent",
            self.requested, self.produced, self.spent
        )?;
        writeln!(
            f,
            "pity hits: {}, high-rarity drops: {}, first-time drops: {}",
            self.pity_hits, self.high_rarity, self.new_items
        )?;
        for (&rarity, count) in self.by_rarity.iter().rev() {
            writeln!(
                f,
                "★{rarity}: {count:>6} ({:.2}%)",
                self.rarity_share(rarity)
            )?;
        }
        for (item, count) in &self.by_item {
            writeln!(f, "  {item:<16} {count:>6}")?;
        }
        Ok(())
    }
}
