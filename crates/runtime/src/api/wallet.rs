//! Capabilities the host provides for paid pulls.
//!
//! The runtime never owns currency or items. Hosts implement [`Wallet`] and
//! [`InventoryLedger`] over their own economy; [`MemoryWallet`] and
//! [`MemoryInventory`] cover tests and the simulator.
use std::collections::BTreeMap;

use gacha_core::{CurrencyType, InventoryOracle, ItemId};

/// Currency balance the session charges before a paid pull.
pub trait Wallet {
    fn can_afford(&self, cost: u64, currency: CurrencyType) -> bool;

    /// Deducts `cost`. Returns `false` when nothing was spent.
    fn spend(&mut self, cost: u64, currency: CurrencyType) -> bool;
}

/// Inventory the session credits with pulled items.
pub trait InventoryLedger: InventoryOracle {
    fn add(&mut self, item: &ItemId, quantity: u32);
}

/// Balance-per-currency wallet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryWallet {
    balances: BTreeMap<CurrencyType, u64>,
}

impl MemoryWallet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balance(mut self, currency: CurrencyType, amount: u64) -> Self {
        self.deposit(currency, amount);
        self
    }

    pub fn balance(&self, currency: CurrencyType) -> u64 {
        self.balances.get(&currency).copied().unwrap_or(0)
    }

    pub fn deposit(&mut self, currency: CurrencyType, amount: u64) {
        let balance = self.balances.entry(currency).or_insert(0);
        *balance = balance.saturating_add(amount);
    }
}

impl Wallet for MemoryWallet {
    fn can_afford(&self, cost: u64, currency: CurrencyType) -> bool {
        self.balance(currency) >= cost
    }

    fn spend(&mut self, cost: u64, currency: CurrencyType) -> bool {
        if !self.can_afford(cost, currency) {
            return false;
        }
        if let Some(balance) = self.balances.get_mut(&currency) {
            *balance -= cost;
        }
        true
    }
}

/// Item counts keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryInventory {
    items: BTreeMap<ItemId, u32>,
}

impl MemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quantity(&self, item: &ItemId) -> u32 {
        self.items.get(item).copied().unwrap_or(0)
    }

    /// Distinct items held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl InventoryOracle for MemoryInventory {
    fn has(&self, item: &ItemId) -> bool {
        self.quantity(item) > 0
    }
}

impl InventoryLedger for MemoryInventory {
    fn add(&mut self, item: &ItemId, quantity: u32) {
        let count = self.items.entry(item.clone()).or_insert(0);
        *count = count.saturating_add(quantity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wallet_spends_only_what_it_has() {
        let mut wallet = MemoryWallet::new().with_balance(CurrencyType::Certificate, 1_000);
        assert!(wallet.can_afford(600, CurrencyType::Certificate));
        assert!(!wallet.can_afford(1, CurrencyType::Originium));

        assert!(wallet.spend(600, CurrencyType::Certificate));
        assert!(!wallet.spend(600, CurrencyType::Certificate));
        assert_eq!(wallet.balance(CurrencyType::Certificate), 400);
    }

    #[test]
    fn zero_cost_is_always_affordable() {
        let mut wallet = MemoryWallet::new();
        assert!(wallet.spend(0, CurrencyType::Lmd));
    }

    #[test]
    fn inventory_counts_duplicates() {
        let mut inventory = MemoryInventory::new();
        let item = ItemId::new("amiya");
        assert!(!inventory.has(&item));

        inventory.add(&item, 1);
        inventory.add(&item, 1);
        assert!(inventory.has(&item));
        assert_eq!(inventory.quantity(&item), 2);
        assert_eq!(inventory.len(), 1);
    }
}
