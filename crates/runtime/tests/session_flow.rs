use gacha_core::{
    BannerConfig, BannerError, CurrencyType, EmptyInventory, GachaSnapshot, ItemId, PcgRng, PoolEntry,
    PullCost, RandomSource,
};
use runtime::{
    Event, EventBus, FileSaveRepository, GachaSession, InMemorySaveRepo, MemoryInventory,
    MemoryWallet, RuntimeConfig, RuntimeError, SaveRepository, Topic, Wallet,
};

/// Always rolls the bottom of the requested range.
struct Lowest;

impl RandomSource for Lowest {
    fn next_f64(&mut self) -> f64 {
        0.0
    }
}

/// Says yes to every balance check, then refuses to pay.
struct RefusingWallet;

impl Wallet for RefusingWallet {
    fn can_afford(&self, _cost: u64, _currency: CurrencyType) -> bool {
        true
    }

    fn spend(&mut self, _cost: u64, _currency: CurrencyType) -> bool {
        false
    }
}

fn scenario_banner() -> BannerConfig {
    BannerConfig::new(
        "scenario",
        vec![PoolEntry::new("A", 90.0, 3), PoolEntry::new("B", 10.0, 6)],
    )
    .with_pity(10, 8)
}

fn session() -> GachaSession<PcgRng> {
    GachaSession::with_rng(PcgRng::new(2024), EventBus::with_capacity(32))
}

#[test]
fn paid_ten_pull_charges_bulk_price_and_credits_items() {
    let banner = scenario_banner();
    let mut session = session();
    let mut wallet = MemoryWallet::new().with_balance(CurrencyType::Certificate, 6_500);
    let mut inventory = MemoryInventory::new();

    let report = session
        .pull_with_cost(&banner, 10, &mut wallet, &mut inventory)
        .unwrap();

    assert_eq!(report.outcomes.len(), 10);
    assert_eq!(wallet.balance(CurrencyType::Certificate), 500);
    let credited: u32 = ["A", "B"]
        .iter()
        .map(|id| inventory.quantity(&ItemId::new(*id)))
        .sum();
    assert_eq!(credited, 10);
}

#[test]
fn insufficient_funds_touches_nothing() {
    let banner = scenario_banner().with_cost(PullCost {
        currency: CurrencyType::Originium,
        single: 10,
        ten: 90,
    });
    let mut session = session();
    let mut wallet = MemoryWallet::new().with_balance(CurrencyType::Originium, 20);
    let mut inventory = MemoryInventory::new();

    let error = session
        .pull_with_cost(&banner, 3, &mut wallet, &mut inventory)
        .unwrap_err();

    assert!(matches!(
        error,
        RuntimeError::InsufficientFunds {
            cost: 30,
            count: 3,
            currency: CurrencyType::Originium,
            ..
        }
    ));
    assert_eq!(wallet.balance(CurrencyType::Originium), 20);
    assert!(inventory.is_empty());
    assert_eq!(session.pity_count(&banner.id), 0);
}

#[test]
fn refused_spend_is_reported() {
    let banner = scenario_banner();
    let mut session = session();
    let mut inventory = MemoryInventory::new();

    let error = session
        .pull_with_cost(&banner, 1, &mut RefusingWallet, &mut inventory)
        .unwrap_err();

    assert!(matches!(error, RuntimeError::SpendFailed { cost: 600, .. }));
    assert!(inventory.is_empty());
    assert_eq!(session.pity_count(&banner.id), 0);
}

#[test]
fn invalid_banner_is_rejected_before_payment() {
    let banner = BannerConfig::new("broken", vec![PoolEntry::new("x", 1.0, 3)]).with_pity(10, 20);
    let mut session = session();
    let mut wallet = MemoryWallet::new().with_balance(CurrencyType::Certificate, 600);
    let mut inventory = MemoryInventory::new();

    let error = session
        .pull_with_cost(&banner, 1, &mut wallet, &mut inventory)
        .unwrap_err();

    assert!(matches!(error, RuntimeError::InvalidBanner(_)));
    assert_eq!(wallet.balance(CurrencyType::Certificate), 600);
}

#[test]
fn only_the_paid_path_validates_banners() {
    let banner = BannerConfig::new(
        "duplicated",
        vec![PoolEntry::new("x", 1.0, 3), PoolEntry::new("x", 1.0, 4)],
    );
    let mut session = session();

    let report = session.pull(&banner, 2, &EmptyInventory);
    assert_eq!(report.outcomes.len(), 2);
    assert_eq!(session.pity_count(&banner.id), 2);

    let mut wallet = MemoryWallet::new().with_balance(CurrencyType::Certificate, 1_200);
    let mut inventory = MemoryInventory::new();
    let error = session
        .pull_with_cost(&banner, 2, &mut wallet, &mut inventory)
        .unwrap_err();

    assert!(matches!(
        error,
        RuntimeError::InvalidBanner(BannerError::DuplicateItem { .. })
    ));
    assert_eq!(wallet.balance(CurrencyType::Certificate), 1_200);
    assert!(inventory.is_empty());
    assert_eq!(session.pity_count(&banner.id), 2);
}

#[test]
fn sold_out_batch_still_charges_full_price() {
    let banner = BannerConfig::new(
        "one-shot",
        vec![
            PoolEntry::new("prize", 1.0, 5).with_stock_limit(1),
            PoolEntry::new("filler", 0.0, 3),
        ],
    );
    let mut session = GachaSession::with_rng(Lowest, EventBus::new());
    let mut wallet = MemoryWallet::new().with_balance(CurrencyType::Certificate, 6_000);
    let mut inventory = MemoryInventory::new();

    let report = session
        .pull_with_cost(&banner, 10, &mut wallet, &mut inventory)
        .unwrap();

    assert_eq!(report.outcomes.len(), 1);
    assert_eq!(report.shortfall(), 9);
    assert_eq!(wallet.balance(CurrencyType::Certificate), 0);
    assert_eq!(inventory.quantity(&ItemId::new("prize")), 1);
    assert_eq!(session.banner_stock_progress(&banner), (0, 1));
}

#[test]
fn hard_pity_fans_out_to_every_topic() {
    let banner = scenario_banner();
    let mut session = GachaSession::with_rng(Lowest, EventBus::with_capacity(8));
    let mut receivers: Vec<_> = Topic::ALL
        .iter()
        .map(|&topic| (topic, session.subscribe(topic)))
        .collect();

    session.set_pity_count(&banner.id, 9);
    let report = session.pull(&banner, 1, &EmptyInventory);
    assert_eq!(report.outcomes[0].item_id.as_str(), "B");
    assert_eq!(session.pity_count(&banner.id), 0);

    for (topic, rx) in &mut receivers {
        let event = rx.try_recv().unwrap();
        assert_eq!(event.topic(), *topic);
        assert!(rx.try_recv().is_err(), "one event per topic");
    }
}

#[test]
fn pull_event_carries_all_outcomes() {
    let banner = scenario_banner();
    let mut session = session();
    let mut pulls = session.subscribe(Topic::Pull);

    let report = session.pull(&banner, 5, &EmptyInventory);

    match pulls.try_recv().unwrap() {
        Event::Pull(event) => {
            assert_eq!(event.banner, banner.id);
            assert_eq!(event.outcomes, report.outcomes);
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn progress_survives_a_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileSaveRepository::new(dir.path()).unwrap();
    let banner = BannerConfig::new(
        "limited",
        vec![
            PoolEntry::new("common", 5.0, 3),
            PoolEntry::new("crown", 1.0, 4).with_stock_limit(4),
        ],
    )
    .with_pity(50, 40);

    let mut first = session();
    first.pull(&banner, 30, &EmptyInventory);
    first.save(&repo, "main").unwrap();

    let mut second = session();
    assert!(second.load(&repo, "main").unwrap());
    assert_eq!(second.snapshot(), first.snapshot());
    assert_eq!(
        second.remaining_stock(&banner, &ItemId::new("crown")),
        first.remaining_stock(&banner, &ItemId::new("crown"))
    );
    assert_eq!(second.pity_count(&banner.id), first.pity_count(&banner.id));
}

#[test]
fn loading_a_missing_slot_keeps_state() {
    let repo = InMemorySaveRepo::new();
    let banner = scenario_banner();
    let mut session = session();
    session.set_pity_count(&banner.id, 4);

    assert!(!session.load(&repo, "nothing").unwrap());
    assert_eq!(session.pity_count(&banner.id), 4);

    repo.save("blank", &GachaSnapshot::default()).unwrap();
    assert!(session.load(&repo, "blank").unwrap());
    assert_eq!(session.pity_count(&banner.id), 0);
}

#[test]
fn seeded_sessions_are_reproducible() {
    let config = RuntimeConfig::default().with_seed(77);
    let banner = scenario_banner();

    let mut a = GachaSession::new(&config);
    let mut b = GachaSession::new(&config);

    let first = a.pull(&banner, 40, &EmptyInventory);
    let second = b.pull(&banner, 40, &EmptyInventory);
    assert_eq!(first.outcomes, second.outcomes);
}
