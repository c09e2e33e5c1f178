//! Gacha drop simulator.
//!
//! Composition root that builds a [`runtime::GachaSession`] over the built-in
//! demo catalog, runs paid batches against a banner, and prints the drop
//! distribution next to the banner's advertised rates.
//!
//! ```bash
//! # 1000 ten-pulls on the limited banner, reproducible
//! cargo run -p gacha-sim -- --banner festival --pulls 10000 --seed 7
//!
//! # Show every banner with its rate table
//! cargo run -p gacha-sim -- --list
//! ```

mod catalog;
mod stats;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use gacha_core::{
    BannerCatalog, BannerConfig, BannerId, DrawError, EmptyInventory, RateTable,
    is_banner_unlocked, pool_progress,
};
use runtime::{
    Event, FileSaveRepository, GachaSession, MemoryInventory, MemoryWallet, RuntimeConfig, Topic,
};
use tokio::sync::broadcast::{Receiver, error::TryRecvError};
use tracing_subscriber::EnvFilter;

use crate::catalog::demo_catalog;
use crate::stats::DropStats;

/// Simulate pulls on the demo banners
#[derive(Parser)]
#[command(name = "gacha-sim")]
#[command(about = "Simulate gacha pulls and report drop statistics", long_about = None)]
#[command(version)]
struct Cli {
    /// Banner to pull on (defaults to the first banner)
    #[arg(short, long, value_name = "BANNER")]
    banner: Option<String>,

    /// Total draws to simulate
    #[arg(short, long, default_value_t = 1_000)]
    pulls: u32,

    /// Draws per paid batch; 10 uses the bulk price
    #[arg(long, default_value_t = 10)]
    batch: u32,

    /// Seed for reproducible runs (overrides GACHA_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// List banners with their rate tables and exit
    #[arg(long)]
    list: bool,

    /// Resume from and save to the configured save slot
    #[arg(long)]
    persist: bool,
}

fn main() -> Result<()> {
    // Load .env file if it exists (for GACHA_* variables and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = demo_catalog();

    if cli.list {
        list_banners(&catalog);
        return Ok(());
    }

    let mut config = RuntimeConfig::from_env();
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    let banner = match &cli.banner {
        Some(id) => catalog
            .get(&BannerId::new(id.as_str()))
            .with_context(|| format!("Unknown banner '{id}' (try --list)"))?,
        None => catalog.all().first().context("Demo catalog is empty")?,
    };

    run(&cli, &config, &catalog, banner)
}

fn run(
    cli: &Cli,
    config: &RuntimeConfig,
    catalog: &BannerCatalog,
    banner: &BannerConfig,
) -> Result<()> {
    let mut session = GachaSession::new(config);
    let mut receivers = session
        .event_bus()
        .subscribe_multiple(&[Topic::Pity, Topic::HighRarity]);

    let repo = if cli.persist {
        let dir = config.resolved_save_dir();
        let repo = FileSaveRepository::new(&dir)
            .with_context(|| format!("Failed to open save directory: {}", dir.display()))?;
        if session.load(&repo, &config.save_slot)? {
            tracing::info!("Resumed from slot '{}'", config.save_slot);
        }
        Some(repo)
    } else {
        None
    };

    let mut wallet = MemoryWallet::new();
    let mut inventory = MemoryInventory::new();
    let mut stats = DropStats::new();

    if !is_banner_unlocked(banner, catalog, &inventory) {
        tracing::warn!("Banner '{}' is locked for a fresh account; simulating anyway", banner.id);
    }

    tracing::info!(
        "Simulating {} draws on '{}' in batches of {}",
        cli.pulls,
        banner.id,
        cli.batch
    );

    let mut remaining = cli.pulls;
    while remaining > 0 {
        let count = remaining.min(cli.batch.max(1));
        let cost = banner.cost.for_count(count);
        wallet.deposit(banner.cost.currency, cost);

        let report = session.pull_with_cost(banner, count, &mut wallet, &mut inventory)?;
        stats.record(&report, cost);
        for (topic, rx) in &mut receivers {
            let seen = drain(rx);
            match topic {
                Topic::Pity => stats.pity_hits += seen,
                Topic::HighRarity => stats.high_rarity += seen,
                Topic::Pull | Topic::Stats => {}
            }
        }
        remaining -= count;

        if report
            .failures
            .iter()
            .any(|failure| matches!(failure, DrawError::SoldOut { .. }))
        {
            tracing::info!("Banner '{}' sold out with {} draws left", banner.id, remaining);
            break;
        }
    }

    if let Some(repo) = &repo {
        session.save(repo, &config.save_slot)?;
        tracing::info!("Saved progress to slot '{}'", config.save_slot);
    }

    print_report(&mut session, banner, &inventory, &stats);
    Ok(())
}

/// Counts queued events, including any the receiver lagged past.
fn drain(rx: &mut Receiver<Event>) -> u64 {
    let mut count = 0;
    loop {
        match rx.try_recv() {
            Ok(_) => count += 1,
            Err(TryRecvError::Lagged(skipped)) => count += skipped,
            Err(TryRecvError::Empty | TryRecvError::Closed) => return count,
        }
    }
}

fn print_report(
    session: &mut GachaSession,
    banner: &BannerConfig,
    inventory: &MemoryInventory,
    stats: &DropStats,
) {
    println!("{}", style(format!("== {} ({}) ==", banner.name, banner.id)).bold());
    print!("{stats}");

    println!("{}", style("advertised rates").dim());
    print!("{}", RateTable::for_banner(banner));

    let (owned, total) = pool_progress(banner, inventory);
    println!("collection: {owned}/{total}");
    println!("pity counter: {}", session.pity_count(&banner.id));

    if banner.has_limited_stock() {
        let (left, stock) = session.banner_stock_progress(banner);
        println!("stock: {left}/{stock}");
    }
}

fn list_banners(catalog: &BannerCatalog) {
    for banner in catalog.all() {
        let kind = if banner.is_limited { "limited" } else { "permanent" };
        println!(
            "{} {} [{}]",
            style(banner.id.as_str()).bold(),
            banner.name,
            style(kind).cyan()
        );
        println!(
            "  cost: {} {} / {} for ten",
            banner.cost.single, banner.cost.currency, banner.cost.ten
        );
        if banner.has_pity {
            println!(
                "  pity: soft from {}, guaranteed at {}",
                banner.soft_pity_start, banner.pity_count
            );
        }
        if !is_banner_unlocked(banner, catalog, &EmptyInventory) {
            println!("  {}", style("locked").yellow());
        }
        for line in RateTable::for_banner(banner).to_string().lines() {
            println!("  {line}");
        }
        for entry in banner.pool.iter().filter(|entry| entry.has_stock_limit()) {
            if let Some(limit) = entry.stock_limit {
                println!("  stock: {} x{}", entry.item_id, limit);
            }
        }
    }
}
