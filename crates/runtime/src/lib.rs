//! Host-side orchestration around the gacha engine.
//!
//! The core crate resolves draws against explicit state and returns signals;
//! this crate owns that state for a play session and connects it to the
//! outside world. Consumers embed a [`GachaSession`] to pull, charge a
//! [`Wallet`], credit an [`InventoryLedger`], subscribe to events, and save or
//! load progress.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session façade
//! - [`api`] exposes errors and the wallet/inventory capabilities hosts implement
//! - [`events`] provides a topic-based event bus for signal fan-out
//! - [`repository`] persists snapshots between runs
//! - [`config`] and [`random`] cover environment-driven setup
pub mod api;
pub mod config;
pub mod events;
pub mod random;
pub mod repository;
pub mod session;

pub use api::{InventoryLedger, MemoryInventory, MemoryWallet, Result, RuntimeError, Wallet};
pub use config::RuntimeConfig;
pub use events::{
    Event, EventBus, HighRarityEvent, PityEvent, PullEvent, StatsEvent, Topic, extract_events,
};
pub use random::StdRandom;
pub use repository::{FileSaveRepository, InMemorySaveRepo, RepositoryError, SaveRepository};
pub use session::GachaSession;
