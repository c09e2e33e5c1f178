//! Repository layer for gacha progress.
//!
//! Repositories persist the data that CHANGES while playing: pity counters
//! and stock ledgers, captured as a [`gacha_core::GachaSnapshot`] per save
//! slot. Banner definitions are static and never stored here.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileSaveRepository;
pub use memory::InMemorySaveRepo;
pub use traits::SaveRepository;
