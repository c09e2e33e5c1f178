//! Types downstream hosts interact with.
mod errors;
mod wallet;

pub use errors::{Result, RuntimeError};
pub use wallet::{InventoryLedger, MemoryInventory, MemoryWallet, Wallet};
