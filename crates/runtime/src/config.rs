//! Runtime configuration and its environment loader.
use std::env;
use std::path::PathBuf;

/// Settings for a [`crate::GachaSession`] and its persistence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Seed for a reproducible random source; entropy when `None`.
    pub seed: Option<u64>,
    /// Capacity of each event bus topic.
    pub event_buffer_size: usize,
    /// Directory for file saves; platform data dir when `None`.
    pub save_dir: Option<PathBuf>,
    pub save_slot: String,
}

impl RuntimeConfig {
    pub const DEFAULT_EVENT_BUFFER: usize = 64;
    pub const DEFAULT_SAVE_SLOT: &'static str = "default";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GACHA_SEED` - Seed for the random source (default: entropy)
    /// - `GACHA_EVENT_BUFFER` - Event bus capacity per topic (default: 64)
    /// - `GACHA_SAVE_DIR` - Directory for save files (default: platform-specific)
    /// - `GACHA_SAVE_SLOT` - Save slot name (default: `default`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.seed = read_env::<u64>("GACHA_SEED");

        if let Some(capacity) = read_env::<usize>("GACHA_EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }

        config.save_dir = env::var("GACHA_SAVE_DIR").ok().map(PathBuf::from);

        if let Ok(slot) = env::var("GACHA_SAVE_SLOT")
            && !slot.trim().is_empty()
        {
            config.save_slot = slot.trim().to_string();
        }

        config
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Save directory, falling back to the platform data directory.
    ///
    /// - Linux: `~/.local/share/gacha` (or `$XDG_DATA_HOME/gacha`)
    /// - macOS: `~/Library/Application Support/gacha`
    /// - Windows: `%APPDATA%\gacha`
    /// - Fallback: `./save_data`
    pub fn resolved_save_dir(&self) -> PathBuf {
        if let Some(dir) = &self.save_dir {
            return dir.clone();
        }
        directories::ProjectDirs::from("", "", "gacha")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("./save_data"))
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            event_buffer_size: Self::DEFAULT_EVENT_BUFFER,
            save_dir: None,
            save_slot: Self::DEFAULT_SAVE_SLOT.to_string(),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RuntimeConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.event_buffer_size, 64);
        assert_eq!(config.save_slot, "default");
    }

    #[test]
    fn explicit_save_dir_wins() {
        let config = RuntimeConfig {
            save_dir: Some(PathBuf::from("/tmp/saves")),
            ..RuntimeConfig::default()
        };
        assert_eq!(config.resolved_save_dir(), PathBuf::from("/tmp/saves"));
    }
}
