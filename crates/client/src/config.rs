//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

use lorma_core::RestartTarget;

/// Settings of one headless run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Content directory; the bundled data when unset.
    pub data_dir: Option<PathBuf>,
    /// Overrides the seed from `config.toml`.
    pub game_seed: Option<u64>,
    /// Overrides the restart target from `config.toml`.
    pub restart_target: Option<RestartTarget>,
    /// Ticks before the autoplay gives up.
    pub max_ticks: u32,
    /// Also write logs to this file.
    pub log_file: Option<PathBuf>,
}

impl ClientConfig {
    pub const DEFAULT_MAX_TICKS: u32 = 20_000;

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `LORMA_DATA_DIR` - Content directory (default: bundled data)
    /// - `LORMA_SEED` - Game seed (default: from `config.toml`)
    /// - `LORMA_RESTART_TARGET` - `main_menu` or `world`
    /// - `LORMA_MAX_TICKS` - Autoplay tick limit (default: 20000)
    /// - `LORMA_LOG_FILE` - Extra log file
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            data_dir: read("LORMA_DATA_DIR").map(PathBuf::from),
            game_seed: read("LORMA_SEED").and_then(|value| value.trim().parse().ok()),
            restart_target: read("LORMA_RESTART_TARGET")
                .and_then(|value| value.trim().parse().ok()),
            max_ticks: read("LORMA_MAX_TICKS")
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(Self::DEFAULT_MAX_TICKS),
            log_file: read("LORMA_LOG_FILE").map(PathBuf::from),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
