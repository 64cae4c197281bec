//! Game configuration loader.

use std::path::Path;

use lorma_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`GameConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lorma_core::RestartTarget;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("restart_target = \"world\"\n").unwrap();
        assert_eq!(config.restart_target, RestartTarget::World);
        assert_eq!(config.game_seed, GameConfig::DEFAULT_GAME_SEED);
    }

    #[test]
    fn unknown_restart_target_is_rejected() {
        let error = ConfigLoader::parse("restart_target = \"credits\"\n").unwrap_err();
        assert!(error.to_string().contains("Failed to parse config TOML"));
    }
}
