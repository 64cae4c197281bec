//! Headless Lorma Saga client.
//!
//! Loads content, builds a [`lorma_runtime::GameSession`] over the in-memory
//! [`lorma_runtime::GridWorld`], and lets [`Autoplay`] drive it. Used for
//! smoke runs and for reading the session's logs without a renderer.
mod autoplay;
pub mod config;
pub mod logging;

pub use autoplay::{Autoplay, AutoplayReport};
pub use config::ClientConfig;

use anyhow::Result;
use lorma_content::ContentFactory;
use lorma_core::GameConfig;
use lorma_runtime::{GameSession, GridWorld, OracleManager};

/// Loads content and configuration, then applies the environment overrides.
pub fn build_session(config: &ClientConfig) -> Result<GameSession<GridWorld>> {
    let factory = match &config.data_dir {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::bundled(),
    };
    tracing::info!("Loading content from {}", factory.data_dir().display());

    let mut game_config: GameConfig = factory.load_config()?;
    if let Some(seed) = config.game_seed {
        game_config.game_seed = seed;
    }
    if let Some(target) = config.restart_target {
        game_config.restart_target = target;
    }
    let roster = factory.load_roster()?;

    tracing::debug!(
        enemies = roster.spawns.enemies.len(),
        npcs = roster.spawns.npcs.len(),
        "Roster loaded"
    );

    let session = GameSession::builder()
        .config(game_config)
        .oracles(OracleManager::from_roster(roster))
        .world(GridWorld::default())
        .build()?;
    Ok(session)
}
