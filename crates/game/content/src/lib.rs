//! Lorma Saga content: the built-in roster and data-file loaders.
//!
//! - [`Roster`]: player template, enemy and boss templates, NPC dialogue and
//!   spawn points of the Lorma School map
//! - `loaders`: RON/TOML readers for the same data, plus `config.toml`
//!
//! Content is consumed by runtime oracles and never appears in game state.

pub mod roster;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use roster::{Roster, Spawns};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, EnemyLoader, LoadResult, NpcLoader, PlayerLoader, SpawnLoader,
};
