//! Injected collaborators of the rules core.
//!
//! Oracles expose static content (player, enemy and NPC templates) and the
//! random source. Concrete implementations live in the runtime and content
//! crates so the core never reads files or owns a generator state it cannot
//! replay.
mod actors;
mod npc;
mod rng;

pub use actors::{ActorOracle, EnemySpawn, EnemyTemplate, PlayerTemplate};
pub use npc::{NpcOracle, NpcSpawn, NpcTemplate};
pub use rng::{Dice, FixedRng, PcgRng, RngOracle, SequenceRng, compute_seed};
