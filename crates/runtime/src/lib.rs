//! Runtime orchestration for a Lorma Saga game.
//!
//! This crate wires the content oracles, a world collaborator and the rules
//! engine into an intent-level session API. Consumers embed [`GameSession`]
//! to feed input (confirm, move, attack, ...) once per tick and read back
//! [`SessionEvent`]s and snapshots.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session and its builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`oracle`] adapts content rosters for lookups by spawned id
//! - [`world`] defines the collision/proximity seam and an in-memory world
pub mod api;
pub mod oracle;
pub mod session;
pub mod world;

pub use api::{Result, RuntimeError, SessionEvent};
pub use oracle::{ActorOracleImpl, NpcOracleImpl, OracleManager};
pub use session::{GameSession, SessionBuilder};
pub use world::{GridWorld, World, WorldConfig};
