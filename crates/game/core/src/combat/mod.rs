//! Combat arithmetic.
//!
//! Pure, side-effect free formulas used by the battle engine and the stats
//! model. Rolls are passed in as already-drawn d100 values so every function
//! here is deterministic.
//!
//! - `damage`: skill/crit scaling, defense mitigation, rounding
//! - `hit`: dodge and critical checks
//! - `result`: per-attack outcome records

pub mod damage;
pub mod hit;
pub mod result;

pub use damage::{critical_damage, mitigate, round_scaled, scale_percent, skill_damage};
pub use hit::{check_critical, check_dodge, dodge_chance};
pub use result::{AttackOutcome, AttackResult};
