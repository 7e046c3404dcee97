//! Entities - the player and the mobs that share the world with them
//!
//! Both are thin layers over `physics::KinematicBody`.

pub mod mob;
pub mod player;

pub use mob::{BounceStrategy, CullWindow, MobData, MobKind, MobSpawner};
pub use player::{Facing, PlayerData, PlayerTickOutcome};
