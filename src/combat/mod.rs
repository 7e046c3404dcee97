/// Combat Module - melee attacks against mobs
///
/// - combat_data.rs: cooldown state and attack outcomes
/// - combat_operations.rs: hit volume, damage and removal

pub mod combat_data;
pub mod combat_operations;

pub use combat_data::{AttackOutcome, AttackState};

pub use combat_operations::{attack_volume, create_attack_state, tick_cooldown, try_attack};
