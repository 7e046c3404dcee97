/// Player Module
///
/// - player_data.rs: player state
/// - player_operations.rs: movement, fall damage, health and respawn

pub mod player_data;
pub mod player_operations;

pub use player_data::{Facing, PlayerData, PlayerTickOutcome};

pub use player_operations::{
    // Initialization
    create_player,
    find_spawn_point,

    // Per-tick
    update_player,
    movement_delta,
    try_jump,

    // Health
    damage_player,
    respawn_player,

    // Interaction
    within_interaction_range,
    player_aabb,
};
