/// Mob Module
///
/// - mob_data.rs: mob state, bounce strategy, spawner timer
/// - mob_operations.rs: patrol AI, damage, culling and spawning

pub mod mob_data;
pub mod mob_operations;

pub use mob_data::{BounceStrategy, CullWindow, MobData, MobKind, MobSpawner};

pub use mob_operations::{
    // Initialization
    create_mob,
    create_spawner,

    // Per-tick
    update_mob,
    apply_bounce,

    // Health
    take_damage,

    // Population
    cull_window,
    is_outside_window,
    tick_spawner,
    try_spawn_mob,
    mob_aabb,
};
