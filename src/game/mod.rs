//! Game Module - the world coordinator
//!
//! - world_data.rs: the `World` aggregate, tick reports, scene handoff, notifications
//! - world_operations.rs: world creation, the tick pipeline, block edits, save/load
//! - timestep_data.rs / timestep_operations.rs: fixed-rate clock driving `tick_world`

pub mod timestep_data;
pub mod timestep_operations;
pub mod world_data;
pub mod world_operations;

pub use timestep_data::FixedTimestep;
pub use world_data::{
    MobView, Notification, NotificationLevel, PlayerView, SceneView, TickReport, World,
};

pub use timestep_operations::{
    advance_timestep, create_timestep, interpolation_alpha, pause_timestep, resume_timestep,
};

pub use world_operations::{
    // Lifecycle
    create_world,
    floor_y,

    // Tick
    tick_world,

    // Palette and block edits
    cycle_palette,
    selected_block,
    place_selected_block,
    remove_block_in_range,

    // Scene handoff
    build_scene,

    // Notifications
    push_notification,
    drain_notifications,

    // Save / load
    save_game,
    load_game,
};
