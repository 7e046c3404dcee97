// Hearth Sandbox - Data-Oriented Programming (DOP) Architecture
//
// A side-scrolling tile sandbox simulation: noise terrain, a mutable block
// grid, platformer physics, mobs and melee combat, driven by a fixed-rate
// tick. Rendering, windowing and audio live outside this crate; it hands a
// `SceneView` to whatever presents the frame.
//
// Every subsystem follows the same layout:
// - *_data.rs: plain data, no behaviour
// - *_operations.rs: free functions transforming that data

// Constants module
pub mod constants;

// Core crate modules
pub mod config;
pub mod error;

// Simulation
pub mod camera;
pub mod combat;
pub mod entities;
pub mod game;
pub mod input;
pub mod noise;
pub mod persistence;
pub mod physics;
pub mod world;

pub use camera::CameraData;
pub use config::{load_config, SandboxConfig};
pub use entities::{Facing, MobData, PlayerData};
pub use error::{ErrorContext, OptionExt, SandboxError, SandboxResult};
pub use game::{
    advance_timestep, build_scene, create_timestep, create_world, drain_notifications,
    load_game, save_game, tick_world, FixedTimestep, Notification, NotificationLevel, SceneView,
    TickReport, World,
};
pub use input::{InputFrame, ZoomIntent};
pub use physics::AABB;
pub use world::{Block, BlockKind, BlockStore};
