/// Config Module
///
/// - config_data.rs: serde-backed settings with defaults
/// - config_operations.rs: loading, validation and derived parameters

pub mod config_data;
pub mod config_operations;

pub use config_data::{
    CameraSettings, CombatSettings, MobSettings, PlayerSettings, SandboxConfig, SessionSettings,
    WorldSettings,
};

pub use config_operations::{
    load_config, mob_gravity, parse_config, player_gravity, resolve_seed, terrain_params,
    validate_config,
};
