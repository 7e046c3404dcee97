//! Configuration data structures
//!
//! Every field has a default, so a config file only needs the keys it
//! changes. Defaults reproduce the classic game tuning.

use crate::constants::{self, camera, combat, mob, player, timing};
use crate::entities::mob::BounceStrategy;
use serde::{Deserialize, Serialize};

/// Top-level session configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    pub world: WorldSettings,
    pub player: PlayerSettings,
    pub mob: MobSettings,
    pub combat: CombatSettings,
    pub camera: CameraSettings,
    pub session: SessionSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    /// World seed; drawn from entropy when absent
    pub seed: Option<u64>,
    pub block_size: i32,
    pub world_width: u32,
    pub noise_scale: f64,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            seed: None,
            block_size: constants::core::BLOCK_SIZE,
            world_width: constants::core::WORLD_WIDTH,
            noise_scale: constants::core::NOISE_SCALE,
            viewport_width: constants::core::VIEWPORT_WIDTH,
            viewport_height: constants::core::VIEWPORT_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub width: f32,
    pub height: f32,
    /// Pixels per tick
    pub speed: f32,
    pub jump_power: f32,
    pub gravity: f32,
    pub terminal_velocity: f32,
    pub max_health: u32,
    pub fall_damage_threshold_blocks: f32,
    pub fall_damage: u32,
    pub interaction_range_blocks: i32,
    pub respawn_delay_ticks: u32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            width: player::WIDTH,
            height: player::HEIGHT,
            speed: player::SPEED,
            jump_power: player::JUMP_POWER,
            gravity: player::GRAVITY,
            terminal_velocity: player::TERMINAL_VELOCITY,
            max_health: player::MAX_HEALTH,
            fall_damage_threshold_blocks: player::FALL_DAMAGE_THRESHOLD_BLOCKS,
            fall_damage: player::FALL_DAMAGE,
            interaction_range_blocks: player::INTERACTION_RANGE_BLOCKS,
            respawn_delay_ticks: player::RESPAWN_DELAY_TICKS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MobSettings {
    pub size: f32,
    /// Pixels per tick at direction 1.0
    pub speed: f32,
    pub gravity: f32,
    pub jump_power: f32,
    /// Per-tick jump probability while grounded
    pub jump_chance: f64,
    pub max_health: u32,
    /// Damage dealt to the player each tick they overlap
    pub contact_damage: u32,
    pub spawn_interval_ticks: u32,
    /// Spawn x is the player x plus a uniform offset in `[-spawn_offset, spawn_offset]`
    pub spawn_offset: i32,
    pub cull_margin: f32,
    pub bounce: BounceStrategy,
}

impl Default for MobSettings {
    fn default() -> Self {
        Self {
            size: mob::SIZE,
            speed: mob::SPEED,
            gravity: mob::GRAVITY,
            jump_power: mob::JUMP_POWER,
            jump_chance: mob::JUMP_CHANCE,
            max_health: mob::MAX_HEALTH,
            contact_damage: mob::CONTACT_DAMAGE,
            spawn_interval_ticks: mob::SPAWN_INTERVAL_TICKS,
            spawn_offset: mob::SPAWN_OFFSET,
            cull_margin: mob::CULL_MARGIN,
            bounce: BounceStrategy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatSettings {
    pub cooldown_ticks: u32,
    pub range: f32,
    pub damage: u32,
}

impl Default for CombatSettings {
    fn default() -> Self {
        Self {
            cooldown_ticks: combat::ATTACK_COOLDOWN_TICKS,
            range: combat::ATTACK_RANGE,
            damage: combat::ATTACK_DAMAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub zoom_step: f32,
    pub min_zoom: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            zoom_step: camera::ZOOM_STEP,
            min_zoom: camera::MIN_ZOOM,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub ticks_per_second: u32,
    pub max_ticks_per_frame: u32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            ticks_per_second: timing::TICKS_PER_SECOND,
            max_ticks_per_frame: timing::MAX_TICKS_PER_FRAME,
        }
    }
}
