//! World data - the single aggregate a play session owns
//!
//! NO METHODS. All transformations happen in world_operations.rs

use crate::camera::CameraData;
use crate::combat::{AttackOutcome, AttackState};
use crate::config::SandboxConfig;
use crate::entities::mob::{MobData, MobKind, MobSpawner};
use crate::entities::player::{Facing, PlayerData, PlayerTickOutcome};
use crate::world::block::{Block, BlockKind};
use crate::world::block_store::BlockStore;
use glam::Vec2;
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Severity of an operator-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Success,
}

/// Non-fatal report queued for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

pub struct World {
    pub config: SandboxConfig,

    /// Seed the terrain and the world RNG were drawn from
    pub seed: u64,

    pub blocks: BlockStore,
    pub mobs: Vec<MobData>,
    pub player: PlayerData,
    pub camera: CameraData,

    /// Index into `BlockKind::PALETTE`
    pub palette_index: usize,

    pub attack: AttackState,
    pub spawner: MobSpawner,

    /// Drives mob hops and spawn offsets
    pub rng: ChaCha8Rng,

    /// Ticks simulated since creation, including respawn-delay ticks
    pub tick: u64,

    /// While non-zero the player and mobs are frozen
    pub respawn_ticks_remaining: u32,

    pub notifications: VecDeque<Notification>,
}

/// What one tick did
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickReport {
    pub tick: u64,

    /// Tick spent waiting out the respawn delay
    pub respawning: bool,

    pub player: PlayerTickOutcome,
    pub contact_damage: u32,

    /// Player health hit zero this tick and was reset
    pub died: bool,

    pub attack: AttackOutcome,
    pub block_placed: Option<Block>,
    pub block_removed: Option<Block>,
    pub mobs_culled: u32,
    pub mob_spawned: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerView {
    pub position: Vec2,
    pub size: Vec2,
    pub facing: Facing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobView {
    pub kind: MobKind,
    pub position: Vec2,
    pub size: Vec2,
}

/// Everything a renderer needs for one frame, borrowed from the world
#[derive(Debug, Clone, PartialEq)]
pub struct SceneView<'a> {
    pub blocks: &'a [Block],
    pub block_size: i32,
    pub mobs: Vec<MobView>,
    pub player: PlayerView,
    pub camera_offset: Vec2,
    pub zoom: f32,
    pub palette_index: usize,
    pub selected_block: BlockKind,
    pub health: u32,
    pub max_health: u32,
    pub respawning: bool,
}
