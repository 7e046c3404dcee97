//! Mob data - NO METHODS beyond asset lookup

use crate::physics::KinematicBody;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MobKind {
    #[default]
    Slime,
}

impl MobKind {
    pub fn asset_path(self) -> &'static str {
        match self {
            MobKind::Slime => "images/mobs/slime.png",
        }
    }
}

/// How a mob's travel direction changes when it walks into a wall
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BounceStrategy {
    /// Clean flip: `direction = -direction`
    #[default]
    Reverse,

    /// Flip and scale by 0.1, so every wall hit shrinks the patrol speed
    Damped,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MobData {
    pub kind: MobKind,
    pub body: KinematicBody,

    /// Multiplier on the patrol speed. Sign is the travel direction.
    pub direction: f32,

    pub health: u32,
    pub max_health: u32,
}

/// Population timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MobSpawner {
    pub interval_ticks: u32,
    pub ticks_until_spawn: u32,
}

/// Region mobs must stay inside to remain live. Pixels, world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CullWindow {
    pub min_x: f32,
    pub max_x: f32,
    pub max_y: f32,
}
