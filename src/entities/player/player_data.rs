//! Player data - NO METHODS, just state

use crate::physics::KinematicBody;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Horizontal facing, drives the attack side and the sprite choice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facing {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerData {
    pub body: KinematicBody,

    pub facing: Facing,

    /// Always within `0..=max_health`
    pub health: u32,
    pub max_health: u32,

    /// Where the player reappears after dying
    pub spawn_point: Vec2,

    /// Set by a jump, cleared on landing. Blocks re-triggering mid-air.
    pub jumping: bool,

    /// Highest point (smallest y) reached since last leaving the ground
    pub fall_apex_y: Option<f32>,
}

/// What happened to the player during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerTickOutcome {
    pub landed: bool,

    /// Blocks fallen, reported on the landing tick
    pub fall_distance_blocks: Option<f32>,

    pub damage_taken: u32,

    /// Health reached zero this tick
    pub died: bool,
}
