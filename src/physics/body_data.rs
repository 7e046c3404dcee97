//! Kinematic body data shared by the player and mobs
//!
//! Pure data. Integration and collision response live in
//! kinematics_operations.rs

use glam::Vec2;

/// Moving axis-aligned box.
///
/// `position` is the top-left corner in pixels, +y down. Only the vertical
/// velocity is stored; horizontal motion is a per-tick displacement chosen by
/// the owner (input for the player, patrol for mobs).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicBody {
    pub position: Vec2,
    pub size: Vec2,
    pub velocity_y: f32,

    /// Set when the last vertical resolution left the body supported
    pub grounded: bool,
}

/// Per-entity vertical integration parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityParams {
    /// Added to `velocity_y` every tick
    pub gravity: f32,

    /// Gravity stops accumulating once `velocity_y` reaches this
    pub terminal_velocity: Option<f32>,
}

/// Outcome of a vertical resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerticalContact {
    /// Snapped on top of a block while falling
    pub landed: bool,

    /// Snapped below a block while rising
    pub hit_ceiling: bool,
}

impl KinematicBody {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            velocity_y: 0.0,
            grounded: false,
        }
    }
}
