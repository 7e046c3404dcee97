//! Player operations
//!
//! The player runs the shared body tick, then three player-only rules: the
//! floor clamp, fall damage on landing, and respawn at zero health.

use super::player_data::{Facing, PlayerData, PlayerTickOutcome};
use crate::config::PlayerSettings;
use crate::input::InputFrame;
use crate::physics::{
    body_aabb, body_bottom, integrate_vertical, move_horizontal, resolve_horizontal,
    resolve_vertical, GravityParams, KinematicBody,
};
use crate::world::block_store::{iter_blocks, BlockStore};
use glam::Vec2;

// ============================================================================
// INITIALIZATION
// ============================================================================

pub fn create_player(settings: &PlayerSettings, spawn_point: Vec2) -> PlayerData {
    PlayerData {
        body: KinematicBody::new(spawn_point, Vec2::new(settings.width, settings.height)),
        facing: Facing::default(),
        health: settings.max_health,
        max_health: settings.max_health,
        spawn_point,
        jumping: false,
        fall_apex_y: None,
    }
}

/// Spawn position standing on the highest solid block under `[x, x + width)`.
///
/// Falls back to standing on `floor_y` when the column is empty.
pub fn find_spawn_point(store: &BlockStore, settings: &PlayerSettings, x: f32, floor_y: f32) -> Vec2 {
    let size = store.block_size as f32;
    let surface = iter_blocks(store)
        .filter(|block| block.blocks_player())
        .filter(|block| (block.x as f32) < x + settings.width && block.x as f32 + size > x)
        .map(|block| block.y as f32)
        .fold(floor_y, f32::min);

    Vec2::new(x, surface - settings.height)
}

// ============================================================================
// PER-TICK
// ============================================================================

/// Horizontal displacement for this tick's intents. Updates facing; when both
/// directions are held the moves cancel and the player ends up facing right.
pub fn movement_delta(player: &mut PlayerData, input: &InputFrame, speed: f32) -> f32 {
    let mut dx = 0.0;
    if input.move_left {
        dx -= speed;
        player.facing = Facing::Left;
    }
    if input.move_right {
        dx += speed;
        player.facing = Facing::Right;
    }
    dx
}

/// Start a jump if grounded and not already mid-jump. Returns whether it fired.
pub fn try_jump(player: &mut PlayerData, jump_power: f32) -> bool {
    if !player.body.grounded || player.jumping || player.body.velocity_y != 0.0 {
        return false;
    }

    player.body.velocity_y = -jump_power;
    player.body.grounded = false;
    player.jumping = true;
    true
}

/// Advance the player one tick.
///
/// `dx` is this tick's horizontal displacement (see `movement_delta`);
/// `floor_y` is the lowest y the player's feet may reach.
pub fn update_player(
    player: &mut PlayerData,
    store: &BlockStore,
    settings: &PlayerSettings,
    floor_y: f32,
    dx: f32,
) -> PlayerTickOutcome {
    let gravity = GravityParams {
        gravity: settings.gravity,
        terminal_velocity: Some(settings.terminal_velocity),
    };
    let start_y = player.body.position.y;

    integrate_vertical(&mut player.body, &gravity);
    resolve_vertical(&mut player.body, store);
    move_horizontal(&mut player.body, dx);
    resolve_horizontal(&mut player.body, store, dx);

    if body_bottom(&player.body) > floor_y {
        player.body.position.y = floor_y - player.body.size.y;
        player.body.velocity_y = 0.0;
        player.body.grounded = true;
    }

    let mut outcome = PlayerTickOutcome::default();

    if player.body.grounded {
        if let Some(apex) = player.fall_apex_y.take() {
            let fall_blocks = (player.body.position.y - apex) / store.block_size as f32;
            outcome.landed = true;
            outcome.fall_distance_blocks = Some(fall_blocks);

            if fall_blocks > settings.fall_damage_threshold_blocks {
                log::debug!(
                    "[update_player] Fell {:.1} blocks, taking {} damage",
                    fall_blocks,
                    settings.fall_damage
                );
                outcome.damage_taken = settings.fall_damage;
                outcome.died = damage_player(player, settings.fall_damage);
            }
        }
        player.jumping = false;
    } else {
        let highest = player.fall_apex_y.map_or(start_y, |apex| apex.min(start_y));
        player.fall_apex_y = Some(highest.min(player.body.position.y));
    }

    log::trace!(
        "[update_player] pos=({:.1}, {:.1}) vy={:.1} grounded={}",
        player.body.position.x,
        player.body.position.y,
        player.body.velocity_y,
        player.body.grounded
    );

    outcome
}

// ============================================================================
// HEALTH
// ============================================================================

/// Subtract health, saturating at zero. Returns true when the player is dead.
pub fn damage_player(player: &mut PlayerData, amount: u32) -> bool {
    player.health = player.health.saturating_sub(amount);
    player.health == 0
}

/// Back to the spawn point at full health
pub fn respawn_player(player: &mut PlayerData) {
    log::info!(
        "[respawn_player] Respawning at ({:.1}, {:.1})",
        player.spawn_point.x,
        player.spawn_point.y
    );

    player.body.position = player.spawn_point;
    player.body.velocity_y = 0.0;
    player.body.grounded = false;
    player.health = player.max_health;
    player.jumping = false;
    player.fall_apex_y = None;
}

// ============================================================================
// INTERACTION
// ============================================================================

/// Whether a world-space point is within `range_blocks` blocks of the player
/// on both axes
pub fn within_interaction_range(
    player: &PlayerData,
    point: Vec2,
    block_size: i32,
    range_blocks: i32,
) -> bool {
    let reach = (range_blocks * block_size) as f32;
    let delta = (point - player.body.position).abs();
    delta.x <= reach && delta.y <= reach
}

/// Player bounding box, for overlap checks against mobs
pub fn player_aabb(player: &PlayerData) -> crate::physics::AABB {
    body_aabb(&player.body)
}
