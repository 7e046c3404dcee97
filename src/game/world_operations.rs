//! World operations - session lifecycle and the per-tick pipeline
//!
//! Tick order:
//! 1. input (palette, zoom, block edits, movement intent, jump, attack)
//! 2. player physics and fall damage
//! 3. mob contact damage
//! 4. mob updates
//! 5. prune dead and out-of-window mobs
//! 6. spawn timer
//! 7. attack cooldown
//! 8. camera follow
//!
//! A death resets the player and freezes the simulation for the respawn
//! delay. Frozen ticks only count down and keep the camera on the player.

use super::world_data::{
    MobView, Notification, NotificationLevel, PlayerView, SceneView, TickReport, World,
};
use crate::camera::{follow, init_camera_from_config, zoom_in, zoom_out};
use crate::combat::{create_attack_state, tick_cooldown, try_attack};
use crate::config::{resolve_seed, terrain_params, validate_config, SandboxConfig};
use crate::entities::mob::{
    create_spawner, cull_window, is_outside_window, mob_aabb, tick_spawner, try_spawn_mob,
    update_mob,
};
use crate::entities::player::{
    create_player, damage_player, find_spawn_point, movement_delta, player_aabb, respawn_player,
    try_jump, update_player, within_interaction_range,
};
use crate::error::{SandboxError, SandboxResult};
use crate::input::{InputFrame, ZoomIntent};
use crate::noise::create_noise;
use crate::persistence::{
    apply_record, capture_record, load_from_path, save_to_path, PersistenceError,
};
use crate::physics::aabb::aabb_intersects;
use crate::world::block::{Block, BlockKind};
use crate::world::block_store::{
    create_block_store_with, place_block, remove_block_at, snap_to_grid,
};
use crate::world::terrain::generate_terrain;
use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;
use std::path::Path;

// ============================================================================
// LIFECYCLE
// ============================================================================

/// Generate a fresh world: terrain, player on the surface, camera on the player
pub fn create_world(config: SandboxConfig) -> SandboxResult<World> {
    validate_config(&config).map_err(|e| SandboxError::InvalidConfig {
        field: "config".to_string(),
        value: String::new(),
        reason: e.to_string(),
    })?;

    let seed = resolve_seed(&config);
    let noise = create_noise(seed);
    let params = terrain_params(&config);
    let blocks = create_block_store_with(params.block_size, generate_terrain(&noise, &params))?;

    let floor = floor_y(&config);
    let spawn_x = config.world.viewport_width / 2.0 - config.player.width / 2.0;
    let spawn = find_spawn_point(&blocks, &config.player, spawn_x, floor);
    let player = create_player(&config.player, spawn);

    let camera = follow(&init_camera_from_config(&config), player.body.position);

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(1);

    log::info!(
        "[create_world] Generated {} blocks from seed {}, player spawn ({:.1}, {:.1})",
        blocks.blocks.len(),
        seed,
        spawn.x,
        spawn.y
    );

    Ok(World {
        seed,
        blocks,
        mobs: Vec::new(),
        player,
        camera,
        palette_index: 0,
        attack: create_attack_state(),
        spawner: create_spawner(config.mob.spawn_interval_ticks),
        rng,
        tick: 0,
        respawn_ticks_remaining: 0,
        notifications: VecDeque::new(),
        config,
    })
}

/// Lowest y the player's feet may reach
pub fn floor_y(config: &SandboxConfig) -> f32 {
    config.world.viewport_height
}

// ============================================================================
// TICK
// ============================================================================

/// Run one simulation tick
pub fn tick_world(world: &mut World, input: &InputFrame) -> TickReport {
    world.tick += 1;
    let mut report = TickReport {
        tick: world.tick,
        ..TickReport::default()
    };

    if world.respawn_ticks_remaining > 0 {
        world.respawn_ticks_remaining -= 1;
        report.respawning = true;
        world.camera = follow(&world.camera, world.player.body.position);
        if world.respawn_ticks_remaining == 0 {
            log::debug!("[tick_world] Respawn delay over");
        }
        return report;
    }

    // Input
    if input.palette_step != 0 {
        world.palette_index = cycle_palette(world.palette_index, input.palette_step);
    }
    match input.zoom {
        ZoomIntent::In => world.camera = zoom_in(&world.camera),
        ZoomIntent::Out => world.camera = zoom_out(&world.camera),
        ZoomIntent::None => {}
    }
    if let Some(point) = input.place_block {
        report.block_placed = place_selected_block(world, point);
    }
    if let Some(point) = input.remove_block {
        report.block_removed = remove_block_in_range(world, point);
    }

    let dx = movement_delta(&mut world.player, input, world.config.player.speed);
    if input.jump {
        try_jump(&mut world.player, world.config.player.jump_power);
    }
    if input.attack {
        report.attack = try_attack(
            &mut world.attack,
            &world.player,
            &mut world.mobs,
            &world.config.combat,
        );
    }

    // Player
    let floor = floor_y(&world.config);
    report.player = update_player(
        &mut world.player,
        &world.blocks,
        &world.config.player,
        floor,
        dx,
    );
    let mut died = report.player.died;

    // Contact damage
    if !died {
        let player_box = player_aabb(&world.player);
        let touching = world
            .mobs
            .iter()
            .filter(|mob| aabb_intersects(&mob_aabb(mob), &player_box))
            .count() as u32;
        if touching > 0 {
            report.contact_damage = touching * world.config.mob.contact_damage;
            died = damage_player(&mut world.player, report.contact_damage);
        }
    }

    if died {
        report.died = true;
        begin_respawn(world);
    }

    // Mobs
    for mob in world.mobs.iter_mut() {
        update_mob(mob, &world.blocks, &world.config.mob, &mut world.rng);
    }

    let window = cull_window(
        world.camera.offset,
        world.camera.viewport,
        world.config.mob.cull_margin,
        floor,
    );
    let before = world.mobs.len();
    world
        .mobs
        .retain(|mob| mob.health > 0 && !is_outside_window(mob, &window));
    report.mobs_culled = (before - world.mobs.len()) as u32;

    if tick_spawner(&mut world.spawner) {
        if let Some(mob) = try_spawn_mob(
            &world.mobs,
            world.player.body.position,
            &world.config.mob,
            &mut world.rng,
        ) {
            world.mobs.push(mob);
            report.mob_spawned = true;
        }
    }

    tick_cooldown(&mut world.attack);
    world.camera = follow(&world.camera, world.player.body.position);

    report
}

fn begin_respawn(world: &mut World) {
    respawn_player(&mut world.player);
    world.respawn_ticks_remaining = world.config.player.respawn_delay_ticks;
    push_notification(world, NotificationLevel::Warning, "You died");
}

// ============================================================================
// PALETTE AND BLOCK EDITS
// ============================================================================

/// Step through the palette, wrapping at both ends
pub fn cycle_palette(index: usize, step: i32) -> usize {
    let len = BlockKind::PALETTE.len() as i64;
    (index as i64 + i64::from(step)).rem_euclid(len) as usize
}

pub fn selected_block(world: &World) -> BlockKind {
    BlockKind::PALETTE[world.palette_index % BlockKind::PALETTE.len()]
}

fn in_reach(world: &World, point: Vec2) -> bool {
    point.is_finite()
        && within_interaction_range(
            &world.player,
            point,
            world.blocks.block_size,
            world.config.player.interaction_range_blocks,
        )
}

/// Place the selected kind in the cell under `point`. Out-of-reach and
/// occupied cells are ignored.
pub fn place_selected_block(world: &mut World, point: Vec2) -> Option<Block> {
    if !in_reach(world, point) {
        log::trace!("[place_selected_block] ({:.1}, {:.1}) out of reach", point.x, point.y);
        return None;
    }

    let (x, y) = snap_to_grid(&world.blocks, point);
    let kind = selected_block(world);
    match place_block(&mut world.blocks, x, y, kind) {
        Ok(true) => {
            log::debug!("[place_selected_block] Placed {} at ({}, {})", kind, x, y);
            Some(Block::new(x, y, kind))
        }
        Ok(false) => None,
        Err(e) => {
            log::warn!("[place_selected_block] {}", e);
            None
        }
    }
}

/// Remove the block under `point` if it is within reach
pub fn remove_block_in_range(world: &mut World, point: Vec2) -> Option<Block> {
    if !in_reach(world, point) {
        log::trace!("[remove_block_in_range] ({:.1}, {:.1}) out of reach", point.x, point.y);
        return None;
    }

    let removed = remove_block_at(&mut world.blocks, point);
    if let Some(block) = removed {
        log::debug!("[remove_block_in_range] Removed {} at ({}, {})", block.kind, block.x, block.y);
    }
    removed
}

// ============================================================================
// SCENE HANDOFF
// ============================================================================

pub fn build_scene(world: &World) -> SceneView<'_> {
    SceneView {
        blocks: &world.blocks.blocks,
        block_size: world.blocks.block_size,
        mobs: world
            .mobs
            .iter()
            .map(|mob| MobView {
                kind: mob.kind,
                position: mob.body.position,
                size: mob.body.size,
            })
            .collect(),
        player: PlayerView {
            position: world.player.body.position,
            size: world.player.body.size,
            facing: world.player.facing,
        },
        camera_offset: world.camera.offset,
        zoom: world.camera.zoom,
        palette_index: world.palette_index,
        selected_block: selected_block(world),
        health: world.player.health,
        max_health: world.player.max_health,
        respawning: world.respawn_ticks_remaining > 0,
    }
}

// ============================================================================
// NOTIFICATIONS
// ============================================================================

pub fn push_notification(world: &mut World, level: NotificationLevel, message: impl Into<String>) {
    let message = message.into();
    match level {
        NotificationLevel::Warning => log::warn!("[World] {}", message),
        NotificationLevel::Info | NotificationLevel::Success => log::info!("[World] {}", message),
    }
    world.notifications.push_back(Notification { level, message });
}

pub fn drain_notifications(world: &mut World) -> Vec<Notification> {
    world.notifications.drain(..).collect()
}

// ============================================================================
// SAVE / LOAD
// ============================================================================

/// Save the player and blocks. Failures become a warning notification.
pub fn save_game(world: &mut World, path: &Path) -> bool {
    let record = capture_record(&world.player, &world.blocks);
    match save_to_path(path, &record) {
        Ok(()) => {
            push_notification(world, NotificationLevel::Success, "Game saved");
            true
        }
        Err(e) => {
            push_notification(world, NotificationLevel::Warning, format!("Save failed: {}", e));
            false
        }
    }
}

/// Replace the player and blocks from a save. On any failure, including a
/// missing file, the current state is kept and a warning is queued.
pub fn load_game(world: &mut World, path: &Path) -> bool {
    let result = load_from_path(path)
        .and_then(|record| apply_record(&record, &mut world.player, &mut world.blocks));

    match result {
        Ok(()) => {
            world.camera = follow(&world.camera, world.player.body.position);
            push_notification(world, NotificationLevel::Success, "Game loaded");
            true
        }
        Err(PersistenceError::NotFound(_)) => {
            push_notification(world, NotificationLevel::Warning, "Save file not found.");
            false
        }
        Err(e) => {
            push_notification(world, NotificationLevel::Warning, format!("Load failed: {}", e));
            false
        }
    }
}
