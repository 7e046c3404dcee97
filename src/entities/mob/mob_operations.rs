//! Mob operations
//!
//! Mobs patrol at a fixed speed, bounce off walls, hop at random while
//! grounded and fall without a speed cap. They never leave the live set on
//! their own: the world prunes dead and out-of-window mobs after each update.

use super::mob_data::{BounceStrategy, CullWindow, MobData, MobKind, MobSpawner};
use crate::config::MobSettings;
use crate::physics::aabb::{aabb_intersects, AABB};
use crate::physics::{body_aabb, step_body, GravityParams, KinematicBody};
use crate::world::block_store::BlockStore;
use glam::Vec2;
use rand::Rng;

// ============================================================================
// INITIALIZATION
// ============================================================================

pub fn create_mob(settings: &MobSettings, position: Vec2) -> MobData {
    MobData {
        kind: MobKind::Slime,
        body: KinematicBody::new(position, Vec2::splat(settings.size)),
        direction: 1.0,
        health: settings.max_health,
        max_health: settings.max_health,
    }
}

pub fn create_spawner(interval_ticks: u32) -> MobSpawner {
    MobSpawner {
        interval_ticks,
        ticks_until_spawn: interval_ticks,
    }
}

// ============================================================================
// PER-TICK
// ============================================================================

/// Advance one mob: physics, wall bounce, then the random hop
pub fn update_mob<R: Rng + ?Sized>(
    mob: &mut MobData,
    store: &BlockStore,
    settings: &MobSettings,
    rng: &mut R,
) {
    let gravity = GravityParams {
        gravity: settings.gravity,
        terminal_velocity: None,
    };
    let dx = settings.speed * mob.direction;

    let (_, corrections) = step_body(&mut mob.body, store, &gravity, dx);
    if corrections > 0 {
        mob.direction = apply_bounce(mob.direction, settings.bounce);
    }

    if mob.body.grounded && rng.gen_bool(settings.jump_chance) {
        mob.body.velocity_y = -settings.jump_power;
        mob.body.grounded = false;
    }
}

/// New travel direction after a wall hit
pub fn apply_bounce(direction: f32, strategy: BounceStrategy) -> f32 {
    match strategy {
        BounceStrategy::Reverse => -direction,
        BounceStrategy::Damped => direction * -0.1,
    }
}

// ============================================================================
// HEALTH
// ============================================================================

/// Subtract health, saturating at zero. Returns true when the mob is dead.
pub fn take_damage(mob: &mut MobData, amount: u32) -> bool {
    mob.health = mob.health.saturating_sub(amount);
    mob.health == 0
}

// ============================================================================
// POPULATION
// ============================================================================

pub fn mob_aabb(mob: &MobData) -> AABB {
    body_aabb(&mob.body)
}

/// Window around the visible area; `floor_y` is the bottom of the play area
pub fn cull_window(camera_offset: Vec2, viewport: Vec2, margin: f32, floor_y: f32) -> CullWindow {
    CullWindow {
        min_x: camera_offset.x - margin,
        max_x: camera_offset.x + viewport.x + margin,
        max_y: floor_y + margin,
    }
}

pub fn is_outside_window(mob: &MobData, window: &CullWindow) -> bool {
    let body = &mob.body;
    body.position.x + body.size.x < window.min_x
        || body.position.x > window.max_x
        || body.position.y > window.max_y
}

/// Count down one tick. Returns true (and rearms) when a spawn is due.
pub fn tick_spawner(spawner: &mut MobSpawner) -> bool {
    spawner.ticks_until_spawn = spawner.ticks_until_spawn.saturating_sub(1);
    if spawner.ticks_until_spawn == 0 {
        spawner.ticks_until_spawn = spawner.interval_ticks;
        return true;
    }
    false
}

/// Roll a spawn position near the player.
///
/// Returns `None` when the candidate overlaps a live mob; the spawn is
/// skipped, not retried.
pub fn try_spawn_mob<R: Rng + ?Sized>(
    mobs: &[MobData],
    player_position: Vec2,
    settings: &MobSettings,
    rng: &mut R,
) -> Option<MobData> {
    let offset = rng.gen_range(-settings.spawn_offset..=settings.spawn_offset);
    let position = Vec2::new(player_position.x + offset as f32, player_position.y);
    let candidate = create_mob(settings, position);
    let candidate_box = mob_aabb(&candidate);

    if mobs
        .iter()
        .any(|mob| aabb_intersects(&mob_aabb(mob), &candidate_box))
    {
        log::warn!(
            "[try_spawn_mob] Skipped spawn at ({:.1}, {:.1}): overlaps a live mob",
            position.x,
            position.y
        );
        return None;
    }

    log::debug!("[try_spawn_mob] Spawned {:?} at ({:.1}, {:.1})", candidate.kind, position.x, position.y);
    Some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::block::BlockKind;
    use crate::world::block_store::{create_block_store, place_block};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn settings() -> MobSettings {
        MobSettings {
            jump_chance: 0.0,
            ..MobSettings::default()
        }
    }

    fn walled_store() -> BlockStore {
        let mut store = create_block_store(15).unwrap();
        for i in -10..10 {
            place_block(&mut store, i * 15, 300, BlockKind::Stone).unwrap();
        }
        place_block(&mut store, 90, 285, BlockKind::Stone).unwrap();
        place_block(&mut store, 90, 270, BlockKind::Stone).unwrap();
        store
    }

    #[test]
    fn test_bounce_strategies() {
        assert_eq!(apply_bounce(1.0, BounceStrategy::Reverse), -1.0);
        assert_eq!(apply_bounce(-1.0, BounceStrategy::Reverse), 1.0);
        assert!((apply_bounce(1.0, BounceStrategy::Damped) + 0.1).abs() < 1e-6);
        let twice = apply_bounce(apply_bounce(1.0, BounceStrategy::Damped), BounceStrategy::Damped);
        assert!((twice - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_mob_turns_around_at_wall() {
        let store = walled_store();
        let settings = settings();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut mob = create_mob(&settings, Vec2::new(0.0, 275.0));

        for _ in 0..40 {
            update_mob(&mut mob, &store, &settings, &mut rng);
        }
        assert_eq!(mob.direction, -1.0);
        assert!(mob.body.position.x <= 65.0);
        assert_eq!(mob.body.position.y, 275.0);
    }

    #[test]
    fn test_damped_bounce_slows_patrol() {
        let store = walled_store();
        let settings = MobSettings {
            bounce: BounceStrategy::Damped,
            ..settings()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut mob = create_mob(&settings, Vec2::new(60.0, 275.0));

        for _ in 0..5 {
            update_mob(&mut mob, &store, &settings, &mut rng);
        }
        assert!((mob.direction + 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_grounded_mob_hops() {
        let store = walled_store();
        let settings = MobSettings {
            jump_chance: 1.0,
            ..settings()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut mob = create_mob(&settings, Vec2::new(0.0, 275.0));

        update_mob(&mut mob, &store, &settings, &mut rng);
        assert_eq!(mob.body.velocity_y, -10.0);
        assert!(!mob.body.grounded);
    }

    #[test]
    fn test_mob_falls_without_cap() {
        let store = create_block_store(15).unwrap();
        let settings = settings();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut mob = create_mob(&settings, Vec2::ZERO);
        for _ in 0..30 {
            update_mob(&mut mob, &store, &settings, &mut rng);
        }
        assert_eq!(mob.body.velocity_y, 30.0);
    }

    #[test]
    fn test_take_damage_until_dead() {
        let mut mob = create_mob(&settings(), Vec2::ZERO);
        assert!(!take_damage(&mut mob, 1));
        assert!(!take_damage(&mut mob, 1));
        assert_eq!(mob.health, 1);
        assert!(take_damage(&mut mob, 5));
        assert_eq!(mob.health, 0);
    }

    #[test]
    fn test_cull_window() {
        let window = cull_window(Vec2::new(100.0, 0.0), Vec2::new(800.0, 600.0), 100.0, 600.0);
        let settings = settings();

        let inside = create_mob(&settings, Vec2::new(500.0, 300.0));
        assert!(!is_outside_window(&inside, &window));

        let left = create_mob(&settings, Vec2::new(-30.0, 300.0));
        assert!(is_outside_window(&left, &window));

        let right = create_mob(&settings, Vec2::new(1001.0, 300.0));
        assert!(is_outside_window(&right, &window));

        let fallen = create_mob(&settings, Vec2::new(500.0, 701.0));
        assert!(is_outside_window(&fallen, &window));
    }

    #[test]
    fn test_spawner_fires_each_interval() {
        let mut spawner = create_spawner(3);
        let fired: Vec<bool> = (0..7).map(|_| tick_spawner(&mut spawner)).collect();
        assert_eq!(fired, vec![false, false, true, false, false, true, false]);
    }

    #[test]
    fn test_spawn_skipped_on_overlap() {
        let settings = MobSettings {
            spawn_offset: 0,
            ..settings()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let player = Vec2::new(200.0, 100.0);

        let first = try_spawn_mob(&[], player, &settings, &mut rng).unwrap();
        assert_eq!(first.body.position, player);
        assert!(try_spawn_mob(&[first], player, &settings, &mut rng).is_none());
    }

    #[test]
    fn test_spawn_offset_stays_in_range() {
        let settings = settings();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..50 {
            let mob = try_spawn_mob(&[], Vec2::new(400.0, 50.0), &settings, &mut rng).unwrap();
            assert!((200.0..=600.0).contains(&mob.body.position.x));
            assert_eq!(mob.body.position.y, 50.0);
            assert_eq!(mob.health, 3);
        }
    }
}
