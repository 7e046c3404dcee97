//! Combat operations
//!
//! A swing is a one-shot box in front of the player. Every mob touching it
//! takes damage once; the dead are compacted out after the damage pass.

use super::combat_data::{AttackOutcome, AttackState};
use crate::config::CombatSettings;
use crate::entities::mob::{mob_aabb, take_damage, MobData};
use crate::entities::player::{Facing, PlayerData};
use crate::physics::aabb::{aabb_from_rect, aabb_intersects, AABB};

pub fn create_attack_state() -> AttackState {
    AttackState::default()
}

/// Hit volume: `range` wide, player-tall, flush against the facing side
pub fn attack_volume(player: &PlayerData, range: f32) -> AABB {
    let body = &player.body;
    let x = match player.facing {
        Facing::Left => body.position.x - range,
        Facing::Right => body.position.x + body.size.x,
    };
    aabb_from_rect(x, body.position.y, range, body.size.y)
}

/// Swing at the mobs. A swing during cooldown does nothing.
pub fn try_attack(
    state: &mut AttackState,
    player: &PlayerData,
    mobs: &mut Vec<MobData>,
    settings: &CombatSettings,
) -> AttackOutcome {
    if state.cooldown_remaining > 0 {
        return AttackOutcome::default();
    }
    state.cooldown_remaining = settings.cooldown_ticks;

    let volume = attack_volume(player, settings.range);
    let mut outcome = AttackOutcome {
        fired: true,
        ..AttackOutcome::default()
    };

    for mob in mobs.iter_mut() {
        if !aabb_intersects(&mob_aabb(mob), &volume) {
            continue;
        }
        outcome.hits += 1;
        if take_damage(mob, settings.damage) {
            outcome.kills += 1;
        }
    }

    if outcome.kills > 0 {
        mobs.retain(|mob| mob.health > 0);
        log::debug!("[try_attack] Killed {} mob(s)", outcome.kills);
    }

    outcome
}

/// Advance the cooldown by one tick
pub fn tick_cooldown(state: &mut AttackState) {
    state.cooldown_remaining = state.cooldown_remaining.saturating_sub(1);
}
