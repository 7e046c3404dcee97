//! Kinematics operations - axis-separated integration and block collision
//!
//! One tick for any body is, in order:
//! 1. `integrate_vertical`
//! 2. `resolve_vertical`
//! 3. `move_horizontal`
//! 4. `resolve_horizontal`
//!
//! Only solid blocks (`blocks_player`) take part in resolution.

use super::aabb::{aabb_from_rect, aabb_intersects, aabb_translated, AABB};
use super::body_data::{GravityParams, KinematicBody, VerticalContact};
use crate::world::block::block_aabb;
use crate::world::block_store::{query_solid_rect, BlockStore};
use glam::Vec2;

pub fn body_aabb(body: &KinematicBody) -> AABB {
    aabb_from_rect(body.position.x, body.position.y, body.size.x, body.size.y)
}

pub fn body_bottom(body: &KinematicBody) -> f32 {
    body.position.y + body.size.y
}

// ============================================================================
// VERTICAL
// ============================================================================

/// Accumulate gravity into `velocity_y`.
///
/// With a terminal velocity, gravity is only added while the body is still
/// below the cap, so the fall speed stops growing once it gets there.
pub fn apply_gravity(body: &mut KinematicBody, params: &GravityParams) {
    match params.terminal_velocity {
        Some(cap) if body.velocity_y >= cap => {}
        _ => body.velocity_y += params.gravity,
    }
}

/// Gravity, then move by `velocity_y`
pub fn integrate_vertical(body: &mut KinematicBody, params: &GravityParams) {
    apply_gravity(body, params);
    body.position.y += body.velocity_y;
}

/// Push the body out of any solid block it overlaps vertically.
///
/// Falling onto a block snaps the body on top of it and grounds it; rising
/// into one snaps it to the block's underside. Each candidate is re-tested
/// against the already-corrected box, so one snap can clear several blocks.
/// A body at rest (`velocity_y == 0`) that has a block right under its feet
/// stays grounded.
pub fn resolve_vertical(body: &mut KinematicBody, store: &BlockStore) -> VerticalContact {
    let mut contact = VerticalContact::default();
    body.grounded = false;

    let size = store.block_size as f32;
    let candidates = query_solid_rect(store, &body_aabb(body));

    for block in candidates {
        let block_box = block_aabb(block, store.block_size);
        if !aabb_intersects(&body_aabb(body), &block_box) {
            continue;
        }

        if body.velocity_y > 0.0 {
            body.position.y = block.y as f32 - body.size.y;
            body.velocity_y = 0.0;
            body.grounded = true;
            contact.landed = true;
        } else if body.velocity_y < 0.0 {
            body.position.y = block.y as f32 + size;
            body.velocity_y = 0.0;
            contact.hit_ceiling = true;
        }
    }

    if !body.grounded && body.velocity_y == 0.0 && has_support(body, store) {
        body.grounded = true;
    }

    contact
}

/// Whether a solid block sits directly beneath the body
pub fn has_support(body: &KinematicBody, store: &BlockStore) -> bool {
    let probe = aabb_translated(&body_aabb(body), Vec2::new(0.0, 1.0));
    !query_solid_rect(store, &probe).is_empty()
}

// ============================================================================
// HORIZONTAL
// ============================================================================

pub fn move_horizontal(body: &mut KinematicBody, dx: f32) {
    body.position.x += dx;
}

/// Push the body out of solid blocks it overlaps after moving `dx`.
///
/// Moving right snaps to the block's left edge, moving left to its right
/// edge. A zero displacement never snaps. Returns how many blocks forced a
/// correction.
pub fn resolve_horizontal(body: &mut KinematicBody, store: &BlockStore, dx: f32) -> u32 {
    if dx == 0.0 {
        return 0;
    }

    let size = store.block_size as f32;
    let candidates = query_solid_rect(store, &body_aabb(body));
    let mut corrections = 0;

    for block in candidates {
        let block_box = block_aabb(block, store.block_size);
        if !aabb_intersects(&body_aabb(body), &block_box) {
            continue;
        }

        body.position.x = if dx > 0.0 {
            block.x as f32 - body.size.x
        } else {
            block.x as f32 + size
        };
        corrections += 1;
    }

    corrections
}

/// Full axis-separated tick for one body. Returns the vertical contact and
/// the number of horizontal corrections.
pub fn step_body(
    body: &mut KinematicBody,
    store: &BlockStore,
    gravity: &GravityParams,
    dx: f32,
) -> (VerticalContact, u32) {
    integrate_vertical(body, gravity);
    let contact = resolve_vertical(body, store);
    move_horizontal(body, dx);
    let corrections = resolve_horizontal(body, store, dx);
    (contact, corrections)
}
