//! Camera operations - Pure DOP functions
//!
//! All functions are pure: they take data, return new data, no side effects.
//! No methods, no self, just transformations.

use super::camera_data::CameraData;
use crate::config::SandboxConfig;
use glam::Vec2;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize camera for a viewport, unzoomed at the origin
pub fn init_camera(viewport: Vec2) -> CameraData {
    CameraData {
        viewport,
        ..Default::default()
    }
}

/// Initialize camera from config
pub fn init_camera_from_config(config: &SandboxConfig) -> CameraData {
    CameraData {
        viewport: Vec2::new(config.world.viewport_width, config.world.viewport_height),
        zoom_step: config.camera.zoom_step,
        min_zoom: config.camera.min_zoom,
        ..Default::default()
    }
}

// ============================================================================
// FOLLOW
// ============================================================================

/// Offset that centres `target` in the viewport. No smoothing, no clamping to
/// world bounds.
pub fn centered_offset(target: Vec2, viewport: Vec2) -> Vec2 {
    target - viewport * 0.5
}

/// Recentre the camera on `target`
pub fn follow(camera: &CameraData, target: Vec2) -> CameraData {
    let mut new_camera = *camera;
    new_camera.offset = centered_offset(target, camera.viewport);
    new_camera
}

// ============================================================================
// ZOOM
// ============================================================================

pub fn zoom_in(camera: &CameraData) -> CameraData {
    let mut new_camera = *camera;
    new_camera.zoom += camera.zoom_step;
    new_camera
}

/// Zoom out one step, never below `min_zoom`
pub fn zoom_out(camera: &CameraData) -> CameraData {
    let mut new_camera = *camera;
    new_camera.zoom = (camera.zoom - camera.zoom_step).max(camera.min_zoom);
    new_camera
}

// ============================================================================
// COORDINATE MAPPING
// ============================================================================

/// Map a pointer position in viewport pixels to world pixels.
///
/// The zoomed scene is drawn centred in the viewport, so the centre margin is
/// removed before undoing the scale.
pub fn screen_to_world(camera: &CameraData, screen: Vec2) -> Vec2 {
    let margin = (camera.viewport - camera.viewport * camera.zoom) * 0.5;
    (screen - margin) / camera.zoom + camera.offset
}

/// Inverse of `screen_to_world`
pub fn world_to_screen(camera: &CameraData, world: Vec2) -> Vec2 {
    let margin = (camera.viewport - camera.viewport * camera.zoom) * 0.5;
    (world - camera.offset) * camera.zoom + margin
}
