//! Camera data structures - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in camera_operations.rs

use glam::Vec2;

/// 2D side-view camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraData {
    /// World position of the viewport's top-left corner at zoom 1.0
    pub offset: Vec2,

    /// Scale applied around the viewport centre. 1.0 is unscaled.
    pub zoom: f32,

    /// Viewport size in pixels
    pub viewport: Vec2,

    /// Added or removed per zoom step
    pub zoom_step: f32,

    /// Zooming out stops here
    pub min_zoom: f32,
}

impl Default for CameraData {
    fn default() -> Self {
        use crate::constants::{self, camera};
        Self {
            offset: Vec2::ZERO,
            zoom: camera::DEFAULT_ZOOM,
            viewport: Vec2::new(
                constants::core::VIEWPORT_WIDTH,
                constants::core::VIEWPORT_HEIGHT,
            ),
            zoom_step: camera::ZOOM_STEP,
            min_zoom: camera::MIN_ZOOM,
        }
    }
}
