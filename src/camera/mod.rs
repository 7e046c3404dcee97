/// Camera Module - Data-Oriented Programming (DOP) style
///
/// This module follows pure DOP principles:
/// - camera_data.rs: Pure data structures with NO methods
/// - camera_operations.rs: Pure functions that operate on data

pub mod camera_data;
pub mod camera_operations;

// Re-export data structures
pub use camera_data::CameraData;

// Re-export all operations
pub use camera_operations::{
    // Initialization
    init_camera,
    init_camera_from_config,

    // Follow
    follow,
    centered_offset,

    // Zoom
    zoom_in,
    zoom_out,

    // Coordinate mapping
    screen_to_world,
    world_to_screen,
};
