//! Physics Module - axis-separated platformer kinematics
//!
//! - aabb.rs: box overlap tests
//! - body_data.rs: kinematic body data
//! - kinematics_operations.rs: integration and block collision response

pub mod aabb;
pub mod body_data;
pub mod kinematics_operations;

pub use aabb::AABB;
pub use body_data::{GravityParams, KinematicBody, VerticalContact};

pub use kinematics_operations::{
    apply_gravity, body_aabb, body_bottom, has_support, integrate_vertical, move_horizontal,
    resolve_horizontal, resolve_vertical, step_body,
};
