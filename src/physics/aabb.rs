/// Data-Oriented Axis-Aligned Bounding Box System (2D)
///
/// Pure functions for overlap tests - no methods, just data transformations.
/// Screen-style coordinates: `min` is the top-left corner, +y points down.

use glam::Vec2;

/// Axis-Aligned Bounding Box - pure data structure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: Vec2,
    pub max: Vec2,
}

/// Create new AABB from min/max points
pub fn create_aabb(min: Vec2, max: Vec2) -> AABB {
    AABB { min, max }
}

/// Create AABB from a top-left corner and a size
pub fn aabb_from_rect(x: f32, y: f32, width: f32, height: f32) -> AABB {
    AABB {
        min: Vec2::new(x, y),
        max: Vec2::new(x + width, y + height),
    }
}

pub fn aabb_size(aabb: &AABB) -> Vec2 {
    aabb.max - aabb.min
}

pub fn aabb_center(aabb: &AABB) -> Vec2 {
    (aabb.min + aabb.max) * 0.5
}

/// Test if two AABBs overlap.
///
/// Strict: boxes that only share an edge do not intersect, so an entity
/// resting exactly on a block is not colliding with it.
pub fn aabb_intersects(a: &AABB, b: &AABB) -> bool {
    a.min.x < b.max.x && a.max.x > b.min.x && a.min.y < b.max.y && a.max.y > b.min.y
}

/// Test if AABB contains a point. Half-open: `[min, max)` on both axes.
pub fn aabb_contains_point(aabb: &AABB, point: Vec2) -> bool {
    point.x >= aabb.min.x && point.x < aabb.max.x && point.y >= aabb.min.y && point.y < aabb.max.y
}

/// Create translated copy of AABB
pub fn aabb_translated(aabb: &AABB, offset: Vec2) -> AABB {
    AABB {
        min: aabb.min + offset,
        max: aabb.max + offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = aabb_from_rect(0.0, 0.0, 15.0, 15.0);
        let b = aabb_from_rect(15.0, 0.0, 15.0, 15.0);
        let c = aabb_from_rect(0.0, 15.0, 15.0, 15.0);
        assert!(!aabb_intersects(&a, &b));
        assert!(!aabb_intersects(&a, &c));
    }

    #[test]
    fn test_overlap_intersects() {
        let a = aabb_from_rect(0.0, 0.0, 30.0, 46.0);
        let b = aabb_from_rect(15.0, 45.0, 15.0, 15.0);
        assert!(aabb_intersects(&a, &b));
        assert!(aabb_intersects(&b, &a));
    }

    #[test]
    fn test_contains_point_half_open() {
        let a = aabb_from_rect(120.0, 120.0, 15.0, 15.0);
        assert!(aabb_contains_point(&a, Vec2::new(120.0, 120.0)));
        assert!(aabb_contains_point(&a, Vec2::new(134.9, 134.9)));
        assert!(!aabb_contains_point(&a, Vec2::new(135.0, 120.0)));
        assert!(!aabb_contains_point(&a, Vec2::new(120.0, 135.0)));
    }

    #[test]
    fn test_translated_keeps_size() {
        let a = aabb_from_rect(1.0, 2.0, 3.0, 4.0);
        let moved = aabb_translated(&a, Vec2::new(10.0, -2.0));
        assert_eq!(moved.min, Vec2::new(11.0, 0.0));
        assert_eq!(aabb_size(&moved), aabb_size(&a));
        assert_eq!(aabb_center(&moved), Vec2::new(12.5, 2.0));
    }
}
