/// Data-Oriented Axis-Aligned Bounding Box System
///
/// Pure functions for collision detection - no methods, just data transformations.
use crate::world::core::VoxelPos;
use cgmath::Point3;

/// Axis-Aligned Bounding Box - pure data structure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

/// Create new AABB from min/max points
pub fn create_aabb(min: Point3<f32>, max: Point3<f32>) -> AABB {
    AABB { min, max }
}

/// Box of an agent standing at `base` (centre of its feet)
pub fn aabb_from_base(base: Point3<f32>, width: f32, height: f32) -> AABB {
    let half = width * 0.5;
    create_aabb(
        Point3::new(base.x - half, base.y, base.z - half),
        Point3::new(base.x + half, base.y + height, base.z + half),
    )
}

/// Unit box occupied by a voxel
pub fn voxel_aabb(pos: VoxelPos) -> AABB {
    let min = Point3::new(pos.x as f32, pos.y as f32, pos.z as f32);
    create_aabb(min, Point3::new(min.x + 1.0, min.y + 1.0, min.z + 1.0))
}

/// The eight probe points collision tests sample
///
/// Horizontal corners at the bottom face and at `top_inset` below the top face.
/// An inset of zero gives the true corners.
pub fn aabb_corner_probes(aabb: &AABB, top_inset: f32) -> [Point3<f32>; 8] {
    let top = aabb.max.y - top_inset;
    let mut probes = [aabb.min; 8];
    let mut i = 0;
    for y in [aabb.min.y, top] {
        for x in [aabb.min.x, aabb.max.x] {
            for z in [aabb.min.z, aabb.max.z] {
                probes[i] = Point3::new(x, y, z);
                i += 1;
            }
        }
    }
    probes
}

/// Test if two AABBs overlap with positive volume
///
/// Boxes that only touch along a face do not count.
pub fn aabb_intersects(aabb1: &AABB, aabb2: &AABB) -> bool {
    aabb1.min.x < aabb2.max.x
        && aabb1.max.x > aabb2.min.x
        && aabb1.min.y < aabb2.max.y
        && aabb1.max.y > aabb2.min.y
        && aabb1.min.z < aabb2.max.z
        && aabb1.max.z > aabb2.min.z
}
