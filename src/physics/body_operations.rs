//! Physics Body Operations - Pure DOP Functions
//!
//! Per-axis voxel collision. Each step integrates gravity, then tries the
//! proposed move one axis at a time in the order X, Z, Y. A blocked axis keeps
//! its previous coordinate; later axes test against the already-resolved ones.

use super::aabb::{aabb_corner_probes, aabb_from_base, AABB};
use super::body_data::{BodyDimensions, PhysicsBody, PhysicsConfig, StepOutcome};
use crate::world::interfaces::VoxelQuery;
use cgmath::{Point3, Vector3};

/// Create a body at rest
pub fn create_body(position: Point3<f32>, dimensions: BodyDimensions) -> PhysicsBody {
    PhysicsBody {
        position,
        velocity: Vector3::new(0.0, 0.0, 0.0),
        dimensions,
        on_ground: false,
        hit_ceiling: false,
    }
}

/// Current bounding box of a body
pub fn body_aabb(body: &PhysicsBody) -> AABB {
    aabb_from_base(body.position, body.dimensions.width, body.dimensions.height)
}

/// Replace horizontal velocity, leaving vertical motion alone
pub fn set_horizontal_velocity(body: &mut PhysicsBody, vx: f32, vz: f32) {
    body.velocity.x = vx;
    body.velocity.z = vz;
}

/// Start a jump if standing on something
pub fn try_jump(body: &mut PhysicsBody, jump_velocity: f32) -> bool {
    if !body.on_ground {
        return false;
    }
    body.velocity.y = jump_velocity;
    body.on_ground = false;
    true
}

fn any_probe_solid<W: VoxelQuery + ?Sized>(world: &W, probes: &[Point3<f32>]) -> bool {
    probes
        .iter()
        .any(|p| world.is_position_solid(p.x, p.y, p.z))
}

/// Would the body overlap a solid voxel with its feet at `base`, probing
/// horizontally (head probes inset by the ceiling epsilon)
pub fn is_blocked_horizontally<W: VoxelQuery + ?Sized>(
    world: &W,
    base: Point3<f32>,
    dimensions: BodyDimensions,
    config: &PhysicsConfig,
) -> bool {
    let aabb = aabb_from_base(base, dimensions.width, dimensions.height);
    any_probe_solid(world, &aabb_corner_probes(&aabb, config.ceiling_epsilon))
}

/// Would the body overlap a solid voxel with its feet at `base`, probing the
/// true top and bottom faces
pub fn is_blocked_vertically<W: VoxelQuery + ?Sized>(
    world: &W,
    base: Point3<f32>,
    dimensions: BodyDimensions,
) -> bool {
    let aabb = aabb_from_base(base, dimensions.width, dimensions.height);
    any_probe_solid(world, &aabb_corner_probes(&aabb, 0.0))
}

/// Advance a body by `dt` seconds against the voxel world
pub fn step_body<W: VoxelQuery + ?Sized>(
    world: &W,
    body: &mut PhysicsBody,
    config: &PhysicsConfig,
    dt: f32,
) -> StepOutcome {
    let mut outcome = StepOutcome::default();

    body.velocity.y += config.gravity * dt;
    body.hit_ceiling = false;
    let target = body.position + body.velocity * dt;

    let probe = Point3::new(target.x, body.position.y, body.position.z);
    if is_blocked_horizontally(world, probe, body.dimensions, config) {
        outcome.blocked_x = true;
    } else {
        body.position.x = target.x;
    }

    let probe = Point3::new(body.position.x, body.position.y, target.z);
    if is_blocked_horizontally(world, probe, body.dimensions, config) {
        outcome.blocked_z = true;
    } else {
        body.position.z = target.z;
    }

    let probe = Point3::new(body.position.x, target.y, body.position.z);
    if is_blocked_vertically(world, probe, body.dimensions) {
        outcome.blocked_y = true;
        if body.velocity.y <= 0.0 {
            body.on_ground = true;
        } else {
            body.hit_ceiling = true;
        }
        body.velocity.y = 0.0;
    } else {
        body.on_ground = false;
        body.position.y = target.y;
    }

    outcome
}
