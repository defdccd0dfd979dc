use super::{BlockId, VoxelPos};
use cgmath::{InnerSpace, Point3, Vector3};

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>,
}

impl Ray {
    /// Direction is normalized; a zero direction stays zero and samples the origin.
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Self {
        let direction = if direction.magnitude2() > 0.0 {
            direction.normalize()
        } else {
            direction
        };
        Self { origin, direction }
    }

    pub fn point_at(&self, distance: f32) -> Point3<f32> {
        self.origin + self.direction * distance
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockFace {
    Front,  // +Z
    Back,   // -Z
    Top,    // +Y
    Bottom, // -Y
    Right,  // +X
    Left,   // -X
}

impl BlockFace {
    /// Mesh emission order
    pub const ALL: [BlockFace; 6] = [
        BlockFace::Front,
        BlockFace::Back,
        BlockFace::Top,
        BlockFace::Bottom,
        BlockFace::Right,
        BlockFace::Left,
    ];

    pub fn normal(&self) -> Vector3<f32> {
        let o = self.offset();
        Vector3::new(o.x as f32, o.y as f32, o.z as f32)
    }

    pub fn offset(&self) -> Vector3<i32> {
        match self {
            BlockFace::Right => Vector3::new(1, 0, 0),
            BlockFace::Left => Vector3::new(-1, 0, 0),
            BlockFace::Top => Vector3::new(0, 1, 0),
            BlockFace::Bottom => Vector3::new(0, -1, 0),
            BlockFace::Front => Vector3::new(0, 0, 1),
            BlockFace::Back => Vector3::new(0, 0, -1),
        }
    }
}

/// First solid voxel found along a ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    pub position: VoxelPos,
    pub face: BlockFace,
    /// Distance marched when the hit sample was taken
    pub distance: f32,
    pub block: BlockId,
}

/// Face of `voxel_pos` nearest to a sample point inside it
pub fn determine_hit_face(hit_point: Point3<f32>, voxel_pos: VoxelPos) -> BlockFace {
    let rel_x = hit_point.x - voxel_pos.x as f32;
    let rel_y = hit_point.y - voxel_pos.y as f32;
    let rel_z = hit_point.z - voxel_pos.z as f32;

    let distances = [
        (rel_x, BlockFace::Left),
        (1.0 - rel_x, BlockFace::Right),
        (rel_y, BlockFace::Bottom),
        (1.0 - rel_y, BlockFace::Top),
        (rel_z, BlockFace::Back),
        (1.0 - rel_z, BlockFace::Front),
    ];

    distances
        .iter()
        .min_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(_, face)| *face)
        .unwrap_or(BlockFace::Top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_normalizes_direction() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 0.0), Vector3::new(0.0, -4.0, 0.0));
        assert!((ray.direction.magnitude() - 1.0).abs() < 1e-6);
        assert_eq!(ray.point_at(2.0), Point3::new(0.0, -2.0, 0.0));
    }

    #[test]
    fn test_zero_direction_is_kept() {
        let ray = Ray::new(Point3::new(1.0, 2.0, 3.0), Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(ray.point_at(5.0), Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_hit_face_from_top() {
        let face = determine_hit_face(Point3::new(0.5, 14.95, 0.5), VoxelPos::new(0, 14, 0));
        assert_eq!(face, BlockFace::Top);
        assert_eq!(face.normal(), Vector3::new(0.0, 1.0, 0.0));
    }
}
