//! Coordinate transforms
//!
//! All world ↔ chunk ↔ local conversions live here. Horizontal mapping always
//! uses Euclidean division so negative world coordinates land in the chunk to
//! their west/north instead of being truncated toward zero.

use crate::constants::{CHUNK_HEIGHT, CHUNK_SIZE, WORLD_COORD_LIMIT};
use cgmath::Point3;
use serde::{Deserialize, Serialize};

const SIZE: i32 = CHUNK_SIZE as i32;
const HEIGHT: i32 = CHUNK_HEIGHT as i32;

/// Integer world position of a single voxel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct VoxelPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Voxel containing a continuous world point
    /// Voxel containing a continuous point; each axis is clamped to
    /// `WORLD_COORD_LIMIT` and NaN maps to 0
    pub fn from_world(x: f32, y: f32, z: f32) -> Self {
        Self {
            x: clamp_world_coord(x),
            y: clamp_world_coord(y),
            z: clamp_world_coord(z),
        }
    }

    pub fn from_point(point: Point3<f32>) -> Self {
        Self::from_world(point.x, point.y, point.z)
    }

    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// Chunk column owning this voxel
    pub fn chunk_pos(self) -> ChunkPos {
        ChunkPos {
            x: world_to_chunk_coord(self.x),
            z: world_to_chunk_coord(self.z),
        }
    }

    /// Position inside the owning chunk, `None` above or below the world
    pub fn local_pos(self) -> Option<LocalPos> {
        if !is_within_height(self.y) {
            return None;
        }
        Some(LocalPos {
            x: world_to_local_coord(self.x),
            y: self.y as usize,
            z: world_to_local_coord(self.z),
        })
    }

    /// Geometric centre of the voxel
    pub fn center(self) -> Point3<f32> {
        Point3::new(
            self.x as f32 + 0.5,
            self.y as f32 + 0.5,
            self.z as f32 + 0.5,
        )
    }
}

/// Chunk column identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ChunkPos {
    pub x: i32,
    pub z: i32,
}

impl ChunkPos {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Chunk column containing a continuous world position
    pub fn from_world(x: f32, z: f32) -> Self {
        VoxelPos::from_world(x, 0.0, z).chunk_pos()
    }

    /// World voxel at local (0, 0, 0) of this chunk
    pub const fn origin(self) -> VoxelPos {
        VoxelPos {
            x: self.x * SIZE,
            y: 0,
            z: self.z * SIZE,
        }
    }

    /// Square-ring distance used for load and unload decisions
    pub fn chebyshev_distance(self, other: ChunkPos) -> i32 {
        (self.x - other.x).abs().max((self.z - other.z).abs())
    }

    /// The four chunks sharing a face with this one
    pub fn orthogonal_neighbors(self) -> [ChunkPos; 4] {
        [
            ChunkPos::new(self.x + 1, self.z),
            ChunkPos::new(self.x - 1, self.z),
            ChunkPos::new(self.x, self.z + 1),
            ChunkPos::new(self.x, self.z - 1),
        ]
    }
}

/// Position inside a chunk, always in range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalPos {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl LocalPos {
    /// Validate signed local coordinates
    pub fn checked(x: i32, y: i32, z: i32) -> Option<Self> {
        if (0..SIZE).contains(&x) && is_within_height(y) && (0..SIZE).contains(&z) {
            Some(Self {
                x: x as usize,
                y: y as usize,
                z: z as usize,
            })
        } else {
            None
        }
    }

    /// World voxel for this local position inside `chunk`
    pub fn to_world(self, chunk: ChunkPos) -> VoxelPos {
        chunk
            .origin()
            .offset(self.x as i32, self.y as i32, self.z as i32)
    }

    /// Flat storage index: x fastest, then z, then y
    pub const fn index(self) -> usize {
        self.y * (CHUNK_SIZE * CHUNK_SIZE) as usize + self.z * CHUNK_SIZE as usize + self.x
    }
}

fn clamp_world_coord(v: f32) -> i32 {
    const LIMIT: f32 = WORLD_COORD_LIMIT as f32;
    v.floor().clamp(-LIMIT, LIMIT) as i32
}

pub fn world_to_chunk_coord(v: i32) -> i32 {
    v.div_euclid(SIZE)
}

pub fn world_to_local_coord(v: i32) -> usize {
    v.rem_euclid(SIZE) as usize
}

pub fn is_within_height(y: i32) -> bool {
    (0..HEIGHT).contains(&y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_coordinates_use_floor_division() {
        let pos = VoxelPos::new(-1, 10, -17);
        assert_eq!(pos.chunk_pos(), ChunkPos::new(-1, -2));

        let local = pos.local_pos().expect("inside vertical range");
        assert_eq!((local.x, local.y, local.z), (15, 10, 15));
        assert_eq!(local.to_world(pos.chunk_pos()), pos);
    }

    #[test]
    fn test_world_point_flooring() {
        assert_eq!(VoxelPos::from_world(-0.1, 0.9, 15.99), VoxelPos::new(-1, 0, 15));
        assert_eq!(ChunkPos::from_world(-0.5, 16.0), ChunkPos::new(-1, 1));
    }

    #[test]
    fn test_extreme_points_are_clamped() {
        let far = VoxelPos::from_world(3.0e9, f32::INFINITY, -3.0e9);
        assert_eq!(far, VoxelPos::new(WORLD_COORD_LIMIT, WORLD_COORD_LIMIT, -WORLD_COORD_LIMIT));
        assert_eq!(VoxelPos::from_world(f32::NAN, 1.5, 0.0), VoxelPos::new(0, 1, 0));

        let chunk = ChunkPos::from_world(3.0e9, -3.0e9);
        assert_eq!(chunk, ChunkPos::new(1_875_000, -1_875_000));
        // Neighbours of the edge chunk still have a representable origin
        let beyond = ChunkPos::new(chunk.x + 20, chunk.z - 20);
        assert_eq!(beyond.origin().x, (1_875_000 + 20) * 16);
        assert_eq!(beyond.origin().z, -(1_875_000 + 20) * 16);
    }

    #[test]
    fn test_vertical_bounds() {
        assert!(VoxelPos::new(0, -1, 0).local_pos().is_none());
        assert!(VoxelPos::new(0, CHUNK_HEIGHT as i32, 0).local_pos().is_none());
        assert!(LocalPos::checked(0, 0, 16).is_none());
        assert!(LocalPos::checked(15, 63, 15).is_some());
    }

    #[test]
    fn test_index_layout() {
        let last = LocalPos::checked(15, 63, 15).expect("in range");
        assert_eq!(last.index(), crate::constants::VOXELS_PER_CHUNK - 1);
        assert_eq!(LocalPos::checked(1, 0, 0).map(|p| p.index()), Some(1));
        assert_eq!(LocalPos::checked(0, 0, 1).map(|p| p.index()), Some(16));
    }

    #[test]
    fn test_chebyshev_distance() {
        let a = ChunkPos::new(0, 0);
        assert_eq!(a.chebyshev_distance(ChunkPos::new(3, -1)), 3);
        assert_eq!(a.chebyshev_distance(ChunkPos::new(-2, -2)), 2);
    }
}
