//! Read-only world access for movement and collision
//!
//! Physics is written against this trait rather than `WorldData` directly so
//! it can be exercised with small hand-built voxel sets.

use crate::world::core::{BlockId, VoxelPos};
use crate::world::data_types::WorldData;
use crate::world::world_operations;

/// Voxel lookups agents need every tick
pub trait VoxelQuery {
    fn block_at(&self, pos: VoxelPos) -> BlockId;

    /// Whether the voxel containing a continuous point blocks movement
    fn is_position_solid(&self, x: f32, y: f32, z: f32) -> bool;
}

impl VoxelQuery for WorldData {
    fn block_at(&self, pos: VoxelPos) -> BlockId {
        world_operations::get_block(self, pos)
    }

    fn is_position_solid(&self, x: f32, y: f32, z: f32) -> bool {
        world_operations::is_position_solid(self, x, y, z)
    }
}
