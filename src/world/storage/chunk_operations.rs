//! Chunk Operations - Pure DOP Functions
//!
//! All functions take chunk data and transform it, no methods.
//! Local coordinates are signed so callers can probe one past an edge and get
//! a defined answer instead of a panic.

use super::chunk_data::{ChunkData, ChunkMetadata};
use crate::constants::VOXELS_PER_CHUNK;
use crate::renderer::ChunkMesh;
use crate::world::core::{BlockId, ChunkPos, LocalPos};
use crate::world::generation::WorldGenerator;

/// Create new chunk with all air blocks
pub fn create_chunk(position: ChunkPos) -> ChunkData {
    ChunkData {
        position,
        blocks: vec![BlockId::Air; VOXELS_PER_CHUNK],
        flags: ChunkMetadata::default(),
        mesh: None,
        last_modified: 0,
    }
}

/// Create a chunk and run terrain generation on it
///
/// Touches nothing but the new chunk, so batches of these can run in parallel.
pub fn create_generated_chunk(position: ChunkPos, generator: &dyn WorldGenerator) -> ChunkData {
    let mut chunk = create_chunk(position);
    generate(&mut chunk, generator);
    chunk
}

/// Fill every voxel from the generator
///
/// Idempotent: returns false and leaves the chunk untouched when it was
/// already generated.
pub fn generate(chunk: &mut ChunkData, generator: &dyn WorldGenerator) -> bool {
    if chunk.flags.is_generated {
        return false;
    }

    chunk.blocks = generator.generate_blocks(chunk.position);
    chunk.flags.is_generated = true;
    chunk.flags.is_dirty = true;

    log::debug!(
        "[chunk_operations::generate] Generated chunk ({}, {}), {} solid voxels",
        chunk.position.x,
        chunk.position.z,
        count_non_air(chunk)
    );
    true
}

/// Calculate voxel index from local coordinates, `None` when out of range
pub fn voxel_index(x: i32, y: i32, z: i32) -> Option<usize> {
    LocalPos::checked(x, y, z).map(LocalPos::index)
}

/// Check if coordinates are within chunk bounds
pub fn is_in_bounds(x: i32, y: i32, z: i32) -> bool {
    LocalPos::checked(x, y, z).is_some()
}

/// Get block at local position; air outside the chunk
pub fn get_block(chunk: &ChunkData, x: i32, y: i32, z: i32) -> BlockId {
    voxel_index(x, y, z)
        .and_then(|index| chunk.blocks.get(index).copied())
        .unwrap_or(BlockId::Air)
}

/// Set block at local position
///
/// Returns false without writing when out of range. A successful write marks
/// the mesh dirty.
pub fn set_block(chunk: &mut ChunkData, x: i32, y: i32, z: i32, block: BlockId, tick: u64) -> bool {
    let Some(slot) = voxel_index(x, y, z).and_then(|index| chunk.blocks.get_mut(index)) else {
        return false;
    };

    *slot = block;
    chunk.flags.is_dirty = true;
    chunk.last_modified = tick;
    true
}

/// Install a freshly built mesh, dropping the previous one first
pub fn replace_mesh(chunk: &mut ChunkData, mesh: Option<ChunkMesh>) {
    chunk.mesh = mesh;
    chunk.flags.is_meshed = true;
    chunk.flags.is_dirty = false;
    chunk.flags.mesh_revision = chunk.flags.mesh_revision.wrapping_add(1);
}

/// Release the chunk's render resources
pub fn dispose(chunk: &mut ChunkData) {
    chunk.mesh = None;
    chunk.flags.is_meshed = false;
}

/// Number of non-air voxels
pub fn count_non_air(chunk: &ChunkData) -> usize {
    chunk.blocks.iter().filter(|b| !b.is_air()).count()
}
