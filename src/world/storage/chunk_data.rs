//! Chunk Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in chunk_operations.rs

use crate::renderer::ChunkMesh;
use crate::world::core::{BlockId, ChunkPos};

/// One 16 x 64 x 16 column of voxels
#[derive(Clone, Debug)]
pub struct ChunkData {
    /// Chunk position in chunk coordinates
    pub position: ChunkPos,

    /// Block IDs, flat array indexed by `LocalPos::index`
    pub blocks: Vec<BlockId>,

    /// Chunk metadata flags
    pub flags: ChunkMetadata,

    /// Render mesh from the last meshing pass, `None` when nothing is visible
    pub mesh: Option<ChunkMesh>,

    /// World tick of the last block write
    pub last_modified: u64,
}

/// Chunk metadata
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChunkMetadata {
    pub is_generated: bool,
    /// Voxels changed since the mesh was built
    pub is_dirty: bool,
    pub is_meshed: bool,
    /// Number of meshing passes run on this chunk
    pub mesh_revision: u32,
}
