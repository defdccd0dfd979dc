//! World Data Types - Pure DOP Structures
//!
//! These are the data structures that world_operations functions operate on.

use super::core::{BlockId, BlockRegistry, ChunkPos, VoxelPos};
use super::generation::TerrainGenerator;
use super::management::ChunkManagerConfig;
use super::storage::ChunkData;
use crate::EngineConfig;
use rustc_hash::FxHashMap;

/// World data - the main data structure for world state
///
/// This is what world_operations functions take as parameters. Only the
/// simulation tick mutates it.
#[derive(Clone, Debug)]
pub struct WorldData {
    /// Loaded chunks, at most one per column
    pub chunks: FxHashMap<ChunkPos, ChunkData>,

    /// Immutable block metadata
    pub registry: BlockRegistry,

    pub generator: TerrainGenerator,

    /// Load / unload radii
    pub streaming: ChunkManagerConfig,

    /// Chunk the observer stood in at the last streaming update
    pub last_observer_chunk: Option<ChunkPos>,

    /// World tick counter, advanced once per simulation tick
    pub tick: u64,
}

impl WorldData {
    /// Create new empty world data from engine configuration
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_parts(
            BlockRegistry::new(),
            TerrainGenerator::new(config.terrain.clone()),
            ChunkManagerConfig::from_render_distance(config.render_distance),
        )
    }

    pub fn with_parts(
        registry: BlockRegistry,
        generator: TerrainGenerator,
        streaming: ChunkManagerConfig,
    ) -> Self {
        let ring = (2 * streaming.load_radius as usize + 1).pow(2);
        let mut chunks = FxHashMap::default();
        chunks.reserve(ring);

        Self {
            chunks,
            registry,
            generator,
            streaming,
            last_observer_chunk: None,
            tick: 0,
        }
    }
}

/// World modification record
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorldModification {
    pub position: VoxelPos,
    pub old_block: BlockId,
    pub new_block: BlockId,
    pub timestamp: u64,
    /// Chunks whose meshes were rebuilt by this write
    pub remeshed_chunks: usize,
}

/// Outcome of one streaming update
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChunkUpdateReport {
    pub center: Option<ChunkPos>,
    pub loaded: Vec<ChunkPos>,
    pub unloaded: Vec<ChunkPos>,
}

impl ChunkUpdateReport {
    pub fn is_noop(&self) -> bool {
        self.loaded.is_empty() && self.unloaded.is_empty()
    }
}

/// World statistics
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorldStats {
    pub loaded_chunks: usize,
    pub generated_chunks: usize,
    pub meshed_chunks: usize,
    pub dirty_chunks: usize,
    pub total_faces: usize,
    pub non_air_blocks: u64,
}
