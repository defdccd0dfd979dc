//! Chunk Manager - streaming policy
//!
//! Decides which chunk columns should be resident around an observer. The
//! decision is a pure function of the observer chunk and the loaded set;
//! `world_operations` applies it.

use crate::world::core::ChunkPos;
use rustc_hash::FxHashSet;

/// Chunk manager configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkManagerConfig {
    /// Chunks within this Chebyshev distance are kept loaded
    pub load_radius: u32,
    /// Chunks beyond this Chebyshev distance are unloaded
    pub unload_radius: u32,
}

impl ChunkManagerConfig {
    /// One ring of hysteresis between loading and unloading
    pub fn from_render_distance(render_distance: u32) -> Self {
        Self {
            load_radius: render_distance,
            unload_radius: render_distance + 1,
        }
    }
}

impl Default for ChunkManagerConfig {
    fn default() -> Self {
        Self::from_render_distance(crate::DEFAULT_RENDER_DISTANCE)
    }
}

/// Chunks to create and drop for one observer position
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChunkUpdatePlan {
    /// Nearest first
    pub to_load: Vec<ChunkPos>,
    pub to_unload: Vec<ChunkPos>,
}

/// Every chunk within `radius` of `center`, nearest first
pub fn chunks_in_radius(center: ChunkPos, radius: u32) -> Vec<ChunkPos> {
    let r = radius as i32;
    let mut chunks = Vec::with_capacity((2 * radius as usize + 1).pow(2));

    for x in (center.x - r)..=(center.x + r) {
        for z in (center.z - r)..=(center.z + r) {
            chunks.push(ChunkPos::new(x, z));
        }
    }

    chunks.sort_by_key(|pos| (center.chebyshev_distance(*pos), pos.x, pos.z));
    chunks
}

/// Compare the desired ring against what is loaded
pub fn plan_chunk_updates<I>(center: ChunkPos, loaded: I, config: &ChunkManagerConfig) -> ChunkUpdatePlan
where
    I: IntoIterator<Item = ChunkPos>,
{
    let loaded: FxHashSet<ChunkPos> = loaded.into_iter().collect();

    let to_load = chunks_in_radius(center, config.load_radius)
        .into_iter()
        .filter(|pos| !loaded.contains(pos))
        .collect();

    let mut to_unload: Vec<ChunkPos> = loaded
        .iter()
        .copied()
        .filter(|pos| center.chebyshev_distance(*pos) > config.unload_radius as i32)
        .collect();
    to_unload.sort_by_key(|pos| (pos.x, pos.z));

    ChunkUpdatePlan { to_load, to_unload }
}
