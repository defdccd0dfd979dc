//! Height-profile terrain generator

use super::TerrainParams;
use crate::constants::terrain::{MAX_SURFACE_HEIGHT, MIN_SURFACE_HEIGHT};
use crate::constants::{CHUNK_HEIGHT, CHUNK_SIZE, VOXELS_PER_CHUNK};
use crate::world::core::{is_within_height, BlockId, ChunkPos, LocalPos};
use noise::{NoiseFn, Perlin};

/// Universal world generation interface
pub trait WorldGenerator: Send + Sync {
    /// Surface height of the column at world coordinates
    fn surface_height(&self, world_x: i32, world_z: i32) -> i32;

    /// Block at height `y` in a column whose surface is `surface_height`
    fn column_block(&self, surface_height: i32, y: i32) -> BlockId;

    /// Block at a world voxel; empty outside the vertical range
    fn block_at(&self, world_x: i32, y: i32, world_z: i32) -> BlockId {
        if !is_within_height(y) {
            return BlockId::Air;
        }
        self.column_block(self.surface_height(world_x, world_z), y)
    }

    /// Full voxel array for a chunk, in chunk storage order
    fn generate_blocks(&self, chunk_pos: ChunkPos) -> Vec<BlockId> {
        let mut blocks = vec![BlockId::Air; VOXELS_PER_CHUNK];
        let origin = chunk_pos.origin();

        for lz in 0..CHUNK_SIZE as usize {
            for lx in 0..CHUNK_SIZE as usize {
                let height = self.surface_height(origin.x + lx as i32, origin.z + lz as i32);
                for ly in 0..CHUNK_HEIGHT as usize {
                    let block = self.column_block(height, ly as i32);
                    if block.is_air() {
                        continue;
                    }
                    blocks[LocalPos { x: lx, y: ly, z: lz }.index()] = block;
                }
            }
        }

        blocks
    }

    /// Height just above the surface where an agent can spawn
    fn find_safe_spawn_height(&self, world_x: i32, world_z: i32) -> f32 {
        let surface_height = self.surface_height(world_x, world_z);
        (surface_height as f32 + 3.0).clamp(MIN_SURFACE_HEIGHT as f32, CHUNK_HEIGHT as f32 - 2.0)
    }
}

/// Sine/cosine hills with optional seeded Perlin detail
#[derive(Clone)]
pub struct TerrainGenerator {
    params: TerrainParams,
    detail: Perlin,
}

impl TerrainGenerator {
    pub fn new(params: TerrainParams) -> Self {
        log::info!(
            "[TerrainGenerator::new] seed={} base={} variation={} detail={}",
            params.seed,
            params.base_height,
            params.variation,
            params.detail_amplitude
        );
        Self {
            detail: Perlin::new(params.seed),
            params,
        }
    }

    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    /// Unclamped, unfloored height of the profile
    pub fn raw_height(&self, world_x: i32, world_z: i32) -> f64 {
        let x = world_x as f64;
        let z = world_z as f64;
        let p = &self.params;

        let mut height = p.base_height
            + (x * 0.1).sin() * p.variation * 0.5
            + (z * 0.1).cos() * p.variation * 0.5
            + (x * 0.05).sin() * (z * 0.05).cos() * p.variation * 0.3;

        if p.detail_amplitude > 0.0 {
            height += self.detail.get([x * p.detail_scale, z * p.detail_scale]) * p.detail_amplitude;
        }

        height
    }
}

impl std::fmt::Debug for TerrainGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerrainGenerator")
            .field("params", &self.params)
            .finish()
    }
}

impl WorldGenerator for TerrainGenerator {
    fn surface_height(&self, world_x: i32, world_z: i32) -> i32 {
        self.raw_height(world_x, world_z)
            .clamp(MIN_SURFACE_HEIGHT as f64, MAX_SURFACE_HEIGHT as f64)
            .floor() as i32
    }

    fn column_block(&self, surface_height: i32, y: i32) -> BlockId {
        column_block(&self.params, surface_height, y)
    }
}

/// Layered column fill: stone, three dirt-ish layers capped with grass, then air.
/// Low columns swap their top layers for sand.
pub fn column_block(params: &TerrainParams, surface_height: i32, y: i32) -> BlockId {
    let h = surface_height;

    if h <= params.shoreline_height && y < h && y >= params.sand_floor.max(h - 3) {
        return BlockId::Sand;
    }

    if y < h - 3 {
        BlockId::Stone
    } else if y < h - 1 {
        BlockId::Dirt
    } else if y < h {
        BlockId::Grass
    } else {
        BlockId::Air
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_height_matches_profile() {
        // 15 + sin(0)*4 + cos(0)*4 + 0 = 19
        let generator = TerrainGenerator::new(TerrainParams::default());
        assert_eq!(generator.surface_height(0, 0), 19);
    }

    #[test]
    fn test_height_is_clamped() {
        let tall = TerrainGenerator::new(TerrainParams::flat(500.0));
        assert_eq!(tall.surface_height(3, 3), MAX_SURFACE_HEIGHT);

        let low = TerrainGenerator::new(TerrainParams::flat(-20.0));
        assert_eq!(low.surface_height(3, 3), MIN_SURFACE_HEIGHT);
    }

    #[test]
    fn test_column_layers() {
        let params = TerrainParams::default();
        assert_eq!(column_block(&params, 19, 15), BlockId::Stone);
        assert_eq!(column_block(&params, 19, 16), BlockId::Dirt);
        assert_eq!(column_block(&params, 19, 17), BlockId::Dirt);
        assert_eq!(column_block(&params, 19, 18), BlockId::Grass);
        assert_eq!(column_block(&params, 19, 19), BlockId::Air);
    }

    #[test]
    fn test_shoreline_sand() {
        let params = TerrainParams::default();
        assert_eq!(column_block(&params, 12, 11), BlockId::Sand);
        assert_eq!(column_block(&params, 12, 9), BlockId::Sand);
        assert_eq!(column_block(&params, 12, 8), BlockId::Stone);
        // Sand stops at the floor even when h - 3 is lower
        assert_eq!(column_block(&params, 10, 7), BlockId::Dirt);
        assert_eq!(column_block(&params, 10, 6), BlockId::Stone);
        assert_eq!(column_block(&params, 10, 8), BlockId::Sand);
        assert_eq!(column_block(&params, 10, 10), BlockId::Air);
    }

    #[test]
    fn test_block_at_outside_height_is_air() {
        let generator = TerrainGenerator::new(TerrainParams::default());
        assert_eq!(generator.block_at(0, -1, 0), BlockId::Air);
        assert_eq!(generator.block_at(0, CHUNK_HEIGHT as i32, 0), BlockId::Air);
        assert_eq!(generator.block_at(0, 0, 0), BlockId::Stone);
    }

    #[test]
    fn test_seeded_detail_is_deterministic() {
        let params = TerrainParams {
            seed: 7,
            detail_amplitude: 3.0,
            ..TerrainParams::default()
        };
        let a = TerrainGenerator::new(params.clone());
        let b = TerrainGenerator::new(params);
        for x in -40..40 {
            assert_eq!(a.surface_height(x, x * 3), b.surface_height(x, x * 3));
        }
    }

    #[test]
    fn test_generate_blocks_matches_block_at() {
        let generator = TerrainGenerator::new(TerrainParams::default());
        let chunk = ChunkPos::new(-1, 2);
        let blocks = generator.generate_blocks(chunk);
        let origin = chunk.origin();

        for (lx, ly, lz) in [(0, 0, 0), (15, 18, 3), (7, 12, 15), (4, 63, 9)] {
            let local = LocalPos { x: lx, y: ly, z: lz };
            let world = local.to_world(chunk);
            assert_eq!(world.x - origin.x, lx as i32);
            assert_eq!(blocks[local.index()], generator.block_at(world.x, world.y, world.z));
        }
    }
}
