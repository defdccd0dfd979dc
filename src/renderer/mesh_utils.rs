//! Mesh generation utilities for CPU-side mesh creation
//! Following DOP principles - pure functions that generate mesh data

use super::mesh_soa_data::ChunkMesh;
use super::mesh_soa_operations::{self, VERTICES_PER_FACE};
use crate::constants::{CHUNK_HEIGHT, CHUNK_SIZE};
use crate::world::core::{BlockFace, BlockId, BlockRegistry, ChunkPos, LocalPos};
use crate::world::error::WorldError;
use crate::world::storage::chunk_operations;
use crate::world::{data_types::WorldData, world_operations};

type FaceCorners = [[f32; 3]; VERTICES_PER_FACE];

/// Corner offsets from a block centre for each face, two triangles each
fn face_corners(face: BlockFace) -> FaceCorners {
    const N: f32 = -0.5;
    const P: f32 = 0.5;
    match face {
        BlockFace::Front => [[N, N, P], [P, N, P], [P, P, P], [N, N, P], [P, P, P], [N, P, P]],
        BlockFace::Back => [[P, N, N], [N, N, N], [N, P, N], [P, N, N], [N, P, N], [P, P, N]],
        BlockFace::Top => [[N, P, N], [P, P, N], [P, P, P], [N, P, N], [P, P, P], [N, P, P]],
        BlockFace::Bottom => [[N, N, P], [P, N, P], [P, N, N], [N, N, P], [P, N, N], [N, N, N]],
        BlockFace::Right => [[P, N, P], [P, N, N], [P, P, N], [P, N, P], [P, P, N], [P, P, P]],
        BlockFace::Left => [[N, N, N], [N, N, P], [N, P, P], [N, N, N], [N, P, P], [N, P, N]],
    }
}

/// A face is drawn when the voxel across it lets light through
pub fn is_face_visible(registry: &BlockRegistry, neighbor: BlockId) -> bool {
    neighbor.is_air() || registry.is_transparent(neighbor)
}

/// Build the render mesh for one loaded chunk
///
/// Neighbour voxels across the chunk edge are read through the world, so a
/// missing neighbour chunk counts as empty and its boundary faces stay visible
/// until that neighbour is loaded and this chunk is rebuilt.
///
/// Returns `Ok(None)` when no face is visible.
pub fn generate_chunk_mesh(
    world: &WorldData,
    chunk_pos: ChunkPos,
) -> Result<Option<ChunkMesh>, WorldError> {
    let chunk = world
        .chunks
        .get(&chunk_pos)
        .ok_or(WorldError::ChunkNotLoaded {
            x: chunk_pos.x,
            z: chunk_pos.z,
        })?;

    if !chunk.flags.is_generated {
        return Err(WorldError::ChunkNotGenerated {
            x: chunk_pos.x,
            z: chunk_pos.z,
        });
    }

    let registry = &world.registry;
    let origin = chunk_pos.origin();
    let mut mesh =
        mesh_soa_operations::create_chunk_mesh([origin.x as f32, 0.0, origin.z as f32]);

    for y in 0..CHUNK_HEIGHT as usize {
        for z in 0..CHUNK_SIZE as usize {
            for x in 0..CHUNK_SIZE as usize {
                let local = LocalPos { x, y, z };
                let block = chunk.blocks[local.index()];
                if block.is_air() {
                    continue;
                }

                let color = registry.color(block);
                let center = [x as f32, y as f32, z as f32];

                for face in BlockFace::ALL {
                    let o = face.offset();
                    let (nx, ny, nz) = (x as i32 + o.x, y as i32 + o.y, z as i32 + o.z);

                    let neighbor = if chunk_operations::is_in_bounds(nx, ny, nz) {
                        chunk_operations::get_block(chunk, nx, ny, nz)
                    } else {
                        world_operations::get_block(world, origin.offset(nx, ny, nz))
                    };

                    if !is_face_visible(registry, neighbor) {
                        continue;
                    }

                    let mut corners = face_corners(face);
                    for corner in corners.iter_mut() {
                        corner[0] += center[0];
                        corner[1] += center[1];
                        corner[2] += center[2];
                    }
                    let n = face.normal();
                    mesh_soa_operations::add_face(&mut mesh, &corners, [n.x, n.y, n.z], color);
                }
            }
        }
    }

    log::debug!(
        "[generate_chunk_mesh] Chunk ({}, {}): {}",
        chunk_pos.x,
        chunk_pos.z,
        mesh_soa_operations::get_stats(&mesh)
    );

    if mesh_soa_operations::is_empty(&mesh) {
        Ok(None)
    } else {
        Ok(Some(mesh))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::generation::TerrainParams;
    use crate::world::storage::chunk_operations::{create_chunk, set_block};
    use crate::world::world_operations::{generate_initial_chunks, load_chunk};
    use crate::EngineConfig;

    fn flat_world(render_distance: u32) -> WorldData {
        let config = EngineConfig {
            render_distance,
            terrain: TerrainParams::flat(15.0),
            ..EngineConfig::default()
        };
        WorldData::new(&config)
    }

    fn normals(mesh: &ChunkMesh) -> Vec<[f32; 3]> {
        mesh.normals
            .chunks(3)
            .step_by(VERTICES_PER_FACE)
            .map(|n| [n[0], n[1], n[2]])
            .collect()
    }

    #[test]
    fn test_corners_lie_on_their_face() {
        for face in BlockFace::ALL {
            let n = face.normal();
            for corner in face_corners(face) {
                let along = corner[0] * n.x + corner[1] * n.y + corner[2] * n.z;
                assert_eq!(along, 0.5);
            }
        }
    }

    #[test]
    fn test_single_block_has_six_faces() {
        let mut world = flat_world(0);
        let pos = ChunkPos::new(0, 0);
        let mut chunk = create_chunk(pos);
        chunk.flags.is_generated = true;
        set_block(&mut chunk, 3, 20, 4, BlockId::Stone, 0);
        world.chunks.insert(pos, chunk);

        let mesh = generate_chunk_mesh(&world, pos)
            .expect("chunk is loaded")
            .expect("block is visible");
        assert_eq!(mesh_soa_operations::face_count(&mesh), 6);
        // First vertex of the +Z face: centre (3, 20, 4) + (-0.5, -0.5, 0.5)
        assert_eq!(&mesh.positions[0..3], &[2.5, 19.5, 4.5]);
        let stone = world.registry.color(BlockId::Stone);
        assert_eq!(&mesh.colors[0..3], &stone);
    }

    #[test]
    fn test_empty_chunk_has_no_mesh() {
        let mut world = flat_world(0);
        let pos = ChunkPos::new(2, 2);
        let mut chunk = create_chunk(pos);
        chunk.flags.is_generated = true;
        world.chunks.insert(pos, chunk);

        assert_eq!(generate_chunk_mesh(&world, pos), Ok(None));
    }

    #[test]
    fn test_surrounded_chunk_culls_interior_and_side_faces() {
        let mut world = flat_world(1);
        generate_initial_chunks(&mut world);

        let mesh = world.chunks[&ChunkPos::new(0, 0)]
            .mesh
            .clone()
            .expect("surface is visible");
        let normals = normals(&mesh);

        // One top face per column at the surface, one bottom face per column at y = 0
        let per_layer = (CHUNK_SIZE * CHUNK_SIZE) as usize;
        assert_eq!(normals.len(), per_layer * 2);
        assert_eq!(normals.iter().filter(|n| **n == [0.0, 1.0, 0.0]).count(), per_layer);
        assert_eq!(normals.iter().filter(|n| **n == [0.0, -1.0, 0.0]).count(), per_layer);
        assert_eq!(mesh.origin, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_missing_neighbor_exposes_boundary_faces() {
        let mut world = flat_world(0);
        let pos = ChunkPos::new(-1, 0);
        load_chunk(&mut world, pos).expect("load succeeds");

        let mesh = world.chunks[&pos].mesh.clone().expect("visible");
        let side_faces = normals(&mesh)
            .iter()
            .filter(|n| n[1] == 0.0)
            .count();
        // Four exposed sides, each 16 wide and 15 tall
        assert_eq!(side_faces, 4 * 16 * 15);
        assert_eq!(mesh.origin, [-16.0, 0.0, 0.0]);
    }

    #[test]
    fn test_unloaded_chunk_is_an_error() {
        let world = flat_world(0);
        assert_eq!(
            generate_chunk_mesh(&world, ChunkPos::new(9, 9)),
            Err(WorldError::ChunkNotLoaded { x: 9, z: 9 })
        );
    }
}
