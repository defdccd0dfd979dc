//! World Operations - Pure DOP Functions
//!
//! This is the PUBLIC API for world manipulation.
//! Every function takes `WorldData` explicitly; nothing is global.
//!
//! This is what the player, AI agents and the renderer call directly.

use super::core::{determine_hit_face, BlockId, ChunkPos, Ray, RaycastHit, VoxelPos};
use super::data_types::{ChunkUpdateReport, WorldData, WorldModification, WorldStats};
use super::error::WorldError;
use super::generation::TerrainGenerator;
use super::management::{chunks_in_radius, plan_chunk_updates};
use super::storage::{chunk_operations, ChunkData};
use crate::constants::raycast::{MAX_RAY_DISTANCE, RAY_STEP};
use crate::constants::{CHUNK_SIZE, VOXELS_PER_CHUNK};
use crate::error::{EngineError, EngineResult};
use crate::renderer::{mesh_soa_operations, mesh_utils};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::collections::hash_map::Entry;

// ============================================================================
// BLOCK OPERATIONS
// ============================================================================

/// Get block at position
///
/// # Returns
/// BlockId at that position, or Air when outside the vertical range or the
/// owning chunk is not loaded
pub fn get_block(world: &WorldData, pos: VoxelPos) -> BlockId {
    let Some(local) = pos.local_pos() else {
        return BlockId::Air;
    };

    world
        .chunks
        .get(&pos.chunk_pos())
        .and_then(|chunk| chunk.blocks.get(local.index()).copied())
        .unwrap_or(BlockId::Air)
}

/// Set block at position and rebuild every affected mesh
///
/// The owning chunk is always remeshed. An edit on local x = 0 / x = 15 also
/// remeshes the west / east neighbour, and likewise on z, when that neighbour
/// is loaded.
///
/// # Returns
/// The modification record, or why nothing was written
pub fn try_set_block(
    world: &mut WorldData,
    pos: VoxelPos,
    block_id: BlockId,
) -> Result<WorldModification, WorldError> {
    let local = pos.local_pos().ok_or(WorldError::OutOfBounds {
        x: pos.x,
        y: pos.y,
        z: pos.z,
    })?;
    let chunk_pos = pos.chunk_pos();
    let tick = world.tick;

    let chunk = world
        .chunks
        .get_mut(&chunk_pos)
        .ok_or(WorldError::ChunkNotLoaded {
            x: chunk_pos.x,
            z: chunk_pos.z,
        })?;

    let (lx, ly, lz) = (local.x as i32, local.y as i32, local.z as i32);
    let old_block = chunk_operations::get_block(chunk, lx, ly, lz);
    chunk_operations::set_block(chunk, lx, ly, lz, block_id, tick);

    let edge = CHUNK_SIZE as usize - 1;
    let mut affected = vec![chunk_pos];
    if local.x == 0 {
        affected.push(ChunkPos::new(chunk_pos.x - 1, chunk_pos.z));
    } else if local.x == edge {
        affected.push(ChunkPos::new(chunk_pos.x + 1, chunk_pos.z));
    }
    if local.z == 0 {
        affected.push(ChunkPos::new(chunk_pos.x, chunk_pos.z - 1));
    } else if local.z == edge {
        affected.push(ChunkPos::new(chunk_pos.x, chunk_pos.z + 1));
    }

    let mut remeshed_chunks = 0;
    for target in affected {
        if !world.chunks.contains_key(&target) {
            continue;
        }
        match remesh_chunk(world, target) {
            Ok(()) => remeshed_chunks += 1,
            Err(e) => log::error!("[try_set_block] Remesh of {:?} failed: {}", target, e),
        }
    }

    log::debug!(
        "[try_set_block] {:?}: {} -> {} ({} meshes rebuilt)",
        pos,
        old_block,
        block_id,
        remeshed_chunks
    );

    Ok(WorldModification {
        position: pos,
        old_block,
        new_block: block_id,
        timestamp: tick,
        remeshed_chunks,
    })
}

/// Set block at position
///
/// # Returns
/// false when the position is outside the vertical range or its chunk is not loaded
pub fn set_block(world: &mut WorldData, pos: VoxelPos, block_id: BlockId) -> bool {
    match try_set_block(world, pos, block_id) {
        Ok(_) => true,
        Err(e) => {
            log::debug!("[set_block] Ignored write to {:?}: {}", pos, e);
            false
        }
    }
}

/// Whether the voxel containing a continuous world point is solid
pub fn is_position_solid(world: &WorldData, x: f32, y: f32, z: f32) -> bool {
    world
        .registry
        .is_solid(get_block(world, VoxelPos::from_world(x, y, z)))
}

// ============================================================================
// RAYCASTING
// ============================================================================

/// Samples taken for a ray; distances beyond `MAX_RAY_DISTANCE` are capped and
/// NaN or non-positive distances take none
fn ray_steps(max_distance: f32) -> u32 {
    if !(max_distance > 0.0) {
        return 0;
    }
    (max_distance.min(MAX_RAY_DISTANCE) / RAY_STEP).floor() as u32
}

/// March a ray in fixed steps and return the first solid voxel
///
/// Samples at `RAY_STEP * i` for i = 1..=floor(max_distance / RAY_STEP); the
/// origin itself is never sampled. `max_distance` is capped at
/// `MAX_RAY_DISTANCE`.
pub fn raycast_block(world: &WorldData, ray: &Ray, max_distance: f32) -> Option<RaycastHit> {
    for i in 1..=ray_steps(max_distance) {
        let distance = RAY_STEP * i as f32;
        let point = ray.point_at(distance);
        let voxel = VoxelPos::from_point(point);
        let block = get_block(world, voxel);

        if world.registry.is_solid(block) {
            return Some(RaycastHit {
                position: voxel,
                face: determine_hit_face(point, voxel),
                distance,
                block,
            });
        }
    }

    None
}

/// Empty voxel where a block would be placed along a ray
///
/// Returns the last air voxel seen before the first solid one. When nothing
/// solid is in range the last air voxel seen is returned; `None` when the very
/// first sample is solid or no sample was taken.
pub fn get_place_position(world: &WorldData, ray: &Ray, max_distance: f32) -> Option<VoxelPos> {
    let mut last_air = None;

    for i in 1..=ray_steps(max_distance) {
        let voxel = VoxelPos::from_point(ray.point_at(RAY_STEP * i as f32));
        let block = get_block(world, voxel);

        if world.registry.is_solid(block) {
            return last_air;
        }
        if block.is_air() {
            last_air = Some(voxel);
        }
    }

    last_air
}

// ============================================================================
// CHUNK OPERATIONS
// ============================================================================

/// Check if chunk is loaded
pub fn is_chunk_loaded(world: &WorldData, chunk_pos: ChunkPos) -> bool {
    world.chunks.contains_key(&chunk_pos)
}

/// Load a chunk, generating and meshing it if absent
///
/// Never creates a second chunk for the same position.
pub fn load_chunk(world: &mut WorldData, chunk_pos: ChunkPos) -> Result<&ChunkData, WorldError> {
    if !world.chunks.contains_key(&chunk_pos) {
        let chunk = chunk_operations::create_generated_chunk(chunk_pos, &world.generator);
        insert_generated_chunks(world, vec![chunk]);
    }

    world.chunks.get(&chunk_pos).ok_or(WorldError::ChunkNotLoaded {
        x: chunk_pos.x,
        z: chunk_pos.z,
    })
}

/// Unload a chunk, releasing its mesh
///
/// Loaded neighbours are remeshed so the faces that bordered it show again.
pub fn unload_chunk(world: &mut WorldData, chunk_pos: ChunkPos) -> bool {
    !remove_chunks(world, &[chunk_pos]).is_empty()
}

/// Remove a batch of chunks, then remesh each surviving orthogonal neighbour once
///
/// # Returns
/// Positions actually removed
fn remove_chunks(world: &mut WorldData, positions: &[ChunkPos]) -> Vec<ChunkPos> {
    let mut removed = Vec::with_capacity(positions.len());
    for &pos in positions {
        if let Some(mut chunk) = world.chunks.remove(&pos) {
            chunk_operations::dispose(&mut chunk);
            removed.push(pos);
        }
    }

    let mut queued = FxHashSet::default();
    let mut to_mesh = Vec::new();
    for pos in &removed {
        for neighbor in pos.orthogonal_neighbors() {
            if world.chunks.contains_key(&neighbor) && queued.insert(neighbor) {
                to_mesh.push(neighbor);
            }
        }
    }

    for pos in to_mesh {
        if let Err(e) = remesh_chunk(world, pos) {
            log::error!("[remove_chunks] Remeshing {:?} failed: {}", pos, e);
        }
    }

    removed
}

/// Rebuild one chunk's mesh from current voxel state
///
/// Fails with `EngineError::MeshGeneration` when the chunk is not loaded or
/// not generated yet.
pub fn remesh_chunk(world: &mut WorldData, chunk_pos: ChunkPos) -> EngineResult<()> {
    let mesh = mesh_utils::generate_chunk_mesh(world, chunk_pos).map_err(|e| {
        EngineError::MeshGeneration {
            chunk_pos: (chunk_pos.x, chunk_pos.z),
            error: e.to_string(),
        }
    })?;
    let chunk = world
        .chunks
        .get_mut(&chunk_pos)
        .ok_or(WorldError::ChunkNotLoaded {
            x: chunk_pos.x,
            z: chunk_pos.z,
        })?;
    chunk_operations::replace_mesh(chunk, mesh);
    Ok(())
}

/// Run terrain generation for many chunks in parallel
///
/// Each task writes only its own new chunk; nothing in the world is touched.
pub fn generate_chunks_parallel(generator: &TerrainGenerator, positions: &[ChunkPos]) -> Vec<ChunkData> {
    positions
        .par_iter()
        .map(|&pos| chunk_operations::create_generated_chunk(pos, generator))
        .collect()
}

/// Insert generated chunks, then mesh them once all are present
///
/// Loaded neighbours of the new chunks are remeshed too so their boundary
/// faces get culled. Positions already loaded are skipped.
///
/// # Returns
/// Positions actually inserted
pub fn insert_generated_chunks(world: &mut WorldData, chunks: Vec<ChunkData>) -> Vec<ChunkPos> {
    let mut inserted = Vec::with_capacity(chunks.len());

    for chunk in chunks {
        let pos = chunk.position;
        if let Entry::Vacant(slot) = world.chunks.entry(pos) {
            slot.insert(chunk);
            inserted.push(pos);
        }
    }

    let mut queued: FxHashSet<ChunkPos> = inserted.iter().copied().collect();
    let mut to_mesh = inserted.clone();
    for pos in &inserted {
        for neighbor in pos.orthogonal_neighbors() {
            if world.chunks.contains_key(&neighbor) && queued.insert(neighbor) {
                to_mesh.push(neighbor);
            }
        }
    }

    for pos in to_mesh {
        if let Err(e) = remesh_chunk(world, pos) {
            log::error!("[insert_generated_chunks] Meshing {:?} failed: {}", pos, e);
        }
    }

    inserted
}

/// Generate the starting ring of chunks around the world origin
///
/// # Returns
/// Number of chunks created
pub fn generate_initial_chunks(world: &mut WorldData) -> usize {
    let ring = chunks_in_radius(ChunkPos::new(0, 0), world.streaming.load_radius);
    let missing: Vec<ChunkPos> = ring
        .into_iter()
        .filter(|pos| !world.chunks.contains_key(pos))
        .collect();

    let generated = generate_chunks_parallel(&world.generator, &missing);
    let inserted = insert_generated_chunks(world, generated);

    log::info!(
        "[generate_initial_chunks] Generated {} chunks (radius {})",
        inserted.len(),
        world.streaming.load_radius
    );
    inserted.len()
}

/// Stream chunks around an observer
///
/// Does nothing while the observer stays inside the chunk it was in at the
/// previous call. Otherwise loads every chunk within the load radius and
/// unloads every chunk beyond the unload radius.
pub fn update_chunks_around_observer(
    world: &mut WorldData,
    world_x: f32,
    world_z: f32,
) -> ChunkUpdateReport {
    let center = ChunkPos::from_world(world_x, world_z);

    if world.last_observer_chunk == Some(center) {
        return ChunkUpdateReport {
            center: Some(center),
            ..ChunkUpdateReport::default()
        };
    }
    world.last_observer_chunk = Some(center);

    let plan = plan_chunk_updates(center, world.chunks.keys().copied(), &world.streaming);
    let generated = generate_chunks_parallel(&world.generator, &plan.to_load);
    let loaded = insert_generated_chunks(world, generated);

    let unloaded = remove_chunks(world, &plan.to_unload);

    log::info!(
        "[update_chunks_around_observer] Observer in chunk ({}, {}): +{} -{} ({} loaded)",
        center.x,
        center.z,
        loaded.len(),
        unloaded.len(),
        world.chunks.len()
    );

    ChunkUpdateReport {
        center: Some(center),
        loaded,
        unloaded,
    }
}

// ============================================================================
// WORLD QUERIES
// ============================================================================

/// Get all loaded chunks, sorted by position
pub fn get_loaded_chunks(world: &WorldData) -> Vec<ChunkPos> {
    let mut chunks: Vec<ChunkPos> = world.chunks.keys().copied().collect();
    chunks.sort_by_key(|pos| (pos.x, pos.z));
    chunks
}

/// Get active chunk count
pub fn get_active_chunk_count(world: &WorldData) -> usize {
    world.chunks.len()
}

/// Get world tick
pub fn get_world_tick(world: &WorldData) -> u64 {
    world.tick
}

/// Advance the world clock by one simulation tick
pub fn advance_tick(world: &mut WorldData) {
    world.tick = world.tick.wrapping_add(1);
}

/// Gather chunk and mesh counters
pub fn world_stats(world: &WorldData) -> WorldStats {
    world
        .chunks
        .values()
        .fold(WorldStats::default(), |mut stats, chunk| {
            stats.loaded_chunks += 1;
            stats.generated_chunks += chunk.flags.is_generated as usize;
            stats.meshed_chunks += chunk.flags.is_meshed as usize;
            stats.dirty_chunks += chunk.flags.is_dirty as usize;
            stats.total_faces += chunk
                .mesh
                .as_ref()
                .map(mesh_soa_operations::face_count)
                .unwrap_or(0);
            stats.non_air_blocks += chunk_operations::count_non_air(chunk) as u64;
            stats
        })
}

// ============================================================================
// DIAGNOSTICS
// ============================================================================

/// Log world statistics
pub fn log_world_stats(world: &WorldData) {
    let stats = world_stats(world);
    log::info!("[World] Statistics:");
    log::info!("  Tick: {}", world.tick);
    log::info!("  Seed: {}", world.generator.params().seed);
    log::info!("  Loaded chunks: {}", stats.loaded_chunks);
    log::info!("  Meshed chunks: {} ({} dirty)", stats.meshed_chunks, stats.dirty_chunks);
    log::info!("  Visible faces: {}", stats.total_faces);
    log::info!("  Solid voxels: {}", stats.non_air_blocks);
}

/// Validate world data integrity
pub fn validate_world_data(world: &WorldData) -> Result<(), WorldError> {
    for (key, chunk) in &world.chunks {
        let invalid = |reason: String| WorldError::InvalidChunkData {
            x: key.x,
            z: key.z,
            reason,
        };

        if chunk.position != *key {
            return Err(invalid(format!("stored under wrong key, holds {:?}", chunk.position)));
        }
        if chunk.blocks.len() != VOXELS_PER_CHUNK {
            return Err(invalid(format!(
                "has {} blocks, expected {}",
                chunk.blocks.len(),
                VOXELS_PER_CHUNK
            )));
        }
        if !chunk.flags.is_generated {
            return Err(WorldError::ChunkNotGenerated { x: key.x, z: key.z });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::generation::TerrainParams;
    use crate::EngineConfig;
    use cgmath::{Point3, Vector3};

    fn world_with(terrain: TerrainParams, render_distance: u32) -> WorldData {
        let config = EngineConfig {
            render_distance,
            terrain,
            ..EngineConfig::default()
        };
        WorldData::new(&config)
    }

    fn flat_world() -> WorldData {
        let mut world = world_with(TerrainParams::flat(15.0), 1);
        generate_initial_chunks(&mut world);
        world
    }

    fn mesh_revision(world: &WorldData, pos: ChunkPos) -> u32 {
        world.chunks[&pos].flags.mesh_revision
    }

    #[test]
    fn test_vertical_bounds_are_empty() {
        let mut world = flat_world();
        assert_eq!(get_block(&world, VoxelPos::new(0, -1, 0)), BlockId::Air);
        assert_eq!(get_block(&world, VoxelPos::new(0, 64, 0)), BlockId::Air);
        assert!(!set_block(&mut world, VoxelPos::new(0, 64, 0), BlockId::Stone));
        assert_eq!(
            try_set_block(&mut world, VoxelPos::new(0, -1, 0), BlockId::Stone),
            Err(WorldError::OutOfBounds { x: 0, y: -1, z: 0 })
        );
    }

    #[test]
    fn test_unloaded_chunk_reads_air_and_rejects_writes() {
        let mut world = flat_world();
        let far = VoxelPos::new(500, 5, 500);
        assert_eq!(get_block(&world, far), BlockId::Air);
        assert!(!set_block(&mut world, far, BlockId::Stone));
    }

    #[test]
    fn test_set_get_round_trip() {
        let mut world = flat_world();
        for pos in [
            VoxelPos::new(0, 30, 0),
            VoxelPos::new(-1, 20, -1),
            VoxelPos::new(15, 5, -16),
            VoxelPos::new(-16, 63, 31),
        ] {
            let record = try_set_block(&mut world, pos, BlockId::Wood).expect("loaded");
            assert_eq!(record.new_block, BlockId::Wood);
            assert_eq!(get_block(&world, pos), BlockId::Wood);
        }
    }

    #[test]
    fn test_boundary_consistency_with_negative_coordinates() {
        let mut world = flat_world();
        assert!(set_block(&mut world, VoxelPos::new(-1, 20, -1), BlockId::Sand));

        let chunk = &world.chunks[&ChunkPos::new(-1, -1)];
        assert_eq!(chunk_operations::get_block(chunk, 15, 20, 15), BlockId::Sand);
        // The origin chunk is untouched
        let origin = &world.chunks[&ChunkPos::new(0, 0)];
        assert_eq!(chunk_operations::get_block(origin, 0, 20, 0), BlockId::Air);
    }

    #[test]
    fn test_edge_edit_remeshes_neighbors() {
        let mut world = flat_world();
        let west = ChunkPos::new(-1, 0);
        let south = ChunkPos::new(0, -1);
        let east = ChunkPos::new(1, 0);
        let before = (
            mesh_revision(&world, west),
            mesh_revision(&world, south),
            mesh_revision(&world, east),
        );

        // Local (0, 14, 0) of chunk (0, 0): corner touching west and south
        let record = try_set_block(&mut world, VoxelPos::new(0, 14, 0), BlockId::Air).expect("loaded");
        assert_eq!(record.old_block, BlockId::Grass);
        assert_eq!(record.remeshed_chunks, 3);
        assert_eq!(mesh_revision(&world, west), before.0 + 1);
        assert_eq!(mesh_revision(&world, south), before.1 + 1);
        assert_eq!(mesh_revision(&world, east), before.2);

        // Interior edit only touches the owner
        let record = try_set_block(&mut world, VoxelPos::new(5, 14, 5), BlockId::Air).expect("loaded");
        assert_eq!(record.remeshed_chunks, 1);
    }

    #[test]
    fn test_removing_edge_block_exposes_neighbor_face() {
        let mut world = flat_world();
        let west = ChunkPos::new(-1, 0);
        let faces_before = world.chunks[&west].mesh.as_ref().map(mesh_soa_operations::face_count);

        // Dig out the voxel just east of the west chunk's edge
        assert!(set_block(&mut world, VoxelPos::new(0, 10, 5), BlockId::Air));
        let faces_after = world.chunks[&west].mesh.as_ref().map(mesh_soa_operations::face_count);
        assert_eq!(faces_after, faces_before.map(|f| f + 1));
    }

    #[test]
    fn test_is_position_solid_floors() {
        let world = flat_world();
        assert!(is_position_solid(&world, 0.5, 14.99, 0.5));
        assert!(!is_position_solid(&world, 0.5, 15.0, 0.5));
        assert!(is_position_solid(&world, -0.01, 3.0, -15.99));
    }

    #[test]
    fn test_raycast_straight_down_hits_surface() {
        let world = flat_world();
        let ray = Ray::new(Point3::new(0.5, 20.0, 0.5), Vector3::new(0.0, -1.0, 0.0));

        let hit = raycast_block(&world, &ray, 10.0).expect("surface in range");
        assert_eq!(hit.position, VoxelPos::new(0, 14, 0));
        assert_eq!(hit.block, BlockId::Grass);
        assert!((hit.distance - 5.1).abs() < 1e-4);

        assert!(raycast_block(&world, &ray, 5.0).is_none());
    }

    #[test]
    fn test_ray_length_is_capped() {
        assert_eq!(ray_steps(f32::INFINITY), ray_steps(MAX_RAY_DISTANCE));
        assert_eq!(ray_steps(1.0e12), ray_steps(MAX_RAY_DISTANCE));
        assert_eq!(ray_steps(f32::NAN), 0);
        assert_eq!(ray_steps(-1.0), 0);

        let world = flat_world();
        let down = Ray::new(Point3::new(0.5, 20.0, 0.5), Vector3::new(0.0, -1.0, 0.0));
        let hit = raycast_block(&world, &down, f32::INFINITY).expect("surface below");
        assert_eq!(hit.position, VoxelPos::new(0, 14, 0));

        let up = Ray::new(Point3::new(0.5, 20.0, 0.5), Vector3::new(0.0, 1.0, 0.0));
        assert!(raycast_block(&world, &up, f32::INFINITY).is_none());
    }

    #[test]
    fn test_place_position_is_adjacent_air() {
        let world = flat_world();
        let ray = Ray::new(Point3::new(0.5, 20.0, 0.5), Vector3::new(0.0, -1.0, 0.0));

        let hit = raycast_block(&world, &ray, 10.0).expect("hit");
        let place = get_place_position(&world, &ray, 10.0).expect("air above surface");
        assert_eq!(place, VoxelPos::new(0, 15, 0));
        assert_eq!(get_block(&world, place), BlockId::Air);
        assert_eq!(
            (place.x - hit.position.x).abs() + (place.y - hit.position.y).abs() + (place.z - hit.position.z).abs(),
            1
        );
    }

    #[test]
    fn test_place_position_edge_cases() {
        let world = flat_world();
        // Inside the ground: the first sample is already solid
        let buried = Ray::new(Point3::new(0.5, 10.5, 0.5), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(get_place_position(&world, &buried, 5.0), None);

        // Pointing at the sky: the last air voxel in range
        let skyward = Ray::new(Point3::new(0.5, 20.5, 0.5), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(
            get_place_position(&world, &skyward, 2.0),
            Some(VoxelPos::new(0, 22, 0))
        );
        assert!(raycast_block(&world, &skyward, 2.0).is_none());
    }

    #[test]
    fn test_load_chunk_is_idempotent() {
        let mut world = world_with(TerrainParams::default(), 2);
        let pos = ChunkPos::new(4, -3);
        load_chunk(&mut world, pos).expect("loads");
        set_block(&mut world, VoxelPos::new(64, 40, -48), BlockId::Wood);

        let chunk = load_chunk(&mut world, pos).expect("still loaded");
        assert_eq!(chunk_operations::get_block(chunk, 0, 40, 0), BlockId::Wood);
        assert_eq!(get_active_chunk_count(&world), 1);
    }

    #[test]
    fn test_initial_ring() {
        let mut world = world_with(TerrainParams::default(), 3);
        assert_eq!(generate_initial_chunks(&mut world), 49);
        assert_eq!(generate_initial_chunks(&mut world), 0);

        let stats = world_stats(&world);
        assert_eq!(stats.loaded_chunks, 49);
        assert_eq!(stats.generated_chunks, 49);
        assert_eq!(stats.meshed_chunks, 49);
        assert_eq!(stats.dirty_chunks, 0);
        assert!(validate_world_data(&world).is_ok());
    }

    #[test]
    fn test_observer_update_is_debounced() {
        let mut world = world_with(TerrainParams::default(), 2);
        let first = update_chunks_around_observer(&mut world, 3.0, 3.0);
        assert_eq!(first.loaded.len(), 25);

        // Same chunk, different position
        let second = update_chunks_around_observer(&mut world, 12.5, 0.5);
        assert!(second.is_noop());
        assert_eq!(second.center, Some(ChunkPos::new(0, 0)));
    }

    #[test]
    fn test_observer_update_loads_and_unloads() {
        let mut world = world_with(TerrainParams::default(), 1);
        update_chunks_around_observer(&mut world, 0.0, 0.0);

        let report = update_chunks_around_observer(&mut world, 16.0 * 3.0 + 1.0, 0.0);
        assert_eq!(report.center, Some(ChunkPos::new(3, 0)));
        assert_eq!(report.loaded.len(), 9);
        assert_eq!(report.unloaded.len(), 6);
        assert!(get_loaded_chunks(&world)
            .iter()
            .all(|pos| pos.chebyshev_distance(ChunkPos::new(3, 0)) <= 2));
    }

    #[test]
    fn test_unload_exposes_neighbor_boundary_faces() {
        let mut world = flat_world();
        let origin = ChunkPos::new(0, 0);
        let faces = |world: &WorldData| {
            world.chunks[&origin]
                .mesh
                .as_ref()
                .map(mesh_soa_operations::face_count)
        };
        let before = faces(&world);

        assert!(unload_chunk(&mut world, ChunkPos::new(1, 0)));
        let after_unload = faces(&world);
        // East edge: 16 columns of 15 voxels (y = 0..=14) now face empty space
        assert_eq!(after_unload, before.map(|f| f + 16 * 15));

        remesh_chunk(&mut world, origin).expect("loaded");
        assert_eq!(faces(&world), after_unload);
    }

    #[test]
    fn test_remesh_failure_is_mesh_generation_error() {
        let mut world = flat_world();
        let missing = ChunkPos::new(9, 9);
        assert!(matches!(
            remesh_chunk(&mut world, missing),
            Err(EngineError::MeshGeneration { chunk_pos: (9, 9), .. })
        ));
    }

    #[test]
    fn test_observer_far_out_stays_in_range() {
        let mut world = world_with(TerrainParams::flat(15.0), 1);
        let report = update_chunks_around_observer(&mut world, 3.0e9, 0.0);
        assert_eq!(report.center, Some(ChunkPos::new(1_875_000, 0)));
        assert_eq!(report.loaded.len(), 9);

        let report = update_chunks_around_observer(&mut world, -f32::INFINITY, f32::MAX);
        assert_eq!(report.center, Some(ChunkPos::new(-1_875_000, 1_875_000)));
        assert_eq!(report.unloaded.len(), 9);
        assert!(validate_world_data(&world).is_ok());
    }

    #[test]
    fn test_unload_then_reload_regenerates_identically() {
        let mut world = world_with(TerrainParams::default(), 1);
        let pos = ChunkPos::new(-2, 5);
        let original = load_chunk(&mut world, pos).expect("loads").blocks.clone();

        set_block(&mut world, VoxelPos::new(-32, 50, 80), BlockId::Stone);
        assert!(unload_chunk(&mut world, pos));
        assert!(!unload_chunk(&mut world, pos));
        assert!(!is_chunk_loaded(&world, pos));

        let reloaded = load_chunk(&mut world, pos).expect("reloads");
        assert_eq!(reloaded.blocks, original);
    }

    #[test]
    fn test_validate_detects_corruption() {
        let mut world = flat_world();
        if let Some(chunk) = world.chunks.get_mut(&ChunkPos::new(0, 0)) {
            chunk.blocks.truncate(10);
        }
        assert!(matches!(
            validate_world_data(&world),
            Err(WorldError::InvalidChunkData { x: 0, z: 0, .. })
        ));
    }
}
