//! Player Operations - Pure DOP Functions
//!
//! Turns movement intents and look input into body motion, and block
//! break / place requests into world edits.

use super::player_data::{MovementIntent, MovementIntents, PlayerData, PlayerInfo, PlayerSettings};
use crate::constants::agent::EYE_OFFSET;
use crate::physics::{self, BodyDimensions, PhysicsConfig};
use crate::world::core::{BlockId, BlockRegistry, ChunkPos, Ray, VoxelPos};
use crate::world::data_types::{ChunkUpdateReport, WorldData, WorldModification};
use crate::world::world_operations;
use cgmath::{InnerSpace, MetricSpace, Point3, Vector3};
use std::f32::consts::FRAC_PI_2;

/// Create a player standing (or falling) at `spawn`
pub fn create_player(spawn: Point3<f32>, settings: PlayerSettings) -> PlayerData {
    log::info!(
        "[create_player] Player initialized at ({:.1}, {:.1}, {:.1})",
        spawn.x,
        spawn.y,
        spawn.z
    );
    PlayerData {
        body: physics::create_body(spawn, BodyDimensions::default()),
        intents: MovementIntents::default(),
        yaw: 0.0,
        pitch: 0.0,
        selected_block: BlockId::Grass,
        settings,
    }
}

/// Press or release one movement intent
pub fn set_intent(player: &mut PlayerData, intent: MovementIntent, active: bool) {
    let slot = match intent {
        MovementIntent::Forward => &mut player.intents.forward,
        MovementIntent::Backward => &mut player.intents.backward,
        MovementIntent::Left => &mut player.intents.left,
        MovementIntent::Right => &mut player.intents.right,
        MovementIntent::Jump => &mut player.intents.jump,
    };
    *slot = active;
}

/// Apply relative look input
pub fn handle_look(player: &mut PlayerData, delta_x: f32, delta_y: f32) {
    player.yaw -= delta_x * player.settings.mouse_sensitivity;
    player.pitch -= delta_y * player.settings.mouse_sensitivity;
    player.pitch = player.pitch.clamp(-FRAC_PI_2, FRAC_PI_2);
}

/// Look direction for a yaw / pitch pair
pub fn calculate_forward_vector(yaw: f32, pitch: f32) -> Vector3<f32> {
    Vector3::new(
        -yaw.sin() * pitch.cos(),
        pitch.sin(),
        -yaw.cos() * pitch.cos(),
    )
}

/// Horizontal forward and right vectors for walking
pub fn calculate_walk_basis(yaw: f32) -> (Vector3<f32>, Vector3<f32>) {
    let forward = Vector3::new(-yaw.sin(), 0.0, -yaw.cos());
    let right = Vector3::new(yaw.cos(), 0.0, -yaw.sin());
    (forward, right)
}

pub fn eye_position(player: &PlayerData) -> Point3<f32> {
    let p = player.body.position;
    Point3::new(p.x, p.y + player.body.dimensions.height - EYE_OFFSET, p.z)
}

/// Ray from the eye along the look direction
pub fn look_ray(player: &PlayerData) -> Ray {
    Ray::new(
        eye_position(player),
        calculate_forward_vector(player.yaw, player.pitch),
    )
}

/// Convert held intents into horizontal velocity and jumps
pub fn apply_movement_intents(player: &mut PlayerData) {
    let (forward, right) = calculate_walk_basis(player.yaw);
    let intents = player.intents;

    let mut movement = Vector3::new(0.0, 0.0, 0.0);
    if intents.forward {
        movement += forward;
    }
    if intents.backward {
        movement -= forward;
    }
    if intents.left {
        movement -= right;
    }
    if intents.right {
        movement += right;
    }

    if movement.magnitude2() > 0.0 {
        let velocity = movement.normalize() * player.settings.walk_speed;
        physics::set_horizontal_velocity(&mut player.body, velocity.x, velocity.z);
    } else {
        physics::set_horizontal_velocity(&mut player.body, 0.0, 0.0);
    }

    if intents.jump {
        physics::try_jump(&mut player.body, player.settings.jump_velocity);
    }
}

/// Advance the player one tick and stream chunks around it
pub fn update_player(
    world: &mut WorldData,
    player: &mut PlayerData,
    physics_config: &PhysicsConfig,
    dt: f32,
) -> ChunkUpdateReport {
    apply_movement_intents(player);
    physics::step_body(&*world, &mut player.body, physics_config, dt);

    let p = player.body.position;
    world_operations::update_chunks_around_observer(world, p.x, p.z)
}

/// Break the block under the crosshair
pub fn break_block(world: &mut WorldData, player: &PlayerData) -> Option<WorldModification> {
    let hit = world_operations::raycast_block(world, &look_ray(player), player.settings.reach_distance)?;

    match world_operations::try_set_block(world, hit.position, BlockId::Air) {
        Ok(modification) => {
            log::info!("[break_block] Broke {} at {:?}", hit.block, hit.position);
            Some(modification)
        }
        Err(e) => {
            log::warn!("[break_block] Could not break {:?}: {}", hit.position, e);
            None
        }
    }
}

/// Place the selected block against the surface under the crosshair
///
/// Refused when the target voxel centre is within the minimum place distance
/// of the player's feet.
pub fn place_block(world: &mut WorldData, player: &PlayerData) -> Option<WorldModification> {
    let target: VoxelPos =
        world_operations::get_place_position(world, &look_ray(player), player.settings.reach_distance)?;

    let distance = player.body.position.distance(target.center());
    if distance <= player.settings.min_place_distance {
        log::debug!("[place_block] Refused {:?}, too close ({:.2})", target, distance);
        return None;
    }

    match world_operations::try_set_block(world, target, player.selected_block) {
        Ok(modification) => {
            log::info!("[place_block] Placed {} at {:?}", player.selected_block, target);
            Some(modification)
        }
        Err(e) => {
            log::warn!("[place_block] Could not place at {:?}: {}", target, e);
            None
        }
    }
}

/// Pick a hotbar slot
pub fn select_block(player: &mut PlayerData, registry: &BlockRegistry, slot: usize) -> bool {
    match registry.placeable_blocks().get(slot) {
        Some(&block) => {
            player.selected_block = block;
            true
        }
        None => false,
    }
}

pub fn player_info(player: &PlayerData, registry: &BlockRegistry) -> PlayerInfo {
    let p = player.body.position;
    let v = player.body.velocity;
    PlayerInfo {
        position: [p.x, p.y, p.z],
        velocity: [v.x, v.y, v.z],
        on_ground: player.body.on_ground,
        selected_block: player.selected_block,
        selected_block_name: registry.name(player.selected_block),
        chunk: ChunkPos::from_world(p.x, p.z),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::generation::TerrainParams;
    use crate::world::world_operations::{generate_initial_chunks, get_block};
    use crate::EngineConfig;

    const DT: f32 = 1.0 / 60.0;

    fn flat_setup() -> (WorldData, PlayerData, PhysicsConfig) {
        let config = EngineConfig {
            render_distance: 1,
            terrain: TerrainParams::flat(15.0),
            ..EngineConfig::default()
        };
        let mut world = WorldData::new(&config);
        generate_initial_chunks(&mut world);
        let player = create_player(Point3::new(0.5, 15.0, 0.5), PlayerSettings::default());
        (world, player, config.physics)
    }

    #[test]
    fn test_look_pitch_is_clamped() {
        let (_, mut player, _) = flat_setup();
        handle_look(&mut player, 0.0, -10_000.0);
        assert_eq!(player.pitch, FRAC_PI_2);
        handle_look(&mut player, 0.0, 20_000.0);
        assert_eq!(player.pitch, -FRAC_PI_2);
    }

    #[test]
    fn test_forward_walks_toward_negative_z() {
        let (mut world, mut player, physics_config) = flat_setup();
        set_intent(&mut player, MovementIntent::Forward, true);

        for _ in 0..30 {
            update_player(&mut world, &mut player, &physics_config, DT);
        }
        assert!(player.body.position.z < 0.0);
        assert!((player.body.position.x - 0.5).abs() < 1e-4);
        assert!(player.body.on_ground);

        set_intent(&mut player, MovementIntent::Forward, false);
        update_player(&mut world, &mut player, &physics_config, DT);
        assert_eq!(player.body.velocity.x, 0.0);
        assert_eq!(player.body.velocity.z, 0.0);
    }

    #[test]
    fn test_diagonal_speed_is_normalized() {
        let (_, mut player, _) = flat_setup();
        player.intents.forward = true;
        player.intents.right = true;
        apply_movement_intents(&mut player);
        let v = player.body.velocity;
        assert!(((v.x * v.x + v.z * v.z).sqrt() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_break_block_below() {
        let (mut world, mut player, physics_config) = flat_setup();
        update_player(&mut world, &mut player, &physics_config, DT);
        player.pitch = -FRAC_PI_2;

        let modification = break_block(&mut world, &player).expect("ground within reach");
        assert_eq!(modification.position, VoxelPos::new(0, 14, 0));
        assert_eq!(modification.old_block, BlockId::Grass);
        assert_eq!(get_block(&world, VoxelPos::new(0, 14, 0)), BlockId::Air);
    }

    #[test]
    fn test_place_refused_at_own_feet() {
        let (mut world, mut player, _) = flat_setup();
        player.pitch = -FRAC_PI_2;
        assert!(place_block(&mut world, &player).is_none());
        assert_eq!(get_block(&world, VoxelPos::new(0, 15, 0)), BlockId::Air);
    }

    #[test]
    fn test_place_block_ahead() {
        let (mut world, mut player, _) = flat_setup();
        assert!(select_block(&mut player, &world.registry, 3));
        assert!(!select_block(&mut player, &world.registry, 9));
        player.pitch = -0.5;

        let modification = place_block(&mut world, &player).expect("placed");
        assert_eq!(modification.new_block, BlockId::Wood);
        assert_eq!(modification.position.y, 15);
        assert!(modification.position.z <= -2);
        assert_eq!(get_block(&world, modification.position), BlockId::Wood);
    }

    #[test]
    fn test_player_info() {
        let (world, player, _) = flat_setup();
        let info = player_info(&player, &world.registry);
        assert_eq!(info.selected_block_name, "Grass");
        assert_eq!(info.chunk, ChunkPos::new(0, 0));
        assert_eq!(info.position, [0.5, 15.0, 0.5]);
    }
}
