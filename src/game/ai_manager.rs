//! AI Manager - Pure DOP Functions
//!
//! Owns the agent population: staggered initial spawns, periodic spawns around
//! the player, per-tick agent updates and removal of agents that fell out of
//! the world.

use super::ai_data::{AiAgentInfo, AiConfig, AiManagerData, AiSettings, AiTickReport};
use super::ai_operations::{agent_info, create_agent, update_agent, AgentTickContext};
use crate::physics::PhysicsConfig;
use crate::world::data_types::WorldData;
use crate::world::world_operations::is_position_solid;
use cgmath::Point3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

const SPAWN_ATTEMPTS: usize = 20;
const SPAWN_MIN_DISTANCE: f32 = 15.0;
const SPAWN_DISTANCE_SPREAD: f32 = 15.0;
/// Spawn ground search covers y in (8, 40]
const SPAWN_SEARCH_TOP: i32 = 40;
const SPAWN_SEARCH_BOTTOM: i32 = 9;
/// Ground at or below this height is never spawned on
const SPAWN_MIN_GROUND: i32 = 10;

pub fn create_ai_manager(config: AiConfig) -> AiManagerData {
    log::info!(
        "[create_ai_manager] AI manager initialized (max {} agents, seed {})",
        config.max_agents,
        config.seed
    );
    AiManagerData {
        agents: Vec::with_capacity(config.max_agents),
        rng: StdRng::seed_from_u64(config.seed),
        settings: AiSettings::default(),
        spawn_cooldown: 0.0,
        pending_initial: config.initial_agents.min(config.max_agents),
        initial_spawn_timer: 0.0,
        next_id: 0,
        config,
    }
}

/// Highest solid voxel in a column, searching y = 40 down to 9
fn find_spawn_ground(world: &WorldData, x: f32, z: f32) -> Option<i32> {
    (SPAWN_SEARCH_BOTTOM..=SPAWN_SEARCH_TOP)
        .rev()
        .find(|&y| is_position_solid(world, x, y as f32, z))
}

/// Random ground position 15 to 30 blocks from `center`
pub fn find_spawn_position<R: Rng + ?Sized>(
    world: &WorldData,
    center: Point3<f32>,
    rng: &mut R,
) -> Option<Point3<f32>> {
    for _ in 0..SPAWN_ATTEMPTS {
        let angle = rng.gen::<f32>() * TAU;
        let distance = SPAWN_MIN_DISTANCE + rng.gen::<f32>() * SPAWN_DISTANCE_SPREAD;
        let x = center.x + angle.cos() * distance;
        let z = center.z + angle.sin() * distance;

        match find_spawn_ground(world, x, z) {
            Some(ground) if ground > SPAWN_MIN_GROUND => {
                return Some(Point3::new(x, ground as f32 + 1.0, z));
            }
            _ => {}
        }
    }
    None
}

/// Spawn one agent near `center` if there is room and ground
pub fn spawn_agent(world: &WorldData, manager: &mut AiManagerData, center: Point3<f32>) -> Option<u32> {
    if manager.agents.len() >= manager.config.max_agents {
        return None;
    }

    let Some(position) = find_spawn_position(world, center, &mut manager.rng) else {
        log::debug!("[spawn_agent] No spawn position found around {:?}", center);
        return None;
    };

    let id = manager.next_id;
    manager.next_id += 1;
    let agent = create_agent(world, id, position, &mut manager.rng);
    manager.agents.push(agent);

    log::info!(
        "[spawn_agent] Spawned agent {} ({}/{})",
        id,
        manager.agents.len(),
        manager.config.max_agents
    );
    Some(id)
}

/// Advance spawning and every agent by one tick
pub fn update_ai_manager(
    world: &mut WorldData,
    manager: &mut AiManagerData,
    player_position: Point3<f32>,
    physics: &PhysicsConfig,
    dt: f32,
) -> AiTickReport {
    let mut report = AiTickReport::default();

    if manager.pending_initial > 0 {
        manager.initial_spawn_timer -= dt;
        if manager.initial_spawn_timer <= 0.0 {
            manager.pending_initial -= 1;
            manager.initial_spawn_timer = manager.config.initial_spawn_stagger;
            report.spawned.extend(spawn_agent(world, manager, player_position));
        }
    }

    manager.spawn_cooldown -= dt;

    let ctx = AgentTickContext {
        observer: Some(player_position),
        settings: &manager.settings,
        physics,
        state_change_chance: manager.config.state_change_chance,
        dt,
    };
    for agent in manager.agents.iter_mut() {
        update_agent(world, agent, &ctx, &mut manager.rng);
    }

    let despawn_height = manager.config.despawn_height;
    manager.agents.retain(|agent| {
        if agent.body.position.y < despawn_height {
            log::info!("[update_ai_manager] Removed fallen agent {}", agent.id);
            report.removed.push(agent.id);
            false
        } else {
            true
        }
    });

    if manager.spawn_cooldown <= 0.0 && manager.agents.len() < manager.config.max_agents {
        report.spawned.extend(spawn_agent(world, manager, player_position));
        manager.spawn_cooldown = manager.config.spawn_interval;
    }

    report
}

pub fn entities_info(manager: &AiManagerData) -> Vec<AiAgentInfo> {
    manager.agents.iter().map(agent_info).collect()
}

pub fn agent_count(manager: &AiManagerData) -> usize {
    manager.agents.len()
}

pub fn remove_all_agents(manager: &mut AiManagerData) {
    let removed = manager.agents.len();
    manager.agents.clear();
    log::info!("[remove_all_agents] Removed {} agents", removed);
}
