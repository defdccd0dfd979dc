//! AI Agent Operations - Pure DOP Functions
//!
//! Each agent runs one behaviour per tick, occasionally switches behaviour,
//! steers toward its target and then moves through the same collision step as
//! the player. All randomness is drawn from the caller's RNG.

use super::ai_data::{AiAgentData, AiAgentInfo, AiSettings, AiState, AGENT_BLOCK_CHOICES};
use crate::physics::aabb::{aabb_intersects, voxel_aabb};
use crate::physics::body_operations::body_aabb;
use crate::physics::{self, BodyDimensions, PhysicsConfig};
use crate::world::core::{BlockId, VoxelPos};
use crate::world::data_types::WorldData;
use crate::world::world_operations::{get_block, is_position_solid, set_block};
use cgmath::{InnerSpace, MetricSpace, Point3};
use rand::Rng;
use std::f32::consts::TAU;

/// Highest voxel the agent ground search starts from
const GROUND_SEARCH_TOP: i32 = 30;
/// Lowest voxel the agent ground search inspects
const GROUND_SEARCH_BOTTOM: i32 = 6;

const WANDER_MIN_DISTANCE: f32 = 5.0;
const WANDER_DISTANCE_SPREAD: f32 = 10.0;
const WANDER_RETARGET_DISTANCE: f32 = 2.0;
const BUILD_RETARGET_DISTANCE: f32 = 1.0;
const TARGET_SEARCH_ATTEMPTS: usize = 10;
const NEAR_OBSERVER_ATTEMPTS: usize = 5;
const FOLLOW_START_DISTANCE: f32 = 5.0;
const FOLLOW_STOP_DISTANCE: f32 = 2.0;
const AGGRESSION_SIGHT: f32 = 15.0;
const AGGRESSION_STRIKE: f32 = 5.0;
const AGGRESSIVE_TEMPERAMENT: f32 = 0.7;
const AGGRESSIVE_PICK_CHANCE: f32 = 0.3;
const BLOCK_SWAP_CHANCE: f32 = 0.3;
/// Seconds of lookahead used for the obstacle probe
const JUMP_LOOKAHEAD: f32 = 0.5;

/// Everything an agent needs to know about the current tick
#[derive(Debug, Clone, Copy)]
pub struct AgentTickContext<'a> {
    /// Position of the agent everyone reacts to (the player)
    pub observer: Option<Point3<f32>>,
    pub settings: &'a AiSettings,
    pub physics: &'a PhysicsConfig,
    pub state_change_chance: f64,
    pub dt: f32,
}

/// Uniform offset in [-span/2, span/2)
fn random_offset<R: Rng + ?Sized>(rng: &mut R, span: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * span
}

pub fn random_block_type<R: Rng + ?Sized>(rng: &mut R) -> BlockId {
    AGENT_BLOCK_CHOICES[rng.gen_range(0..AGENT_BLOCK_CHOICES.len())]
}

/// Create an agent and give it a first wander target
pub fn create_agent<R: Rng + ?Sized>(
    world: &WorldData,
    id: u32,
    position: Point3<f32>,
    rng: &mut R,
) -> AiAgentData {
    let mut agent = AiAgentData {
        id,
        body: physics::create_body(position, BodyDimensions::default()),
        state: AiState::Wandering,
        target: None,
        building_target: None,
        action_cooldown: 0.0,
        pathfinding_cooldown: 0.0,
        selected_block: random_block_type(rng),
        aggression: rng.gen(),
        blocks_placed: 0,
        blocks_broken: 0,
    };
    find_new_target(world, &mut agent, rng);

    log::info!(
        "[create_agent] Agent {} created at ({:.1}, {:.1}, {:.1}) carrying {}",
        id,
        position.x,
        position.y,
        position.z,
        agent.selected_block
    );
    agent
}

/// Height of the first air voxel above the highest solid one in a column
///
/// Only y in [6, 30] is searched.
pub fn find_ground_level(world: &WorldData, x: f32, z: f32) -> Option<f32> {
    (GROUND_SEARCH_BOTTOM..=GROUND_SEARCH_TOP)
        .rev()
        .find(|&y| is_position_solid(world, x, y as f32, z))
        .map(|y| y as f32 + 1.0)
}

/// Pick a random point 5 to 15 blocks away, lifted above the ground there
pub fn find_new_target<R: Rng + ?Sized>(world: &WorldData, agent: &mut AiAgentData, rng: &mut R) {
    let angle = rng.gen::<f32>() * TAU;
    let distance = WANDER_MIN_DISTANCE + rng.gen::<f32>() * WANDER_DISTANCE_SPREAD;
    let p = agent.body.position;

    let x = p.x + angle.cos() * distance;
    let z = p.z + angle.sin() * distance;
    let y = find_ground_level(world, x, z).map_or(p.y, |ground| ground + 1.0);

    agent.target = Some(Point3::new(x, y, z));
}

/// Look for an empty voxel nearby to build into
pub fn find_building_target<R: Rng + ?Sized>(
    world: &WorldData,
    agent: &mut AiAgentData,
    rng: &mut R,
) {
    let p = agent.body.position;
    for _ in 0..TARGET_SEARCH_ATTEMPTS {
        let candidate = VoxelPos::from_world(
            p.x + random_offset(rng, 10.0),
            p.y + random_offset(rng, 5.0),
            p.z + random_offset(rng, 10.0),
        );
        if get_block(world, candidate).is_air() {
            agent.target = Some(candidate.center());
            agent.building_target = Some(candidate);
            return;
        }
    }
}

/// Look for a solid voxel nearby, above the protected floor, to break
pub fn find_destroy_target<R: Rng + ?Sized>(
    world: &WorldData,
    agent: &mut AiAgentData,
    settings: &AiSettings,
    rng: &mut R,
) {
    let p = agent.body.position;
    for _ in 0..TARGET_SEARCH_ATTEMPTS {
        let candidate = VoxelPos::from_world(
            p.x + random_offset(rng, 8.0),
            p.y + random_offset(rng, 4.0),
            p.z + random_offset(rng, 8.0),
        );
        if candidate.y > settings.destroy_floor && !get_block(world, candidate).is_air() {
            agent.target = Some(candidate.center());
            return;
        }
    }
}

/// Is there a solid voxel at head-step height just ahead of the agent
pub fn should_jump(world: &WorldData, agent: &AiAgentData) -> bool {
    let p = agent.body.position;
    let v = agent.body.velocity;
    is_position_solid(
        world,
        p.x + v.x * JUMP_LOOKAHEAD,
        p.y.floor() + 1.0,
        p.z + v.z * JUMP_LOOKAHEAD,
    )
}

/// Switch to a random behaviour and drop the current target
pub fn change_state<R: Rng + ?Sized>(agent: &mut AiAgentData, rng: &mut R) {
    let allow_aggressive =
        agent.aggression > AGGRESSIVE_TEMPERAMENT && rng.gen::<f32>() < AGGRESSIVE_PICK_CHANCE;
    let choices = AiState::CALM.len() + usize::from(allow_aggressive);

    agent.state = AiState::CALM
        .get(rng.gen_range(0..choices))
        .copied()
        .unwrap_or(AiState::Aggressive);
    agent.target = None;

    if rng.gen::<f32>() < BLOCK_SWAP_CHANCE {
        agent.selected_block = random_block_type(rng);
    }

    log::debug!("[change_state] Agent {} is now {}", agent.id, agent.state);
}

fn distance_to_target(agent: &AiAgentData) -> Option<f32> {
    agent.target.map(|t| agent.body.position.distance(t))
}

/// Fill the pending building voxel if it is still empty and clear of the agent
fn place_agent_block(world: &mut WorldData, agent: &mut AiAgentData) {
    let Some(voxel) = agent.building_target.take() else {
        return;
    };
    if !get_block(world, voxel).is_air() {
        return;
    }
    if aabb_intersects(&body_aabb(&agent.body), &voxel_aabb(voxel)) {
        return;
    }
    if set_block(world, voxel, agent.selected_block) {
        agent.blocks_placed += 1;
        log::debug!("[place_agent_block] Agent {} placed at {:?}", agent.id, voxel);
    }
}

/// Break the voxel under the current target
fn break_target_block(world: &mut WorldData, agent: &mut AiAgentData, settings: &AiSettings) {
    let Some(target) = agent.target else {
        return;
    };
    let voxel = VoxelPos::from_point(target);
    if voxel.y <= settings.destroy_floor || get_block(world, voxel).is_air() {
        return;
    }
    if set_block(world, voxel, BlockId::Air) {
        agent.blocks_broken += 1;
        agent.target = None;
        log::debug!("[break_target_block] Agent {} broke {:?}", agent.id, voxel);
    }
}

/// Break one random voxel close to the observer
fn destroy_near_observer<R: Rng + ?Sized>(
    world: &mut WorldData,
    agent: &mut AiAgentData,
    observer: Point3<f32>,
    settings: &AiSettings,
    rng: &mut R,
) {
    for _ in 0..NEAR_OBSERVER_ATTEMPTS {
        let candidate = VoxelPos::from_world(
            observer.x + random_offset(rng, 6.0),
            observer.y + random_offset(rng, 3.0),
            observer.z + random_offset(rng, 6.0),
        );
        if candidate.y <= settings.aggressive_floor || get_block(world, candidate).is_air() {
            continue;
        }
        if set_block(world, candidate, BlockId::Air) {
            agent.blocks_broken += 1;
            log::debug!("[destroy_near_observer] Agent {} broke {:?}", agent.id, candidate);
            return;
        }
    }
}

fn run_behavior<R: Rng + ?Sized>(
    world: &mut WorldData,
    agent: &mut AiAgentData,
    ctx: &AgentTickContext<'_>,
    rng: &mut R,
) {
    let settings = ctx.settings;
    match agent.state {
        AiState::Wandering => {
            if distance_to_target(agent).map_or(true, |d| d < WANDER_RETARGET_DISTANCE) {
                find_new_target(world, agent, rng);
            }
        }
        AiState::Building => {
            if agent.action_cooldown <= 0.0
                && distance_to_target(agent).is_some_and(|d| d < settings.reach)
            {
                place_agent_block(world, agent);
                agent.action_cooldown = settings.build_cooldown;
            }
            if distance_to_target(agent).map_or(true, |d| d < BUILD_RETARGET_DISTANCE) {
                find_building_target(world, agent, rng);
            }
        }
        AiState::Destroying => {
            if agent.action_cooldown <= 0.0
                && distance_to_target(agent).is_some_and(|d| d < settings.reach)
            {
                break_target_block(world, agent, settings);
                agent.action_cooldown = settings.destroy_cooldown;
            }
            if agent.target.is_none() {
                find_destroy_target(world, agent, settings, rng);
            }
        }
        AiState::Following => {
            if let Some(observer) = ctx.observer {
                let distance = agent.body.position.distance(observer);
                if distance > FOLLOW_START_DISTANCE {
                    agent.target = Some(observer);
                } else if distance < FOLLOW_STOP_DISTANCE {
                    agent.target = None;
                }
            }
        }
        AiState::Aggressive => match ctx.observer {
            Some(observer) if agent.body.position.distance(observer) < AGGRESSION_SIGHT => {
                agent.target = Some(observer);
                if agent.body.position.distance(observer) < AGGRESSION_STRIKE
                    && agent.action_cooldown <= 0.0
                {
                    destroy_near_observer(world, agent, observer, settings, rng);
                    agent.action_cooldown = settings.aggressive_cooldown;
                }
            }
            _ => agent.state = AiState::Wandering,
        },
    }
}

/// Steer toward the target, jumping over single-block obstacles
fn move_towards_target(world: &WorldData, agent: &mut AiAgentData, settings: &AiSettings) {
    let Some(target) = agent.target else {
        return;
    };
    let direction = target - agent.body.position;
    let distance = direction.magnitude();

    if distance < settings.arrive_distance {
        agent.target = None;
        physics::set_horizontal_velocity(&mut agent.body, 0.0, 0.0);
        return;
    }

    let heading = direction / distance;
    physics::set_horizontal_velocity(
        &mut agent.body,
        heading.x * settings.speed,
        heading.z * settings.speed,
    );
    if should_jump(world, agent) {
        physics::try_jump(&mut agent.body, settings.jump_velocity);
    }
    agent.pathfinding_cooldown = settings.pathfinding_interval;
}

/// Advance one agent by one tick
pub fn update_agent<R: Rng + ?Sized>(
    world: &mut WorldData,
    agent: &mut AiAgentData,
    ctx: &AgentTickContext<'_>,
    rng: &mut R,
) {
    agent.action_cooldown = (agent.action_cooldown - ctx.dt).max(0.0);
    agent.pathfinding_cooldown = (agent.pathfinding_cooldown - ctx.dt).max(0.0);

    run_behavior(world, agent, ctx, rng);

    if rng.gen::<f64>() < ctx.state_change_chance {
        change_state(agent, rng);
    }

    if agent.target.is_none() {
        physics::set_horizontal_velocity(&mut agent.body, 0.0, 0.0);
    } else if agent.pathfinding_cooldown <= 0.0 {
        move_towards_target(world, agent, ctx.settings);
    }

    physics::step_body(&*world, &mut agent.body, ctx.physics, ctx.dt);
}

pub fn agent_info(agent: &AiAgentData) -> AiAgentInfo {
    let p = agent.body.position;
    AiAgentInfo {
        id: agent.id,
        position: [p.x, p.y, p.z],
        state: agent.state,
        blocks_placed: agent.blocks_placed,
        blocks_broken: agent.blocks_broken,
        on_ground: agent.body.on_ground,
    }
}
