//! AI Agent Data - Pure DOP
//!
//! NO METHODS. Just data.
//! Behaviour lives in ai_operations.rs, population control in ai_manager.rs

use crate::physics::PhysicsBody;
use crate::world::core::{BlockId, VoxelPos};
use cgmath::Point3;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Behaviour an agent is currently running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AiState {
    Wandering,
    Building,
    Destroying,
    Following,
    Aggressive,
}

impl AiState {
    /// States reachable by a random change regardless of temperament
    pub const CALM: [AiState; 4] = [
        AiState::Wandering,
        AiState::Building,
        AiState::Destroying,
        AiState::Following,
    ];
}

impl fmt::Display for AiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AiState::Wandering => "wandering",
            AiState::Building => "building",
            AiState::Destroying => "destroying",
            AiState::Following => "following",
            AiState::Aggressive => "aggressive",
        };
        f.write_str(name)
    }
}

/// Blocks an agent may carry
pub const AGENT_BLOCK_CHOICES: [BlockId; 4] =
    [BlockId::Stone, BlockId::Dirt, BlockId::Wood, BlockId::Sand];

/// Per-agent tuning shared by every agent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiSettings {
    pub speed: f32,
    pub jump_velocity: f32,
    /// Action range for placing and breaking
    pub reach: f32,
    pub build_cooldown: f32,
    pub destroy_cooldown: f32,
    pub aggressive_cooldown: f32,
    pub pathfinding_interval: f32,
    /// A target this close counts as reached
    pub arrive_distance: f32,
    /// Destroying never touches voxels at or below this height
    pub destroy_floor: i32,
    /// Aggressive destruction never touches voxels at or below this height
    pub aggressive_floor: i32,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            speed: 3.0,
            jump_velocity: 6.0,
            reach: 3.0,
            build_cooldown: 1.0,
            destroy_cooldown: 0.8,
            aggressive_cooldown: 0.5,
            pathfinding_interval: 0.1,
            arrive_distance: 0.5,
            destroy_floor: 12,
            aggressive_floor: 10,
        }
    }
}

/// One autonomous agent
#[derive(Debug, Clone, PartialEq)]
pub struct AiAgentData {
    pub id: u32,
    pub body: PhysicsBody,
    pub state: AiState,
    pub target: Option<Point3<f32>>,
    /// Voxel the agent is walking to while building
    pub building_target: Option<VoxelPos>,
    pub action_cooldown: f32,
    pub pathfinding_cooldown: f32,
    pub selected_block: BlockId,
    /// In [0, 1); above 0.7 the agent may turn aggressive
    pub aggression: f32,
    pub blocks_placed: u32,
    pub blocks_broken: u32,
}

/// Snapshot for UI
#[derive(Debug, Clone, PartialEq)]
pub struct AiAgentInfo {
    pub id: u32,
    pub position: [f32; 3],
    pub state: AiState,
    pub blocks_placed: u32,
    pub blocks_broken: u32,
    pub on_ground: bool,
}

/// Population settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// RNG seed; every decision is reproducible from it
    pub seed: u64,
    pub max_agents: usize,
    pub initial_agents: usize,
    /// Seconds between the initial spawns
    pub initial_spawn_stagger: f32,
    /// Seconds between regular spawns
    pub spawn_interval: f32,
    /// Per-tick probability of switching behaviour
    pub state_change_chance: f64,
    /// Agents below this height are removed
    pub despawn_height: f32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_agents: 5,
            initial_agents: 3,
            initial_spawn_stagger: 5.0,
            spawn_interval: 30.0,
            state_change_chance: 0.002,
            despawn_height: -10.0,
        }
    }
}

/// All agents plus the spawner state
#[derive(Debug, Clone)]
pub struct AiManagerData {
    pub agents: Vec<AiAgentData>,
    pub config: AiConfig,
    pub settings: AiSettings,
    pub rng: StdRng,
    pub spawn_cooldown: f32,
    /// Initial spawns not yet attempted
    pub pending_initial: usize,
    pub initial_spawn_timer: f32,
    pub next_id: u32,
}

/// What one manager update changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AiTickReport {
    pub spawned: Vec<u32>,
    pub removed: Vec<u32>,
}
