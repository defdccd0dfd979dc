//! Player Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in player_operations.rs

use crate::physics::PhysicsBody;
use crate::world::core::{BlockId, ChunkPos};

/// Movement input, already decoupled from any input device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementIntent {
    Forward,
    Backward,
    Left,
    Right,
    Jump,
}

/// Currently held movement intents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementIntents {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Player tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSettings {
    pub walk_speed: f32,
    pub jump_velocity: f32,
    pub reach_distance: f32,
    /// Radians per unit of look input
    pub mouse_sensitivity: f32,
    /// Blocks whose centre is this close to the feet cannot be placed
    pub min_place_distance: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            jump_velocity: 8.0,
            reach_distance: 5.0,
            mouse_sensitivity: 0.002,
            min_place_distance: 1.5,
        }
    }
}

/// The human-controlled avatar
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerData {
    pub body: PhysicsBody,
    pub intents: MovementIntents,
    /// Rotation about +Y; zero looks toward -Z
    pub yaw: f32,
    /// Clamped to [-pi/2, pi/2]
    pub pitch: f32,
    pub selected_block: BlockId,
    pub settings: PlayerSettings,
}

/// Snapshot for HUD display
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerInfo {
    pub position: [f32; 3],
    pub velocity: [f32; 3],
    pub on_ground: bool,
    pub selected_block: BlockId,
    pub selected_block_name: &'static str,
    pub chunk: ChunkPos,
}
