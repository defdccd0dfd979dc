//! Physics Body Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in body_operations.rs

use crate::constants::agent::{BODY_HEIGHT, BODY_WIDTH};
use crate::constants::physics::{DEFAULT_CEILING_EPSILON, DEFAULT_GRAVITY, MAX_TICK_SECONDS};
use cgmath::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Agent box size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyDimensions {
    pub width: f32,
    pub height: f32,
}

impl Default for BodyDimensions {
    fn default() -> Self {
        Self {
            width: BODY_WIDTH,
            height: BODY_HEIGHT,
        }
    }
}

/// Moving agent body shared by the player and AI agents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsBody {
    /// Centre of the feet
    pub position: Point3<f32>,
    pub velocity: Vector3<f32>,
    pub dimensions: BodyDimensions,
    pub on_ground: bool,
    /// Set when the last step bumped the head
    pub hit_ceiling: bool,
}

/// Which axes were blocked during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub blocked_x: bool,
    pub blocked_y: bool,
    pub blocked_z: bool,
}

/// Physics configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Vertical acceleration, units per second squared
    pub gravity: f32,
    /// Horizontal probes stop this far below the head
    pub ceiling_epsilon: f32,
    /// Longest tick the simulation will integrate in one step
    pub max_tick: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            ceiling_epsilon: DEFAULT_CEILING_EPSILON,
            max_tick: MAX_TICK_SECONDS,
        }
    }
}
