//! Physics Module - voxel collision for agents
//!
//! Player and AI bodies share the same data and the same step function.

pub mod aabb;
pub mod body_data;
pub mod body_operations;

pub use aabb::AABB;
pub use body_data::{BodyDimensions, PhysicsBody, PhysicsConfig, StepOutcome};
pub use body_operations::{create_body, set_horizontal_velocity, step_body, try_jump};
