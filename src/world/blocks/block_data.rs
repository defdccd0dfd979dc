//! Block Data - Pure DOP
//!
//! Block property data structures. No methods.

use crate::world::core::{BlockId, PhysicsProperties, RenderData};

/// Static metadata for one block type
#[derive(Clone, Debug, PartialEq)]
pub struct BlockProperties {
    pub id: BlockId,
    /// Display name shown to players
    pub name: &'static str,
    pub is_transparent: bool,
    pub render_data: RenderData,
    pub physics: PhysicsProperties,
}
