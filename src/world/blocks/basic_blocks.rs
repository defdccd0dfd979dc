//! Basic blocks shipped with the engine
//!
//! One constructor per block type plus the table the registry is built from.

use crate::world::blocks::block_data::BlockProperties;
use crate::world::core::{BlockId, PhysicsProperties, RenderData};

/// Create air properties
pub fn create_air_properties() -> BlockProperties {
    BlockProperties {
        id: BlockId::Air,
        name: "Air",
        is_transparent: true,
        render_data: RenderData::from_hex(0x000000, None),
        physics: PhysicsProperties { solid: false },
    }
}

/// Create grass block properties
pub fn create_grass_properties() -> BlockProperties {
    BlockProperties {
        id: BlockId::Grass,
        name: "Grass",
        is_transparent: false,
        render_data: RenderData::from_hex(0x4CAF50, Some("textures/grass.png")),
        physics: PhysicsProperties { solid: true },
    }
}

/// Create dirt block properties
pub fn create_dirt_properties() -> BlockProperties {
    BlockProperties {
        id: BlockId::Dirt,
        name: "Dirt",
        is_transparent: false,
        render_data: RenderData::from_hex(0x8B4513, None),
        physics: PhysicsProperties { solid: true },
    }
}

/// Create stone block properties
pub fn create_stone_properties() -> BlockProperties {
    BlockProperties {
        id: BlockId::Stone,
        name: "Stone",
        is_transparent: false,
        render_data: RenderData::from_hex(0x808080, None),
        physics: PhysicsProperties { solid: true },
    }
}

/// Create wood block properties
pub fn create_wood_properties() -> BlockProperties {
    BlockProperties {
        id: BlockId::Wood,
        name: "Wood",
        is_transparent: false,
        render_data: RenderData::from_hex(0xDEB887, Some("textures/wood.jpg")),
        physics: PhysicsProperties { solid: true },
    }
}

/// Create sand block properties
pub fn create_sand_properties() -> BlockProperties {
    BlockProperties {
        id: BlockId::Sand,
        name: "Sand",
        is_transparent: false,
        render_data: RenderData::from_hex(0xF4A460, Some("textures/sand.jpg")),
        physics: PhysicsProperties { solid: true },
    }
}

/// Properties for every built-in block, ordered by raw id
pub fn basic_block_table() -> Vec<BlockProperties> {
    vec![
        create_air_properties(),
        create_grass_properties(),
        create_dirt_properties(),
        create_stone_properties(),
        create_wood_properties(),
        create_sand_properties(),
    ]
}

/// Blocks a player may place, in hotbar order
pub const PLACEABLE_BLOCKS: [BlockId; 5] = [
    BlockId::Grass,
    BlockId::Dirt,
    BlockId::Stone,
    BlockId::Wood,
    BlockId::Sand,
];
