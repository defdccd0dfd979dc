use serde::{Deserialize, Serialize};
use std::fmt;

/// Block type stored in every voxel
///
/// The set is closed: chunks, meshes and agents only ever see these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum BlockId {
    #[default]
    Air = 0,
    Grass = 1,
    Dirt = 2,
    Stone = 3,
    Wood = 4,
    Sand = 5,
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockId::Air => write!(f, "Air"),
            BlockId::Grass => write!(f, "Grass"),
            BlockId::Dirt => write!(f, "Dirt"),
            BlockId::Stone => write!(f, "Stone"),
            BlockId::Wood => write!(f, "Wood"),
            BlockId::Sand => write!(f, "Sand"),
        }
    }
}

impl BlockId {
    /// Every block type, ordered by raw id
    pub const ALL: [BlockId; 6] = [
        BlockId::Air,
        BlockId::Grass,
        BlockId::Dirt,
        BlockId::Stone,
        BlockId::Wood,
        BlockId::Sand,
    ];

    /// Raw numeric id
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Look up a block type from its raw id
    pub fn from_raw(raw: u8) -> Option<Self> {
        Self::ALL.get(raw as usize).copied()
    }

    pub fn is_air(self) -> bool {
        self == BlockId::Air
    }
}

/// Data needed to render a block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderData {
    /// Linear RGB in [0, 1], used as the flat per-vertex colour
    pub color: [f32; 3],
    /// Packed 0xRRGGBB value the colour was derived from
    pub hex_color: u32,
    /// Texture reference handed to the render pipeline, if any
    pub texture: Option<&'static str>,
}

impl RenderData {
    pub fn from_hex(hex_color: u32, texture: Option<&'static str>) -> Self {
        Self {
            color: hex_to_rgb(hex_color),
            hex_color,
            texture,
        }
    }
}

/// Physical properties of a block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsProperties {
    pub solid: bool,
}

/// Unpack 0xRRGGBB into normalized RGB
pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_ids_round_trip() {
        for block in BlockId::ALL {
            assert_eq!(BlockId::from_raw(block.raw()), Some(block));
        }
        assert_eq!(BlockId::from_raw(42), None);
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb(0x000000), [0.0, 0.0, 0.0]);
        let grey = hex_to_rgb(0x808080);
        assert!((grey[0] - 128.0 / 255.0).abs() < f32::EPSILON);
        assert_eq!(grey[0], grey[2]);
    }

    #[test]
    fn test_default_is_air() {
        assert_eq!(BlockId::default(), BlockId::Air);
        assert!(BlockId::default().is_air());
        assert_eq!(BlockId::Sand.to_string(), "Sand");
    }
}
