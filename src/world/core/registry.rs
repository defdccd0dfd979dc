use super::BlockId;
use crate::error::{EngineError, EngineResult};
use crate::world::blocks::basic_blocks::{basic_block_table, PLACEABLE_BLOCKS};
use crate::world::blocks::block_data::BlockProperties;

/// Entry shown in block pickers
#[derive(Debug, Clone, PartialEq)]
pub struct BlockRegistration {
    pub id: BlockId,
    pub name: &'static str,
    pub color: [f32; 3],
    pub hex_color: u32,
}

/// Immutable block metadata table owned by a world
///
/// Built once and only read afterwards; there is no process-global registry.
#[derive(Debug, Clone)]
pub struct BlockRegistry {
    /// Properties indexed by raw block id
    blocks: Vec<BlockProperties>,
    placeable: Vec<BlockId>,
}

impl BlockRegistry {
    /// Registry with the built-in block table
    pub fn new() -> Self {
        Self {
            blocks: basic_block_table(),
            placeable: PLACEABLE_BLOCKS.to_vec(),
        }
    }

    /// Build a registry from an explicit table
    ///
    /// The table must hold exactly one entry per block type, ordered by raw id.
    pub fn from_properties(
        blocks: Vec<BlockProperties>,
        placeable: Vec<BlockId>,
    ) -> EngineResult<Self> {
        let missing: Vec<String> = BlockId::ALL
            .iter()
            .enumerate()
            .filter(|(index, id)| blocks.get(*index).map(|p| p.id) != Some(**id))
            .map(|(_, id)| id.to_string())
            .collect();

        if !missing.is_empty() || blocks.len() != BlockId::ALL.len() {
            log::error!(
                "[BlockRegistry::from_properties] Table rejected, missing or misplaced: {:?}",
                missing
            );
            return Err(EngineError::RegistryIncomplete {
                missing: missing.join(", "),
            });
        }

        if let Some(air) = placeable.iter().find(|id| id.is_air()) {
            return Err(EngineError::InvalidBlockType {
                id: air.raw() as u32,
            });
        }

        log::info!(
            "[BlockRegistry::from_properties] Registered {} block types ({} placeable)",
            blocks.len(),
            placeable.len()
        );

        Ok(Self { blocks, placeable })
    }

    /// Get block properties by ID
    pub fn get_properties(&self, id: BlockId) -> &BlockProperties {
        // Constructors guarantee one entry per id
        &self.blocks[id.raw() as usize]
    }

    /// Properties for a raw id; unknown ids resolve to air
    pub fn get_properties_raw(&self, raw: u8) -> &BlockProperties {
        self.get_properties(BlockId::from_raw(raw).unwrap_or(BlockId::Air))
    }

    pub fn is_solid(&self, id: BlockId) -> bool {
        self.get_properties(id).physics.solid
    }

    pub fn is_transparent(&self, id: BlockId) -> bool {
        self.get_properties(id).is_transparent
    }

    pub fn color(&self, id: BlockId) -> [f32; 3] {
        self.get_properties(id).render_data.color
    }

    pub fn name(&self, id: BlockId) -> &'static str {
        self.get_properties(id).name
    }

    /// Placeable blocks in hotbar order
    pub fn placeable_blocks(&self) -> &[BlockId] {
        &self.placeable
    }

    /// Name and colour for every placeable block
    pub fn get_registrations(&self) -> Vec<BlockRegistration> {
        self.placeable
            .iter()
            .map(|&id| {
                let properties = self.get_properties(id);
                BlockRegistration {
                    id,
                    name: properties.name,
                    color: properties.render_data.color,
                    hex_color: properties.render_data.hex_color,
                }
            })
            .collect()
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}
