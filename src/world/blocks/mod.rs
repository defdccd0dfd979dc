//! Built-in block definitions

pub mod basic_blocks;
pub mod block_data;

pub use basic_blocks::{basic_block_table, PLACEABLE_BLOCKS};
pub use block_data::BlockProperties;
