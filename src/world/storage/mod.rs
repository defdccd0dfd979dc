//! Chunk storage
//!
//! Plain chunk data plus the functions that read and write it.

mod chunk_data;
pub mod chunk_operations;

pub use chunk_data::{ChunkData, ChunkMetadata};
