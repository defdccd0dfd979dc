//! World Error Handling
//!
//! Typed failures for world operations. `EngineError` converts from these for
//! callers working at engine level.

// WorldError for DOP operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("Chunk ({x}, {z}) is not loaded")]
    ChunkNotLoaded { x: i32, z: i32 },

    #[error("Chunk ({x}, {z}) has not been generated")]
    ChunkNotGenerated { x: i32, z: i32 },

    #[error("Position ({x}, {y}, {z}) is outside the vertical world bounds")]
    OutOfBounds { x: i32, y: i32, z: i32 },

    #[error("Chunk ({x}, {z}) failed validation: {reason}")]
    InvalidChunkData { x: i32, z: i32, reason: String },
}
