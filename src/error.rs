//! Error handling for the voxel engine
//!
//! A single engine-level error type that the world, renderer and game layers
//! convert into. Library code reports failures through these values and never
//! panics.

use std::error::Error as StdError;
use std::fmt;

use crate::world::error::WorldError;

/// Main error type for the engine
#[derive(Debug)]
pub enum EngineError {
    // World Errors
    ChunkNotLoaded {
        pos: (i32, i32),
    },
    ChunkNotGenerated {
        pos: (i32, i32),
    },
    BlockOutOfBounds {
        pos: (i32, i32, i32),
        chunk_height: u32,
    },
    InvalidBlockType {
        id: u32,
    },
    MeshGeneration {
        chunk_pos: (i32, i32),
        error: String,
    },
    CorruptedData {
        reason: String,
    },

    // Configuration Errors
    ParseError {
        value: String,
        expected_type: String,
    },

    // Registry Errors
    RegistryIncomplete {
        missing: String,
    },

    ValidationFailed(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::ChunkNotLoaded { pos } => {
                write!(f, "Chunk not loaded at position {:?}", pos)
            }
            EngineError::ChunkNotGenerated { pos } => {
                write!(f, "Chunk at position {:?} has not been generated", pos)
            }
            EngineError::BlockOutOfBounds { pos, chunk_height } => write!(
                f,
                "Block position {:?} out of bounds for chunk height {}",
                pos, chunk_height
            ),
            EngineError::InvalidBlockType { id } => write!(f, "Invalid block type ID: {}", id),
            EngineError::MeshGeneration { chunk_pos, error } => write!(
                f,
                "Mesh generation failed for chunk {:?}: {}",
                chunk_pos, error
            ),
            EngineError::CorruptedData { reason } => write!(f, "Corrupted data: {}", reason),

            EngineError::ParseError {
                value,
                expected_type,
            } => write!(f, "Failed to parse '{}' as {}", value, expected_type),

            EngineError::RegistryIncomplete { missing } => {
                write!(f, "Block registry is missing entries for: {}", missing)
            }

            EngineError::ValidationFailed(msg) => write!(f, "Validation failed: {}", msg),
        }
    }
}

impl StdError for EngineError {}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

// Conversion traits for common error types

impl From<WorldError> for EngineError {
    fn from(error: WorldError) -> Self {
        match error {
            WorldError::ChunkNotLoaded { x, z } => EngineError::ChunkNotLoaded { pos: (x, z) },
            WorldError::ChunkNotGenerated { x, z } => {
                EngineError::ChunkNotGenerated { pos: (x, z) }
            }
            WorldError::OutOfBounds { x, y, z } => EngineError::BlockOutOfBounds {
                pos: (x, y, z),
                chunk_height: crate::constants::CHUNK_HEIGHT,
            },
            WorldError::InvalidChunkData { x, z, reason } => EngineError::CorruptedData {
                reason: format!("chunk ({}, {}): {}", x, z, reason),
            },
        }
    }
}

impl From<toml::de::Error> for EngineError {
    fn from(error: toml::de::Error) -> Self {
        EngineError::ParseError {
            value: error.message().to_string(),
            expected_type: "EngineConfig".to_string(),
        }
    }
}
