//! Voxel World Module
//!
//! Chunked block storage, terrain generation, streaming and block queries.
//!
//! # Architecture Overview
//!
//! - **Core**: Fundamental data types (Block, Position, Ray, Registry)
//! - **Storage**: Chunk data and the functions that read and write it
//! - **Generation**: Deterministic height-profile terrain
//! - **Management**: Which chunks should be resident around an observer
//! - **Interfaces**: Read-only voxel access for physics
//!
//! `world_operations` is the entry point; everything takes `WorldData`
//! explicitly.

pub mod blocks;
pub mod core;
pub mod data_types;
pub mod error;
pub mod generation;
pub mod interfaces;
pub mod management;
pub mod storage;
pub mod world_operations;

// Re-export core types for convenience
pub use core::{
    BlockFace, BlockId, BlockRegistration, BlockRegistry, ChunkPos, LocalPos, PhysicsProperties,
    Ray, RaycastHit, RenderData, VoxelPos,
};

pub use blocks::BlockProperties;
pub use data_types::{ChunkUpdateReport, WorldData, WorldModification, WorldStats};
pub use error::WorldError;
pub use generation::{TerrainGenerator, TerrainParams, WorldGenerator};
pub use interfaces::VoxelQuery;
pub use management::ChunkManagerConfig;
pub use storage::{ChunkData, ChunkMetadata};
