//! World management

pub mod chunk_manager;

pub use chunk_manager::{chunks_in_radius, plan_chunk_updates, ChunkManagerConfig, ChunkUpdatePlan};
