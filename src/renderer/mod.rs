//! Renderer Module - CPU mesh extraction
//!
//! Produces struct-of-arrays chunk meshes ready for upload. Drawing them is
//! left to the host application.

pub mod mesh_soa_data;
pub mod mesh_soa_operations;
pub mod mesh_utils;

pub use mesh_soa_data::{ChunkMesh, MeshStats};
pub use mesh_utils::generate_chunk_mesh;
