//! Core world data types and fundamental structures
//!
//! Block types, coordinates, rays and the block metadata registry. Everything
//! else in the world module is built on these.

mod block;
mod position;
mod ray;
mod registry;

pub use block::{hex_to_rgb, BlockId, PhysicsProperties, RenderData};
pub use position::{
    is_within_height, world_to_chunk_coord, world_to_local_coord, ChunkPos, LocalPos, VoxelPos,
};
pub use ray::{determine_hit_face, BlockFace, Ray, RaycastHit};
pub use registry::{BlockRegistration, BlockRegistry};
