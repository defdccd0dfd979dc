//! Mesh SoA Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in mesh_soa_operations.rs

/// Chunk mesh as parallel per-vertex arrays
///
/// Every visible face contributes two triangles (six vertices). Positions are
/// local to the chunk; `origin` places the mesh in the world.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChunkMesh {
    /// xyz per vertex
    pub positions: Vec<f32>,
    /// xyz per vertex
    pub normals: Vec<f32>,
    /// uv per vertex
    pub uvs: Vec<f32>,
    /// rgb per vertex
    pub colors: Vec<f32>,
    /// World translation, (chunk_x * 16, 0, chunk_z * 16)
    pub origin: [f32; 3],
}

/// Memory statistics for mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshStats {
    pub vertex_count: usize,
    pub face_count: usize,
    pub total_size: usize,
}

impl std::fmt::Display for MeshStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Mesh: {} faces, {} vertices, Total: {}B",
            self.face_count, self.vertex_count, self.total_size
        )
    }
}
