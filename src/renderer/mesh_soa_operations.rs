//! Mesh SoA Operations - Pure DOP Functions
//!
//! All functions are pure: take data, return results, no side effects.
//! No methods, no self, just transformations.

use super::mesh_soa_data::{ChunkMesh, MeshStats};

/// Vertices per face: two triangles
pub const VERTICES_PER_FACE: usize = 6;

/// Unit-quad texture coordinates matching the two-triangle vertex order
pub const FACE_UVS: [[f32; 2]; VERTICES_PER_FACE] = [
    [0.0, 0.0],
    [1.0, 0.0],
    [1.0, 1.0],
    [0.0, 0.0],
    [1.0, 1.0],
    [0.0, 1.0],
];

/// Create new empty mesh at a world origin
pub fn create_chunk_mesh(origin: [f32; 3]) -> ChunkMesh {
    ChunkMesh {
        origin,
        ..ChunkMesh::default()
    }
}

/// Append one face (six vertices) with flat normal and colour
pub fn add_face(
    mesh: &mut ChunkMesh,
    corners: &[[f32; 3]; VERTICES_PER_FACE],
    normal: [f32; 3],
    color: [f32; 3],
) {
    for (corner, uv) in corners.iter().zip(FACE_UVS.iter()) {
        mesh.positions.extend_from_slice(corner);
        mesh.normals.extend_from_slice(&normal);
        mesh.uvs.extend_from_slice(uv);
        mesh.colors.extend_from_slice(&color);
    }
}

pub fn vertex_count(mesh: &ChunkMesh) -> usize {
    mesh.positions.len() / 3
}

pub fn face_count(mesh: &ChunkMesh) -> usize {
    vertex_count(mesh) / VERTICES_PER_FACE
}

pub fn is_empty(mesh: &ChunkMesh) -> bool {
    mesh.positions.is_empty()
}

/// Raw bytes of the position buffer, ready for upload
pub fn position_bytes(mesh: &ChunkMesh) -> &[u8] {
    bytemuck::cast_slice(&mesh.positions)
}

pub fn normal_bytes(mesh: &ChunkMesh) -> &[u8] {
    bytemuck::cast_slice(&mesh.normals)
}

pub fn uv_bytes(mesh: &ChunkMesh) -> &[u8] {
    bytemuck::cast_slice(&mesh.uvs)
}

pub fn color_bytes(mesh: &ChunkMesh) -> &[u8] {
    bytemuck::cast_slice(&mesh.colors)
}

/// Get memory statistics
pub fn get_stats(mesh: &ChunkMesh) -> MeshStats {
    let total_size = position_bytes(mesh).len()
        + normal_bytes(mesh).len()
        + uv_bytes(mesh).len()
        + color_bytes(mesh).len();

    MeshStats {
        vertex_count: vertex_count(mesh),
        face_count: face_count(mesh),
        total_size,
    }
}
