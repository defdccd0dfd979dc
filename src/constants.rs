//! Engine-wide constants
//!
//! Chunk dimensions, terrain clamps and the fixed interaction constants shared
//! by the world, physics and game modules.

use static_assertions::const_assert;

/// Horizontal chunk edge length in voxels
pub const CHUNK_SIZE: u32 = 16;

/// Vertical chunk extent in voxels
pub const CHUNK_HEIGHT: u32 = 64;

/// Voxels stored per chunk
pub const VOXELS_PER_CHUNK: usize = (CHUNK_SIZE * CHUNK_SIZE * CHUNK_HEIGHT) as usize;

/// Largest absolute world coordinate a continuous position maps to; positions
/// beyond it are clamped so chunk and voxel arithmetic stays inside i32
pub const WORLD_COORD_LIMIT: i32 = 30_000_000;

pub mod terrain {
    use super::CHUNK_HEIGHT;

    /// Lowest surface height the generator will produce
    pub const MIN_SURFACE_HEIGHT: i32 = 8;

    /// Highest surface height the generator will produce
    pub const MAX_SURFACE_HEIGHT: i32 = CHUNK_HEIGHT as i32 - 5;

    /// Columns at or below this surface height get a sand shoreline
    pub const SHORELINE_HEIGHT: i32 = 12;

    pub const DEFAULT_BASE_HEIGHT: f64 = 15.0;
    pub const DEFAULT_VARIATION: f64 = 8.0;
    pub const DEFAULT_DETAIL_SCALE: f64 = 0.02;
}

pub mod raycast {
    /// March step along a ray, in world units
    pub const RAY_STEP: f32 = 0.1;

    /// Longest ray any query will march
    pub const MAX_RAY_DISTANCE: f32 = 1024.0;
}

pub mod physics {
    pub const DEFAULT_GRAVITY: f32 = -25.0;

    /// Offset below the head used by the horizontal collision probes
    pub const DEFAULT_CEILING_EPSILON: f32 = 0.1;

    /// Largest tick the simulation accepts, in seconds
    pub const MAX_TICK_SECONDS: f32 = 1.0 / 30.0;
}

pub mod agent {
    pub const BODY_WIDTH: f32 = 0.6;
    pub const BODY_HEIGHT: f32 = 1.8;

    /// Distance from the top of the body to the eye
    pub const EYE_OFFSET: f32 = 0.2;
}

const_assert!(CHUNK_SIZE.is_power_of_two());
const_assert!(WORLD_COORD_LIMIT < i32::MAX / 2);
const_assert!(terrain::MAX_SURFACE_HEIGHT > terrain::MIN_SURFACE_HEIGHT);
const_assert!(terrain::SHORELINE_HEIGHT >= terrain::MIN_SURFACE_HEIGHT);
