//! World generation
//!
//! Deterministic height-profile terrain. Output depends only on world column
//! coordinates and `TerrainParams`, never on load order or wall-clock time.

mod terrain_generator;

pub use terrain_generator::{column_block, TerrainGenerator, WorldGenerator};

use crate::constants::terrain::{
    DEFAULT_BASE_HEIGHT, DEFAULT_DETAIL_SCALE, DEFAULT_VARIATION, MIN_SURFACE_HEIGHT,
    SHORELINE_HEIGHT,
};
use serde::{Deserialize, Serialize};

/// Terrain shaping parameters
///
/// The default reproduces the classic sine/cosine hills exactly; a positive
/// `detail_amplitude` layers seeded Perlin noise on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    pub seed: u32,
    pub base_height: f64,
    pub variation: f64,
    pub detail_amplitude: f64,
    pub detail_scale: f64,
    /// Columns at or below this height get a sand shoreline
    pub shoreline_height: i32,
    /// Sand never extends below this level
    pub sand_floor: i32,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            seed: 0,
            base_height: DEFAULT_BASE_HEIGHT,
            variation: DEFAULT_VARIATION,
            detail_amplitude: 0.0,
            detail_scale: DEFAULT_DETAIL_SCALE,
            shoreline_height: SHORELINE_HEIGHT,
            sand_floor: MIN_SURFACE_HEIGHT,
        }
    }
}

impl TerrainParams {
    /// Perfectly flat terrain at `height`, handy for tests and demos
    pub fn flat(height: f64) -> Self {
        Self {
            base_height: height,
            variation: 0.0,
            ..Self::default()
        }
    }
}
