// VoxelCraft Engine - Data-Oriented Programming (DOP) Architecture
//
// A headless voxel world: chunked block storage, deterministic terrain,
// face-culled chunk meshes, per-axis voxel collision and ray picking, plus the
// player and AI agents that live in it.
//
// Data lives in plain structs (`*_data.rs`, `data_types.rs`); behaviour lives in
// free functions (`*_operations.rs`) that take that data explicitly.

// Constants module
pub mod constants;

// Core engine modules
pub mod error;

// Essential systems
pub mod game;
pub mod physics;
pub mod renderer;
pub mod world;

use anyhow::{bail, Result};
use cgmath::Point3;
use serde::{Deserialize, Serialize};

pub use error::{EngineError, EngineResult};
pub use game::{AiConfig, AiManagerData, AiTickReport, PlayerData, PlayerSettings};
pub use physics::{PhysicsConfig, AABB};
pub use renderer::{ChunkMesh, MeshStats};
// === Core World Types ===
pub use world::core::{
    BlockFace, BlockId, BlockRegistry, ChunkPos, PhysicsProperties, Ray, RaycastHit, RenderData,
    VoxelPos,
};
pub use world::data_types::{ChunkUpdateReport, WorldData, WorldModification, WorldStats};
pub use world::generation::{TerrainGenerator, TerrainParams, WorldGenerator};
pub use world::world_operations;

/// Chunk radius loaded around the observer when nothing else is configured
pub const DEFAULT_RENDER_DISTANCE: u32 = 3;

/// Largest render distance `EngineConfig::validate` accepts
pub const MAX_RENDER_DISTANCE: u32 = 16;

/// Main engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Chebyshev chunk radius kept loaded around the player
    pub render_distance: u32,
    /// How far the player can break and place blocks
    pub reach_distance: f32,
    /// World column (x, z) the player spawns above
    pub spawn_column: [f32; 2],
    pub terrain: TerrainParams,
    pub physics: PhysicsConfig,
    pub ai: AiConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            render_distance: DEFAULT_RENDER_DISTANCE,
            reach_distance: 5.0,
            spawn_column: [0.0, 0.0],
            terrain: TerrainParams::default(),
            physics: PhysicsConfig::default(),
            ai: AiConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document; missing keys take their defaults
    pub fn from_toml_str(source: &str) -> EngineResult<Self> {
        let config: EngineConfig = toml::from_str(source)?;
        config
            .validate()
            .map_err(|e| EngineError::ValidationFailed(e.to_string()))?;
        Ok(config)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.render_distance == 0 {
            bail!("EngineConfig: render_distance cannot be 0");
        }
        if self.render_distance > MAX_RENDER_DISTANCE {
            bail!(
                "EngineConfig: render_distance {} exceeds maximum of {}",
                self.render_distance,
                MAX_RENDER_DISTANCE
            );
        }

        if !(self.reach_distance.is_finite() && self.reach_distance > 0.0) {
            bail!(
                "EngineConfig: reach_distance must be positive, got {}",
                self.reach_distance
            );
        }
        if !self.spawn_column.iter().all(|v| v.is_finite()) {
            bail!("EngineConfig: spawn_column must be finite");
        }

        let terrain = &self.terrain;
        if !(0.0..=constants::CHUNK_HEIGHT as f64).contains(&terrain.base_height) {
            bail!(
                "EngineConfig: terrain.base_height {} outside 0..={}",
                terrain.base_height,
                constants::CHUNK_HEIGHT
            );
        }
        if terrain.detail_amplitude < 0.0 {
            bail!("EngineConfig: terrain.detail_amplitude cannot be negative");
        }
        if terrain.detail_amplitude > 0.0 && terrain.detail_scale <= 0.0 {
            bail!("EngineConfig: terrain.detail_scale must be positive when detail is enabled");
        }

        let physics = &self.physics;
        if !(physics.gravity.is_finite() && physics.gravity < 0.0) {
            bail!("EngineConfig: physics.gravity must be negative, got {}", physics.gravity);
        }
        if !(0.0..constants::agent::BODY_HEIGHT).contains(&physics.ceiling_epsilon) {
            bail!(
                "EngineConfig: physics.ceiling_epsilon {} outside 0..{}",
                physics.ceiling_epsilon,
                constants::agent::BODY_HEIGHT
            );
        }
        if !(physics.max_tick > 0.0) {
            bail!("EngineConfig: physics.max_tick must be positive");
        }

        let ai = &self.ai;
        if !(0.0..=1.0).contains(&ai.state_change_chance) {
            bail!(
                "EngineConfig: ai.state_change_chance {} outside 0..=1",
                ai.state_change_chance
            );
        }
        if !(ai.spawn_interval > 0.0) || ai.initial_spawn_stagger < 0.0 {
            bail!("EngineConfig: ai spawn timings must be positive");
        }

        log::info!(
            "[EngineConfig] Validation: render_distance={}, reach={}, seed={}",
            self.render_distance,
            self.reach_distance,
            self.terrain.seed
        );
        Ok(())
    }
}

/// What one engine tick changed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Seconds actually simulated after clamping
    pub dt: f32,
    pub chunks: ChunkUpdateReport,
    pub ai: AiTickReport,
}

/// Headless simulation session: one world, one player, the AI population
pub struct Engine {
    config: EngineConfig,
    world: WorldData,
    player: PlayerData,
    ai: AiManagerData,
}

impl Engine {
    /// Validate the configuration, generate the starting ring and spawn the player
    pub fn new(config: EngineConfig) -> Result<Self> {
        log::debug!("[Engine::new] Starting engine initialization");

        if let Err(e) = config.validate() {
            log::error!("[Engine::new] Configuration validation failed: {}", e);
            return Err(e);
        }

        let mut world = WorldData::new(&config);
        let generated = world_operations::generate_initial_chunks(&mut world);
        log::info!("[Engine::new] Generated {} starting chunks", generated);

        let [spawn_x, spawn_z] = config.spawn_column;
        let spawn_y = world
            .generator
            .find_safe_spawn_height(spawn_x.floor() as i32, spawn_z.floor() as i32);
        let player = game::create_player(
            Point3::new(spawn_x, spawn_y, spawn_z),
            PlayerSettings {
                reach_distance: config.reach_distance,
                ..PlayerSettings::default()
            },
        );
        let ai = game::create_ai_manager(config.ai.clone());

        log::info!("[Engine::new] Engine initialization complete");

        Ok(Self {
            config,
            world,
            player,
            ai,
        })
    }

    /// Advance the simulation by `dt` seconds, clamped to `physics.max_tick`
    pub fn update(&mut self, dt: f32) -> TickReport {
        let dt = if dt > 0.0 {
            dt.min(self.config.physics.max_tick)
        } else {
            0.0
        };

        world_operations::advance_tick(&mut self.world);
        let chunks =
            game::update_player(&mut self.world, &mut self.player, &self.config.physics, dt);
        let ai = game::update_ai_manager(
            &mut self.world,
            &mut self.ai,
            self.player.body.position,
            &self.config.physics,
            dt,
        );

        TickReport { dt, chunks, ai }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn world(&self) -> &WorldData {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut WorldData {
        &mut self.world
    }

    pub fn player(&self) -> &PlayerData {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerData {
        &mut self.player
    }

    pub fn ai(&self) -> &AiManagerData {
        &self.ai
    }

    /// Mutable access to the world and the player together, for block actions
    pub fn world_and_player_mut(&mut self) -> (&mut WorldData, &mut PlayerData) {
        (&mut self.world, &mut self.player)
    }
}
