//! Headless world session
//!
//! Generates the starting ring, lets the player walk, dig and build for a few
//! simulated seconds while the AI population runs, then prints a summary.
//!
//! Usage: cargo run --example headless_world [config.toml]

use voxelcraft::game::{self, MovementIntent};
use voxelcraft::world::world_operations;
use voxelcraft::{Engine, EngineConfig};

const TICK: f32 = 1.0 / 60.0;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let source = std::fs::read_to_string(&path)?;
            EngineConfig::from_toml_str(&source)?
        }
        None => EngineConfig::default(),
    };

    let mut engine = Engine::new(config)?;
    println!(
        "Loaded {} chunks",
        world_operations::get_active_chunk_count(engine.world())
    );

    // Walk forward for five seconds, hopping now and then
    game::set_intent(engine.player_mut(), MovementIntent::Forward, true);
    for tick in 0..300 {
        game::set_intent(engine.player_mut(), MovementIntent::Jump, tick % 90 == 0);
        let report = engine.update(TICK);
        if !report.chunks.is_noop() {
            println!(
                "Streamed around {:?}: +{} / -{}",
                report.chunks.center,
                report.chunks.loaded.len(),
                report.chunks.unloaded.len()
            );
        }
    }
    game::set_intent(engine.player_mut(), MovementIntent::Forward, false);

    // Dig the block underfoot, then build one a few blocks ahead
    {
        let (world, player) = engine.world_and_player_mut();
        player.pitch = -std::f32::consts::FRAC_PI_2;
        if let Some(m) = game::break_block(world, player) {
            println!("Broke {} at {:?}", m.old_block, m.position);
        }

        player.pitch = -0.5;
        game::select_block(player, &world.registry, 3);
        if let Some(m) = game::place_block(world, player) {
            println!("Placed {} at {:?}", m.new_block, m.position);
        }
    }

    for _ in 0..600 {
        engine.update(TICK);
    }

    let info = game::player_info(engine.player(), &engine.world().registry);
    println!(
        "Player at ({:.2}, {:.2}, {:.2}) in chunk {:?}, holding {}",
        info.position[0],
        info.position[1],
        info.position[2],
        info.chunk,
        info.selected_block_name
    );

    for agent in game::entities_info(engine.ai()) {
        println!(
            "Agent {} {} at ({:.1}, {:.1}, {:.1}) placed {} broke {}",
            agent.id,
            agent.state,
            agent.position[0],
            agent.position[1],
            agent.position[2],
            agent.blocks_placed,
            agent.blocks_broken
        );
    }

    world_operations::log_world_stats(engine.world());
    let stats = world_operations::world_stats(engine.world());
    println!(
        "{} chunks, {} meshed, {} faces, {} solid voxels",
        stats.loaded_chunks, stats.meshed_chunks, stats.total_faces, stats.non_air_blocks
    );

    world_operations::validate_world_data(engine.world())?;
    Ok(())
}
