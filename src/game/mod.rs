//! Game Module - agents that live in the voxel world
//!
//! The player is driven by movement intents and look input; AI agents pick
//! their own targets. Both move through `physics::step_body` and edit the
//! world through `world_operations`.

pub mod ai_data;
pub mod ai_manager;
pub mod ai_operations;
pub mod player_data;
pub mod player_operations;

pub use ai_data::{
    AiAgentData, AiAgentInfo, AiConfig, AiManagerData, AiSettings, AiState, AiTickReport,
};
pub use ai_manager::{
    agent_count, create_ai_manager, entities_info, remove_all_agents, spawn_agent,
    update_ai_manager,
};
pub use player_data::{MovementIntent, MovementIntents, PlayerData, PlayerInfo, PlayerSettings};
pub use player_operations::{
    break_block, create_player, handle_look, place_block, player_info, select_block, set_intent,
    update_player,
};
