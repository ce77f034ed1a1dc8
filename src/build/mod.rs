//! The two fixed pipelines that assemble the game from the engine sources

pub mod engine;
pub mod game;

pub use engine::engine_deps_pipeline;
pub use game::game_executable_pipeline;
