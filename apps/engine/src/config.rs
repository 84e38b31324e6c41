//! Environment-driven configuration for the engine binary.

use std::env;
use std::path::PathBuf;

/// Paths the engine binary needs; everything defaults to the working
/// directory so a bare `engine` invocation just works.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Where the session snapshot lives (`GAME_STATE_PATH`).
    pub state_path: PathBuf,
    /// Where the console command prefix is persisted (`COMMAND_PREFIX_PATH`).
    pub prefix_path: PathBuf,
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self {
            state_path: env::var("GAME_STATE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("game_state.json")),
            prefix_path: env::var("COMMAND_PREFIX_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("prefix.json")),
        }
    }
}
