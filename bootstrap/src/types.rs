//! Options and errors for the page bootstrap.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_TRIGGER_ID: &str = "trigger_game_button";
pub const DEFAULT_SCREEN_CLASS: &str = "screen";

/// Which elements the bootstrap wires up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapOptions {
    /// Id of the element whose click starts the game.
    pub trigger_id: String,
    /// Class marking overlay elements to hide once the game starts.
    pub screen_class: String,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            trigger_id: DEFAULT_TRIGGER_ID.to_string(),
            screen_class: DEFAULT_SCREEN_CLASS.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BootstrapError {
    #[error("trigger element #{id} not found")]
    MissingTrigger { id: String },
    #[error("audio context unavailable: {0}")]
    AudioUnavailable(String),
    #[error("audio resume failed: {0}")]
    AudioResume(String),
    #[error("host environment unavailable: {0}")]
    Host(String),
}
