use thiserror::Error;

/// Errors raised while building a world from configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid viewport {width}x{height}: {reason}")]
    InvalidViewport {
        width: f32,
        height: f32,
        reason: &'static str,
    },

    #[error("Level layout parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level error type for the game.
///
/// The per-frame simulation never fails, so this only surfaces while setting
/// up a session or from the windowing host.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Platform error: {0}")]
    Platform(String),
}

impl From<String> for GameError {
    fn from(message: String) -> Self {
        GameError::Platform(message)
    }
}
