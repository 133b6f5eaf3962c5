use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Failures a guess submission can surface to the request layer.
/// Every kind is distinguishable by the caller; none are retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GameError {
    #[error("game session not found: {session_id}")]
    SessionNotFound { session_id: String },
    #[error("game already finished")]
    GameAlreadyFinished,
    #[error("guess must be a single letter, got {input:?}")]
    InvalidInput { input: String },
    #[error("letter '{letter}' was already guessed")]
    DuplicateGuess { letter: char },
}

impl GameError {
    /// Stable machine-readable name, used in HTTP error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            GameError::SessionNotFound { .. } => "session_not_found",
            GameError::GameAlreadyFinished => "game_already_finished",
            GameError::InvalidInput { .. } => "invalid_input",
            GameError::DuplicateGuess { .. } => "duplicate_guess",
        }
    }
}

/// Fatal startup error: the word catalog is empty or malformed.
/// Never produced mid-session; the process logs it and exits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("word catalog is invalid: {0}")]
pub struct ConfigurationFault(pub String);
