use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

pub type SessionId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing, // Guesses accepted
    Won,     // Terminal, points awarded
    Lost,    // Terminal, secret word disclosed
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}

impl std::str::FromStr for GameStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "playing" => Ok(GameStatus::Playing),
            "won" => Ok(GameStatus::Won),
            "lost" => Ok(GameStatus::Lost),
            other => Err(format!("unknown game status: {other}")),
        }
    }
}
