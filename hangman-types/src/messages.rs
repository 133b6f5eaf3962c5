use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{GameStatus, SessionId};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewGameResponse {
    pub game_id: SessionId,
    pub category: String,
    pub hint: String,
    pub word_display: String,
    pub max_wrong: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuessRequest {
    pub game_id: SessionId,
    pub letter: String,
    pub user_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuessResponse {
    pub game_id: SessionId,
    pub word_display: String,
    pub guessed_letters: Vec<char>,
    pub wrong_guesses: u32,
    pub max_wrong: u32,
    pub status: GameStatus,
    pub points: u32,
    pub message: String,
    pub hint: String,
    /// The secret word, disclosed only once the game is lost.
    pub correct_word: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LeaderboardEntry {
    pub name: String,
    pub total_points: i32,
    pub rank: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatsResponse {
    pub total_games: u64,
    pub won_games: u64,
    pub total_players: u64,
    pub win_rate_percent: f64,
}
