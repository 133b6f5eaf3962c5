use std::sync::Arc;

use dashmap::DashMap;
use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use hangman_core::{GameSession, GuessOutcome, WordBank};
use hangman_persistence::repositories::{PlayerRepository, SessionRepository};
use hangman_types::{
    GameError, GuessResponse, LeaderboardEntry, NewGameResponse, SessionId, StatsResponse,
};

const LEADERBOARD_MAX_LIMIT: u64 = 100;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Orchestrates the core state machine against storage.
///
/// Guesses on the same session are serialized through a per-session mutex
/// held for the whole read-modify-write; distinct sessions never contend.
pub struct GameService {
    word_bank: WordBank,
    sessions: SessionRepository,
    players: PlayerRepository,
    session_locks: DashMap<SessionId, Arc<Mutex<()>>>,
    max_wrong: u32,
    leaderboard_default_limit: u64,
}

impl GameService {
    pub fn new(
        word_bank: WordBank,
        db: DatabaseConnection,
        max_wrong: u32,
        leaderboard_default_limit: u64,
    ) -> Self {
        Self {
            word_bank,
            sessions: SessionRepository::new(db.clone()),
            players: PlayerRepository::new(db),
            session_locks: DashMap::new(),
            max_wrong,
            leaderboard_default_limit,
        }
    }

    /// Number of sessions with a live guess lock entry. Entries exist only
    /// while a guess is in flight.
    pub fn active_lock_count(&self) -> usize {
        self.session_locks.len()
    }

    /// Selects a puzzle and persists a fresh session for it.
    pub async fn new_puzzle(&self) -> Result<NewGameResponse, ServiceError> {
        let puzzle = self.word_bank.select_puzzle(&mut rand::rng());
        let session = GameSession::new(
            Uuid::new_v4(),
            puzzle.category,
            puzzle.word,
            puzzle.hint,
            self.max_wrong,
        );

        self.sessions.create(&session).await?;
        info!(session_id = %session.id(), category = session.category(), "new game created");

        Ok(NewGameResponse {
            game_id: session.id(),
            category: session.category().to_ascii_uppercase(),
            hint: session.hint().to_string(),
            word_display: session.reveal(),
            max_wrong: session.max_wrong(),
        })
    }

    /// Applies one letter guess to the session, crediting the player when the
    /// guess wins the game.
    pub async fn submit_guess(
        &self,
        session_id: SessionId,
        letter: &str,
        player_name: Option<&str>,
    ) -> Result<GuessResponse, ServiceError> {
        let lock = self
            .session_locks
            .entry(session_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let guard = lock.lock().await;
        let result = self.apply_guess(session_id, letter, player_name).await;
        drop(guard);

        // The entry only needs to outlive in-flight guesses. Waiters hold
        // their own clone of the Arc, so they keep the count above two and
        // the entry stays put; otherwise it is dropped so unknown ids and
        // abandoned sessions never accumulate entries.
        self.session_locks
            .remove_if(&session_id, |_, entry| Arc::strong_count(entry) <= 2);

        result
    }

    async fn apply_guess(
        &self,
        session_id: SessionId,
        letter: &str,
        player_name: Option<&str>,
    ) -> Result<GuessResponse, ServiceError> {
        let mut session = self
            .sessions
            .find_by_id(session_id)
            .await?
            .ok_or(GameError::SessionNotFound {
                session_id: session_id.to_string(),
            })?;

        let report = session.guess(letter)?;

        match report.outcome {
            GuessOutcome::Won => {
                if let Some(name) = player_name {
                    session.bind_owner(name);
                }
                // Session transition and player credit commit together
                self.sessions.record_win(&session, player_name).await?;
            }
            _ => self.sessions.update(&session).await?,
        }

        Ok(GuessResponse {
            game_id: session.id(),
            word_display: session.reveal(),
            guessed_letters: session.guessed_letters().to_vec(),
            wrong_guesses: session.wrong_count(),
            max_wrong: session.max_wrong(),
            status: session.status(),
            points: session.points(),
            message: report.message(session.points()),
            hint: session.hint().to_string(),
            correct_word: session.revealed_word_if_lost().map(str::to_string),
        })
    }

    pub async fn leaderboard(
        &self,
        limit: Option<u64>,
    ) -> Result<Vec<LeaderboardEntry>, ServiceError> {
        let limit = limit
            .unwrap_or(self.leaderboard_default_limit)
            .min(LEADERBOARD_MAX_LIMIT);
        Ok(self.players.top_players(limit).await?)
    }

    pub async fn stats(&self) -> Result<StatsResponse, ServiceError> {
        let total_games = self.sessions.count_all().await?;
        let won_games = self.sessions.count_won().await?;
        let total_players = self.players.count_all().await?;

        let win_rate_percent = if total_games == 0 {
            0.0
        } else {
            let rate = won_games as f64 / total_games as f64 * 100.0;
            (rate * 100.0).round() / 100.0
        };

        Ok(StatsResponse {
            total_games,
            won_games,
            total_players,
            win_rate_percent,
        })
    }
}
