use std::collections::BTreeMap;
use std::sync::Arc;

use hangman_core::{Catalog, WordBank, WordEntry};
use hangman_persistence::connection::connect_to_memory_database;
use hangman_server::service::GameService;
use hangman_types::{GuessResponse, NewGameResponse, SessionId};

pub struct TestSetup {
    pub service: Arc<GameService>,
}

impl TestSetup {
    /// Service over an in-memory database with a single-word catalog, so
    /// every new puzzle is the given word.
    pub async fn with_word(word: &str, hint: &str) -> Self {
        let mut categories = BTreeMap::new();
        categories.insert("git".to_string(), vec![WordEntry::new(word, hint)]);
        let catalog = Catalog::new(categories).unwrap();

        let db = connect_to_memory_database().await.unwrap();
        let service = Arc::new(GameService::new(WordBank::new(catalog), db, 6, 10));
        Self { service }
    }

    pub async fn start_game(&self) -> NewGameResponse {
        self.service.new_puzzle().await.unwrap()
    }

    pub async fn guess(
        &self,
        game_id: SessionId,
        letter: &str,
        user_name: Option<&str>,
    ) -> GuessResponse {
        self.service
            .submit_guess(game_id, letter, user_name)
            .await
            .unwrap()
    }

    /// Plays the distinct letters of `word` in order, returning the last
    /// response (the winning one when the session had no prior progress).
    pub async fn play_word(
        &self,
        game_id: SessionId,
        word: &str,
        user_name: Option<&str>,
    ) -> GuessResponse {
        let mut letters = Vec::new();
        for c in word.chars().filter(|c| c.is_ascii_alphabetic()) {
            if !letters.contains(&c) {
                letters.push(c);
            }
        }

        let mut last = None;
        for letter in letters {
            last = Some(self.guess(game_id, &letter.to_string(), user_name).await);
        }
        last.expect("word has at least one letter")
    }

    /// Misses `count` times with letters absent from `word`.
    pub async fn play_misses(&self, game_id: SessionId, word: &str, count: usize) -> GuessResponse {
        let absent: Vec<char> = ('A'..='Z').filter(|c| !word.contains(*c)).collect();

        let mut last = None;
        for letter in absent.into_iter().take(count) {
            last = Some(self.guess(game_id, &letter.to_string(), None).await);
        }
        last.expect("at least one miss requested")
    }
}
