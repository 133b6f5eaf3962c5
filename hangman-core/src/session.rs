use hangman_types::{GameError, GameStatus, SessionId};
use tracing::debug;

pub const DEFAULT_MAX_WRONG: u32 = 6;

/// What a single accepted guess did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Hit,
    Miss,
    Won,
    Lost,
}

/// An accepted guess: the normalized letter and its effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessReport {
    pub letter: char,
    pub outcome: GuessOutcome,
}

impl GuessReport {
    /// Human-readable outcome message for the response payload.
    pub fn message(&self, points: u32) -> String {
        match self.outcome {
            GuessOutcome::Hit => {
                format!("The letter '{}' is in the word!", self.letter)
            }
            GuessOutcome::Miss => {
                format!("The letter '{}' is not in the word.", self.letter)
            }
            GuessOutcome::Won => format!("You won! +{points} points!"),
            GuessOutcome::Lost => "Game over!".to_string(),
        }
    }
}

/// Score awarded at the moment of winning.
///
/// Kept exactly as the game has always computed it: the floor of 10 is
/// unreachable with the default `max_wrong` of 6, since losing preempts a
/// seventh wrong guess and the minimum winning score works out to 40.
pub fn score_for_win(wrong_count: u32) -> u32 {
    100u32.saturating_sub(wrong_count * 10).max(10)
}

/// State machine for a single hangman game.
///
/// Status starts at Playing and moves monotonically to Won or Lost; once
/// terminal, every further guess fails with `GameAlreadyFinished`. Points are
/// set exactly once, on the winning transition.
#[derive(Debug, Clone)]
pub struct GameSession {
    id: SessionId,
    word: String,
    category: String,
    hint: String,
    guessed_letters: Vec<char>,
    wrong_count: u32,
    max_wrong: u32,
    status: GameStatus,
    points: u32,
    owner_name: Option<String>,
}

impl GameSession {
    pub fn new(id: SessionId, category: String, word: String, hint: String, max_wrong: u32) -> Self {
        Self {
            id,
            word: word.to_ascii_uppercase(),
            category,
            hint,
            guessed_letters: Vec::new(),
            wrong_count: 0,
            max_wrong,
            status: GameStatus::Playing,
            points: 0,
            owner_name: None,
        }
    }

    /// Rehydrates a session from its persisted fields. The storage layer is
    /// trusted to hand back what it was given; no transitions are re-run.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: SessionId,
        category: String,
        word: String,
        hint: String,
        guessed_letters: Vec<char>,
        wrong_count: u32,
        max_wrong: u32,
        status: GameStatus,
        points: u32,
        owner_name: Option<String>,
    ) -> Self {
        Self {
            id,
            word,
            category,
            hint,
            guessed_letters,
            wrong_count,
            max_wrong,
            status,
            points,
            owner_name,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed_letters
    }

    pub fn wrong_count(&self) -> u32 {
        self.wrong_count
    }

    pub fn max_wrong(&self) -> u32 {
        self.max_wrong
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn owner_name(&self) -> Option<&str> {
        self.owner_name.as_deref()
    }

    pub fn bind_owner(&mut self, name: &str) {
        self.owner_name = Some(name.to_string());
    }

    /// Normalizes a guess payload to a single uppercase letter.
    pub fn normalize_guess(input: &str) -> Result<char, GameError> {
        let trimmed = input.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_uppercase()),
            _ => Err(GameError::InvalidInput {
                input: input.to_string(),
            }),
        }
    }

    /// Submits one letter guess, advancing the state machine.
    pub fn guess(&mut self, input: &str) -> Result<GuessReport, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameAlreadyFinished);
        }

        let letter = Self::normalize_guess(input)?;
        if self.guessed_letters.contains(&letter) {
            return Err(GameError::DuplicateGuess { letter });
        }
        self.guessed_letters.push(letter);

        let outcome = if self.word.contains(letter) {
            if self.is_fully_revealed() {
                self.status = GameStatus::Won;
                self.points = score_for_win(self.wrong_count);
                debug!(session_id = %self.id, points = self.points, "session won");
                GuessOutcome::Won
            } else {
                GuessOutcome::Hit
            }
        } else {
            self.wrong_count += 1;
            if self.wrong_count >= self.max_wrong {
                self.status = GameStatus::Lost;
                debug!(session_id = %self.id, "session lost");
                GuessOutcome::Lost
            } else {
                GuessOutcome::Miss
            }
        };

        Ok(GuessReport { letter, outcome })
    }

    /// The masked word, space-separated, `_` for unrevealed letters.
    ///
    /// Non-alphabetic characters (the hyphen in CHERRY-PICK) are always
    /// shown: a hyphen can never be a legal guess, so hiding it would make
    /// the word unwinnable.
    pub fn reveal(&self) -> String {
        let rendered: Vec<String> = self
            .word
            .chars()
            .map(|c| {
                if !c.is_ascii_alphabetic() || self.guessed_letters.contains(&c) {
                    c.to_string()
                } else {
                    "_".to_string()
                }
            })
            .collect();
        rendered.join(" ")
    }

    fn is_fully_revealed(&self) -> bool {
        self.word
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .all(|c| self.guessed_letters.contains(&c))
    }

    /// The secret word, disclosed only once the game is lost.
    pub fn revealed_word_if_lost(&self) -> Option<&str> {
        (self.status == GameStatus::Lost).then_some(self.word.as_str())
    }
}
