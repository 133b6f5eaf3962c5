use std::collections::BTreeMap;

use hangman_core::{Catalog, GameSession, WordBank, WordEntry, DEFAULT_MAX_WRONG};
use uuid::Uuid;

/// Creates a small catalog with known words
pub fn create_test_catalog() -> Catalog {
    let mut categories = BTreeMap::new();
    categories.insert(
        "git".to_string(),
        vec![
            WordEntry::new("COMMIT", "Salvar mudanças no repositório"),
            WordEntry::new("MERGE", "Combinar duas branches"),
            WordEntry::new("CHERRY-PICK", "Aplicar commit específico em outra branch"),
        ],
    );
    categories.insert(
        "github".to_string(),
        vec![WordEntry::new("WIKI", "Documentação colaborativa")],
    );
    Catalog::new(categories).unwrap()
}

pub fn create_test_bank() -> WordBank {
    WordBank::new(create_test_catalog())
}

/// Creates a session with a specific secret word
pub fn create_session_with_word(word: &str) -> GameSession {
    GameSession::new(
        Uuid::new_v4(),
        "git".to_string(),
        word.to_string(),
        "a hint".to_string(),
        DEFAULT_MAX_WRONG,
    )
}

/// Plays every distinct letter of the word, winning the session
pub fn play_to_win(session: &mut GameSession) {
    let letters: Vec<char> = {
        let mut seen = Vec::new();
        for c in session.word().chars().filter(|c| c.is_ascii_alphabetic()) {
            if !seen.contains(&c) {
                seen.push(c);
            }
        }
        seen
    };
    for letter in letters {
        session.guess(&letter.to_string()).unwrap();
    }
}

/// Misses `count` times using letters known to be absent
pub fn play_misses(session: &mut GameSession, count: usize) {
    let absent: Vec<char> = ('A'..='Z')
        .filter(|c| !session.word().contains(*c))
        .collect();
    for letter in absent.into_iter().take(count) {
        session.guess(&letter.to_string()).unwrap();
    }
}
