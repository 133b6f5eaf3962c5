use hangman_core::{DEFAULT_MAX_WRONG, GameSession};
use hangman_persistence::connection::connect_to_memory_database;
use hangman_persistence::repositories::{PlayerRepository, SessionRepository};
use hangman_types::GameStatus;
use uuid::Uuid;

fn new_session(word: &str) -> GameSession {
    GameSession::new(
        Uuid::new_v4(),
        "git".to_string(),
        word.to_string(),
        "a hint".to_string(),
        DEFAULT_MAX_WRONG,
    )
}

async fn setup() -> (SessionRepository, PlayerRepository) {
    let db = connect_to_memory_database().await.unwrap();
    (
        SessionRepository::new(db.clone()),
        PlayerRepository::new(db),
    )
}

#[tokio::test]
async fn test_session_create_and_find_round_trip() {
    let (sessions, _) = setup().await;
    let session = new_session("COMMIT");

    sessions.create(&session).await.unwrap();
    let loaded = sessions.find_by_id(session.id()).await.unwrap().unwrap();

    assert_eq!(loaded.id(), session.id());
    assert_eq!(loaded.word(), "COMMIT");
    assert_eq!(loaded.category(), "git");
    assert_eq!(loaded.hint(), "a hint");
    assert_eq!(loaded.status(), GameStatus::Playing);
    assert!(loaded.guessed_letters().is_empty());
}

#[tokio::test]
async fn test_find_unknown_session_returns_none() {
    let (sessions, _) = setup().await;
    let found = sessions.find_by_id(Uuid::new_v4()).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_update_persists_guess_progress() {
    let (sessions, _) = setup().await;
    let mut session = new_session("COMMIT");
    sessions.create(&session).await.unwrap();

    session.guess("C").unwrap();
    session.guess("Z").unwrap();
    sessions.update(&session).await.unwrap();

    let loaded = sessions.find_by_id(session.id()).await.unwrap().unwrap();
    assert_eq!(loaded.guessed_letters(), &['C', 'Z']);
    assert_eq!(loaded.wrong_count(), 1);
    assert_eq!(loaded.status(), GameStatus::Playing);
}

#[tokio::test]
async fn test_record_win_creates_player_and_credits_points() {
    let (sessions, players) = setup().await;
    let mut session = new_session("TAG");
    sessions.create(&session).await.unwrap();

    for letter in ["T", "A", "G"] {
        session.guess(letter).unwrap();
    }
    session.bind_owner("alice");
    sessions.record_win(&session, Some("alice")).await.unwrap();

    let loaded = sessions.find_by_id(session.id()).await.unwrap().unwrap();
    assert_eq!(loaded.status(), GameStatus::Won);
    assert_eq!(loaded.points(), 100);
    assert_eq!(loaded.owner_name(), Some("alice"));

    let player = players.find_by_name("alice").await.unwrap().unwrap();
    assert_eq!(player.total_points, 100);
}

#[tokio::test]
async fn test_record_win_accumulates_across_sessions() {
    let (sessions, players) = setup().await;

    for _ in 0..2 {
        let mut session = new_session("TAG");
        sessions.create(&session).await.unwrap();
        for letter in ["T", "A", "G"] {
            session.guess(letter).unwrap();
        }
        session.bind_owner("bob");
        sessions.record_win(&session, Some("bob")).await.unwrap();
    }

    let player = players.find_by_name("bob").await.unwrap().unwrap();
    assert_eq!(player.total_points, 200);
}

#[tokio::test]
async fn test_anonymous_win_records_no_player() {
    let (sessions, players) = setup().await;
    let mut session = new_session("TAG");
    sessions.create(&session).await.unwrap();

    for letter in ["T", "A", "G"] {
        session.guess(letter).unwrap();
    }
    sessions.record_win(&session, None).await.unwrap();

    assert_eq!(players.count_all().await.unwrap(), 0);
    let loaded = sessions.find_by_id(session.id()).await.unwrap().unwrap();
    assert_eq!(loaded.status(), GameStatus::Won);
}

#[tokio::test]
async fn test_leaderboard_orders_and_ranks() {
    let (sessions, players) = setup().await;

    // carol wins twice, alice once with misses, dave once flawlessly
    for (name, misses) in [("carol", 0), ("carol", 0), ("alice", 2), ("dave", 0)] {
        let mut session = new_session("TAG");
        sessions.create(&session).await.unwrap();
        let absent = ["Z", "X"];
        for miss in absent.iter().take(misses) {
            session.guess(miss).unwrap();
        }
        for letter in ["T", "A", "G"] {
            session.guess(letter).unwrap();
        }
        session.bind_owner(name);
        sessions.record_win(&session, Some(name)).await.unwrap();
    }

    let board = players.top_players(10).await.unwrap();
    assert_eq!(board.len(), 3);
    assert_eq!(board[0].name, "carol");
    assert_eq!(board[0].total_points, 200);
    assert_eq!(board[0].rank, 1);
    assert_eq!(board[1].name, "dave");
    assert_eq!(board[1].total_points, 100);
    assert_eq!(board[1].rank, 2);
    assert_eq!(board[2].name, "alice");
    assert_eq!(board[2].total_points, 80);
    assert_eq!(board[2].rank, 3);
}

#[tokio::test]
async fn test_leaderboard_tie_break_is_name_ascending() {
    let (sessions, players) = setup().await;

    for name in ["zoe", "amy", "mia"] {
        let mut session = new_session("TAG");
        sessions.create(&session).await.unwrap();
        for letter in ["T", "A", "G"] {
            session.guess(letter).unwrap();
        }
        session.bind_owner(name);
        sessions.record_win(&session, Some(name)).await.unwrap();
    }

    let board = players.top_players(10).await.unwrap();
    let names: Vec<&str> = board.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["amy", "mia", "zoe"]);
    assert_eq!(
        board.iter().map(|e| e.rank).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[tokio::test]
async fn test_leaderboard_respects_limit() {
    let (sessions, players) = setup().await;

    for name in ["p1", "p2", "p3", "p4"] {
        let mut session = new_session("TAG");
        sessions.create(&session).await.unwrap();
        for letter in ["T", "A", "G"] {
            session.guess(letter).unwrap();
        }
        sessions.record_win(&session, Some(name)).await.unwrap();
    }

    let board = players.top_players(2).await.unwrap();
    assert_eq!(board.len(), 2);
}

#[tokio::test]
async fn test_session_counts_for_stats() {
    let (sessions, _) = setup().await;

    let mut won = new_session("TAG");
    sessions.create(&won).await.unwrap();
    for letter in ["T", "A", "G"] {
        won.guess(letter).unwrap();
    }
    sessions.record_win(&won, None).await.unwrap();

    let mut lost = new_session("TAG");
    sessions.create(&lost).await.unwrap();
    for letter in ["Z", "X", "Q", "W", "Y", "K"] {
        lost.guess(letter).unwrap();
    }
    sessions.update(&lost).await.unwrap();

    let playing = new_session("TAG");
    sessions.create(&playing).await.unwrap();

    assert_eq!(sessions.count_all().await.unwrap(), 3);
    assert_eq!(sessions.count_won().await.unwrap(), 1);
}
