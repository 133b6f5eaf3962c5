use serde::Deserialize;
use std::sync::Arc;
use warp::Filter;
use warp::http::StatusCode;

use crate::service::{GameService, ServiceError};
use hangman_types::{GameError, GuessRequest};

pub mod config;
pub mod service;

#[derive(Deserialize)]
struct LeaderboardQuery {
    limit: Option<u64>,
}

pub fn create_routes(
    service: Arc<GameService>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let service_filter = warp::any().map({
        let service = service.clone();
        move || service.clone()
    });

    // API banner at the root
    let root = warp::path::end().and(warp::get()).map(|| {
        warp::reply::json(&serde_json::json!({
            "message": "Git Hangman API",
            "version": env!("CARGO_PKG_VERSION"),
        }))
    });

    // Health check endpoint
    let health = warp::path("health").and(warp::get()).map(|| {
        warp::reply::json(&serde_json::json!({
            "status": "healthy"
        }))
    });

    // New game endpoint
    let new_game = warp::path!("game" / "new")
        .and(warp::get())
        .and(service_filter.clone())
        .and_then(handle_new_game);

    // Guess endpoint
    let guess = warp::path!("game" / "guess")
        .and(warp::post())
        .and(warp::body::json::<GuessRequest>())
        .and(service_filter.clone())
        .and_then(handle_guess);

    // Leaderboard endpoint
    let leaderboard = warp::path("leaderboard")
        .and(warp::get())
        .and(warp::query::<LeaderboardQuery>())
        .and(service_filter.clone())
        .and_then(handle_leaderboard);

    // Stats endpoint
    let stats = warp::path("stats")
        .and(warp::get())
        .and(service_filter.clone())
        .and_then(handle_stats);

    // CORS configuration
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST"]);

    root.or(health)
        .or(new_game)
        .or(guess)
        .or(leaderboard)
        .or(stats)
        .with(cors)
        .with(warp::log("git_hangman"))
}

fn game_error_status(err: &GameError) -> StatusCode {
    match err {
        GameError::SessionNotFound { .. } => StatusCode::NOT_FOUND,
        GameError::GameAlreadyFinished
        | GameError::InvalidInput { .. }
        | GameError::DuplicateGuess { .. } => StatusCode::BAD_REQUEST,
    }
}

fn error_reply(err: ServiceError) -> (warp::reply::Json, StatusCode) {
    match err {
        ServiceError::Game(err) => (
            warp::reply::json(&serde_json::json!({
                "error": err.to_string(),
                "kind": err.kind(),
            })),
            game_error_status(&err),
        ),
        ServiceError::Storage(err) => {
            tracing::error!("storage failure: {err:#}");
            (
                warp::reply::json(&serde_json::json!({
                    "error": "internal server error"
                })),
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    }
}

async fn handle_new_game(service: Arc<GameService>) -> Result<impl warp::Reply, warp::Rejection> {
    match service.new_puzzle().await {
        Ok(response) => Ok(warp::reply::with_status(
            warp::reply::json(&response),
            StatusCode::OK,
        )),
        Err(err) => {
            let (body, status) = error_reply(err);
            Ok(warp::reply::with_status(body, status))
        }
    }
}

async fn handle_guess(
    request: GuessRequest,
    service: Arc<GameService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match service
        .submit_guess(
            request.game_id,
            &request.letter,
            request.user_name.as_deref(),
        )
        .await
    {
        Ok(response) => Ok(warp::reply::with_status(
            warp::reply::json(&response),
            StatusCode::OK,
        )),
        Err(err) => {
            let (body, status) = error_reply(err);
            Ok(warp::reply::with_status(body, status))
        }
    }
}

async fn handle_leaderboard(
    query: LeaderboardQuery,
    service: Arc<GameService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match service.leaderboard(query.limit).await {
        Ok(entries) => Ok(warp::reply::with_status(
            warp::reply::json(&entries),
            StatusCode::OK,
        )),
        Err(err) => {
            let (body, status) = error_reply(err);
            Ok(warp::reply::with_status(body, status))
        }
    }
}

async fn handle_stats(service: Arc<GameService>) -> Result<impl warp::Reply, warp::Rejection> {
    match service.stats().await {
        Ok(stats) => Ok(warp::reply::with_status(
            warp::reply::json(&stats),
            StatusCode::OK,
        )),
        Err(err) => {
            let (body, status) = error_reply(err);
            Ok(warp::reply::with_status(body, status))
        }
    }
}
