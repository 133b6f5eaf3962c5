use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub max_wrong_guesses: u32,
    pub leaderboard_default_limit: u64,
}

impl Config {
    pub fn new() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .expect("Invalid PORT"),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://hangman.db?mode=rwc".to_string()),
            max_wrong_guesses: env::var("MAX_WRONG_GUESSES")
                .unwrap_or_else(|_| "6".to_string())
                .parse()
                .expect("Invalid MAX_WRONG_GUESSES"),
            leaderboard_default_limit: env::var("LEADERBOARD_DEFAULT_LIMIT")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("Invalid LEADERBOARD_DEFAULT_LIMIT"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
