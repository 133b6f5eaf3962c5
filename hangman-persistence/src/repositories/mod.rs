pub mod player_repository;
pub mod session_repository;

pub use player_repository::PlayerRepository;
pub use session_repository::SessionRepository;
