pub mod players;
pub mod prelude;
pub mod sessions;
