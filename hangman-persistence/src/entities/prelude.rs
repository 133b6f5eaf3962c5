pub use super::players::Entity as Players;
pub use super::sessions::Entity as Sessions;
