pub mod catalog;
pub mod session;
pub mod word_bank;

// Re-export main components
pub use catalog::*;
pub use session::*;
pub use word_bank::*;
