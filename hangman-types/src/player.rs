use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A named player, created lazily on their first winning guess.
/// The display name is the primary key; `total_points` only ever grows.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Player {
    pub name: String,
    pub total_points: i32,
    pub created_at: String, // ISO 8601 string
}
