use anyhow::Result;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect};

use crate::entities::{players, prelude::*};
use hangman_types::{LeaderboardEntry, Player};

pub struct PlayerRepository {
    db: DatabaseConnection,
}

impl PlayerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_player(model: players::Model) -> Player {
        Player {
            name: model.name,
            total_points: model.total_points,
            created_at: model.created_at.to_rfc3339(),
        }
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Player>> {
        let model = Players::find_by_id(name).one(&self.db).await?;
        Ok(model.map(Self::model_to_player))
    }

    /// Ranked leaderboard view: points descending, name ascending as the
    /// deterministic tie-break, ranks assigned 1..len in result order.
    pub async fn top_players(&self, limit: u64) -> Result<Vec<LeaderboardEntry>> {
        let models = Players::find()
            .order_by_desc(players::Column::TotalPoints)
            .order_by_asc(players::Column::Name)
            .limit(limit)
            .all(&self.db)
            .await?;

        let entries = models
            .into_iter()
            .enumerate()
            .map(|(index, model)| LeaderboardEntry {
                name: model.name,
                total_points: model.total_points,
                rank: (index + 1) as u32,
            })
            .collect();

        Ok(entries)
    }

    pub async fn count_all(&self) -> Result<u64> {
        Ok(Players::find().count(&self.db).await?)
    }
}
