use anyhow::Result;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, TransactionTrait,
};
use uuid::Uuid;

use crate::entities::{players, prelude::*, sessions};
use hangman_core::GameSession;
use hangman_types::{GameStatus, SessionId};

pub struct SessionRepository {
    db: DatabaseConnection,
}

impl SessionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn encode_guessed(letters: &[char]) -> String {
        letters
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    fn decode_guessed(encoded: &str) -> Vec<char> {
        encoded
            .split(',')
            .filter_map(|part| part.chars().next())
            .collect()
    }

    fn model_to_session(model: sessions::Model) -> Result<GameSession> {
        let id = Uuid::parse_str(&model.id)?;
        let status: GameStatus = model.status.parse().map_err(anyhow::Error::msg)?;

        Ok(GameSession::restore(
            id,
            model.category,
            model.word,
            model.hint,
            Self::decode_guessed(&model.guessed_letters),
            model.wrong_count as u32,
            model.max_wrong as u32,
            status,
            model.points as u32,
            model.owner_name,
        ))
    }

    pub async fn create(&self, session: &GameSession) -> Result<()> {
        let now = chrono::Utc::now().into();
        let model = sessions::ActiveModel {
            id: ActiveValue::Set(session.id().to_string()),
            word: ActiveValue::Set(session.word().to_string()),
            category: ActiveValue::Set(session.category().to_string()),
            hint: ActiveValue::Set(session.hint().to_string()),
            guessed_letters: ActiveValue::Set(Self::encode_guessed(session.guessed_letters())),
            wrong_count: ActiveValue::Set(session.wrong_count() as i32),
            max_wrong: ActiveValue::Set(session.max_wrong() as i32),
            status: ActiveValue::Set(session.status().as_str().to_string()),
            points: ActiveValue::Set(session.points() as i32),
            owner_name: ActiveValue::Set(session.owner_name().map(str::to_string)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        Sessions::insert(model).exec(&self.db).await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: SessionId) -> Result<Option<GameSession>> {
        let model = Sessions::find_by_id(id.to_string()).one(&self.db).await?;
        model.map(Self::model_to_session).transpose()
    }

    /// Persists the mutable fields of an in-flight session.
    pub async fn update(&self, session: &GameSession) -> Result<()> {
        Self::save_mutable_fields(&self.db, session).await
    }

    /// Persists a WON session and credits its points to the named player in
    /// one transaction, so no caller can observe a half-applied win.
    pub async fn record_win(&self, session: &GameSession, player_name: Option<&str>) -> Result<()> {
        let txn = self.db.begin().await?;

        Self::save_mutable_fields(&txn, session).await?;

        if let Some(name) = player_name {
            let now: chrono::DateTime<chrono::FixedOffset> = chrono::Utc::now().into();
            match Players::find_by_id(name).one(&txn).await? {
                Some(player) => {
                    let updated = players::ActiveModel {
                        name: ActiveValue::Unchanged(player.name),
                        total_points: ActiveValue::Set(
                            player.total_points + session.points() as i32,
                        ),
                        created_at: ActiveValue::Unchanged(player.created_at),
                        updated_at: ActiveValue::Set(now),
                    };
                    Players::update(updated).exec(&txn).await?;
                }
                None => {
                    let created = players::ActiveModel {
                        name: ActiveValue::Set(name.to_string()),
                        total_points: ActiveValue::Set(session.points() as i32),
                        created_at: ActiveValue::Set(now),
                        updated_at: ActiveValue::Set(now),
                    };
                    Players::insert(created).exec(&txn).await?;
                }
            }
        }

        txn.commit().await?;
        Ok(())
    }

    pub async fn count_all(&self) -> Result<u64> {
        Ok(Sessions::find().count(&self.db).await?)
    }

    pub async fn count_won(&self) -> Result<u64> {
        Ok(Sessions::find()
            .filter(sessions::Column::Status.eq(GameStatus::Won.as_str()))
            .count(&self.db)
            .await?)
    }

    async fn save_mutable_fields<C: ConnectionTrait>(conn: &C, session: &GameSession) -> Result<()> {
        let active = sessions::ActiveModel {
            id: ActiveValue::Unchanged(session.id().to_string()),
            guessed_letters: ActiveValue::Set(Self::encode_guessed(session.guessed_letters())),
            wrong_count: ActiveValue::Set(session.wrong_count() as i32),
            status: ActiveValue::Set(session.status().as_str().to_string()),
            points: ActiveValue::Set(session.points() as i32),
            owner_name: ActiveValue::Set(session.owner_name().map(str::to_string)),
            updated_at: ActiveValue::Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        Sessions::update(active).exec(conn).await?;
        Ok(())
    }
}
