use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub word: String,
    pub category: String,
    #[sea_orm(column_type = "Text")]
    pub hint: String,
    /// Comma-joined guess order, a storage-only encoding of the core's
    /// ordered letter set.
    #[sea_orm(column_type = "Text")]
    pub guessed_letters: String,
    pub wrong_count: i32,
    pub max_wrong: i32,
    pub status: String,
    pub points: i32,
    pub owner_name: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
