use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "game_phase")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    #[sea_orm(string_value = "IN_PROGRESS")]
    InProgress,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_name = "host_id")]
    pub host_id: Uuid,
    #[sea_orm(column_name = "guest_id")]
    pub guest_id: Uuid,
    /// One character, "X" or "O".
    #[sea_orm(column_name = "host_mark")]
    pub host_mark: String,
    #[sea_orm(column_name = "guest_mark")]
    pub guest_mark: String,
    #[sea_orm(column_name = "current_player_id")]
    pub current_player_id: Uuid,
    /// Who made the first move of this game; drives starter alternation
    /// for rematches.
    #[sea_orm(column_name = "starting_player_id")]
    pub starting_player_id: Uuid,
    /// Nine characters, one per cell: 'X', 'O', or '_'.
    pub board: String,
    pub phase: GamePhase,
    #[sea_orm(column_name = "winner_id")]
    pub winner_id: Option<Uuid>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::players::Entity",
        from = "Column::HostId",
        to = "super::players::Column::Id"
    )]
    HostPlayer,
    #[sea_orm(
        belongs_to = "super::players::Entity",
        from = "Column::GuestId",
        to = "super::players::Column::Id"
    )]
    GuestPlayer,
    #[sea_orm(
        belongs_to = "super::players::Entity",
        from = "Column::WinnerId",
        to = "super::players::Column::Id"
    )]
    WinnerPlayer,
}

impl ActiveModelBehavior for ActiveModel {}
