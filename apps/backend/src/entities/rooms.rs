use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "room_phase")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomPhase {
    #[sea_orm(string_value = "OPEN")]
    Open,
    #[sea_orm(string_value = "FULL")]
    Full,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_name = "host_id")]
    pub host_id: Uuid,
    #[sea_orm(column_name = "host_wants_new_game")]
    pub host_wants_new_game: bool,
    #[sea_orm(column_name = "guest_id")]
    pub guest_id: Option<Uuid>,
    #[sea_orm(column_name = "guest_wants_new_game")]
    pub guest_wants_new_game: bool,
    /// Current game, if one has been created for this pairing.
    #[sea_orm(column_name = "game_id")]
    pub game_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub phase: RoomPhase,
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
        belongs_to = "super::games::Entity",
        from = "Column::GameId",
        to = "super::games::Column::Id"
    )]
    Game,
}

impl Related<super::games::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
