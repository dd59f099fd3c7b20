use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{DatabaseBackend, Statement};
use sea_orm_migration::sea_query::extension::postgres::Type as PgType;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Players {
    Table,
    Id,
    Login,
    PasswordHash,
    Nickname,
    Wins,
    Losses,
    Draws,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Games {
    Table,
    Id,
    HostId,
    GuestId,
    HostMark,
    GuestMark,
    CurrentPlayerId,
    StartingPlayerId,
    Board,
    Phase,
    WinnerId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Rooms {
    Table,
    Id,
    HostId,
    HostWantsNewGame,
    GuestId,
    GuestWantsNewGame,
    GameId,
    Title,
    Description,
    Phase,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum RoomPhaseEnum {
    #[iden = "room_phase"]
    Type,
}

#[derive(Iden)]
enum GamePhaseEnum {
    #[iden = "game_phase"]
    Type,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // players
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Players::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Players::Login).string().not_null())
                    .col(ColumnDef::new(Players::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Players::Nickname).string().not_null())
                    .col(
                        ColumnDef::new(Players::Wins)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Players::Losses)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Players::Draws)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Players::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Players::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create unique index on players.login
        manager
            .create_index(
                Index::create()
                    .name("ux_players_login")
                    .table(Players::Table)
                    .col(Players::Login)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Create Postgres enums (PostgreSQL only)
        match manager.get_database_backend() {
            DatabaseBackend::Postgres => {
                // Helper function to check if enum exists
                async fn enum_exists(
                    manager: &SchemaManager<'_>,
                    enum_name: &str,
                ) -> Result<bool, DbErr> {
                    let result = manager
                        .get_connection()
                        .query_one(Statement::from_string(
                            DatabaseBackend::Postgres,
                            format!("SELECT 1 FROM pg_type WHERE typname = '{}'", enum_name),
                        ))
                        .await?;
                    Ok(result.is_some())
                }

                if !enum_exists(manager, "game_phase").await? {
                    manager
                        .create_type(
                            PgType::create()
                                .as_enum(GamePhaseEnum::Type)
                                .values(["IN_PROGRESS", "COMPLETED"])
                                .to_owned(),
                        )
                        .await?;
                }

                if !enum_exists(manager, "room_phase").await? {
                    manager
                        .create_type(
                            PgType::create()
                                .as_enum(RoomPhaseEnum::Type)
                                .values(["OPEN", "FULL"])
                                .to_owned(),
                        )
                        .await?;
                }
            }
            DatabaseBackend::Sqlite => {
                // SQLite doesn't need enum types - they're stored as TEXT
            }
            _ => {
                return Err(DbErr::Custom("Unsupported database backend".into()));
            }
        }

        // games table
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Games::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Games::HostId).uuid().not_null())
                    .col(ColumnDef::new(Games::GuestId).uuid().not_null())
                    .col(ColumnDef::new(Games::HostMark).char_len(1).not_null())
                    .col(ColumnDef::new(Games::GuestMark).char_len(1).not_null())
                    .col(ColumnDef::new(Games::CurrentPlayerId).uuid().not_null())
                    .col(ColumnDef::new(Games::StartingPlayerId).uuid().not_null())
                    .col(
                        ColumnDef::new(Games::Board)
                            .char_len(9)
                            .not_null()
                            .default("_________"),
                    )
                    .col(
                        ColumnDef::new(Games::Phase)
                            .custom(GamePhaseEnum::Type)
                            .not_null()
                            .default("IN_PROGRESS"),
                    )
                    .col(ColumnDef::new(Games::WinnerId).uuid().null())
                    .col(
                        ColumnDef::new(Games::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Games::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_host_id")
                            .from(Games::Table, Games::HostId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_guest_id")
                            .from(Games::Table, Games::GuestId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_winner_id")
                            .from(Games::Table, Games::WinnerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_games_host_id")
                    .table(Games::Table)
                    .col(Games::HostId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_games_guest_id")
                    .table(Games::Table)
                    .col(Games::GuestId)
                    .to_owned(),
            )
            .await?;

        // rooms table
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Rooms::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Rooms::HostId).uuid().not_null())
                    .col(
                        ColumnDef::new(Rooms::HostWantsNewGame)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Rooms::GuestId).uuid().null())
                    .col(
                        ColumnDef::new(Rooms::GuestWantsNewGame)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Rooms::GameId).uuid().null())
                    .col(ColumnDef::new(Rooms::Title).string().not_null())
                    .col(ColumnDef::new(Rooms::Description).string().null())
                    .col(
                        ColumnDef::new(Rooms::Phase)
                            .custom(RoomPhaseEnum::Type)
                            .not_null()
                            .default("OPEN"),
                    )
                    .col(
                        ColumnDef::new(Rooms::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Rooms::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rooms_host_id")
                            .from(Rooms::Table, Rooms::HostId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rooms_guest_id")
                            .from(Rooms::Table, Rooms::GuestId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rooms_game_id")
                            .from(Rooms::Table, Rooms::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // One room per host; guests are unique too (multiple NULLs are allowed
        // by both Postgres and SQLite unique indexes).
        manager
            .create_index(
                Index::create()
                    .name("ux_rooms_host_id")
                    .table(Rooms::Table)
                    .col(Rooms::HostId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_rooms_guest_id")
                    .table(Rooms::Table)
                    .col(Rooms::GuestId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_rooms_phase")
                    .table(Rooms::Table)
                    .col(Rooms::Phase)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop rooms indexes and table
        manager
            .drop_index(
                Index::drop()
                    .name("ix_rooms_phase")
                    .table(Rooms::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_rooms_guest_id")
                    .table(Rooms::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_rooms_host_id")
                    .table(Rooms::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await?;

        // Drop games indexes and table
        manager
            .drop_index(
                Index::drop()
                    .name("ix_games_guest_id")
                    .table(Games::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_games_host_id")
                    .table(Games::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await?;

        // Drop enum types (PostgreSQL only)
        match manager.get_database_backend() {
            DatabaseBackend::Postgres => {
                manager
                    .drop_type(
                        PgType::drop()
                            .name(RoomPhaseEnum::Type)
                            .if_exists()
                            .to_owned(),
                    )
                    .await?;

                manager
                    .drop_type(
                        PgType::drop()
                            .name(GamePhaseEnum::Type)
                            .if_exists()
                            .to_owned(),
                    )
                    .await?;
            }
            DatabaseBackend::Sqlite => {
                // SQLite doesn't have enum types to drop
            }
            _ => {
                return Err(DbErr::Custom("Unsupported database backend".into()));
            }
        }

        // Drop players.login unique index before dropping players table
        manager
            .drop_index(
                Index::drop()
                    .name("ux_players_login")
                    .table(Players::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Players::Table).to_owned())
            .await?;

        Ok(())
    }
}
