//! Room and game HTTP routes.
//!
//! Everything here requires a Bearer token; mutations run inside `with_txn`
//! so a failed operation leaves no partial state.

use actix_web::http::header;
use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::with_txn;
use crate::entities::games::GamePhase;
use crate::entities::rooms::RoomPhase;
use crate::error::AppError;
use crate::extractors::CurrentPlayer;
use crate::repos::games::Game;
use crate::repos::rooms::Room;
use crate::services::games as games_service;
use crate::services::rooms as rooms_service;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateRoomRequest {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RoomPlayerResponse {
    pub id: Uuid,
    pub wants_new_game: bool,
}

#[derive(Debug, Serialize)]
pub struct RoomResponse {
    pub id: Uuid,
    pub host: RoomPlayerResponse,
    pub guest: Option<RoomPlayerResponse>,
    pub game_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub phase: RoomPhase,
}

impl From<Room> for RoomResponse {
    fn from(r: Room) -> Self {
        RoomResponse {
            id: r.id,
            host: RoomPlayerResponse {
                id: r.host.id,
                wants_new_game: r.host.wants_new_game,
            },
            guest: r.guest.map(|g| RoomPlayerResponse {
                id: g.id,
                wants_new_game: g.wants_new_game,
            }),
            game_id: r.game_id,
            title: r.title,
            description: r.description,
            phase: r.phase,
        }
    }
}

/// Listing entry for an open room.
#[derive(Debug, Serialize)]
pub struct OpenRoomResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub host_nickname: String,
}

#[derive(Debug, Serialize)]
pub struct GamePlayerResponse {
    pub id: Uuid,
    pub mark: char,
}

#[derive(Debug, Serialize)]
pub struct GameResponse {
    pub id: Uuid,
    pub host: GamePlayerResponse,
    pub guest: GamePlayerResponse,
    pub current_player_id: Uuid,
    pub board: String,
    pub phase: GamePhase,
    pub winner_id: Option<Uuid>,
}

impl From<Game> for GameResponse {
    fn from(g: Game) -> Self {
        GameResponse {
            id: g.id,
            host: GamePlayerResponse {
                id: g.host.id,
                mark: g.host.mark.as_char(),
            },
            guest: GamePlayerResponse {
                id: g.guest.id,
                mark: g.guest.mark.as_char(),
            },
            current_player_id: g.current_player_id,
            board: g.board.to_stored(),
            phase: g.phase,
            winner_id: g.winner_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NewGameResponse {
    /// Id of the newly created game, or null when no game was created.
    pub game_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub position: u8,
}

/// GET /api/rooms
async fn list_rooms(
    _current: CurrentPlayer,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let rooms = rooms_service::open_rooms(&app_state.db).await?;

    let body: Vec<OpenRoomResponse> = rooms
        .into_iter()
        .map(|r| OpenRoomResponse {
            id: r.room.id,
            title: r.room.title,
            description: r.room.description,
            host_nickname: r.host_nickname,
        })
        .collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/rooms
async fn create_room(
    current: CurrentPlayer,
    req: web::Json<CreateRoomRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let host_id = current.id;
    let body = req.into_inner();

    let room = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            rooms_service::create_room(txn, host_id, &body.title, body.description.as_deref())
                .await
        })
    })
    .await?;

    let location = format!("/api/rooms/{}", room.id);
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(RoomResponse::from(room)))
}

/// GET /api/rooms/{room_id}
async fn get_room(
    current: CurrentPlayer,
    path: web::Path<Uuid>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let room = rooms_service::room_by_id(&app_state.db, path.into_inner(), current.id).await?;
    Ok(HttpResponse::Ok().json(RoomResponse::from(room)))
}

/// POST /api/rooms/{room_id}/join
async fn join_room(
    current: CurrentPlayer,
    path: web::Path<Uuid>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let room_id = path.into_inner();
    let player_id = current.id;

    let room = with_txn(&app_state, move |txn| {
        Box::pin(async move { rooms_service::join_room(txn, room_id, player_id).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(RoomResponse::from(room)))
}

/// POST /api/rooms/{room_id}/leave
async fn leave_room(
    current: CurrentPlayer,
    path: web::Path<Uuid>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let room_id = path.into_inner();
    let player_id = current.id;

    with_txn(&app_state, move |txn| {
        Box::pin(async move { rooms_service::leave_room(txn, room_id, player_id).await })
    })
    .await?;

    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/rooms/{room_id}/games
async fn request_game(
    current: CurrentPlayer,
    path: web::Path<Uuid>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let room_id = path.into_inner();
    let player_id = current.id;

    let game_id = with_txn(&app_state, move |txn| {
        Box::pin(async move { games_service::request_new_game(txn, room_id, player_id).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(NewGameResponse { game_id }))
}

/// GET /api/rooms/{room_id}/game
async fn get_game(
    current: CurrentPlayer,
    path: web::Path<Uuid>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game = games_service::game_state(&app_state.db, path.into_inner(), current.id).await?;
    Ok(HttpResponse::Ok().json(GameResponse::from(game)))
}

/// POST /api/rooms/{room_id}/game/moves
async fn make_move(
    current: CurrentPlayer,
    path: web::Path<Uuid>,
    req: web::Json<MoveRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let room_id = path.into_inner();
    let player_id = current.id;
    let position = req.position;

    let game = with_txn(&app_state, move |txn| {
        Box::pin(async move { games_service::apply_move(txn, room_id, player_id, position).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(GameResponse::from(game)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_rooms))
            .route(web::post().to(create_room)),
    );
    cfg.service(web::resource("/{room_id}").route(web::get().to(get_room)));
    cfg.service(web::resource("/{room_id}/join").route(web::post().to(join_room)));
    cfg.service(web::resource("/{room_id}/leave").route(web::post().to(leave_room)));
    cfg.service(web::resource("/{room_id}/games").route(web::post().to(request_game)));
    cfg.service(web::resource("/{room_id}/game").route(web::get().to(get_game)));
    cfg.service(web::resource("/{room_id}/game/moves").route(web::post().to(make_move)));
}
