//! Game catalog handlers
//!
//! Listing and detail are public; writes require the admin role.

use axum::{
    extract::{Path, State},
    Json,
};
use store_service::{
    CreateGameRequest, GameDetailResponse, GameListItemResponse, GameResponse, GameService,
    GamesQuery, UpdateGameRequest,
};

use crate::extractors::{AuthUser, GameIdPath, OptionalAuthUser, QueryParams, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List games, newest first, with rating summaries
///
/// GET /games?search=&category=
pub async fn list_games(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<GamesQuery>,
) -> ApiResult<Json<Vec<GameListItemResponse>>> {
    let service = GameService::new(state.service_context());
    let games = service.list_games(query.filter()?).await?;
    Ok(Json(games))
}

/// Distinct categories
///
/// GET /games/categories
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Json<Vec<String>>> {
    let service = GameService::new(state.service_context());
    Ok(Json(service.list_categories().await?))
}

/// Game detail, including the caller's own rating when signed in
///
/// GET /games/{game_id}
pub async fn get_game(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(path): Path<GameIdPath>,
) -> ApiResult<Json<GameDetailResponse>> {
    let game_id = path.game_id()?;

    let service = GameService::new(state.service_context());
    let response = service.get_game(game_id, auth.user_id()).await?;
    Ok(Json(response))
}

/// Create game
///
/// POST /games
pub async fn create_game(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateGameRequest>,
) -> ApiResult<Created<Json<GameResponse>>> {
    let service = GameService::new(state.service_context());
    let response = service.create_game(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Update game
///
/// PATCH /games/{game_id}
pub async fn update_game(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<GameIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateGameRequest>,
) -> ApiResult<Json<GameResponse>> {
    let game_id = path.game_id()?;

    let service = GameService::new(state.service_context());
    let response = service.update_game(auth.user_id, game_id, request).await?;
    Ok(Json(response))
}

/// Delete game along with its comments and ratings
///
/// DELETE /games/{game_id}
pub async fn delete_game(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<GameIdPath>,
) -> ApiResult<NoContent> {
    let game_id = path.game_id()?;

    let service = GameService::new(state.service_context());
    service.delete_game(auth.user_id, game_id).await?;
    Ok(NoContent)
}
