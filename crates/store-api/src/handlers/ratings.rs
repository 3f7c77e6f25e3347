//! Rating handlers

use axum::{
    extract::{Path, State},
    Json,
};
use store_service::{GameRatingsResponse, RatingResponse, RatingService, UpsertRatingRequest};

use crate::extractors::{AuthUser, GameIdPath, RatingIdPath, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Rating summary and distribution of a game
///
/// GET /games/{game_id}/ratings
pub async fn get_game_ratings(
    State(state): State<AppState>,
    Path(path): Path<GameIdPath>,
) -> ApiResult<Json<GameRatingsResponse>> {
    let game_id = path.game_id()?;

    let service = RatingService::new(state.service_context());
    Ok(Json(service.game_ratings(game_id).await?))
}

/// Rate a game, replacing the caller's earlier rating
///
/// PUT /games/{game_id}/ratings/@me
pub async fn upsert_my_rating(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<GameIdPath>,
    ValidatedJson(request): ValidatedJson<UpsertRatingRequest>,
) -> ApiResult<Json<RatingResponse>> {
    let game_id = path.game_id()?;

    let service = RatingService::new(state.service_context());
    let response = service
        .upsert_rating(&auth.caller(), game_id, request)
        .await?;
    Ok(Json(response))
}

/// The caller's own rating of a game
///
/// GET /games/{game_id}/ratings/@me
pub async fn get_my_rating(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<GameIdPath>,
) -> ApiResult<Json<RatingResponse>> {
    let game_id = path.game_id()?;

    let service = RatingService::new(state.service_context());
    Ok(Json(service.my_rating(auth.user_id, game_id).await?))
}

/// Delete rating (author or admin)
///
/// DELETE /ratings/{rating_id}
pub async fn delete_rating(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<RatingIdPath>,
) -> ApiResult<NoContent> {
    let rating_id = path.rating_id()?;

    let service = RatingService::new(state.service_context());
    service.delete_rating(auth.user_id, rating_id).await?;
    Ok(NoContent)
}
