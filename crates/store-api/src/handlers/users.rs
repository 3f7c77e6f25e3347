//! Current user handlers
//!
//! Profile and personal dashboard of the signed-in user.

use axum::{extract::State, Json};
use store_service::{
    CommentWithGameResponse, CurrentUserResponse, RatingWithGameResponse, UserService,
    UserStatsResponse,
};

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get current user
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_current_user(&auth.caller()).await?;
    Ok(Json(response))
}

/// Dashboard statistics
///
/// GET /users/@me/stats
pub async fn get_my_stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserStatsResponse>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.get_stats(&auth.caller()).await?))
}

/// Own comments with game titles
///
/// GET /users/@me/comments
pub async fn get_my_comments(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<CommentWithGameResponse>>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.my_comments(&auth.caller()).await?))
}

/// Own ratings with game titles
///
/// GET /users/@me/ratings
pub async fn get_my_ratings(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<RatingWithGameResponse>>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.my_ratings(&auth.caller()).await?))
}
