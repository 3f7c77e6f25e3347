//! Comment handlers

use axum::{
    extract::{Path, State},
    Json,
};
use store_service::{CommentResponse, CommentService, CreateCommentRequest, UpdateCommentRequest};

use crate::extractors::{AuthUser, CommentIdPath, GameIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Comments on a game, newest first
///
/// GET /games/{game_id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path(path): Path<GameIdPath>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let game_id = path.game_id()?;

    let service = CommentService::new(state.service_context());
    Ok(Json(service.list_comments(game_id).await?))
}

/// Create comment
///
/// POST /games/{game_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<GameIdPath>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let game_id = path.game_id()?;

    let service = CommentService::new(state.service_context());
    let response = service
        .create_comment(&auth.caller(), game_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// Edit comment (author only)
///
/// PATCH /comments/{comment_id}
pub async fn update_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CommentIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateCommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    let comment_id = path.comment_id()?;

    let service = CommentService::new(state.service_context());
    let response = service
        .update_comment(auth.user_id, comment_id, request)
        .await?;
    Ok(Json(response))
}

/// Delete comment (author or admin)
///
/// DELETE /comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CommentIdPath>,
) -> ApiResult<NoContent> {
    let comment_id = path.comment_id()?;

    let service = CommentService::new(state.service_context());
    service.delete_comment(auth.user_id, comment_id).await?;
    Ok(NoContent)
}
