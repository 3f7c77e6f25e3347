//! Admin handlers
//!
//! Every endpoint re-checks the caller's admin role in the service layer.

use axum::{extract::State, Json};
use store_core::{CategoryCount, MonthBucket};
use store_service::{
    AdminOverviewResponse, AdminService, CommentWithGameResponse, RatingWithGameResponse,
};

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /admin/overview
pub async fn get_overview(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<AdminOverviewResponse>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.overview(auth.user_id).await?))
}

/// GET /admin/activity
pub async fn get_activity(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<MonthBucket>>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.activity(auth.user_id).await?))
}

/// GET /admin/categories
pub async fn get_categories(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<CategoryCount>>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.categories(auth.user_id).await?))
}

/// GET /admin/comments
pub async fn get_comments(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<CommentWithGameResponse>>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.comments(auth.user_id).await?))
}

/// GET /admin/ratings
pub async fn get_ratings(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<RatingWithGameResponse>>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.ratings(auth.user_id).await?))
}
