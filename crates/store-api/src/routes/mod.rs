//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, put},
    Router,
};

use crate::handlers::{admin, comments, games, health, ratings, users};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (kept outside the rate limiter)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(game_routes())
        .merge(comment_routes())
        .merge(rating_routes())
        .merge(user_routes())
        .merge(admin_routes())
}

/// Game catalog routes
fn game_routes() -> Router<AppState> {
    Router::new()
        .route("/games", get(games::list_games).post(games::create_game))
        .route("/games/categories", get(games::list_categories))
        .route(
            "/games/:game_id",
            get(games::get_game)
                .patch(games::update_game)
                .delete(games::delete_game),
        )
}

/// Comment routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/games/:game_id/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route("/comments/:comment_id", patch(comments::update_comment))
        .route("/comments/:comment_id", delete(comments::delete_comment))
}

/// Rating routes
fn rating_routes() -> Router<AppState> {
    Router::new()
        .route("/games/:game_id/ratings", get(ratings::get_game_ratings))
        .route("/games/:game_id/ratings/@me", put(ratings::upsert_my_rating))
        .route("/games/:game_id/ratings/@me", get(ratings::get_my_rating))
        .route("/ratings/:rating_id", delete(ratings::delete_rating))
}

/// Current user routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me", get(users::get_current_user))
        .route("/users/@me/stats", get(users::get_my_stats))
        .route("/users/@me/comments", get(users::get_my_comments))
        .route("/users/@me/ratings", get(users::get_my_ratings))
}

/// Admin dashboard and moderation routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/overview", get(admin::get_overview))
        .route("/admin/activity", get(admin::get_activity))
        .route("/admin/categories", get(admin::get_categories))
        .route("/admin/comments", get(admin::get_comments))
        .route("/admin/ratings", get(admin::get_ratings))
}
