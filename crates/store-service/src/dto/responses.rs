//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. The ones that are
//! served from the query cache also implement `Deserialize`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use store_core::{CommentId, GameId, RatingId, StarCount, UserId};

// ============================================================================
// Game Responses
// ============================================================================

/// Game response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResponse {
    pub id: GameId,
    pub title: String,
    pub price: Decimal,
    pub is_free: bool,
    pub category: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Average (one decimal) and number of ratings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingSummaryResponse {
    pub average: f64,
    pub count: u64,
}

/// Catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameListItemResponse {
    #[serde(flatten)]
    pub game: GameResponse,
    pub rating: RatingSummaryResponse,
}

/// Game detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameDetailResponse {
    #[serde(flatten)]
    pub game: GameResponse,
    pub rating: RatingSummaryResponse,
    pub distribution: Vec<StarCount>,
    /// The caller's own rating; never cached
    pub my_rating: Option<RatingResponse>,
}

/// Ratings overview of one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRatingsResponse {
    pub game_id: GameId,
    pub rating: RatingSummaryResponse,
    pub distribution: Vec<StarCount>,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// Public author info
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorResponse {
    pub id: UserId,
    pub display_name: String,
}

/// Comment response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: CommentId,
    pub game_id: GameId,
    pub user_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub edited: bool,
    /// `None` when the profile row is missing
    pub author: Option<AuthorResponse>,
}

/// Comment joined with the title of its game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentWithGameResponse {
    #[serde(flatten)]
    pub comment: CommentResponse,
    pub game_title: Option<String>,
}

// ============================================================================
// Rating Responses
// ============================================================================

/// Rating response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingResponse {
    pub id: RatingId,
    pub game_id: GameId,
    pub user_id: UserId,
    pub rating: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Rating joined with its game title and author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingWithGameResponse {
    #[serde(flatten)]
    pub rating: RatingResponse,
    pub game_title: Option<String>,
    pub author: Option<AuthorResponse>,
}

// ============================================================================
// User Responses
// ============================================================================

/// Current user response
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: UserId,
    pub username: Option<String>,
    pub email: String,
    pub display_name: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// Dashboard statistics of the current user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStatsResponse {
    pub total_comments: u64,
    pub total_ratings: u64,
    /// Mean of the ratings the user gave, one decimal
    pub average_rating: f64,
    pub favorite_category: Option<String>,
}

// ============================================================================
// Admin Responses
// ============================================================================

/// Totals shown on the admin dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminOverviewResponse {
    pub total_games: i64,
    pub total_users: i64,
    pub total_comments: i64,
    pub total_ratings: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize)]
pub struct ReadinessChecks {
    pub database: String,
    /// `None` when the cache lives in process memory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redis: Option<String>,
}

impl ReadinessResponse {
    pub fn new(database_healthy: bool, redis_healthy: Option<bool>) -> Self {
        let label = |ok: bool| if ok { "healthy" } else { "unhealthy" }.to_string();
        let all_healthy = database_healthy && redis_healthy.unwrap_or(true);
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            checks: ReadinessChecks {
                database: label(database_healthy),
                redis: redis_healthy.map(label),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
