//! Test fixtures and data generators
//!
//! Provides reusable request bodies and the response shapes the tests read.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create game request
#[derive(Debug, Serialize)]
pub struct CreateGameRequest {
    pub title: String,
    pub price: f64,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateGameRequest {
    /// A game with a unique title in a unique category
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test Game {suffix}-{}", uuid::Uuid::new_v4().simple()),
            price: 59.9,
            category: format!("Category {}", uuid::Uuid::new_v4().simple()),
            description: Some("Created by the integration suite".into()),
        }
    }

    pub fn free(mut self) -> Self {
        self.price = 0.0;
        self
    }
}

/// Comment body for create and edit
#[derive(Debug, Serialize)]
pub struct CommentRequest {
    pub content: String,
}

impl CommentRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Rating body
#[derive(Debug, Serialize)]
pub struct RatingRequest {
    pub rating: i32,
}

/// Rating summary
#[derive(Debug, Deserialize)]
pub struct RatingSummary {
    pub average: f64,
    pub count: u64,
}

/// Game as returned by create and list
#[derive(Debug, Deserialize)]
pub struct GameResponse {
    pub id: String,
    pub title: String,
    pub is_free: bool,
    pub category: String,
}

/// Game list entry
#[derive(Debug, Deserialize)]
pub struct GameListItem {
    #[serde(flatten)]
    pub game: GameResponse,
    pub rating: RatingSummary,
}

/// Star bucket of a distribution
#[derive(Debug, Deserialize)]
pub struct StarCount {
    pub stars: u8,
    pub count: u64,
}

/// Game detail
#[derive(Debug, Deserialize)]
pub struct GameDetail {
    #[serde(flatten)]
    pub game: GameResponse,
    pub rating: RatingSummary,
    pub distribution: Vec<StarCount>,
    pub my_rating: Option<RatingResponse>,
}

/// Rating
#[derive(Debug, Deserialize)]
pub struct RatingResponse {
    pub id: String,
    pub game_id: String,
    pub user_id: String,
    pub rating: u8,
}

/// Comment author
#[derive(Debug, Deserialize)]
pub struct AuthorResponse {
    pub id: String,
    pub display_name: String,
}

/// Comment
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub game_id: String,
    pub content: String,
    pub edited: bool,
    pub author: Option<AuthorResponse>,
}

/// Comment joined with its game's title
#[derive(Debug, Deserialize)]
pub struct CommentWithGame {
    #[serde(flatten)]
    pub comment: CommentResponse,
    pub game_title: Option<String>,
}

/// Current user
#[derive(Debug, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
    pub is_admin: bool,
}

/// Dashboard statistics
#[derive(Debug, Deserialize)]
pub struct UserStats {
    pub total_comments: u64,
    pub total_ratings: u64,
    pub average_rating: f64,
    pub favorite_category: Option<String>,
}

/// Admin overview totals
#[derive(Debug, Deserialize)]
pub struct AdminOverview {
    pub total_games: i64,
    pub total_users: i64,
    pub total_comments: i64,
    pub total_ratings: i64,
}
