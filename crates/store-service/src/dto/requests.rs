//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Domain rules (trimming, non-negative prices, the 1-5 rating range) are
//! enforced again when the entity is built.

use rust_decimal::Decimal;
use serde::Deserialize;
use store_core::{DomainError, GameFilter};
use validator::Validate;

// ============================================================================
// Game Requests
// ============================================================================

/// Catalog listing query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GamesQuery {
    pub search: Option<String>,
    /// Category name, or `all`
    pub category: Option<String>,
}

impl GamesQuery {
    pub fn filter(&self) -> Result<GameFilter, DomainError> {
        GameFilter::from_query(self.search.as_deref(), self.category.as_deref())
    }
}

/// Create game request (admin)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGameRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[serde(default)]
    pub price: Decimal,

    #[validate(length(min = 1, max = 50, message = "Category must be 1-50 characters"))]
    pub category: String,

    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 2048, message = "Image URL must be at most 2048 characters"))]
    pub image_url: Option<String>,
}

/// Update game request (admin); absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateGameRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    pub price: Option<Decimal>,

    #[validate(length(min = 1, max = 50, message = "Category must be 1-50 characters"))]
    pub category: Option<String>,

    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 2048, message = "Image URL must be at most 2048 characters"))]
    pub image_url: Option<String>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Comment must be 1-2000 characters"))]
    pub content: String,
}

/// Edit comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Comment must be 1-2000 characters"))]
    pub content: String,
}

// ============================================================================
// Rating Requests
// ============================================================================

/// Set the caller's rating of a game
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertRatingRequest {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
}
