//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use store_core::{Comment, Game, Profile, ProfileStats, Rating, RatingSummary};

use super::responses::{
    AuthorResponse, CommentResponse, CurrentUserResponse, GameResponse, RatingResponse,
    RatingSummaryResponse, UserStatsResponse,
};

// ============================================================================
// Game Mappers
// ============================================================================

impl From<&Game> for GameResponse {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id,
            title: game.title.clone(),
            price: game.price.amount(),
            is_free: game.is_free(),
            category: game.category.to_string(),
            description: game.description.clone(),
            image_url: game.image_url.clone(),
            created_at: game.created_at,
        }
    }
}

impl From<RatingSummary> for RatingSummaryResponse {
    fn from(summary: RatingSummary) -> Self {
        Self {
            average: summary.display_average(),
            count: summary.count,
        }
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<&Profile> for AuthorResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id,
            display_name: profile.display_name().to_string(),
        }
    }
}

impl CommentResponse {
    /// Build from a comment and its author's profile, if known
    pub fn new(comment: &Comment, author: Option<&Profile>) -> Self {
        Self {
            id: comment.id,
            game_id: comment.game_id,
            user_id: comment.user_id,
            content: comment.content.clone(),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            edited: comment.is_edited(),
            author: author.map(AuthorResponse::from),
        }
    }
}

// ============================================================================
// Rating Mappers
// ============================================================================

impl From<&Rating> for RatingResponse {
    fn from(rating: &Rating) -> Self {
        Self {
            id: rating.id,
            game_id: rating.game_id,
            user_id: rating.user_id,
            rating: rating.stars(),
            created_at: rating.created_at,
            updated_at: rating.updated_at,
        }
    }
}

impl From<Rating> for RatingResponse {
    fn from(rating: Rating) -> Self {
        Self::from(&rating)
    }
}

// ============================================================================
// User Mappers
// ============================================================================

impl CurrentUserResponse {
    pub fn new(profile: &Profile, is_admin: bool) -> Self {
        Self {
            id: profile.id,
            username: profile.username.clone(),
            email: profile.email.clone(),
            display_name: profile.display_name().to_string(),
            is_admin,
            created_at: profile.created_at,
        }
    }
}

impl From<ProfileStats> for UserStatsResponse {
    fn from(stats: ProfileStats) -> Self {
        Self {
            total_comments: stats.total_comments,
            total_ratings: stats.total_ratings,
            average_rating: stats.average_given.display_average(),
            favorite_category: stats.favorite_category,
        }
    }
}
