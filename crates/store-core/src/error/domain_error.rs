//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{CommentId, GameId, RatingId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Game not found: {0}")]
    GameNotFound(GameId),

    #[error("Comment not found: {0}")]
    CommentNotFound(CommentId),

    #[error("Rating not found: {0}")]
    RatingNotFound(RatingId),

    #[error("Profile not found: {0}")]
    ProfileNotFound(UserId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(i32),

    #[error("Price must not be negative, got {0}")]
    InvalidPrice(String),

    #[error("Comment content must not be empty")]
    EmptyContent,

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Admin role required")]
    AdminRequired,

    #[error("Not the author of this {0}")]
    NotAuthor(&'static str),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::GameNotFound(_) => "UNKNOWN_GAME",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::RatingNotFound(_) => "UNKNOWN_RATING",
            Self::ProfileNotFound(_) => "UNKNOWN_PROFILE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidRating(_) => "INVALID_RATING",
            Self::InvalidPrice(_) => "INVALID_PRICE",
            Self::EmptyContent => "EMPTY_CONTENT",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Authorization
            Self::AdminRequired => "ADMIN_REQUIRED",
            Self::NotAuthor(_) => "NOT_AUTHOR",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::GameNotFound(_)
                | Self::CommentNotFound(_)
                | Self::RatingNotFound(_)
                | Self::ProfileNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidRating(_)
                | Self::InvalidPrice(_)
                | Self::EmptyContent
                | Self::ContentTooLong { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::AdminRequired | Self::NotAuthor(_))
    }
}
