//! Path parameter extractors
//!
//! Type-safe parsing of UUID identifiers from path parameters.

use serde::Deserialize;
use store_core::{CommentId, GameId, RatingId};

use crate::response::ApiError;

/// Path parameters with game_id
#[derive(Debug, Deserialize)]
pub struct GameIdPath {
    pub game_id: String,
}

impl GameIdPath {
    /// Parse game_id as a UUID
    pub fn game_id(&self) -> Result<GameId, ApiError> {
        GameId::parse(&self.game_id).map_err(|_| ApiError::invalid_path("Invalid game_id format"))
    }
}

/// Path parameters with comment_id
#[derive(Debug, Deserialize)]
pub struct CommentIdPath {
    pub comment_id: String,
}

impl CommentIdPath {
    /// Parse comment_id as a UUID
    pub fn comment_id(&self) -> Result<CommentId, ApiError> {
        CommentId::parse(&self.comment_id)
            .map_err(|_| ApiError::invalid_path("Invalid comment_id format"))
    }
}

/// Path parameters with rating_id
#[derive(Debug, Deserialize)]
pub struct RatingIdPath {
    pub rating_id: String,
}

impl RatingIdPath {
    /// Parse rating_id as a UUID
    pub fn rating_id(&self) -> Result<RatingId, ApiError> {
        RatingId::parse(&self.rating_id)
            .map_err(|_| ApiError::invalid_path("Invalid rating_id format"))
    }
}
