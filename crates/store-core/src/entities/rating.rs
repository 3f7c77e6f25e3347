//! Rating entity - a user's star rating of a game

use chrono::{DateTime, Utc};

use crate::value_objects::{GameId, RatingId, RatingValue, UserId};

/// Rating entity. At most one exists per (user, game).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    pub id: RatingId,
    pub game_id: GameId,
    pub user_id: UserId,
    pub rating: RatingValue,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Rating {
    /// Create a new Rating
    pub fn new(id: RatingId, game_id: GameId, user_id: UserId, rating: RatingValue) -> Self {
        Self {
            id,
            game_id,
            user_id,
            rating,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Star value as a plain integer
    #[inline]
    pub fn stars(&self) -> u8 {
        self.rating.get()
    }
}
