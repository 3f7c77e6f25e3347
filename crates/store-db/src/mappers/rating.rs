//! Rating entity <-> model mapper

use uuid::Uuid;

use store_core::entities::Rating;
use store_core::error::DomainError;
use store_core::value_objects::{GameId, RatingId, RatingValue, UserId};

use crate::models::RatingModel;

/// Convert RatingModel to Rating entity. Out-of-range values never reach aggregation.
impl TryFrom<RatingModel> for Rating {
    type Error = DomainError;

    fn try_from(model: RatingModel) -> Result<Self, Self::Error> {
        Ok(Rating {
            id: RatingId::new(model.id),
            game_id: GameId::new(model.game_id),
            user_id: UserId::new(model.user_id),
            rating: RatingValue::new(model.rating)?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Rating entity values for insertion
pub struct RatingInsert {
    pub id: Uuid,
    pub game_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
}

impl RatingInsert {
    pub fn new(rating: &Rating) -> Self {
        Self {
            id: rating.id.into_inner(),
            game_id: rating.game_id.into_inner(),
            user_id: rating.user_id.into_inner(),
            rating: i32::from(rating.rating),
        }
    }
}
