//! Rating database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for ratings table
#[derive(Debug, Clone, FromRow)]
pub struct RatingModel {
    pub id: Uuid,
    pub game_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
