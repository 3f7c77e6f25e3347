//! Game database model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for games table
#[derive(Debug, Clone, FromRow)]
pub struct GameModel {
    pub id: Uuid,
    pub title: String,
    pub price: Decimal,
    pub category: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Row of `SELECT DISTINCT category`
#[derive(Debug, Clone, FromRow)]
pub struct CategoryModel {
    pub category: String,
}
