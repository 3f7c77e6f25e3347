//! Game entity - a catalog entry in the store

use chrono::{DateTime, Utc};

use crate::value_objects::{Category, GameId, Price};

/// Game entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: GameId,
    pub title: String,
    pub price: Price,
    pub category: Category,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Game {
    /// Create a new Game with required fields
    pub fn new(id: GameId, title: String, price: Price, category: Category) -> Self {
        Self {
            id,
            title,
            price,
            category,
            description: None,
            image_url: None,
            created_at: Utc::now(),
        }
    }

    /// Check if the game costs nothing
    #[inline]
    pub fn is_free(&self) -> bool {
        self.price.is_free()
    }

    /// Case-insensitive substring match on the title
    pub fn title_matches(&self, search: &str) -> bool {
        self.title.to_lowercase().contains(&search.to_lowercase())
    }
}
