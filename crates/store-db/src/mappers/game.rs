//! Game entity <-> model mapper

use rust_decimal::Decimal;
use uuid::Uuid;

use store_core::entities::Game;
use store_core::error::DomainError;
use store_core::value_objects::{Category, GameId, Price};

use crate::models::GameModel;

/// Convert GameModel to Game entity, rejecting rows with an invalid price or category
impl TryFrom<GameModel> for Game {
    type Error = DomainError;

    fn try_from(model: GameModel) -> Result<Self, Self::Error> {
        Ok(Game {
            id: GameId::new(model.id),
            title: model.title,
            price: Price::new(model.price)?,
            category: Category::new(model.category)?,
            description: model.description,
            image_url: model.image_url,
            created_at: model.created_at,
        })
    }
}

/// Game entity values for insertion and update
pub struct GameInsert<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub price: Decimal,
    pub category: &'a str,
    pub description: Option<&'a str>,
    pub image_url: Option<&'a str>,
}

impl<'a> GameInsert<'a> {
    pub fn new(game: &'a Game) -> Self {
        Self {
            id: game.id.into_inner(),
            title: &game.title,
            price: game.price.amount(),
            category: game.category.as_str(),
            description: game.description.as_deref(),
            image_url: game.image_url.as_deref(),
        }
    }
}
