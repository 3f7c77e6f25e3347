//! Game service
//!
//! Handles the catalog: listings, detail pages, and admin-only game management.

use std::collections::HashMap;

use store_cache::{Invalidation, QueryKey};
use store_core::aggregates::summarize_values;
use store_core::traits::GameFilter;
use store_core::{
    distribution, summarize, Category, DomainError, Game, GameId, Price, RatingValue, UserId,
};
use tracing::{info, instrument};

use crate::dto::{
    CreateGameRequest, GameDetailResponse, GameListItemResponse, GameResponse,
    RatingResponse, RatingSummaryResponse, UpdateGameRequest,
};

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

fn required_title(title: &str) -> ServiceResult<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ServiceError::validation("Title must not be empty"));
    }
    Ok(title.to_string())
}

/// Blank optional text is stored as NULL
fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Game service
pub struct GameService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GameService<'a> {
    /// Create a new GameService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List games matching a filter, newest first, with their rating summaries
    #[instrument(skip(self))]
    pub async fn list_games(&self, filter: GameFilter) -> ServiceResult<Vec<GameListItemResponse>> {
        let key = QueryKey::GameList(filter.clone());
        self.ctx
            .read_through(key, || self.load_games(filter))
            .await
    }

    async fn load_games(&self, filter: GameFilter) -> ServiceResult<Vec<GameListItemResponse>> {
        let (games, ratings) = tokio::try_join!(
            self.ctx.game_repo().list(&filter),
            self.ctx.rating_repo().list_all(),
        )?;

        let mut by_game: HashMap<GameId, Vec<RatingValue>> = HashMap::new();
        for rating in ratings {
            by_game.entry(rating.game_id).or_default().push(rating.rating);
        }

        Ok(games
            .iter()
            .map(|game| GameListItemResponse {
                game: GameResponse::from(game),
                rating: summarize_values(by_game.remove(&game.id).unwrap_or_default()).into(),
            })
            .collect())
    }

    /// Distinct categories, alphabetical
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> ServiceResult<Vec<String>> {
        self.ctx
            .read_through(QueryKey::Categories, || self.load_categories())
            .await
    }

    async fn load_categories(&self) -> ServiceResult<Vec<String>> {
        let categories = self.ctx.game_repo().categories().await?;
        Ok(categories.into_iter().map(String::from).collect())
    }

    /// Game detail with rating summary, distribution and the viewer's own rating
    #[instrument(skip(self))]
    pub async fn get_game(
        &self,
        game_id: GameId,
        viewer: Option<UserId>,
    ) -> ServiceResult<GameDetailResponse> {
        let public = self
            .ctx
            .read_through(QueryKey::Game(game_id), || self.load_game(game_id));

        let (mut detail, my_rating) = tokio::try_join!(public, self.own_rating(viewer, game_id))?;
        detail.my_rating = my_rating;
        Ok(detail)
    }

    async fn load_game(&self, game_id: GameId) -> ServiceResult<GameDetailResponse> {
        let (game, ratings) = tokio::try_join!(
            self.ctx.game_repo().find_by_id(game_id),
            self.ctx.rating_repo().find_by_game(game_id),
        )?;
        let game = game.ok_or(DomainError::GameNotFound(game_id))?;

        Ok(GameDetailResponse {
            game: GameResponse::from(&game),
            rating: RatingSummaryResponse::from(summarize(&ratings)),
            distribution: distribution(&ratings).to_vec(),
            my_rating: None,
        })
    }

    async fn own_rating(
        &self,
        viewer: Option<UserId>,
        game_id: GameId,
    ) -> ServiceResult<Option<RatingResponse>> {
        let Some(user_id) = viewer else {
            return Ok(None);
        };
        let rating = self
            .ctx
            .rating_repo()
            .find_by_user_and_game(user_id, game_id)
            .await?;
        Ok(rating.map(RatingResponse::from))
    }

    /// Create a game (admin only)
    #[instrument(skip(self, request))]
    pub async fn create_game(
        &self,
        user_id: UserId,
        request: CreateGameRequest,
    ) -> ServiceResult<GameResponse> {
        AccessService::new(self.ctx).require_admin(user_id).await?;

        let mut game = Game::new(
            GameId::generate(),
            required_title(&request.title)?,
            Price::new(request.price)?,
            Category::new(request.category)?,
        );
        game.description = optional_text(request.description);
        game.image_url = optional_text(request.image_url);

        self.ctx.game_repo().create(&game).await?;
        self.ctx.invalidate(Invalidation::GameChanged(game.id)).await;

        info!(game_id = %game.id, title = %game.title, "Game created");

        Ok(GameResponse::from(&game))
    }

    /// Update a game (admin only); absent fields are kept
    #[instrument(skip(self, request))]
    pub async fn update_game(
        &self,
        user_id: UserId,
        game_id: GameId,
        request: UpdateGameRequest,
    ) -> ServiceResult<GameResponse> {
        AccessService::new(self.ctx).require_admin(user_id).await?;

        let mut game = self
            .ctx
            .game_repo()
            .find_by_id(game_id)
            .await?
            .ok_or(DomainError::GameNotFound(game_id))?;

        if let Some(title) = request.title {
            game.title = required_title(&title)?;
        }
        if let Some(price) = request.price {
            game.price = Price::new(price)?;
        }
        if let Some(category) = request.category {
            game.category = Category::new(category)?;
        }
        if request.description.is_some() {
            game.description = optional_text(request.description);
        }
        if request.image_url.is_some() {
            game.image_url = optional_text(request.image_url);
        }

        self.ctx.game_repo().update(&game).await?;
        self.ctx.invalidate(Invalidation::GameChanged(game_id)).await;

        info!(game_id = %game_id, "Game updated");

        Ok(GameResponse::from(&game))
    }

    /// Delete a game with its comments and ratings (admin only)
    #[instrument(skip(self))]
    pub async fn delete_game(&self, user_id: UserId, game_id: GameId) -> ServiceResult<()> {
        AccessService::new(self.ctx).require_admin(user_id).await?;

        self.ctx.game_repo().delete(game_id).await?;
        self.ctx.invalidate(Invalidation::GameChanged(game_id)).await;

        info!(game_id = %game_id, "Game deleted");

        Ok(())
    }
}
