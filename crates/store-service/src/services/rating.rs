//! Rating service
//!
//! One rating per user and game: submitting again replaces the value.

use store_cache::{Invalidation, QueryKey};
use store_core::{
    can_modify, distribution, summarize, DomainError, GameId, Rating, RatingId, RatingValue,
    UserId,
};
use tracing::{info, instrument, warn};

use crate::dto::{GameRatingsResponse, RatingResponse, RatingSummaryResponse, UpsertRatingRequest};

use super::access::{AccessService, Caller};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Rating service
pub struct RatingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RatingService<'a> {
    /// Create a new RatingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Rating summary and per-star distribution of a game
    #[instrument(skip(self))]
    pub async fn game_ratings(&self, game_id: GameId) -> ServiceResult<GameRatingsResponse> {
        self.ctx
            .read_through(QueryKey::Ratings(game_id), || self.load_ratings(game_id))
            .await
    }

    async fn load_ratings(&self, game_id: GameId) -> ServiceResult<GameRatingsResponse> {
        let (game, ratings) = tokio::try_join!(
            self.ctx.game_repo().find_by_id(game_id),
            self.ctx.rating_repo().find_by_game(game_id),
        )?;
        if game.is_none() {
            return Err(DomainError::GameNotFound(game_id).into());
        }

        Ok(GameRatingsResponse {
            game_id,
            rating: RatingSummaryResponse::from(summarize(&ratings)),
            distribution: distribution(&ratings).to_vec(),
        })
    }

    /// Set the caller's rating of a game, replacing any earlier one
    #[instrument(skip(self, caller), fields(user_id = %caller.user_id))]
    pub async fn upsert_rating(
        &self,
        caller: &Caller,
        game_id: GameId,
        request: UpsertRatingRequest,
    ) -> ServiceResult<RatingResponse> {
        let value = RatingValue::new(request.rating)?;

        AccessService::new(self.ctx).ensure_profile(caller).await?;
        let stored = self
            .ctx
            .rating_repo()
            .upsert(&Rating::new(RatingId::generate(), game_id, caller.user_id, value))
            .await?;
        self.ctx.invalidate(Invalidation::RatingChanged(game_id)).await;

        info!(rating_id = %stored.id, game_id = %game_id, rating = %value, "Rating saved");

        Ok(RatingResponse::from(stored))
    }

    /// The caller's own rating of a game
    #[instrument(skip(self))]
    pub async fn my_rating(&self, user_id: UserId, game_id: GameId) -> ServiceResult<RatingResponse> {
        self.ctx
            .rating_repo()
            .find_by_user_and_game(user_id, game_id)
            .await?
            .map(RatingResponse::from)
            .ok_or_else(|| ServiceError::not_found("Rating", format!("{user_id}/{game_id}")))
    }

    /// Delete a rating (author or admin)
    #[instrument(skip(self))]
    pub async fn delete_rating(&self, user_id: UserId, rating_id: RatingId) -> ServiceResult<()> {
        let access = AccessService::new(self.ctx);
        let (rating, actor) = tokio::join!(
            self.ctx.rating_repo().find_by_id(rating_id),
            access.actor(Some(user_id)),
        );
        let rating = rating?.ok_or(DomainError::RatingNotFound(rating_id))?;

        if !can_modify(&actor, rating.user_id) {
            warn!(rating_id = %rating_id, user_id = %user_id, "Rating delete denied");
            return Err(DomainError::NotAuthor("rating").into());
        }

        self.ctx.rating_repo().delete(rating_id).await?;
        self.ctx
            .invalidate(Invalidation::RatingChanged(rating.game_id))
            .await;

        info!(rating_id = %rating_id, "Rating deleted");

        Ok(())
    }
}
