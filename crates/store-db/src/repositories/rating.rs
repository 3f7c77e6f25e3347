//! PostgreSQL implementation of RatingRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use store_core::entities::Rating;
use store_core::error::DomainError;
use store_core::traits::{RatingRepository, RepoResult};
use store_core::value_objects::{GameId, RatingId, UserId};

use crate::mappers::RatingInsert;
use crate::models::RatingModel;

use super::error::{map_db_error, map_foreign_key_violation, try_collect};

/// PostgreSQL implementation of RatingRepository
#[derive(Clone)]
pub struct PgRatingRepository {
    pool: PgPool,
}

impl PgRatingRepository {
    /// Create a new PgRatingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RatingRepository for PgRatingRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RatingId) -> RepoResult<Option<Rating>> {
        let result = sqlx::query_as::<_, RatingModel>(
            r"
            SELECT id, game_id, user_id, rating, created_at, updated_at
            FROM ratings
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Rating::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_game(&self, game_id: GameId) -> RepoResult<Vec<Rating>> {
        let rows = sqlx::query_as::<_, RatingModel>(
            r"
            SELECT id, game_id, user_id, rating, created_at, updated_at
            FROM ratings
            WHERE game_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(game_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        try_collect(rows)
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<Rating>> {
        let rows = sqlx::query_as::<_, RatingModel>(
            r"
            SELECT id, game_id, user_id, rating, created_at, updated_at
            FROM ratings
            WHERE user_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        try_collect(rows)
    }

    #[instrument(skip(self))]
    async fn find_by_user_and_game(
        &self,
        user_id: UserId,
        game_id: GameId,
    ) -> RepoResult<Option<Rating>> {
        let result = sqlx::query_as::<_, RatingModel>(
            r"
            SELECT id, game_id, user_id, rating, created_at, updated_at
            FROM ratings
            WHERE user_id = $1 AND game_id = $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(game_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Rating::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Rating>> {
        let rows = sqlx::query_as::<_, RatingModel>(
            r"
            SELECT id, game_id, user_id, rating, created_at, updated_at
            FROM ratings
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        try_collect(rows)
    }

    #[instrument(skip(self, rating), fields(user_id = %rating.user_id, game_id = %rating.game_id))]
    async fn upsert(&self, rating: &Rating) -> RepoResult<Rating> {
        let insert = RatingInsert::new(rating);

        // ratings_user_game_unique keeps one row per (user, game); a repeat
        // submission overwrites the value and keeps the original id
        let row = sqlx::query_as::<_, RatingModel>(
            r"
            INSERT INTO ratings (id, game_id, user_id, rating, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id, game_id)
            DO UPDATE SET rating = EXCLUDED.rating, updated_at = NOW()
            RETURNING id, game_id, user_id, rating, created_at, updated_at
            ",
        )
        .bind(insert.id)
        .bind(insert.game_id)
        .bind(insert.user_id)
        .bind(insert.rating)
        .bind(rating.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::GameNotFound(rating.game_id)))?;

        Rating::try_from(row)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: RatingId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM ratings WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::RatingNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM ratings")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
