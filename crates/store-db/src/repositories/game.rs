//! PostgreSQL implementation of GameRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use store_core::entities::Game;
use store_core::error::DomainError;
use store_core::traits::{GameFilter, GameRepository, RepoResult};
use store_core::value_objects::{Category, GameId};

use crate::mappers::GameInsert;
use crate::models::{CategoryModel, GameModel};

use super::error::{map_db_error, try_collect};

/// PostgreSQL implementation of GameRepository
#[derive(Clone)]
pub struct PgGameRepository {
    pool: PgPool,
}

impl PgGameRepository {
    /// Create a new PgGameRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GameRepository for PgGameRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: GameId) -> RepoResult<Option<Game>> {
        let result = sqlx::query_as::<_, GameModel>(
            r"
            SELECT id, title, price, category, description, image_url, created_at
            FROM games
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Game::try_from).transpose()
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[GameId]) -> RepoResult<Vec<Game>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = ids.iter().map(|id| id.into_inner()).collect();
        let rows = sqlx::query_as::<_, GameModel>(
            r"
            SELECT id, title, price, category, description, image_url, created_at
            FROM games
            WHERE id = ANY($1)
            ",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        try_collect(rows)
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &GameFilter) -> RepoResult<Vec<Game>> {
        let rows = sqlx::query_as::<_, GameModel>(
            r"
            SELECT id, title, price, category, description, image_url, created_at
            FROM games
            WHERE ($1::TEXT IS NULL OR strpos(lower(title), lower($1)) > 0)
              AND ($2::TEXT IS NULL OR category = $2)
            ORDER BY created_at DESC
            ",
        )
        .bind(filter.search.as_deref())
        .bind(filter.category.as_ref().map(Category::as_str))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        try_collect(rows)
    }

    #[instrument(skip(self))]
    async fn categories(&self) -> RepoResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryModel>(
            "SELECT DISTINCT category FROM games ORDER BY category",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(|r| Category::new(r.category)).collect()
    }

    #[instrument(skip(self, game), fields(game_id = %game.id))]
    async fn create(&self, game: &Game) -> RepoResult<()> {
        let insert = GameInsert::new(game);

        sqlx::query(
            r#"
            INSERT INTO games (id, title, price, category, description, image_url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(insert.id)
        .bind(insert.title)
        .bind(insert.price)
        .bind(insert.category)
        .bind(insert.description)
        .bind(insert.image_url)
        .bind(game.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, game), fields(game_id = %game.id))]
    async fn update(&self, game: &Game) -> RepoResult<()> {
        let update = GameInsert::new(game);

        let result = sqlx::query(
            r#"
            UPDATE games
            SET title = $2, price = $3, category = $4, description = $5, image_url = $6
            WHERE id = $1
            "#,
        )
        .bind(update.id)
        .bind(update.title)
        .bind(update.price)
        .bind(update.category)
        .bind(update.description)
        .bind(update.image_url)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::GameNotFound(game.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: GameId) -> RepoResult<()> {
        // comments and ratings go with it via ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM games WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::GameNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM games")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
