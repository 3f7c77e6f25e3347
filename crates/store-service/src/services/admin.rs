//! Admin service
//!
//! Moderation lists and catalog statistics. Every call re-checks the admin role
//! before touching the cache.

use chrono::Local;
use store_cache::QueryKey;
use store_core::traits::GameFilter;
use store_core::{category_breakdown, monthly_activity, CategoryCount, MonthBucket, UserId};
use tracing::instrument;

use crate::dto::{AdminOverviewResponse, CommentWithGameResponse, RatingWithGameResponse};

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::lookup::Lookup;

/// Admin service
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    /// Create a new AdminService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn require_admin(&self, user_id: UserId) -> ServiceResult<()> {
        AccessService::new(self.ctx).require_admin(user_id).await?;
        Ok(())
    }

    /// Totals of games, users, comments and ratings
    #[instrument(skip(self))]
    pub async fn overview(&self, user_id: UserId) -> ServiceResult<AdminOverviewResponse> {
        self.require_admin(user_id).await?;
        self.ctx
            .read_through(QueryKey::AdminOverview, || self.load_overview())
            .await
    }

    async fn load_overview(&self) -> ServiceResult<AdminOverviewResponse> {
        let (total_games, total_users, total_comments, total_ratings) = tokio::try_join!(
            self.ctx.game_repo().count(),
            self.ctx.profile_repo().count(),
            self.ctx.comment_repo().count(),
            self.ctx.rating_repo().count(),
        )?;

        Ok(AdminOverviewResponse {
            total_games,
            total_users,
            total_comments,
            total_ratings,
        })
    }

    /// Games, comments and ratings created in each of the last twelve months
    #[instrument(skip(self))]
    pub async fn activity(&self, user_id: UserId) -> ServiceResult<Vec<MonthBucket>> {
        self.require_admin(user_id).await?;
        self.ctx
            .read_through(QueryKey::AdminActivity, || self.load_activity())
            .await
    }

    async fn load_activity(&self) -> ServiceResult<Vec<MonthBucket>> {
        let filter = GameFilter::default();
        let (games, comments, ratings) = tokio::try_join!(
            self.ctx.game_repo().list(&filter),
            self.ctx.comment_repo().list_all(),
            self.ctx.rating_repo().list_all(),
        )?;

        let today = Local::now().date_naive();
        Ok(monthly_activity(
            today,
            &Local,
            &games,
            &comments,
            &ratings,
            self.ctx.month_locale(),
        ))
    }

    /// Number of games per category, largest first
    #[instrument(skip(self))]
    pub async fn categories(&self, user_id: UserId) -> ServiceResult<Vec<CategoryCount>> {
        self.require_admin(user_id).await?;
        self.ctx
            .read_through(QueryKey::AdminCategories, || self.load_categories())
            .await
    }

    async fn load_categories(&self) -> ServiceResult<Vec<CategoryCount>> {
        let games = self.ctx.game_repo().list(&GameFilter::default()).await?;
        Ok(category_breakdown(&games))
    }

    /// Every comment, newest first, with game title and author
    #[instrument(skip(self))]
    pub async fn comments(&self, user_id: UserId) -> ServiceResult<Vec<CommentWithGameResponse>> {
        self.require_admin(user_id).await?;
        self.ctx
            .read_through(QueryKey::AdminComments, || self.load_comments())
            .await
    }

    async fn load_comments(&self) -> ServiceResult<Vec<CommentWithGameResponse>> {
        let comments = self.ctx.comment_repo().list_all().await?;
        let lookup = Lookup::for_comments(self.ctx, &comments).await?;
        Ok(comments.iter().map(|c| lookup.comment(c)).collect())
    }

    /// Every rating, newest first, with game title and author
    #[instrument(skip(self))]
    pub async fn ratings(&self, user_id: UserId) -> ServiceResult<Vec<RatingWithGameResponse>> {
        self.require_admin(user_id).await?;
        self.ctx
            .read_through(QueryKey::AdminRatings, || self.load_ratings())
            .await
    }

    async fn load_ratings(&self) -> ServiceResult<Vec<RatingWithGameResponse>> {
        let ratings = self.ctx.rating_repo().list_all().await?;
        let lookup = Lookup::for_ratings(self.ctx, &ratings).await?;
        Ok(ratings.iter().map(|r| lookup.rating(r)).collect())
    }
}
