//! Service context - dependency container for services
//!
//! Holds all repositories, the query cache, and other dependencies needed by services.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use store_cache::{Invalidation, QueryCacheExt, QueryKey, SharedQueryCache};
use store_common::JwtService;
use store_core::traits::{
    CommentRepository, GameRepository, ProfileRepository, RatingRepository, RoleRepository,
};
use store_core::MonthLocale;
use tracing::{debug, warn};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - The query result cache
/// - JWT service for verifying access tokens
/// - Display settings for statistics
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    game_repo: Arc<dyn GameRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    rating_repo: Arc<dyn RatingRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
    role_repo: Arc<dyn RoleRepository>,

    // Query cache
    cache: SharedQueryCache,
    /// Bumped before every invalidation; a load that spans a bump is not cached
    generation: Arc<AtomicU64>,

    // Services
    jwt_service: Arc<JwtService>,

    // Settings
    month_locale: MonthLocale,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        game_repo: Arc<dyn GameRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        rating_repo: Arc<dyn RatingRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
        role_repo: Arc<dyn RoleRepository>,
        cache: SharedQueryCache,
        jwt_service: Arc<JwtService>,
        month_locale: MonthLocale,
    ) -> Self {
        Self {
            game_repo,
            comment_repo,
            rating_repo,
            profile_repo,
            role_repo,
            cache,
            generation: Arc::new(AtomicU64::new(0)),
            jwt_service,
            month_locale,
        }
    }

    // === Repositories ===

    /// Get the game repository
    pub fn game_repo(&self) -> &dyn GameRepository {
        self.game_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the rating repository
    pub fn rating_repo(&self) -> &dyn RatingRepository {
        self.rating_repo.as_ref()
    }

    /// Get the profile repository
    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    /// Get the role repository
    pub fn role_repo(&self) -> &dyn RoleRepository {
        self.role_repo.as_ref()
    }

    // === Query Cache ===

    /// Get the query cache
    pub fn cache(&self) -> &SharedQueryCache {
        &self.cache
    }

    /// Serve `key` from the cache, or run `load` and remember its result.
    ///
    /// Cache failures are logged and never fail the read. A result loaded while
    /// an invalidation ran in this process is returned but not kept. Writes made
    /// by other processes sharing the cache can still leave a stale entry until
    /// the TTL expires.
    pub async fn read_through<V, F, Fut>(&self, key: QueryKey, load: F) -> ServiceResult<V>
    where
        V: Serialize + DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = ServiceResult<V>> + Send,
    {
        match self.cache.fetch(&key).await {
            Ok(Some(hit)) => {
                debug!(key = %key.key(), "Query cache hit");
                return Ok(hit);
            }
            Ok(None) => {}
            Err(e) => warn!(key = %key.key(), error = %e, "Query cache read failed"),
        }

        let generation = self.generation.load(Ordering::SeqCst);
        let value = load().await?;

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(key = %key.key(), "Write landed during load, not caching");
            return Ok(value);
        }
        if let Err(e) = self.cache.put(&key, &value).await {
            warn!(key = %key.key(), error = %e, "Query cache write failed");
            return Ok(value);
        }
        // an invalidation between the check and the put may have missed this entry
        if self.generation.load(Ordering::SeqCst) != generation {
            if let Err(e) = self.cache.forget(&key).await {
                warn!(key = %key.key(), error = %e, "Query cache removal failed");
            }
        }

        Ok(value)
    }

    /// Drop the cached reads a successful write made stale
    pub async fn invalidate(&self, invalidation: Invalidation) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Err(e) = self.cache.invalidate(&invalidation).await {
            warn!(?invalidation, error = %e, "Query cache invalidation failed");
        }
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Month label locale for activity charts
    pub fn month_locale(&self) -> MonthLocale {
        self.month_locale
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("cache", &"SharedQueryCache")
            .field("jwt_service", &self.jwt_service)
            .field("month_locale", &self.month_locale)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    game_repo: Option<Arc<dyn GameRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    rating_repo: Option<Arc<dyn RatingRepository>>,
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    role_repo: Option<Arc<dyn RoleRepository>>,
    cache: Option<SharedQueryCache>,
    jwt_service: Option<Arc<JwtService>>,
    month_locale: MonthLocale,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn game_repo(mut self, repo: Arc<dyn GameRepository>) -> Self {
        self.game_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn rating_repo(mut self, repo: Arc<dyn RatingRepository>) -> Self {
        self.rating_repo = Some(repo);
        self
    }

    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn role_repo(mut self, repo: Arc<dyn RoleRepository>) -> Self {
        self.role_repo = Some(repo);
        self
    }

    pub fn cache(mut self, cache: SharedQueryCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn month_locale(mut self, locale: MonthLocale) -> Self {
        self.month_locale = locale;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.game_repo
                .ok_or_else(|| ServiceError::validation("game_repo is required"))?,
            self.comment_repo
                .ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            self.rating_repo
                .ok_or_else(|| ServiceError::validation("rating_repo is required"))?,
            self.profile_repo
                .ok_or_else(|| ServiceError::validation("profile_repo is required"))?,
            self.role_repo
                .ok_or_else(|| ServiceError::validation("role_repo is required"))?,
            self.cache
                .ok_or_else(|| ServiceError::validation("cache is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.month_locale,
        ))
    }
}
