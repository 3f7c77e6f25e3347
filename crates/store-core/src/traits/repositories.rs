//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every read returns a fresh snapshot; nothing
//! here is cached.

use async_trait::async_trait;

use crate::entities::{Comment, Game, Profile, Rating, RoleAssignment};
use crate::error::DomainError;
use crate::value_objects::{Category, CommentId, GameId, RatingId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Game Repository
// ============================================================================

/// Catalog filter for game listings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameFilter {
    /// Case-insensitive title substring
    pub search: Option<String>,
    pub category: Option<Category>,
}

impl GameFilter {
    /// Build a filter from raw query values. Blank search and the `all`
    /// category mean "no filter"; any other category must be a valid name.
    pub fn from_query(search: Option<&str>, category: Option<&str>) -> Result<Self, DomainError> {
        let search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"))
            .map(Category::new)
            .transpose()?;
        Ok(Self { search, category })
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.category.is_none()
    }

    /// Apply the filter to an in-memory game
    pub fn matches(&self, game: &Game) -> bool {
        let search_ok = self.search.as_deref().map_or(true, |s| game.title_matches(s));
        let category_ok = self.category.as_ref().map_or(true, |c| &game.category == c);
        search_ok && category_ok
    }
}

#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Find game by ID
    async fn find_by_id(&self, id: GameId) -> RepoResult<Option<Game>>;

    /// Find all games whose ID is in the given set
    async fn find_by_ids(&self, ids: &[GameId]) -> RepoResult<Vec<Game>>;

    /// List games matching a filter, newest first
    async fn list(&self, filter: &GameFilter) -> RepoResult<Vec<Game>>;

    /// Distinct categories, alphabetical
    async fn categories(&self) -> RepoResult<Vec<Category>>;

    /// Create a new game
    async fn create(&self, game: &Game) -> RepoResult<()>;

    /// Update an existing game
    async fn update(&self, game: &Game) -> RepoResult<()>;

    /// Delete a game together with its comments and ratings
    async fn delete(&self, id: GameId) -> RepoResult<()>;

    /// Total number of games
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<Comment>>;

    /// Comments on a game, newest first
    async fn find_by_game(&self, game_id: GameId) -> RepoResult<Vec<Comment>>;

    /// Comments written by a user, newest first
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<Comment>>;

    /// All comments, newest first
    async fn list_all(&self) -> RepoResult<Vec<Comment>>;

    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Update comment content
    async fn update(&self, comment: &Comment) -> RepoResult<()>;

    /// Permanently delete a comment
    async fn delete(&self, id: CommentId) -> RepoResult<()>;

    /// Total number of comments
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Rating Repository
// ============================================================================

#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Find rating by ID
    async fn find_by_id(&self, id: RatingId) -> RepoResult<Option<Rating>>;

    /// Ratings of a game, newest first
    async fn find_by_game(&self, game_id: GameId) -> RepoResult<Vec<Rating>>;

    /// Ratings given by a user, newest first
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<Rating>>;

    /// The single rating a user gave a game, if any
    async fn find_by_user_and_game(
        &self,
        user_id: UserId,
        game_id: GameId,
    ) -> RepoResult<Option<Rating>>;

    /// All ratings, newest first
    async fn list_all(&self) -> RepoResult<Vec<Rating>>;

    /// Insert, or replace the value of the existing (user, game) rating.
    /// Returns the stored row.
    async fn upsert(&self, rating: &Rating) -> RepoResult<Rating>;

    /// Permanently delete a rating
    async fn delete(&self, id: RatingId) -> RepoResult<()>;

    /// Total number of ratings
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find profile by user ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<Profile>>;

    /// Find all profiles whose ID is in the given set
    async fn find_by_ids(&self, ids: &[UserId]) -> RepoResult<Vec<Profile>>;

    /// Insert the profile unless one already exists for its ID.
    /// Returns whether a row was inserted.
    async fn ensure(&self, profile: &Profile) -> RepoResult<bool>;

    /// Total number of registered users
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Role Repository
// ============================================================================

#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Single-row lookup keyed on (user, role)
    async fn find_role(&self, user_id: UserId, role: &str) -> RepoResult<Option<RoleAssignment>>;
}
