//! # store-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! aggregation and access-control rules of the game store.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod access;
pub mod aggregates;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use access::{can_edit, can_modify, check_admin, is_admin_row, Actor};
pub use aggregates::{
    category_breakdown, distribution, monthly_activity, profile_stats, summarize, CategoryCount,
    MonthBucket, MonthLocale, ProfileStats, RatingSummary, StarCount,
};
pub use entities::{Comment, Game, Profile, Rating, RoleAssignment, ADMIN_ROLE};
pub use error::DomainError;
pub use traits::{
    CommentRepository, GameFilter, GameRepository, ProfileRepository, RatingRepository,
    RepoResult, RoleRepository,
};
pub use value_objects::{
    Category, CommentId, GameId, IdParseError, Price, RatingId, RatingValue, UserId,
};
