//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in store-core.
//! Each repository handles database operations for a specific domain entity.

mod comment;
mod error;
mod game;
mod profile;
mod rating;
mod role;

pub use comment::PgCommentRepository;
pub use game::PgGameRepository;
pub use profile::PgProfileRepository;
pub use rating::PgRatingRepository;
pub use role::PgRoleRepository;
