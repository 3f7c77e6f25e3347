//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, path and query parsing.

mod auth;
mod path;
mod query;
mod validated;

pub use auth::{AuthUser, OptionalAuthUser};
pub use path::{CommentIdPath, GameIdPath, RatingIdPath};
pub use query::QueryParams;
pub use validated::ValidatedJson;
