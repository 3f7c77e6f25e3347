//! Entity to model mappers
//!
//! This module provides conversions between domain entities (store-core) and database models.
//! - `From<Model> for Entity` where every row is valid, `TryFrom` where a row may
//!   violate a domain invariant
//! - `*Insert` structs: Prepare entity data for database operations

mod comment;
mod game;
mod profile;
mod rating;
mod role;

pub use comment::CommentInsert;
pub use game::GameInsert;
pub use profile::ProfileInsert;
pub use rating::RatingInsert;
