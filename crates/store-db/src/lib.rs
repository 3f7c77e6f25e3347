//! # store-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `store-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers (rows failing domain validation are rejected)
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use store_db::{create_pool, PgGameRepository, PoolConfig};
//! use store_core::traits::{GameFilter, GameRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::from_env()).await?;
//!     let games = PgGameRepository::new(pool);
//!     let all = games.list(&GameFilter::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, MigrationError, PgPool, PoolConfig};
pub use repositories::{
    PgCommentRepository, PgGameRepository, PgProfileRepository, PgRatingRepository,
    PgRoleRepository,
};
