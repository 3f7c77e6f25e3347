//! Integration test utilities for the game store API
//!
//! Spawns the real router on a local port against the database named by
//! `DATABASE_URL`, and signs access tokens the way the auth service does.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
