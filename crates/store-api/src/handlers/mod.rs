//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod admin;
pub mod comments;
pub mod games;
pub mod health;
pub mod ratings;
pub mod users;
