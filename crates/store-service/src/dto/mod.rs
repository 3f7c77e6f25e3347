//! Data Transfer Objects
//!
//! Request and response shapes of the REST API, and the mappers from domain
//! entities.

mod mappers;
pub mod requests;
pub mod responses;

pub use requests::*;
pub use responses::*;
