//! Access control - role gate and ownership filter

mod ownership;
mod role_gate;

pub use ownership::{can_edit, can_modify, Actor};
pub use role_gate::{check_admin, is_admin_row};
