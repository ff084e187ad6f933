//! CLI command implementations
//!
//! - `solve`: solve and gray commands
//! - `schema`: JSON schema output
//! - `util`: shared argument helpers

pub mod schema;
pub mod solve;
pub mod util;

pub use schema::cmd_schema;
pub use solve::{cmd_gray, cmd_solve};
