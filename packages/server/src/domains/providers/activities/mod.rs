//! Provider operations
//!
//! Activities run inside the caller's session and return plain data. Route
//! handlers own the session and decide whether it commits.

mod mutations;
mod queries;

pub use mutations::*;
pub use queries::*;
