// Common types and utilities shared across the application

pub mod entity_ids;
pub mod error;
pub mod id;
pub mod pagination;
pub mod session;
pub mod types;
pub mod validation;

pub use entity_ids::*;
pub use error::{ApiError, ApiResult, ErrorBody};
pub use id::Id;
pub use pagination::{Page, PaginationArgs, DEFAULT_LIMIT};
pub use session::Session;
pub use types::DeleteResponse;
