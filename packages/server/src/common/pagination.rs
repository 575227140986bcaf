//! Offset/limit pagination for list endpoints.
//!
//! # Usage
//!
//! ```rust,ignore
//! // In a route handler
//! let AppQuery(args) = query;
//! let page = args.validate()?;
//!
//! // In model
//! let items = Model::find_page(&page, conn).await?;
//! ```

use serde::Deserialize;

use super::error::ApiError;

/// Default number of rows returned when `limit` is not supplied.
pub const DEFAULT_LIMIT: i64 = 10;

/// Raw `?skip=&limit=` query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationArgs {
    /// Number of rows to skip from the start of the ordered list.
    pub skip: Option<i64>,
    /// Maximum number of rows to return.
    pub limit: Option<i64>,
}

impl PaginationArgs {
    pub fn new(skip: i64, limit: i64) -> Self {
        Self {
            skip: Some(skip),
            limit: Some(limit),
        }
    }

    /// Apply defaults (skip 0, limit 10) and reject negative values.
    pub fn validate(&self) -> Result<Page, ApiError> {
        let offset = self.skip.unwrap_or(0);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);

        if offset < 0 {
            return Err(ApiError::validation("skip must not be negative"));
        }
        if limit < 0 {
            return Err(ApiError::validation("limit must not be negative"));
        }

        Ok(Page { offset, limit })
    }
}

/// Validated pagination window, ready to bind as SQL `OFFSET` / `LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: i64,
    pub limit: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}
