//! Pagination query parameters and the response meta envelope.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

/// Pagination query parameters.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<u32>,
}

impl PaginationParams {
    /// Items per page when the client sends none; matches the catalog grid.
    pub const DEFAULT_LIMIT: u32 = 6;

    /// Largest page the API will serve.
    pub const MAX_LIMIT: u32 = 50;

    /// Validates pagination parameters and converts to offset/limit.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `limit`: [`Self::DEFAULT_LIMIT`]
    ///
    /// # Validation
    ///
    /// - Page must be > 0
    /// - Limit must be between 1 and [`Self::MAX_LIMIT`]
    ///
    /// # Returns
    ///
    /// `(offset, limit)` tuple for repository queries.
    pub fn validate_and_get_offset_limit(&self) -> Result<(i64, i64), String> {
        let page = self.page.unwrap_or(1);
        let limit = self.limit.unwrap_or(Self::DEFAULT_LIMIT);

        if page == 0 {
            return Err("Page must be greater than 0".to_string());
        }

        if !(1..=Self::MAX_LIMIT).contains(&limit) {
            return Err(format!("Limit must be between 1 and {}", Self::MAX_LIMIT));
        }

        let offset = (i64::from(page) - 1) * i64::from(limit);

        Ok((offset, i64::from(limit)))
    }
}

/// Pagination metadata attached to list responses.
///
/// Shape matches the web client's `PaginationMeta`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub total: i64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl PaginationMeta {
    /// Builds the meta block for a page of `total` items.
    pub fn new(total: i64, page: u32, limit: u32) -> Self {
        let total_pages = ((total as f64) / f64::from(limit)).ceil() as u32;

        Self {
            total,
            page,
            limit,
            total_pages,
        }
    }
}
