//! Pagination utilities for list endpoints.
//!
//! List endpoints take `page` and `per_page` query parameters and answer with
//! a [`Pages`] envelope that carries the total count next to the items.
//!
//! # Rules
//!
//! - `per_page` defaults to [`DEFAULT_PAGE_SIZE`] when absent, empty or not
//!   positive, and is capped at [`MAX_PAGE_SIZE`]
//! - `page` is 1-indexed, defaults to 1 and is clamped to `[1, page_count]`
//! - `offset = (page - 1) * per_page` and `limit = per_page`
//!
//! # Example
//!
//! ```ignore
//! async fn list(
//!     Query(params): Query<PaginationParams>,
//! ) -> Result<Json<Pages<Item>>, AppError> {
//!     let total = count_items().await?;
//!     let mut pages = params.resolve(total);
//!     pages.items = fetch_items(pages.offset(), pages.limit()).await?;
//!     Ok(Json(pages))
//! }
//! ```
//!
//! # Example JSON Response
//!
//! ```json
//! {
//!   "page": 2,
//!   "per_page": 20,
//!   "page_count": 5,
//!   "total_count": 93,
//!   "items": [...]
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Page size used when the request does not specify one.
pub const DEFAULT_PAGE_SIZE: i64 = 100;

/// Largest page size a client may ask for.
pub const MAX_PAGE_SIZE: i64 = 1000;

/// Deserializes an optional string into an optional i64.
///
/// Query parameters may be empty strings, which are treated as `None`.
fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse::<i64>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Query parameters for pagination.
#[derive(Debug, Clone, Default, Hash, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number (1-indexed, default: 1)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
    /// Items per page (default: 100, max: 1000)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub per_page: Option<i64>,
}

impl PaginationParams {
    /// Resolves the requested page against the total number of items.
    #[must_use]
    pub fn resolve<T>(&self, total_count: i64) -> Pages<T> {
        Pages::new(
            self.page.unwrap_or(1),
            self.per_page.unwrap_or(DEFAULT_PAGE_SIZE),
            total_count,
        )
    }
}

/// A page of items together with the counts needed to navigate the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Pages<T> {
    /// Current page number (1-indexed)
    pub page: i64,
    /// Maximum items per page
    pub per_page: i64,
    /// Number of pages for the current total
    pub page_count: i64,
    /// Total number of items across all pages
    pub total_count: i64,
    pub items: Vec<T>,
}

impl<T> Pages<T> {
    /// Creates an empty page, normalizing `page` and `per_page`.
    pub fn new(page: i64, per_page: i64, total_count: i64) -> Self {
        let per_page = if per_page <= 0 {
            DEFAULT_PAGE_SIZE
        } else {
            per_page.min(MAX_PAGE_SIZE)
        };
        let total_count = total_count.max(0);
        let page_count = (total_count + per_page - 1) / per_page;
        let page = page.min(page_count).max(1);

        Self {
            page,
            per_page,
            page_count,
            total_count,
            items: Vec::new(),
        }
    }

    /// Number of items to skip before this page.
    #[must_use]
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }

    /// Maximum number of items on this page.
    #[must_use]
    pub fn limit(&self) -> i64 {
        self.per_page
    }
}
