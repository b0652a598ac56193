//! Pagination types matching the backend's page envelope.
//!
//! The backend pages Spring-style: 0-indexed page numbers and a camelCase
//! response body (`content`, `totalElements`, `totalPages`).

use serde::{Deserialize, Serialize};

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (0-indexed).
    #[serde(default)]
    pub page: u32,
    /// Number of items per page.
    #[serde(default = "default_size")]
    pub size: u32,
}

fn default_size() -> u32 {
    10
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: default_size(),
        }
    }
}

impl PageRequest {
    /// Creates a request for the given page with the default page size.
    #[must_use]
    pub fn page(page: u32) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    /// Returns the request for the next page.
    #[must_use]
    pub const fn next(self) -> Self {
        Self {
            page: self.page + 1,
            size: self.size,
        }
    }
}

/// One page of results as returned by the backend.
///
/// Metadata fields default to zero so that bare `{"content": [...]}` payloads
/// still deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The items in the current page.
    pub content: Vec<T>,
    /// Current page number (0-indexed). Some endpoints call this `number`.
    #[serde(default, alias = "number")]
    pub page: u32,
    /// Items per page.
    #[serde(default)]
    pub size: u32,
    /// Total number of items across all pages.
    #[serde(default)]
    pub total_elements: u64,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Returns true if a page after this one exists.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    /// Returns true if the page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
