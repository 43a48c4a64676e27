//! Artwork records as served by the Art Institute of Chicago API.
//!
//! The API sends `null` for any field it has no value for, so everything
//! except the identifier is optional.

use serde::{Deserialize, Serialize};

/// Unique key naming one catalog entry, stable across pages.
pub type ArtworkId = u64;

/// Fields requested from the API, in column order.
pub const ARTWORK_FIELDS: &str = "id,title,place_of_origin,artist_display,date_start,date_end";

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    /// Catalog identifier
    pub id: ArtworkId,
    /// Title of the work
    #[serde(default)]
    pub title: Option<String>,
    /// Where the work was made
    #[serde(default)]
    pub place_of_origin: Option<String>,
    /// Artist name and biography line
    #[serde(default)]
    pub artist_display: Option<String>,
    /// Earliest year of creation
    #[serde(default)]
    pub date_start: Option<i64>,
    /// Latest year of creation
    #[serde(default)]
    pub date_end: Option<i64>,
}

impl Artwork {
    /// Create an artwork with only a title, the rest left empty
    pub fn titled(id: ArtworkId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: Some(title.into()),
            place_of_origin: None,
            artist_display: None,
            date_start: None,
            date_end: None,
        }
    }
}

/// One page of records plus the size of the whole result set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtworkPage {
    /// Records on this page, in global order
    pub records: Vec<Artwork>,
    /// Total number of records across all pages
    pub total: usize,
}

/// Pagination block of an API response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Total record count
    #[serde(default)]
    pub total: Option<usize>,
    /// Page size the server applied
    #[serde(default)]
    pub limit: Option<usize>,
    /// Offset of the first record on this page
    #[serde(default)]
    pub offset: Option<usize>,
    /// Number of pages
    #[serde(default)]
    pub total_pages: Option<usize>,
    /// 1-based page number
    #[serde(default)]
    pub current_page: Option<usize>,
}

/// Envelope returned by `GET /artworks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Records on the requested page
    #[serde(default)]
    pub data: Vec<Artwork>,
    /// Paging metadata
    #[serde(default)]
    pub pagination: Pagination,
}

impl From<ApiResponse> for ArtworkPage {
    fn from(response: ApiResponse) -> Self {
        // No total means the server told us nothing beyond this page
        let total = response
            .pagination
            .total
            .unwrap_or(response.data.len());
        Self {
            records: response.data,
            total,
        }
    }
}
