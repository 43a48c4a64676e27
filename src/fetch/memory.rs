//! In-memory page fetcher.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{check_page, PageFetcher};
use crate::artwork::{ApiResponse, Artwork, ArtworkPage};
use crate::error::{Error, Result};

/// A fetcher that pages over a fixed list of records.
///
/// Useful for tests and offline runs. Pages are sliced from the list in
/// order, so global positions match list indices plus one.
///
/// # Example
///
/// ```
/// use galleria::fetch::{MemoryFetcher, PageFetcher};
/// use galleria::Artwork;
///
/// let records = (1..=30).map(|i| Artwork::titled(i, format!("Work {i}"))).collect();
/// let fetcher = MemoryFetcher::new(records);
/// let page = fetcher.fetch_page(3, 12).unwrap();
/// assert_eq!(page.records.len(), 6);
/// assert_eq!(page.total, 30);
/// ```
#[derive(Debug, Default)]
pub struct MemoryFetcher {
    records: Vec<Artwork>,
    requests: AtomicUsize,
}

impl MemoryFetcher {
    /// Creates a fetcher over `records`.
    pub fn new(records: Vec<Artwork>) -> Self {
        Self {
            records,
            requests: AtomicUsize::new(0),
        }
    }

    /// Loads records from a JSON fixture.
    ///
    /// Accepts either a bare array of artworks or a full API response.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(e, path))?;
        Self::from_json_str(&text)
    }

    /// Decodes records from JSON text, array or API envelope.
    ///
    /// # Errors
    ///
    /// Returns a decode error if the text is neither shape.
    pub fn from_json_str(text: &str) -> Result<Self> {
        if text.trim_start().starts_with('[') {
            let records: Vec<Artwork> = serde_json::from_str(text)?;
            return Ok(Self::new(records));
        }
        let response: ApiResponse = serde_json::from_str(text)?;
        Ok(Self::new(response.data))
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of `fetch_page` calls served so far.
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::Relaxed)
    }
}

impl PageFetcher for MemoryFetcher {
    fn fetch_page(&self, page: usize, page_size: usize) -> Result<ArtworkPage> {
        check_page(page)?;
        self.requests.fetch_add(1, Ordering::Relaxed);

        let start = (page - 1).saturating_mul(page_size).min(self.records.len());
        let end = start.saturating_add(page_size).min(self.records.len());

        Ok(ArtworkPage {
            records: self.records[start..end].to_vec(),
            total: self.records.len(),
        })
    }
}

impl Clone for MemoryFetcher {
    fn clone(&self) -> Self {
        Self::new(self.records.clone())
    }
}
