//! Page fetchers for galleria.
//!
//! A fetcher retrieves one page of artwork records by 1-based page number.
//! The [`PageFetcher`] trait defines the interface, implemented over the
//! public catalog API and over an in-memory record list.

#[cfg(feature = "http")]
pub mod http;
pub mod memory;

use std::path::Path;

#[cfg(feature = "http")]
pub use http::HttpFetcher;
pub use memory::MemoryFetcher;

use crate::artwork::ArtworkPage;
use crate::config::TableConfig;
use crate::error::{Error, Result};

/// A source of artwork pages.
///
/// All operations are synchronous. The session issues one request per
/// page navigation and never shares a fetcher across threads, but
/// implementations are `Send + Sync` so a host may move them freely.
pub trait PageFetcher: Send + Sync {
    /// Fetches page `page` (1-based) holding up to `page_size` records.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPage` for page 0, and transport or decode errors
    /// from the underlying source.
    fn fetch_page(&self, page: usize, page_size: usize) -> Result<ArtworkPage>;
}

impl<F: PageFetcher + ?Sized> PageFetcher for Box<F> {
    fn fetch_page(&self, page: usize, page_size: usize) -> Result<ArtworkPage> {
        (**self).fetch_page(page, page_size)
    }
}

/// Reject page 0 before touching the source
pub(crate) fn check_page(page: usize) -> Result<()> {
    if page == 0 {
        return Err(Error::InvalidPage { page });
    }
    Ok(())
}

/// Creates a fetcher from configuration.
///
/// A fixture path selects the offline in-memory fetcher, otherwise the
/// HTTP fetcher talks to `config.api_url`.
///
/// # Errors
///
/// Returns an error if the fixture cannot be read or the HTTP client
/// cannot be built.
pub fn create_fetcher(config: &TableConfig, fixture: Option<&Path>) -> Result<Box<dyn PageFetcher>> {
    if let Some(path) = fixture {
        tracing::debug!(path = %path.display(), "using fixture fetcher");
        return Ok(Box::new(MemoryFetcher::from_json_file(path)?));
    }
    #[cfg(feature = "http")]
    {
        Ok(Box::new(HttpFetcher::new(config)?))
    }
    #[cfg(not(feature = "http"))]
    {
        let _ = config;
        Err(Error::invalid_config(
            "HTTP fetching requires the 'http' feature; pass a fixture instead",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artwork::Artwork;

    #[test]
    fn test_check_page_rejects_zero() {
        assert!(matches!(check_page(0), Err(Error::InvalidPage { page: 0 })));
        assert!(check_page(1).is_ok());
    }

    #[test]
    fn test_boxed_fetcher_delegates() {
        let fetcher: Box<dyn PageFetcher> =
            Box::new(MemoryFetcher::new(vec![Artwork::titled(1, "One")]));
        let page = fetcher.fetch_page(1, 12).unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.records[0].id, 1);
    }

    #[test]
    fn test_create_fetcher_missing_fixture() {
        let result = create_fetcher(
            &TableConfig::default(),
            Some(Path::new("/nonexistent/galleria/fixture.json")),
        );
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_create_fetcher_http() {
        assert!(create_fetcher(&TableConfig::default(), None).is_ok());
    }
}
