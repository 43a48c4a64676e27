//! HTTP/HTTPS page fetcher for the public catalog API (read-only).

use std::time::Duration;

use reqwest::blocking::Client;

use super::{check_page, PageFetcher};
use crate::artwork::{ApiResponse, ArtworkPage, ARTWORK_FIELDS};
use crate::config::TableConfig;
use crate::error::{Error, Result};

/// A fetcher that reads artwork pages from the catalog API.
///
/// Each page is one `GET {api_url}/artworks` request with `page`, `limit`
/// and `fields` query parameters. There is no retry.
///
/// # Example
///
/// ```no_run
/// use galleria::fetch::{HttpFetcher, PageFetcher};
/// use galleria::TableConfig;
///
/// let fetcher = HttpFetcher::new(&TableConfig::default()).unwrap();
/// let page = fetcher.fetch_page(1, 12).unwrap();
/// println!("{} artworks in the catalog", page.total);
/// ```
#[derive(Debug)]
pub struct HttpFetcher {
    client: Client,
    api_url: String,
}

impl HttpFetcher {
    /// Creates a fetcher using the URL, timeout and user agent in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &TableConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::http(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
        })
    }

    /// Returns the API root.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Constructs the listing URL for a page.
    fn url_for(&self, page: usize, page_size: usize) -> String {
        format!(
            "{}/artworks?page={}&limit={}&fields={}",
            self.api_url.trim_end_matches('/'),
            page,
            page_size,
            ARTWORK_FIELDS
        )
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch_page(&self, page: usize, page_size: usize) -> Result<ArtworkPage> {
        check_page(page)?;
        let url = self.url_for(page, page_size);
        tracing::debug!(%url, "fetching page");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| Error::http(format!("GET error for '{}': {}", url, e)))?;

        if !response.status().is_success() {
            return Err(Error::http(format!(
                "GET failed for '{}': status {}",
                url,
                response.status()
            )));
        }

        let body = response
            .bytes()
            .map_err(|e| Error::http(format!("Failed to read response body: {e}")))?;

        let decoded: ApiResponse = serde_json::from_slice(&body)?;
        Ok(decoded.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher(url: &str) -> HttpFetcher {
        HttpFetcher::new(&TableConfig::default().with_api_url(url))
            .ok()
            .unwrap_or_else(|| panic!("Should create fetcher"))
    }

    #[test]
    fn test_url_construction() {
        let f = fetcher("https://api.artic.edu/api/v1");
        assert_eq!(
            f.url_for(2, 12),
            "https://api.artic.edu/api/v1/artworks?page=2&limit=12\
             &fields=id,title,place_of_origin,artist_display,date_start,date_end"
        );
    }

    #[test]
    fn test_url_construction_trailing_slash() {
        let f = fetcher("https://api.artic.edu/api/v1/");
        assert!(f
            .url_for(1, 12)
            .starts_with("https://api.artic.edu/api/v1/artworks?page=1&limit=12"));
    }

    #[test]
    fn test_api_url() {
        let f = fetcher("https://example.com/api");
        assert_eq!(f.api_url(), "https://example.com/api");
    }

    #[test]
    fn test_page_zero_rejected_without_request() {
        // Unroutable host: reaching the network would fail differently
        let f = fetcher("http://127.0.0.1:9");
        assert!(matches!(
            f.fetch_page(0, 12),
            Err(Error::InvalidPage { page: 0 })
        ));
    }

    #[test]
    fn test_connection_refused_is_http_error() {
        let f = HttpFetcher::new(
            &TableConfig::default()
                .with_api_url("http://127.0.0.1:9")
                .with_timeout_secs(2),
        )
        .unwrap();
        assert!(matches!(f.fetch_page(1, 12), Err(Error::Http { .. })));
    }

    #[test]
    fn test_http_fetcher_debug() {
        let f = fetcher("https://example.com");
        let debug_str = format!("{:?}", f);
        assert!(debug_str.contains("HttpFetcher"));
        assert!(debug_str.contains("example.com"));
    }
}
