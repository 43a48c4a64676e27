//! Session configuration

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default catalog API root
pub const DEFAULT_API_URL: &str = "https://api.artic.edu/api/v1";

/// Rows per page shown by the grid
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Largest `limit` the catalog API accepts
pub const MAX_PAGE_SIZE: usize = 100;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings shared by the fetcher and the table session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// API root, without the `/artworks` suffix
    pub api_url: String,
    /// Rows per page
    pub page_size: usize,
    /// HTTP request timeout
    pub timeout_secs: u64,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("galleria/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl TableConfig {
    /// Set the API root
    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set rows per page
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Check the settings are usable
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` when the page size is outside
    /// `1..=MAX_PAGE_SIZE`, the timeout is zero, or the URL is not http(s).
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(Error::invalid_config(format!(
                "page_size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.page_size
            )));
        }
        if self.timeout_secs == 0 {
            return Err(Error::invalid_config("timeout_secs must be positive"));
        }
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(Error::invalid_config(format!(
                "api_url must start with http:// or https://, got '{}'",
                self.api_url
            )));
        }
        Ok(())
    }
}
