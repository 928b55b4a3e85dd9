use crate::{Error, Result};
use tracing::debug;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://reqres.in/api";

/// Connection settings for the users API.
#[derive(Debug, Clone)]
pub struct ApiOptions {
    base_url: Url,
}

impl ApiOptions {
    /// # Errors
    /// Returns an error if `base_url` cannot be parsed, has no host, uses an
    /// unsupported scheme, or carries a query or fragment.
    pub fn new(base_url: &str) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => return Err(invalid(format!("unsupported scheme {scheme}"))),
        }

        if url.host().is_none() {
            return Err(invalid("no host specified".to_string()));
        }

        // Endpoint paths are appended to the URL text.
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("query or fragment not allowed".to_string()));
        }

        debug!("base URL: {}", url);

        Ok(Self { base_url: url })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Join `path` onto the base URL, ignoring any trailing slash on the base.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.as_str().trim_end_matches('/'))
    }
}
