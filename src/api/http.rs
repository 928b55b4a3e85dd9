use crate::{
    api::{ApiClient, ApiOptions, Envelope, User},
    Error, Result, APP_USER_AGENT,
};
use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info_span, Instrument};

/// Users API client backed by `reqwest`.
///
/// The inner `Client` pools connections, so one instance should be shared.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: Client,
    options: ApiOptions,
}

impl HttpApiClient {
    /// # Errors
    /// Returns an error if the `reqwest` client cannot be built.
    pub fn new(options: ApiOptions) -> Result<Self> {
        let client = Client::builder().user_agent(APP_USER_AGENT).build()?;

        Ok(Self::with_client(client, options))
    }

    #[must_use]
    pub fn with_client(client: Client, options: ApiOptions) -> Self {
        Self { client, options }
    }

    async fn send(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        debug!("{} - {}", url, response.status());

        Ok(response)
    }
}

// Only called on success statuses; failure bodies are never read.
async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<Envelope<T>> {
    let body = response.text().await?;

    serde_json::from_str(&body).map_err(|source| Error::Decode {
        url: url.to_string(),
        source,
    })
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn get_all_users(&self, page: u32) -> Result<Vec<User>> {
        let url = self.options.endpoint(&format!("/users?page={page}"));

        let span = info_span!("users.list", http.method = "GET", url = %url, page);
        let response = self.send(&url).instrument(span).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status { url, status });
        }

        let envelope: Envelope<Vec<User>> = decode(&url, response).await?;

        Ok(envelope.into_data().unwrap_or_default())
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        let url = self.options.endpoint(&format!("/users/{id}"));

        let span = info_span!("users.get", http.method = "GET", url = %url, id);
        let response = self.send(&url).instrument(span).await?;

        let status = response.status();
        if !status.is_success() {
            debug!("user {} not available: {}", id, status);
            return Ok(None);
        }

        let envelope: Envelope<User> = decode(&url, response).await?;

        Ok(envelope.into_data())
    }
}
