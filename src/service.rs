use crate::{
    api::{ApiClient, User},
    Result,
};
use std::sync::Arc;
use tracing::instrument;

/// Pass-through over an [`ApiClient`].
///
/// Results and errors from the client are returned as they are.
#[derive(Clone)]
pub struct UserService {
    client: Arc<dyn ApiClient>,
}

impl UserService {
    #[must_use]
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    /// # Errors
    /// Returns whatever error the underlying client returns.
    #[instrument(skip(self))]
    pub async fn get_all_users(&self, page: u32) -> Result<Vec<User>> {
        self.client.get_all_users(page).await
    }

    /// # Errors
    /// Returns whatever error the underlying client returns.
    #[instrument(skip(self))]
    pub async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.client.get_user_by_id(id).await
    }
}
