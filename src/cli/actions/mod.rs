pub mod user;
pub mod users;

mod run;

use crate::{
    api::{ApiOptions, HttpApiClient},
    service::UserService,
};
use anyhow::{Context, Result};
use std::sync::Arc;

#[derive(Debug)]
pub enum Action {
    Users(users::Args),
    User(user::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> Result<()> {
        run::execute(self).await
    }
}

/// Build a [`UserService`] over the HTTP client for `base_url`.
/// # Errors
/// Returns an error if the base URL is invalid or the HTTP client cannot be built.
pub fn service(base_url: &str) -> Result<UserService> {
    let options = ApiOptions::new(base_url).context("invalid USERINFO_BASE_URL")?;
    let client = HttpApiClient::new(options).context("could not build HTTP client")?;

    Ok(UserService::new(Arc::new(client)))
}
