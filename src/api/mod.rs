pub mod http;
pub mod options;
pub mod types;

pub use self::http::HttpApiClient;
pub use self::options::{ApiOptions, DEFAULT_BASE_URL};
pub use self::types::{Envelope, User};

use crate::Result;
use async_trait::async_trait;

/// Read access to the users API.
///
/// [`HttpApiClient`] is the network implementation; tests provide their own.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Fetch one page of users. A missing or null payload yields an empty list.
    async fn get_all_users(&self, page: u32) -> Result<Vec<User>>;

    /// Fetch a single user. `None` when the API reports a failure status or a null payload.
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
}
