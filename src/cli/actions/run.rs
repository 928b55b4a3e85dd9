use crate::cli::actions::{user, users, Action};
use anyhow::Result;

/// Execute the provided action.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Users(args) => users::execute(args).await,
        Action::User(args) => user::execute(args).await,
    }
}
