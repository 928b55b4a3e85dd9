use crate::cli::actions::service;
use anyhow::{Context, Result};
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub base_url: String,
    pub page: u32,
}

/// List one page of users as a JSON array on stdout.
/// # Errors
/// Returns an error if the request fails or the response cannot be decoded.
pub async fn execute(args: Args) -> Result<()> {
    let service = service(&args.base_url)?;

    let users = service
        .get_all_users(args.page)
        .await
        .with_context(|| format!("could not list users on page {}", args.page))?;

    info!("page {}: {} users", args.page, users.len());

    println!("{}", serde_json::to_string_pretty(&users)?);

    Ok(())
}
