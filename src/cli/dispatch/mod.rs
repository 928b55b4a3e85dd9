use crate::cli::actions::{user, users, Action};
use anyhow::{anyhow, Context, Result};

/// # Errors
/// Returns an error if required arguments are missing or no subcommand was given.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let base_url = matches
        .get_one::<String>("base-url")
        .cloned()
        .context("missing required argument: --base-url")?;

    match matches.subcommand() {
        Some(("users", sub_m)) => Ok(Action::Users(users::Args {
            base_url,
            page: sub_m.get_one::<u32>("page").copied().unwrap_or(1),
        })),
        Some(("user", sub_m)) => {
            let id = sub_m
                .get_one::<i64>("id")
                .copied()
                .context("missing required argument: <ID>")?;

            Ok(Action::User(user::Args { base_url, id }))
        }
        Some((name, _)) => Err(anyhow!("unknown subcommand: {name}")),
        None => Err(anyhow!("missing subcommand")),
    }
}
