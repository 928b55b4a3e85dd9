use crate::cli::actions::service;
use anyhow::{anyhow, Context, Result};

#[derive(Debug)]
pub struct Args {
    pub base_url: String,
    pub id: i64,
}

/// Print a single user as JSON. An absent user prints `null` and fails.
/// # Errors
/// Returns an error if the request fails or the user does not exist.
pub async fn execute(args: Args) -> Result<()> {
    let service = service(&args.base_url)?;

    let user = service
        .get_user_by_id(args.id)
        .await
        .with_context(|| format!("could not fetch user {}", args.id))?;

    println!("{}", serde_json::to_string_pretty(&user)?);

    if user.is_none() {
        return Err(anyhow!("user {} not found", args.id));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    #[tokio::test]
    async fn execute_prints_existing_user() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"id": 2, "email": "c@d.com", "first_name": "C", "last_name": "D"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        execute(Args {
            base_url: server.uri(),
            id: 2,
        })
        .await
    }

    #[tokio::test]
    async fn execute_fails_when_user_is_absent() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/99"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = execute(Args {
            base_url: server.uri(),
            id: 99,
        })
        .await;
        assert!(result.is_err_and(|e| e.to_string() == "user 99 not found"));
        Ok(())
    }
}
