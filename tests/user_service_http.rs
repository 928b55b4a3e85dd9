use anyhow::{anyhow, Result};
use serde_json::json;
use std::{net::TcpListener, sync::Arc};
use userinfo::{
    api::{ApiOptions, HttpApiClient},
    service::UserService,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

fn service_for(server: &MockServer) -> Result<UserService> {
    let options = ApiOptions::new(&format!("{}/api", server.uri()))?;
    Ok(UserService::new(Arc::new(HttpApiClient::new(options)?)))
}

#[tokio::test]
async fn service_lists_and_fetches_over_http() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "per_page": 6,
            "total": 2,
            "total_pages": 1,
            "data": [
                {
                    "id": 1,
                    "email": "george.bluth@reqres.in",
                    "first_name": "George",
                    "last_name": "Bluth",
                    "avatar": "https://reqres.in/img/faces/1-image.jpg"
                },
                {
                    "id": 2,
                    "email": "janet.weaver@reqres.in",
                    "first_name": "Janet",
                    "last_name": "Weaver",
                    "avatar": "https://reqres.in/img/faces/2-image.jpg"
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/users/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": 2,
                "email": "janet.weaver@reqres.in",
                "first_name": "Janet",
                "last_name": "Weaver",
                "avatar": "https://reqres.in/img/faces/2-image.jpg"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server)?;

    let users = service.get_all_users(1).await?;
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].first_name, "George");

    let user = service
        .get_user_by_id(2)
        .await?
        .ok_or_else(|| anyhow!("expected user"))?;
    assert_eq!(user, users[1]);
    assert_eq!(
        user.avatar.as_deref(),
        Some("https://reqres.in/img/faces/2-image.jpg")
    );
    Ok(())
}

#[tokio::test]
async fn service_maps_missing_user_and_empty_page() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(query_param("page", "9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/users/23"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({})))
        .mount(&server)
        .await;

    let service = service_for(&server)?;

    assert!(service.get_all_users(9).await?.is_empty());
    assert!(service.get_user_by_id(23).await?.is_none());
    Ok(())
}
