mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn root_reports_identity_and_endpoints() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/", server.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert!(body.get("success").and_then(|v| v.as_bool()).unwrap_or(false), "success flag false or missing: {}", body);
    assert_eq!(body["data"]["name"], "Planner API", "unexpected name: {}", body);
    assert!(body["data"]["endpoints"].get("screens").is_some(), "missing screens endpoint: {}", body);
    assert!(body["data"]["endpoints"].get("wishlist").is_some(), "missing wishlist endpoint: {}", body);

    Ok(())
}

#[tokio::test]
async fn health_reflects_database_connectivity() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/health", server.base_url)).send().await?;
    let status = res.status();
    let body = res.json::<serde_json::Value>().await?;

    match status {
        StatusCode::OK => {
            assert_eq!(body["data"]["status"], "ok", "healthy body mismatch: {}", body);
            assert_eq!(body["data"]["database"], "ok", "healthy body mismatch: {}", body);
        }
        StatusCode::SERVICE_UNAVAILABLE => {
            assert_eq!(body["data"]["status"], "degraded", "degraded body mismatch: {}", body);
        }
        other => panic!("unexpected /health status {}: {}", other, body),
    }

    Ok(())
}

#[tokio::test]
async fn unknown_route_is_not_found() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/nonexistent", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}
