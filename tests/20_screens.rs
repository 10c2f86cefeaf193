mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

fn sample_screen(id: &str) -> Value {
    json!({
        "metadata": { "version": "1.0", "ID": id },
        "header": [{ "text": "Welcome", "level": 1 }],
        "elementFields": { "hero": { "image": "banner.png" } },
        "bookmarkData": "saved-position",
        "content": [{ "type": "paragraph", "text": "Plan your semester" }],
        "regionContent": [],
        "contentContainerWidth": "wide",
        "contentStyle": "focal",
        "footerTextColor": "#111111",
        "hideBackToTop": false
    })
}

#[tokio::test]
async fn create_then_get_returns_same_document() -> Result<()> {
    if !common::database_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let id = common::unique_id("screen-home");

    let res = client
        .post(format!("{}/api/screens", server.base_url))
        .json(&sample_screen(&id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED, "create failed");
    let created = res.json::<Value>().await?;
    assert_eq!(created["metadata"]["ID"], id.as_str(), "created body mismatch: {}", created);
    assert_eq!(created["contentContainerWidth"], "wide", "created body mismatch: {}", created);

    let res = client
        .get(format!("{}/api/screens/{}", server.base_url, id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let fetched = res.json::<Value>().await?;
    assert_eq!(created, fetched, "stored document differs from created response");

    Ok(())
}

#[tokio::test]
async fn list_includes_created_screen() -> Result<()> {
    if !common::database_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let id = common::unique_id("screen-list");

    client
        .post(format!("{}/api/screens", server.base_url))
        .json(&sample_screen(&id))
        .send()
        .await?
        .error_for_status()?;

    let res = client.get(format!("{}/api/screens", server.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let screens = res.json::<Vec<Value>>().await?;
    assert!(
        screens.iter().any(|s| s["metadata"]["ID"] == id.as_str()),
        "created screen missing from list of {}",
        screens.len()
    );

    Ok(())
}

#[tokio::test]
async fn update_overwrites_only_supplied_fields() -> Result<()> {
    if !common::database_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let id = common::unique_id("screen-patch");

    client
        .post(format!("{}/api/screens", server.base_url))
        .json(&sample_screen(&id))
        .send()
        .await?
        .error_for_status()?;

    let res = client
        .put(format!("{}/api/screens/{}", server.base_url, id))
        .json(&json!({ "footerTextColor": "#222222", "contentContainerWidth": "narrow" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK, "update failed");
    let updated = res.json::<Value>().await?;

    assert_eq!(updated["footerTextColor"], "#222222", "update not applied: {}", updated);
    assert_eq!(updated["contentContainerWidth"], "narrow", "update not applied: {}", updated);
    // untouched fields keep their stored values
    assert_eq!(updated["bookmarkData"], "saved-position", "unrelated field changed: {}", updated);
    assert_eq!(updated["contentStyle"], "focal", "unrelated field changed: {}", updated);

    // the update is visible on a fresh read
    let fetched = client
        .get(format!("{}/api/screens/{}", server.base_url, id))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(fetched["footerTextColor"], "#222222", "update not persisted: {}", fetched);

    Ok(())
}

#[tokio::test]
async fn update_missing_screen_returns_404() -> Result<()> {
    if !common::database_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .put(format!("{}/api/screens/{}", server.base_url, common::unique_id("ghost")))
        .json(&json!({ "footerTextColor": "#333333" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = res.json::<Value>().await?;
    assert_eq!(body, json!({ "message": "Screen not found" }));

    Ok(())
}

#[tokio::test]
async fn delete_removes_the_screen() -> Result<()> {
    if !common::database_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let id = common::unique_id("screen-delete");

    client
        .post(format!("{}/api/screens", server.base_url))
        .json(&sample_screen(&id))
        .send()
        .await?
        .error_for_status()?;

    let res = client
        .delete(format!("{}/api/screens/{}", server.base_url, id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body, json!({ "message": "Deleted Screen" }));

    let res = client
        .get(format!("{}/api/screens/{}", server.base_url, id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn create_rejects_unknown_enum_value() -> Result<()> {
    if !common::database_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let mut payload = sample_screen(&common::unique_id("screen-bad"));
    payload["contentContainerWidth"] = json!("gigantic");

    let res = client
        .post(format!("{}/api/screens", server.base_url))
        .json(&payload)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert!(body.get("message").is_some(), "error body missing message: {}", body);

    Ok(())
}
