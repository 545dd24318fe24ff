mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn health_reports_connected_database() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping health_reports_connected_database: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK, "expected 200 OK, got {}", res.status());

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "success", "unexpected envelope: {}", body);
    assert_eq!(body["message"], "Health check passed", "unexpected message: {}", body);
    assert_eq!(body["data"]["database"], "connected", "database not connected: {}", body);
    assert!(body["data"]["uptime"].is_number(), "uptime missing: {}", body);

    Ok(())
}

#[tokio::test]
async fn root_banner_identifies_service() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping root_banner_identifies_service: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client.get(&server.base_url).send().await?;
    assert_eq!(res.status(), StatusCode::OK, "expected 200 OK, got {}", res.status());

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "success", "unexpected envelope: {}", body);
    assert_eq!(body["message"], "ScrollJob API is running", "unexpected banner: {}", body);
    assert_eq!(body["data"]["version"], "v1", "unexpected version: {}", body);

    Ok(())
}

#[tokio::test]
async fn unknown_route_returns_enveloped_404() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping unknown_route_returns_enveloped_404: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/no/such/route", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::NOT_FOUND, "expected 404, got {}", res.status());

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "error", "unexpected envelope: {}", body);
    assert_eq!(body["message"], "Route not found", "unexpected message: {}", body);
    assert!(body["data"].is_null(), "data should be null: {}", body);

    Ok(())
}
