//! Assembled application driven through its router.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use rstest::rstest;
use serde_json::{Value, json};
use task_tracker::{app::Application, config::TrackerConfig, http::router};
use tower::ServiceExt;

use super::helpers::{FixedClock, ScratchDir, clock, scratch};

async fn call(app: &Router, request: Request<Body>) -> Result<(StatusCode, Value), eyre::Report> {
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let body = response.into_body().collect().await?.to_bytes();
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body)?
    };
    Ok((status, value))
}

fn config_for(scratch: &ScratchDir) -> TrackerConfig {
    let mut config = TrackerConfig::default();
    config.data_dir = Some(scratch.path().join("data"));
    config.upload.dir = Some(scratch.path().join("uploads"));
    config
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn state_persists_across_restarts(
    scratch: ScratchDir,
    clock: FixedClock,
) -> Result<(), eyre::Report> {
    let config = config_for(&scratch);
    let clock = Arc::new(clock);

    let first = Application::build(&config, Arc::clone(&clock)).await?;
    let app = router(first.state);
    let task = json!({
        "description": "Fix lights",
        "assignedStaff": "ann@x.com",
        "dateAssigned": "2025-03-14",
        "deadline": "2025-03-21",
    });
    let request = Request::builder()
        .method(Method::POST)
        .uri("/tasks")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(task.to_string()))?;
    let (status, created) = call(&app, request).await?;
    assert_eq!(status, StatusCode::CREATED);
    drop(app);
    first.notification_worker.await?;

    let second = Application::build(&config, clock).await?;
    let app = router(second.state);
    let (status, tasks) = call(&app, Request::get("/tasks").body(Body::empty())?).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(tasks, json!([created]));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn uploads_land_in_the_upload_directory(
    scratch: ScratchDir,
    clock: FixedClock,
) -> Result<(), eyre::Report> {
    let config = config_for(&scratch);
    let application = Application::build(&config, Arc::new(clock)).await?;
    let app = router(application.state);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/upload")
        .header(header::CONTENT_TYPE, "image/jpeg")
        .body(Body::from(&b"\xff\xd8\xff"[..]))?;
    let (status, body) = call(&app, request).await?;

    assert_eq!(status, StatusCode::CREATED);
    let url = body["url"]
        .as_str()
        .ok_or_else(|| eyre::eyre!("missing url in {body}"))?;
    let name = url
        .strip_prefix("/uploaded/")
        .ok_or_else(|| eyre::eyre!("unexpected url {url}"))?;
    assert!(name.ends_with(".jpg"));
    assert_eq!(std::fs::read(scratch.path().join("uploads").join(name))?, b"\xff\xd8\xff");
    Ok(())
}
