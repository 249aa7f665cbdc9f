//! Integration tests for POST /api/chart

mod common;

use axum::http::StatusCode;
use colortally::models::{AppConfig, ChartConfig};
use common::fixtures::{analysis_headers, colors, palette_png};
use common::{assert_json_error, assert_png, TestApp};

#[tokio::test]
async fn test_chart_is_png_of_configured_size() {
    let app = TestApp::new();
    let list = format!("{}, {}, {}", colors::RED, colors::GREEN, colors::BLUE);

    let response = app
        .post_bytes("/api/chart", &analysis_headers(&list, None), palette_png())
        .await;

    assert_png(&response);
    let img = image::load_from_memory(response.bytes()).expect("Chart should decode");
    assert_eq!((img.width(), img.height()), (600, 470));
}

#[tokio::test]
async fn test_chart_uses_chart_config() {
    let app = TestApp::with_config(AppConfig {
        chart: ChartConfig {
            width: 300,
            height: 235,
            ..ChartConfig::default()
        },
        ..AppConfig::default()
    });

    let response = app
        .post_bytes(
            "/api/chart",
            &analysis_headers(colors::RED, None),
            palette_png(),
        )
        .await;

    assert_png(&response);
    let img = image::load_from_memory(response.bytes()).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (300, 235));

    // Single match: the whole pie is red
    assert_eq!(img.get_pixel(198, 117).0, [255, 0, 0]);
}

#[tokio::test]
async fn test_chart_without_matches_is_not_found() {
    let app = TestApp::new();

    let response = app
        .post_bytes(
            "/api/chart",
            &analysis_headers(colors::MAGENTA, Some("5")),
            palette_png(),
        )
        .await;

    let message = assert_json_error(&response, StatusCode::NOT_FOUND);
    assert_eq!(
        message,
        "No matching colors were found in the image within a sensitivity threshold of 5"
    );
}

#[tokio::test]
async fn test_chart_rejects_bad_input_like_analyze() {
    let app = TestApp::new();

    let response = app.post_bytes("/api/chart", &[], palette_png()).await;
    assert_json_error(&response, StatusCode::BAD_REQUEST);

    let response = app
        .post_bytes(
            "/api/chart",
            &analysis_headers(colors::RED, None),
            vec![0u8; 16],
        )
        .await;
    assert_json_error(&response, StatusCode::UNPROCESSABLE_ENTITY);
}
