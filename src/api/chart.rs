use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::analyze::request_from_headers;
use crate::error::ApiError;
use crate::services::{AnalysisService, ChartRenderer};

/// Render the color distribution of an uploaded image as a pie chart
///
/// Takes the same inputs as `/api/analyze` and returns a PNG with one wedge
/// per matched reference color and a percentage legend.
#[utoipa::path(
    post,
    path = "/api/chart",
    request_body(content = Vec<u8>, description = "PNG, JPEG or BMP image bytes", content_type = "application/octet-stream"),
    responses(
        (status = 200, description = "Pie chart", content_type = "image/png"),
        (status = 400, description = "Missing or malformed Colors/Sensitivity header"),
        (status = 404, description = "No pixel matched any reference color"),
        (status = 413, description = "Image larger than the upload limit"),
        (status = 422, description = "Image could not be decoded"),
        (status = 500, description = "Chart rendering failed"),
    ),
    params(
        ("Colors" = String, Header, description = "Reference colors, e.g. '#FF0000, #00FF00'"),
        ("Sensitivity" = Option<f64>, Header, description = "Match tolerance (Euclidean RGB distance, 0 = exact)"),
    ),
    tag = "Analysis"
)]
pub async fn handle_chart(
    State(analysis): State<Arc<AnalysisService>>,
    State(chart): State<Arc<ChartRenderer>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request = request_from_headers(&headers)?;
    let report = analysis.analyze_bytes_async(body, request).await?;

    if report.is_empty() {
        return Err(ApiError::NoMatches {
            sensitivity: report.tolerance,
        });
    }

    let png_bytes = chart.render_png_async(report).await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        png_bytes,
    )
        .into_response())
}
