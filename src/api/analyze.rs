use axum::{body::Bytes, extract::State, http::HeaderMap, Json};
use std::sync::Arc;

use super::headers::{HeaderMapExt, COLORS_HEADER, SENSITIVITY_HEADER};
use crate::error::ApiError;
use crate::models::DistributionReport;
use crate::services::{AnalysisRequest, AnalysisService};

/// Build an analysis request from the `Colors` and `Sensitivity` headers.
pub fn request_from_headers(headers: &HeaderMap) -> Result<AnalysisRequest, ApiError> {
    let colors_text = headers.require_str(COLORS_HEADER)?;
    let sensitivity = headers.parse_optional::<f64>(SENSITIVITY_HEADER)?;
    Ok(AnalysisRequest::new(colors_text, sensitivity))
}

/// Analyze the color distribution of an uploaded image
///
/// Counts, for each reference color in `Colors`, the pixels assigned to it.
/// A pixel belongs to the first listed reference within the tolerance, so
/// each pixel is counted at most once. An image with no matching pixels
/// yields an empty `matches` list.
#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body(content = Vec<u8>, description = "PNG, JPEG or BMP image bytes", content_type = "application/octet-stream"),
    responses(
        (status = 200, description = "Distribution computed", body = DistributionReport),
        (status = 400, description = "Missing or malformed Colors/Sensitivity header"),
        (status = 413, description = "Image larger than the upload limit"),
        (status = 422, description = "Image could not be decoded"),
    ),
    params(
        ("Colors" = String, Header, description = "Reference colors, e.g. '#FF0000, #00FF00'"),
        ("Sensitivity" = Option<f64>, Header, description = "Match tolerance (Euclidean RGB distance, 0 = exact)"),
    ),
    tag = "Analysis"
)]
pub async fn handle_analyze(
    State(analysis): State<Arc<AnalysisService>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<DistributionReport>, ApiError> {
    let request = request_from_headers(&headers)?;

    tracing::debug!(
        colors = %request.colors_text,
        sensitivity = ?request.sensitivity,
        size_bytes = body.len(),
        "Analyze request"
    );

    let report = analysis.analyze_bytes_async(body, request).await?;
    Ok(Json(report))
}
