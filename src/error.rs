use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use color_match::{InvalidTolerance, MalformedColorSpec};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required header: {0}")]
    MissingHeader(&'static str),

    #[error("Invalid header {name}: {reason}")]
    InvalidHeader { name: &'static str, reason: String },

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("No matching colors were found in the image within a sensitivity threshold of {sensitivity}")]
    NoMatches { sensitivity: f64 },

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failures of one analysis run. All are terminal for that run.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("{0}")]
    MalformedColorSpec(#[from] MalformedColorSpec),

    #[error("No colors to search for: add one or more #RRGGBB colors")]
    NoReferenceColorsProvided,

    #[error("Invalid sensitivity: {0}")]
    InvalidTolerance(#[from] InvalidTolerance),

    #[error("Image load error: {0}")]
    ImageLoad(#[from] ImageLoadError),

    #[error("Analysis task failed: {0}")]
    TaskFailed(String),
}

#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("Unsupported file type {extension:?} (expected .png, .jpg, .jpeg or .bmp)")]
    UnsupportedExtension { extension: String },

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Nothing to chart: the distribution is empty")]
    EmptyDistribution,

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: u32, height: u32 },

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Render task failed: {0}")]
    TaskFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingHeader(_) | ApiError::InvalidHeader { .. } => StatusCode::BAD_REQUEST,
            ApiError::Analysis(AnalysisError::ImageLoad(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Analysis(AnalysisError::TaskFailed(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Analysis(_) => StatusCode::BAD_REQUEST,
            ApiError::NoMatches { .. } => StatusCode::NOT_FOUND,
            ApiError::Render(RenderError::EmptyDistribution) => StatusCode::NOT_FOUND,
            ApiError::Render(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
