use crate::error::AnalysisError;
use crate::models::{AppConfig, DistributionReport};
use crate::services::image_loader::{self, LoadedImage};
use color_match::{match_histogram, parse_reference_colors, Rgb, Tolerance};
use std::path::Path;
use std::sync::Arc;

/// User inputs for one analysis run
#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest {
    /// Free-form reference color list (`#RRGGBB, #RRGGBB, ...`)
    pub colors_text: String,
    /// Per-request tolerance; `None` falls back to the configured default
    pub sensitivity: Option<f64>,
}

impl AnalysisRequest {
    pub fn new(colors_text: impl Into<String>, sensitivity: Option<f64>) -> Self {
        Self {
            colors_text: colors_text.into(),
            sensitivity,
        }
    }
}

/// Reference colors and tolerance, validated before any image work
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedQuery {
    pub references: Vec<Rgb>,
    pub tolerance: Tolerance,
}

/// Runs color distribution analyses against decoded images.
///
/// Cheap to clone; the configuration is shared.
#[derive(Clone)]
pub struct AnalysisService {
    config: Arc<AppConfig>,
}

impl AnalysisService {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    /// Validate the reference list and resolve the tolerance.
    pub fn prepare(&self, request: &AnalysisRequest) -> Result<PreparedQuery, AnalysisError> {
        let references = parse_reference_colors(&request.colors_text)?;
        if references.is_empty() {
            return Err(AnalysisError::NoReferenceColorsProvided);
        }
        let tolerance = self.config.sensitivity.resolve(request.sensitivity)?;

        Ok(PreparedQuery {
            references,
            tolerance,
        })
    }

    /// Match an already decoded image.
    pub fn analyze_image(&self, image: &LoadedImage, query: &PreparedQuery) -> DistributionReport {
        let counts = match_histogram(&image.pixels, &query.references, query.tolerance);

        let report = DistributionReport::new(
            image.width,
            image.height,
            &image.pixels,
            &query.references,
            query.tolerance,
            &counts,
        );

        tracing::info!(
            width = report.width,
            height = report.height,
            references = report.references.len(),
            matched = report.matches.len(),
            matched_pixels = report.matched_pixels,
            tolerance = report.tolerance,
            "Analyzed image"
        );

        report
    }

    /// Analyze an in-memory image.
    pub fn analyze_bytes(
        &self,
        bytes: &[u8],
        request: &AnalysisRequest,
    ) -> Result<DistributionReport, AnalysisError> {
        let query = self.prepare(request)?;
        let image = image_loader::load_bytes(bytes)?;
        Ok(self.analyze_image(&image, &query))
    }

    /// Analyze an image file on disk.
    pub fn analyze_path(
        &self,
        path: &Path,
        request: &AnalysisRequest,
    ) -> Result<DistributionReport, AnalysisError> {
        let query = self.prepare(request)?;
        let image = image_loader::load_path(path)?;
        Ok(self.analyze_image(&image, &query))
    }

    /// Analyze an in-memory image off the async runtime.
    ///
    /// Decoding and matching are CPU-bound, so they run under
    /// `spawn_blocking`.
    pub async fn analyze_bytes_async<B>(
        &self,
        bytes: B,
        request: AnalysisRequest,
    ) -> Result<DistributionReport, AnalysisError>
    where
        B: AsRef<[u8]> + Send + 'static,
    {
        let service = self.clone();

        tokio::task::spawn_blocking(move || service.analyze_bytes(bytes.as_ref(), &request))
            .await
            .map_err(|e| AnalysisError::TaskFailed(e.to_string()))?
    }
}
