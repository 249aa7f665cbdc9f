use crate::assets::AssetLoader;
use crate::error::RenderError;
use crate::models::{ChartConfig, DistributionReport};
use crate::rendering::{PieChart, SvgRasterizer};
use std::sync::{Arc, OnceLock};

/// Output formats for a rendered chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    Svg,
    Png,
}

impl ChartFormat {
    /// Pick the format from a file extension, defaulting to PNG.
    pub fn from_path(path: &std::path::Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => Self::Svg,
            _ => Self::Png,
        }
    }
}

/// Renders distribution reports as pie charts.
///
/// The font database behind PNG output is only loaded on the first raster
/// render; SVG output never touches it.
pub struct ChartRenderer {
    config: ChartConfig,
    template: String,
    rasterizer: OnceLock<Arc<SvgRasterizer>>,
}

impl ChartRenderer {
    /// Create a renderer using the embedded chart template
    pub fn new(config: ChartConfig) -> Result<Self, RenderError> {
        Ok(Self::with_template(config, AssetLoader::chart_template()?))
    }

    pub fn with_template(config: ChartConfig, template: String) -> Self {
        Self {
            config,
            template,
            rasterizer: OnceLock::new(),
        }
    }

    fn rasterizer(&self) -> Arc<SvgRasterizer> {
        self.rasterizer
            .get_or_init(|| Arc::new(SvgRasterizer::new()))
            .clone()
    }

    /// Whether the font database has been loaded yet
    pub fn fonts_loaded(&self) -> bool {
        self.rasterizer.get().is_some()
    }

    /// Render the report as an SVG document.
    pub fn render_svg(&self, report: &DistributionReport) -> Result<String, RenderError> {
        PieChart::build(report, &self.config)?.render_svg(&self.template)
    }

    /// Render the report as a PNG image.
    pub fn render_png(&self, report: &DistributionReport) -> Result<Vec<u8>, RenderError> {
        let svg = self.render_svg(report)?;
        self.rasterizer()
            .render_to_png(svg.as_bytes(), self.config.width, self.config.height)
    }

    /// Render in the given format, returning the encoded bytes.
    pub fn render(
        &self,
        report: &DistributionReport,
        format: ChartFormat,
    ) -> Result<Vec<u8>, RenderError> {
        match format {
            ChartFormat::Svg => self.render_svg(report).map(String::into_bytes),
            ChartFormat::Png => self.render_png(report),
        }
    }

    /// Render a PNG off the async runtime.
    pub async fn render_png_async(
        self: &Arc<Self>,
        report: DistributionReport,
    ) -> Result<Vec<u8>, RenderError> {
        let renderer = Arc::clone(self);

        tokio::task::spawn_blocking(move || renderer.render_png(&report))
            .await
            .map_err(|e| RenderError::TaskFailed(e.to_string()))?
    }
}
