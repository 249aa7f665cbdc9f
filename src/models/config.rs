use crate::assets::AssetLoader;
use color_match::{InvalidTolerance, Tolerance};
use serde::Deserialize;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Default near-match tolerance
    #[serde(default)]
    pub sensitivity: SensitivityConfig,

    /// Pie chart layout
    #[serde(default)]
    pub chart: ChartConfig,

    /// HTTP server limits
    #[serde(default)]
    pub server: ServerConfig,
}

/// Sensitivity setting. Disabled means exact matching.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct SensitivityConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_sensitivity_value")]
    pub value: f64,
}

fn default_sensitivity_value() -> f64 {
    30.0
}

/// Pie chart layout and labelling
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChartConfig {
    #[serde(default = "default_chart_width")]
    pub width: u32,

    #[serde(default = "default_chart_height")]
    pub height: u32,

    #[serde(default = "default_chart_title")]
    pub title: String,

    /// Decimal places for legend percentages
    #[serde(default = "default_chart_decimals")]
    pub decimals: usize,
}

fn default_chart_width() -> u32 {
    600
}

fn default_chart_height() -> u32 {
    470
}

fn default_chart_title() -> String {
    "Color Distribution in Image".to_string()
}

fn default_chart_decimals() -> usize {
    1
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct ServerConfig {
    /// Largest accepted upload in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_max_upload_bytes() -> usize {
    32 * 1024 * 1024
}

impl Default for SensitivityConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            value: default_sensitivity_value(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_chart_width(),
            height: default_chart_height(),
            title: default_chart_title(),
            decimals: default_chart_decimals(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl SensitivityConfig {
    /// The tolerance this setting stands for.
    pub fn tolerance(&self) -> Result<Tolerance, InvalidTolerance> {
        Tolerance::from_sensitivity(self.enabled, self.value)
    }

    /// Resolve a per-request override against this default.
    ///
    /// An explicit value always enables sensitivity (0 still means exact).
    pub fn resolve(&self, requested: Option<f64>) -> Result<Tolerance, InvalidTolerance> {
        match requested {
            Some(value) => Tolerance::new(value),
            None => self.tolerance(),
        }
    }
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config: Self = config;
                    tracing::info!(
                        sensitivity_enabled = config.sensitivity.enabled,
                        sensitivity = config.sensitivity.value,
                        chart_width = config.chart.width,
                        chart_height = config.chart.height,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}
