pub mod config;
pub mod report;

pub use config::{AppConfig, ChartConfig, SensitivityConfig, ServerConfig};
pub use report::{ColorShareEntry, DistributionReport};
