pub mod analysis;
pub mod chart;
pub mod image_loader;

pub use analysis::{AnalysisRequest, AnalysisService, PreparedQuery};
pub use chart::{ChartFormat, ChartRenderer};
pub use image_loader::{load_bytes, load_path, LoadedImage};
