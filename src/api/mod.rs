pub mod analyze;
pub mod chart;
pub mod headers;

pub use analyze::{handle_analyze, __path_handle_analyze};
pub use chart::{handle_chart, __path_handle_chart};
