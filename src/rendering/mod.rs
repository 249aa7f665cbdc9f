pub mod chart;
pub mod svg_to_png;

pub use chart::PieChart;
pub use svg_to_png::SvgRasterizer;
