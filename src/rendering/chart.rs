//! Pie chart layout for a distribution report.
//!
//! Geometry follows the classic desktop layout: a 600×470 figure, the pie
//! in the right-hand axes box `[0.36, 0.1, 0.6, 0.8]` (left, bottom, width,
//! height as figure fractions), the legend anchored left of the axes, and
//! the title centred near the top. Wedges start at 12 o'clock and run
//! counterclockwise in report order. All coordinates are precomputed here;
//! the template only places them.

use crate::error::RenderError;
use crate::models::{ChartConfig, DistributionReport};
use serde::Serialize;
use std::f64::consts::PI;
use tera::{Context, Tera};

const TEMPLATE_NAME: &str = "chart.svg";

const AXES_LEFT: f64 = 0.36;
const AXES_BOTTOM: f64 = 0.1;
const AXES_WIDTH: f64 = 0.6;
const AXES_HEIGHT: f64 = 0.8;
/// Legend anchor relative to the axes width
const LEGEND_ANCHOR: f64 = -0.54;
const TITLE_Y: f64 = 0.05;

const START_ANGLE_DEG: f64 = 90.0;
const RADIUS_FRACTION: f64 = 0.4;

const LEGEND_ROW_HEIGHT: f64 = 20.0;
const LEGEND_HEADER: f64 = 28.0;
const LEGEND_PADDING: f64 = 8.0;
const SWATCH: f64 = 14.0;
/// Rough advance of a 12px sans-serif glyph
const CHAR_WIDTH: f64 = 7.0;

#[derive(Debug, Clone, Serialize)]
pub struct PieChart {
    pub width: u32,
    pub height: u32,
    pub title: TitleLayout,
    pub pie: PieLayout,
    pub wedges: Vec<Wedge>,
    pub legend: LegendLayout,
}

#[derive(Debug, Clone, Serialize)]
pub struct TitleLayout {
    pub x: f64,
    pub y: f64,
    /// XML-escaped
    pub text: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PieLayout {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Wedge {
    pub color: String,
    /// Sole wedge covering the whole pie; drawn as a circle
    pub full: bool,
    /// SVG path data; empty when `full`
    pub path: String,
    pub start_deg: f64,
    pub sweep_deg: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LegendLayout {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub title_x: f64,
    pub title_y: f64,
    pub rows: Vec<LegendRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LegendRow {
    pub color: String,
    /// XML-escaped
    pub label: String,
    pub swatch_x: f64,
    pub swatch_y: f64,
    pub text_x: f64,
    pub text_y: f64,
}

impl PieChart {
    /// Lay out a chart for the report's matches.
    pub fn build(report: &DistributionReport, config: &ChartConfig) -> Result<Self, RenderError> {
        if report.is_empty() {
            return Err(RenderError::EmptyDistribution);
        }

        let w = config.width as f64;
        let h = config.height as f64;

        let axes_left = AXES_LEFT * w;
        let axes_width = AXES_WIDTH * w;
        let axes_top = (1.0 - AXES_BOTTOM - AXES_HEIGHT) * h;
        let axes_height = AXES_HEIGHT * h;

        let pie = PieLayout {
            cx: round2(axes_left + axes_width / 2.0),
            cy: round2(axes_top + axes_height / 2.0),
            radius: round2(RADIUS_FRACTION * axes_width.min(axes_height)),
        };

        let wedges = layout_wedges(report, pie);
        let legend = layout_legend(
            &report.labels(config.decimals),
            report,
            axes_left + LEGEND_ANCHOR * axes_width,
            pie.cy,
        );

        Ok(Self {
            width: config.width,
            height: config.height,
            title: TitleLayout {
                x: round2(w / 2.0),
                y: round2(TITLE_Y * h + 10.0),
                text: xml_escape(&config.title),
            },
            pie,
            wedges,
            legend,
        })
    }

    /// Render through the given Tera template source.
    pub fn render_svg(&self, template: &str) -> Result<String, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, template)?;
        let context = Context::from_serialize(self)?;
        Ok(tera.render(TEMPLATE_NAME, &context)?)
    }
}

fn layout_wedges(report: &DistributionReport, pie: PieLayout) -> Vec<Wedge> {
    if report.matches.len() == 1 {
        return vec![Wedge {
            color: report.matches[0].color.clone(),
            full: true,
            path: String::new(),
            start_deg: START_ANGLE_DEG,
            sweep_deg: 360.0,
        }];
    }

    let total = report.matched_pixels as f64;
    let mut start = START_ANGLE_DEG;

    report
        .matches
        .iter()
        .map(|m| {
            let sweep = 360.0 * m.count as f64 / total;
            let wedge = Wedge {
                color: m.color.clone(),
                full: false,
                path: wedge_path(pie, start, sweep),
                start_deg: start,
                sweep_deg: sweep,
            };
            start += sweep;
            wedge
        })
        .collect()
}

/// Point on the circle at `deg`, counterclockwise from 3 o'clock, in
/// y-down screen space.
fn polar(pie: PieLayout, deg: f64) -> (f64, f64) {
    let rad = deg * PI / 180.0;
    (
        pie.cx + pie.radius * rad.cos(),
        pie.cy - pie.radius * rad.sin(),
    )
}

/// Wedge outline as two half-sweep arcs.
///
/// A single arc whose endpoints round to the same point is dropped by SVG
/// renderers, which would blank a wedge sweeping nearly 360°.
fn wedge_path(pie: PieLayout, start_deg: f64, sweep_deg: f64) -> String {
    let (x0, y0) = polar(pie, start_deg);
    let (xm, ym) = polar(pie, start_deg + sweep_deg / 2.0);
    let (x1, y1) = polar(pie, start_deg + sweep_deg);
    let r = pie.radius;

    // large-arc 0, sweep-flag 0: each half is at most 180°, counterclockwise on screen
    format!(
        "M {:.2} {:.2} L {:.2} {:.2} A {r:.2} {r:.2} 0 0 0 {:.2} {:.2} A {r:.2} {r:.2} 0 0 0 {:.2} {:.2} Z",
        pie.cx, pie.cy, x0, y0, xm, ym, x1, y1
    )
}

fn layout_legend(
    labels: &[String],
    report: &DistributionReport,
    anchor_x: f64,
    center_y: f64,
) -> LegendLayout {
    let longest = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let width = LEGEND_PADDING * 3.0 + SWATCH + longest as f64 * CHAR_WIDTH;
    let height = LEGEND_HEADER + labels.len() as f64 * LEGEND_ROW_HEIGHT + LEGEND_PADDING;

    let x = anchor_x.max(0.0);
    let y = (center_y - height / 2.0).max(0.0);

    let rows = labels
        .iter()
        .zip(&report.matches)
        .enumerate()
        .map(|(i, (label, m))| {
            let row_top = y + LEGEND_HEADER + i as f64 * LEGEND_ROW_HEIGHT;
            LegendRow {
                color: m.color.clone(),
                label: xml_escape(label),
                swatch_x: round2(x + LEGEND_PADDING),
                swatch_y: round2(row_top),
                text_x: round2(x + LEGEND_PADDING * 2.0 + SWATCH),
                text_y: round2(row_top + SWATCH - 2.0),
            }
        })
        .collect();

    LegendLayout {
        x: round2(x),
        y: round2(y),
        width: round2(width),
        height: round2(height),
        title_x: round2(x + width / 2.0),
        title_y: round2(y + 18.0),
        rows,
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Escape text for use in SVG element content or attributes
pub fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetLoader;
    use color_match::{match_histogram, ColorHistogram, Rgb, Tolerance};

    fn report(counts: &[(Rgb, u64)]) -> DistributionReport {
        let mut hist = ColorHistogram::new();
        for &(c, n) in counts {
            hist.add_count(c, n);
        }
        let refs: Vec<Rgb> = counts.iter().map(|&(c, _)| c).collect();
        let counts = match_histogram(&hist, &refs, Tolerance::EXACT);
        DistributionReport::new(10, 10, &hist, &refs, Tolerance::EXACT, &counts)
    }

    #[test]
    fn test_empty_report_is_refused() {
        let empty = report(&[]);
        assert!(matches!(
            PieChart::build(&empty, &ChartConfig::default()),
            Err(RenderError::EmptyDistribution)
        ));
    }

    #[test]
    fn test_default_geometry() {
        let chart = PieChart::build(
            &report(&[(Rgb::new(255, 0, 0), 3), (Rgb::new(0, 0, 255), 1)]),
            &ChartConfig::default(),
        )
        .unwrap();

        assert_eq!((chart.width, chart.height), (600, 470));
        assert_eq!(chart.pie.cx, 396.0);
        assert_eq!(chart.pie.cy, 235.0);
        assert_eq!(chart.pie.radius, 144.0);
        assert_eq!(chart.title.x, 300.0);
    }

    #[test]
    fn test_wedges_start_at_top_and_run_counterclockwise() {
        let chart = PieChart::build(
            &report(&[(Rgb::new(255, 0, 0), 3), (Rgb::new(0, 0, 255), 1)]),
            &ChartConfig::default(),
        )
        .unwrap();

        assert_eq!(chart.wedges.len(), 2);
        assert_eq!(chart.wedges[0].start_deg, 90.0);
        assert_eq!(chart.wedges[0].sweep_deg, 270.0);
        assert_eq!(chart.wedges[1].start_deg, 360.0);
        assert_eq!(chart.wedges[1].sweep_deg, 90.0);

        // First wedge begins at 12 o'clock and passes through 4:30
        assert_eq!(
            chart.wedges[0].path,
            "M 396.00 235.00 L 396.00 91.00 \
             A 144.00 144.00 0 0 0 294.18 336.82 \
             A 144.00 144.00 0 0 0 540.00 235.00 Z"
        );
        assert!(!chart.wedges[1].path.contains(" 0 1 0 "));
    }

    #[test]
    fn test_dominant_wedge_keeps_distinct_arc_endpoints() {
        let chart = PieChart::build(
            &report(&[(Rgb::new(255, 0, 0), 2_000_000), (Rgb::new(0, 0, 255), 1)]),
            &ChartConfig::default(),
        )
        .unwrap();

        let path = &chart.wedges[0].path;
        assert_eq!(path.matches(" A ").count(), 2);
        // Half-way round is 6 o'clock, well away from the 12 o'clock endpoints
        assert!(path.contains(" 0 0 0 396.00 379.00 A "), "{path}");
        assert!(path.starts_with("M 396.00 235.00 L 396.00 91.00 "), "{path}");
    }

    #[test]
    fn test_single_match_is_full_circle() {
        let chart = PieChart::build(
            &report(&[(Rgb::new(1, 2, 3), 7)]),
            &ChartConfig::default(),
        )
        .unwrap();

        assert_eq!(chart.wedges.len(), 1);
        assert!(chart.wedges[0].full);
        assert!(chart.wedges[0].path.is_empty());
    }

    #[test]
    fn test_legend_rows_follow_report_order() {
        let chart = PieChart::build(
            &report(&[(Rgb::new(0, 255, 0), 1), (Rgb::new(255, 0, 0), 2)]),
            &ChartConfig::default(),
        )
        .unwrap();

        let labels: Vec<&str> = chart.legend.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["#00FF00 (33.3%)", "#FF0000 (66.7%)"]);
        assert!(chart.legend.rows[0].swatch_y < chart.legend.rows[1].swatch_y);
        assert!(chart.legend.x + chart.legend.width <= chart.pie.cx - chart.pie.radius);
    }

    #[test]
    fn test_title_is_escaped() {
        let config = ChartConfig {
            title: "Reds & <Blues>".to_string(),
            ..ChartConfig::default()
        };
        let chart = PieChart::build(&report(&[(Rgb::new(1, 1, 1), 1)]), &config).unwrap();
        assert_eq!(chart.title.text, "Reds &amp; &lt;Blues&gt;");
    }

    #[test]
    fn test_render_svg_with_embedded_template() {
        let chart = PieChart::build(
            &report(&[(Rgb::new(255, 0, 0), 1), (Rgb::new(0, 0, 255), 1)]),
            &ChartConfig::default(),
        )
        .unwrap();

        let svg = chart
            .render_svg(&AssetLoader::chart_template().unwrap())
            .unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Color Distribution in Image"));
        assert!(svg.contains(r##"fill="#FF0000""##));
        assert!(svg.contains("#0000FF (50.0%)"));
        assert_eq!(svg.matches("<path").count(), 2);
    }
}
