use chrono::{DateTime, Utc};
use color_match::{ColorCount, ColorHistogram, Rgb, Tolerance};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use utoipa::ToSchema;

/// Result of one color distribution analysis
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DistributionReport {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// width × height
    pub total_pixels: u64,
    /// Number of distinct colors in the image
    pub distinct_colors: usize,
    /// Tolerance used (0 = exact match)
    pub tolerance: f64,
    /// Reference colors searched for, in input order
    pub references: Vec<String>,
    /// References with at least one matching pixel, in input order
    pub matches: Vec<ColorShareEntry>,
    /// Sum of all match counts
    pub matched_pixels: u64,
    pub generated_at: DateTime<Utc>,
}

/// One reference color's matched pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ColorShareEntry {
    /// Reference color as #RRGGBB
    pub color: String,
    /// Matched pixel count
    pub count: u64,
    /// Share of matched pixels, 0-100, unrounded
    pub percentage: f64,
}

impl DistributionReport {
    pub fn new(
        width: u32,
        height: u32,
        histogram: &ColorHistogram,
        references: &[Rgb],
        tolerance: Tolerance,
        counts: &ColorCount,
    ) -> Self {
        let matches = counts
            .shares()
            .into_iter()
            .map(|share| ColorShareEntry {
                color: share.color.to_hex(),
                count: share.count,
                percentage: share.percentage,
            })
            .collect();

        Self {
            width,
            height,
            total_pixels: histogram.total_pixels(),
            distinct_colors: histogram.distinct_colors(),
            tolerance: tolerance.value(),
            references: references.iter().map(|c| c.to_hex()).collect(),
            matches,
            matched_pixels: counts.total(),
            generated_at: Utc::now(),
        }
    }

    /// True when no pixel matched any reference.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// User-facing message for an empty result.
    pub fn no_match_message(&self) -> String {
        format!(
            "No matching colors were found in the image within a sensitivity threshold of {}.",
            self.tolerance
        )
    }

    /// Matched pixels as a percentage of the whole image.
    pub fn coverage(&self) -> f64 {
        if self.total_pixels == 0 {
            0.0
        } else {
            100.0 * self.matched_pixels as f64 / self.total_pixels as f64
        }
    }

    /// `#RRGGBB (12.3%)` labels, as shown in the chart legend.
    pub fn labels(&self, decimals: usize) -> Vec<String> {
        self.matches
            .iter()
            .map(|m| format!("{} ({:.*}%)", m.color, decimals, m.percentage))
            .collect()
    }

    /// Plain-text table for terminal output.
    pub fn to_table(&self, decimals: usize) -> String {
        if self.is_empty() {
            return self.no_match_message();
        }

        let count_width = self
            .matches
            .iter()
            .map(|m| m.count.to_string().len())
            .max()
            .unwrap_or(0)
            .max("Pixels".len());

        let mut out = String::new();
        let _ = writeln!(out, "{:<8} {:>count_width$}  Share", "Color", "Pixels");
        for m in &self.matches {
            let _ = writeln!(
                out,
                "{:<8} {:>count_width$}  {:>5.*}%",
                m.color, m.count, decimals, m.percentage
            );
        }
        let _ = write!(
            out,
            "Matched {} of {} pixels ({:.*}%) at sensitivity {}",
            self.matched_pixels,
            self.total_pixels,
            decimals,
            self.coverage(),
            self.tolerance
        );
        out
    }
}
