//! Distinct-color histogram of an image.

use std::collections::HashMap;

use crate::color::Rgb;

/// Multiset of pixel colors, stored as distinct color → occurrence count.
///
/// Pixel order and position are discarded; only the multiplicities survive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorHistogram {
    counts: HashMap<Rgb, u64>,
    total: u64,
}

impl ColorHistogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a histogram from interleaved `R, G, B` bytes.
    ///
    /// Trailing bytes that do not form a full pixel are ignored.
    ///
    /// ```
    /// use color_match::{ColorHistogram, Rgb};
    ///
    /// let hist = ColorHistogram::from_rgb_bytes(&[255, 0, 0, 255, 0, 0, 0, 0, 255]);
    /// assert_eq!(hist.total_pixels(), 3);
    /// assert_eq!(hist.distinct_colors(), 2);
    /// assert_eq!(hist.count(Rgb::new(255, 0, 0)), 2);
    /// ```
    pub fn from_rgb_bytes(bytes: &[u8]) -> Self {
        bytes
            .chunks_exact(3)
            .map(|px| Rgb::new(px[0], px[1], px[2]))
            .collect()
    }

    /// Record one pixel.
    #[inline]
    pub fn add(&mut self, color: Rgb) {
        self.add_count(color, 1);
    }

    /// Record `n` pixels of the same color.
    pub fn add_count(&mut self, color: Rgb, n: u64) {
        if n == 0 {
            return;
        }
        *self.counts.entry(color).or_insert(0) += n;
        self.total += n;
    }

    /// Total number of pixels recorded.
    #[inline]
    pub fn total_pixels(&self) -> u64 {
        self.total
    }

    /// Number of distinct colors.
    #[inline]
    pub fn distinct_colors(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Occurrences of `color` (0 if absent).
    #[inline]
    pub fn count(&self, color: Rgb) -> u64 {
        self.counts.get(&color).copied().unwrap_or(0)
    }

    /// Iterate distinct colors with their multiplicities, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Rgb, u64)> + '_ {
        self.counts.iter().map(|(&c, &n)| (c, n))
    }
}

impl FromIterator<Rgb> for ColorHistogram {
    fn from_iter<I: IntoIterator<Item = Rgb>>(iter: I) -> Self {
        let mut hist = Self::new();
        hist.extend(iter);
        hist
    }
}

impl Extend<Rgb> for ColorHistogram {
    fn extend<I: IntoIterator<Item = Rgb>>(&mut self, iter: I) {
        for color in iter {
            self.add(color);
        }
    }
}
