//! Matcher output: per-reference pixel counts and derived shares.

use crate::color::Rgb;

/// Pixel counts per reference color.
///
/// Entries keep the order in which the references were supplied and only
/// references with a strictly positive count are present. A `ColorCount` is
/// created fresh by each matcher call and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorCount {
    entries: Vec<(Rgb, u64)>,
}

/// One reference color's share of the matched pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorShare {
    pub color: Rgb,
    pub count: u64,
    /// `100 * count / total matched`, unrounded
    pub percentage: f64,
}

impl ColorCount {
    /// Pair references with tallies, dropping zero counts.
    pub(crate) fn from_tallies(references: &[Rgb], tallies: Vec<u64>) -> Self {
        let entries = references
            .iter()
            .copied()
            .zip(tallies)
            .filter(|&(_, n)| n > 0)
            .collect();
        Self { entries }
    }

    /// Pixel count for `color`, or `None` if it matched nothing.
    pub fn get(&self, color: Rgb) -> Option<u64> {
        self.entries
            .iter()
            .find(|(c, _)| *c == color)
            .map(|&(_, n)| n)
    }

    /// Iterate `(reference, count)` pairs in reference order.
    pub fn iter(&self) -> impl Iterator<Item = (Rgb, u64)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of references that matched at least one pixel.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no pixel matched any reference.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts (matched pixels).
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, n)| n).sum()
    }

    /// Each reference's percentage of the matched pixels.
    ///
    /// Percentages are relative to the matched total, not the image size, and
    /// are left unrounded; formatting them to a fixed precision may make the
    /// displayed values not add up to exactly 100.
    ///
    /// ```
    /// use color_match::{match_colors, Rgb, Tolerance};
    ///
    /// let pixels = [Rgb::new(1, 1, 1), Rgb::new(2, 2, 2), Rgb::new(2, 2, 2), Rgb::new(9, 9, 9)];
    /// let refs = [Rgb::new(1, 1, 1), Rgb::new(2, 2, 2)];
    /// let shares = match_colors(pixels, &refs, Tolerance::EXACT).shares();
    ///
    /// assert!((shares[0].percentage - 33.333).abs() < 0.01);
    /// assert!((shares[1].percentage - 66.666).abs() < 0.01);
    /// ```
    pub fn shares(&self) -> Vec<ColorShare> {
        let total = self.total();
        if total == 0 {
            return Vec::new();
        }
        self.entries
            .iter()
            .map(|&(color, count)| ColorShare {
                color,
                count,
                percentage: 100.0 * count as f64 / total as f64,
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a ColorCount {
    type Item = (Rgb, u64);
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, (Rgb, u64)>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().copied()
    }
}
