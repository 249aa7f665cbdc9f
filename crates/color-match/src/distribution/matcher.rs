//! First-match-wins distribution matching.

use super::count::ColorCount;
use super::histogram::ColorHistogram;
use super::tolerance::Tolerance;
use crate::color::Rgb;

/// Count how many pixels of `histogram` belong to each reference color.
///
/// Every distinct color is compared against `references` in order and its full
/// multiplicity goes to the first reference it matches; it is never split or
/// counted twice. References that collect no pixels are absent from the
/// result, as is everything when either input is empty.
///
/// If `references` repeats a color, only the first copy can ever match.
pub fn match_histogram(
    histogram: &ColorHistogram,
    references: &[Rgb],
    tolerance: Tolerance,
) -> ColorCount {
    if references.is_empty() || histogram.is_empty() {
        return ColorCount::default();
    }

    let mut tallies = vec![0u64; references.len()];

    if tolerance.is_exact() {
        // Equality regions never overlap, so a direct lookup per reference
        // gives the same assignment as scanning every distinct color.
        for (i, &reference) in references.iter().enumerate() {
            if references[..i].contains(&reference) {
                continue;
            }
            tallies[i] = histogram.count(reference);
        }
    } else {
        for (color, n) in histogram.iter() {
            if let Some(i) = references
                .iter()
                .position(|&reference| tolerance.matches(color, reference))
            {
                tallies[i] += n;
            }
        }
    }

    ColorCount::from_tallies(references, tallies)
}

/// Collapse `pixels` into a [`ColorHistogram`] and run [`match_histogram`].
///
/// ```
/// use color_match::{match_colors, Rgb, Tolerance};
///
/// let mut pixels = vec![Rgb::new(255, 0, 0); 10];
/// pixels.extend(vec![Rgb::new(0, 255, 0); 5]);
///
/// let counts = match_colors(pixels, &[Rgb::new(255, 0, 0)], Tolerance::EXACT);
/// assert_eq!(counts.get(Rgb::new(255, 0, 0)), Some(10));
/// assert_eq!(counts.len(), 1);
/// ```
pub fn match_colors<I>(pixels: I, references: &[Rgb], tolerance: Tolerance) -> ColorCount
where
    I: IntoIterator<Item = Rgb>,
{
    let histogram: ColorHistogram = pixels.into_iter().collect();
    match_histogram(&histogram, references, tolerance)
}
