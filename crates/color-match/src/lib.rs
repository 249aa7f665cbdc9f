//! color-match: reference color parsing and pixel distribution matching
//!
//! This library answers one question about an image: how many of its pixels
//! belong to each of a small set of reference colors, optionally allowing
//! near-matches within a Euclidean RGB tolerance.
//!
//! # Quick Start
//!
//! ```
//! use color_match::{match_colors, parse_reference_colors, Rgb, Tolerance};
//!
//! let references = parse_reference_colors("#FF0000, \"#00ff00\"").unwrap();
//! let pixels = [Rgb::new(255, 0, 0), Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)];
//!
//! let counts = match_colors(pixels, &references, Tolerance::EXACT);
//!
//! assert_eq!(counts.get(Rgb::new(255, 0, 0)), Some(2));
//! assert_eq!(counts.get(Rgb::new(0, 255, 0)), None);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! raw text ──> parse_reference_colors ──> Vec<Rgb> ─┐
//!                                                   ├──> match_histogram ──> ColorCount ──> shares()
//! pixels ────> ColorHistogram (distinct colors) ────┘
//! ```
//!
//! Images routinely hold millions of pixels but only a handful of distinct
//! colors, so the matcher first collapses the pixel population into a
//! [`ColorHistogram`] and only compares distinct colors against references.
//!
//! # Assignment Rule
//!
//! A distinct color is assigned to the **first** reference, in the order the
//! references were supplied, whose match predicate it satisfies. This is not
//! "nearest wins": when two tolerance spheres overlap, the earlier reference
//! takes the pixels even if the later one is closer.
//!
//! ```
//! use color_match::{match_colors, Rgb, Tolerance};
//!
//! let pixels = vec![Rgb::new(10, 10, 10); 7];
//! let references = [Rgb::new(0, 0, 0), Rgb::new(20, 20, 20)];
//!
//! let counts = match_colors(pixels, &references, Tolerance::new(20.0).unwrap());
//!
//! assert_eq!(counts.get(Rgb::new(0, 0, 0)), Some(7));
//! assert_eq!(counts.get(Rgb::new(20, 20, 20)), None);
//! ```
//!
//! Everything in this crate is pure and allocation-local, so independent
//! calls may run concurrently on separate threads.

pub mod color;
pub mod distribution;
pub mod reference;


pub use color::Rgb;
pub use distribution::{
    match_colors, match_histogram, ColorCount, ColorHistogram, ColorShare, InvalidTolerance,
    Tolerance,
};
pub use reference::{parse_reference_colors, MalformedColorSpec, ParseColorError, PLACEHOLDER};
