//! Color types
//!
//! Only 8-bit sRGB triples are modelled; no color space conversion happens
//! anywhere in the matching pipeline.

mod rgb;

pub use rgb::Rgb;
