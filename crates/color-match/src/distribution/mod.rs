//! Distribution matching
//!
//! Two stages: collapse pixels into a [`ColorHistogram`], then assign each
//! distinct color to at most one reference with [`match_histogram`].

mod count;
mod histogram;
mod matcher;
mod tolerance;

pub use count::{ColorCount, ColorShare};
pub use histogram::ColorHistogram;
pub use matcher::{match_colors, match_histogram};
pub use tolerance::{InvalidTolerance, Tolerance};
