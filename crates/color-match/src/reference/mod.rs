//! Reference color input
//!
//! Turns free-form user text (`#RRGGBB, #RRGGBB, ...`) into an ordered list of
//! [`Rgb`](crate::Rgb) values, with error types that name the offending token.

mod error;
mod parse;

pub use error::{MalformedColorSpec, ParseColorError};
pub use parse::{parse_reference_colors, PLACEHOLDER};
