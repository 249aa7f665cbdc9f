//! Error types for reference color parsing

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing a single hex color string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Nothing left after stripping whitespace and the optional '#'
    Empty,
    /// Wrong number of hex digits (must be exactly 6)
    InvalidLength(usize),
    /// A character that is not a hexadecimal digit
    InvalidDigit(char),
    /// Hex conversion failed
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::Empty => write!(f, "empty color code"),
            ParseColorError::InvalidLength(len) => {
                write!(f, "expected 6 hex digits, found {}", len)
            }
            ParseColorError::InvalidDigit(c) => write!(f, "invalid hex digit {:?}", c),
            ParseColorError::InvalidHex(err) => write!(f, "invalid hex value: {}", err),
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            _ => None,
        }
    }
}

/// A reference color token failed `#RRGGBB` validation.
///
/// Carries the offending token (after whitespace and quote stripping) so the
/// caller can tell the user exactly what to fix. The whole parse fails; no
/// partial reference set is ever returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedColorSpec {
    /// The token as it appeared after trimming
    pub token: String,
    /// Zero-based position of the token among non-empty tokens
    pub position: usize,
    /// Why the token was rejected
    pub reason: ParseColorError,
}

impl fmt::Display for MalformedColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "malformed color {:?} (expected #RRGGBB): {}",
            self.token, self.reason
        )
    }
}

impl std::error::Error for MalformedColorSpec {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.reason)
    }
}
