//! 8-bit RGB color triple
//!
//! [`Rgb`] is both the pixel sample type and the reference color type. It is
//! `Copy`, hashable and totally ordered so it can key a histogram directly.

use std::fmt;
use std::str::FromStr;

use crate::reference::ParseColorError;

/// An immutable 8-bit RGB color.
///
/// Two colors are equal iff all three channels are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Squared Euclidean distance in RGB space.
    ///
    /// The maximum value is `3 * 255^2 = 195075`, which fits in a `u32`.
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = self.r.abs_diff(other.r) as u32;
        let dg = self.g.abs_diff(other.g) as u32;
        let db = self.b.abs_diff(other.b) as u32;
        dr * dr + dg * dg + db * db
    }

    /// Euclidean distance in RGB space: `sqrt(dR² + dG² + dB²)`.
    ///
    /// # Example
    ///
    /// ```
    /// use color_match::Rgb;
    ///
    /// let d = Rgb::new(0, 0, 0).distance(Rgb::new(3, 4, 0));
    /// assert_eq!(d, 5.0);
    /// ```
    #[inline]
    pub fn distance(self, other: Rgb) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }

    /// Upper-case `#RRGGBB` representation.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a 6-digit hex string.
    ///
    /// Accepts `#RRGGBB` and `RRGGBB`, case-insensitive. Leading and trailing
    /// whitespace is trimmed. Shorthand `#RGB` is rejected.
    ///
    /// ```
    /// use color_match::Rgb;
    ///
    /// let c: Rgb = "#ffdf7f".parse().unwrap();
    /// assert_eq!(c, Rgb::new(255, 223, 127));
    /// assert!("#FFF".parse::<Rgb>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);

        if digits.is_empty() {
            return Err(ParseColorError::Empty);
        }

        // Check every char before slicing: from_str_radix tolerates a leading
        // '+' and byte slicing panics on multi-byte chars.
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(bad));
        }

        if digits.len() != 6 {
            return Err(ParseColorError::InvalidLength(digits.len()));
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}
