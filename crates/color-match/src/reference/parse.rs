//! Reference color list parsing.

use std::collections::HashSet;

use super::error::{MalformedColorSpec, ParseColorError};
use crate::color::Rgb;

/// Example text shown in an untouched color input box.
///
/// Input equal to this string means "nothing entered yet" and parses to an
/// empty list rather than failing on the `// example:` line.
pub const PLACEHOLDER: &str = "// example:\n#FFDF7F, #FF9F7F, #FFBF00";

const QUOTES: [char; 2] = ['"', '\''];

/// Parse a comma-separated list of `#RRGGBB` colors.
///
/// Each token is trimmed, stripped of surrounding quote characters and then
/// parsed case-insensitively; the `#` prefix is optional. Empty tokens from
/// stray commas are skipped. Duplicates collapse onto their first occurrence,
/// so the result keeps input order and never lists the same color twice.
///
/// Returns an empty list for blank input and for the untouched
/// [`PLACEHOLDER`]. Callers decide whether an empty list is an error.
///
/// # Errors
///
/// The first token that is not a valid color fails the whole parse with
/// [`MalformedColorSpec`].
///
/// # Example
///
/// ```
/// use color_match::{parse_reference_colors, Rgb, PLACEHOLDER};
///
/// let colors = parse_reference_colors("#FFDF7F, \"ff9f7f\",, #ffdf7f").unwrap();
/// assert_eq!(colors, vec![Rgb::new(255, 223, 127), Rgb::new(255, 159, 127)]);
///
/// assert!(parse_reference_colors(PLACEHOLDER).unwrap().is_empty());
///
/// let err = parse_reference_colors("red, #GGGGGG").unwrap_err();
/// assert_eq!(err.token, "red");
/// ```
pub fn parse_reference_colors(text: &str) -> Result<Vec<Rgb>, MalformedColorSpec> {
    let text = text.trim();
    if is_placeholder(text) {
        return Ok(Vec::new());
    }

    let mut seen = HashSet::new();
    let mut colors = Vec::new();

    let tokens = text.split(',').map(str::trim).filter(|t| !t.is_empty());
    for (position, raw) in tokens.enumerate() {
        let unquoted = raw.trim_matches(QUOTES.as_slice()).trim();
        let token = if unquoted.is_empty() { raw } else { unquoted };

        let color = if unquoted.is_empty() {
            Err(ParseColorError::Empty)
        } else {
            unquoted.parse::<Rgb>()
        }
        .map_err(|reason| MalformedColorSpec {
            token: token.to_string(),
            position,
            reason,
        })?;

        if seen.insert(color) {
            colors.push(color);
        }
    }

    Ok(colors)
}

fn is_placeholder(text: &str) -> bool {
    if text.contains('\r') {
        text.replace("\r\n", "\n") == PLACEHOLDER
    } else {
        text == PLACEHOLDER
    }
}
