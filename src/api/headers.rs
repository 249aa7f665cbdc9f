//! Header parsing utilities for analysis requests.

use axum::http::HeaderMap;
use std::fmt::Display;
use std::str::FromStr;

use crate::error::ApiError;

/// Reference color list, e.g. `#FF0000, #00FF00`
pub const COLORS_HEADER: &str = "Colors";
/// Optional near-match tolerance override
pub const SENSITIVITY_HEADER: &str = "Sensitivity";

/// Extension trait for convenient header parsing.
pub trait HeaderMapExt {
    /// Get a header value as a string, or return an error if missing.
    fn require_str(&self, name: &'static str) -> Result<&str, ApiError>;

    /// Parse an optional header, rejecting values that are present but invalid.
    fn parse_optional<T>(&self, name: &'static str) -> Result<Option<T>, ApiError>
    where
        T: FromStr,
        T::Err: Display;
}

impl HeaderMapExt for HeaderMap {
    fn require_str(&self, name: &'static str) -> Result<&str, ApiError> {
        let value = self.get(name).ok_or(ApiError::MissingHeader(name))?;
        value.to_str().map_err(|e| ApiError::InvalidHeader {
            name,
            reason: e.to_string(),
        })
    }

    fn parse_optional<T>(&self, name: &'static str) -> Result<Option<T>, ApiError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let Some(value) = self.get(name) else {
            return Ok(None);
        };
        let text = value.to_str().map_err(|e| ApiError::InvalidHeader {
            name,
            reason: e.to_string(),
        })?;
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        text.parse()
            .map(Some)
            .map_err(|e: T::Err| ApiError::InvalidHeader {
                name,
                reason: format!("{text:?}: {e}"),
            })
    }
}
