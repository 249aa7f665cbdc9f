//! Colortally - color distribution analyzer
//!
//! Counts how much of an image each reference color covers, with an
//! optional near-match tolerance, and renders the result as a pie chart.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
pub mod services;
