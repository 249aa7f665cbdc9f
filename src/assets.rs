//! Asset loading with embedded fallbacks
//!
//! Two assets ship inside the binary: the default `config.yaml` and the
//! `chart.svg` Tera template. The config can be overridden on disk:
//!
//! - If `CONFIG_FILE` is NOT set: use the embedded config
//! - If `CONFIG_FILE` IS set and the file exists: read it from disk
//! - If `CONFIG_FILE` IS set but missing: fall back to the embedded config

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded default assets
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "*.yaml"]
#[include = "*.svg"]
struct EmbeddedAssets;

const CONFIG_NAME: &str = "config.yaml";
const CHART_TEMPLATE_NAME: &str = "chart.svg";

/// Where the configuration was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Embedded,
    File(PathBuf),
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Asset loader with optional filesystem override for the config file
pub struct AssetLoader {
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader.
    ///
    /// `config_file` should be `Some` only if `CONFIG_FILE` was set.
    pub fn new(config_file: Option<PathBuf>) -> Self {
        Self { config_file }
    }

    /// Create a loader from the `CONFIG_FILE` environment variable.
    pub fn from_env() -> Self {
        Self::new(std::env::var("CONFIG_FILE").ok().map(PathBuf::from))
    }

    /// The configured external config path, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Where [`read_config_string`](Self::read_config_string) will read from
    pub fn config_source(&self) -> ConfigSource {
        match self.config_file {
            Some(ref path) if path.exists() => ConfigSource::File(path.clone()),
            _ => ConfigSource::Embedded,
        }
    }

    /// Read the configuration YAML, preferring the external file.
    pub fn read_config_string(&self) -> io::Result<String> {
        if let ConfigSource::File(path) = self.config_source() {
            tracing::trace!(path = %path.display(), "Loading config from filesystem");
            return fs::read_to_string(path);
        }
        Self::embedded_string(CONFIG_NAME)
    }

    /// The embedded pie chart template
    pub fn chart_template() -> io::Result<String> {
        Self::embedded_string(CHART_TEMPLATE_NAME)
    }

    /// List embedded asset names
    pub fn list_embedded() -> Vec<String> {
        let mut names: Vec<String> = EmbeddedAssets::iter().map(|n| n.into_owned()).collect();
        names.sort();
        names
    }

    /// Write the embedded default config to the configured path
    /// (or `./config.yaml` when `CONFIG_FILE` is unset).
    pub fn init(&self, force: bool) -> io::Result<InitReport> {
        let target = self
            .config_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(CONFIG_NAME));
        let mut report = InitReport::default();
        let shown = target.display().to_string();

        if target.exists() && !force {
            report.skipped.push(shown);
            return Ok(report);
        }

        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, Self::embedded_bytes(CONFIG_NAME)?)?;
        tracing::info!(path = %shown, "Wrote default config");
        report.written.push(shown);

        Ok(report)
    }

    fn embedded_bytes(name: &str) -> io::Result<Cow<'static, [u8]>> {
        EmbeddedAssets::get(name)
            .map(|f| f.data)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("embedded asset not found: {name}"),
                )
            })
    }

    fn embedded_string(name: &str) -> io::Result<String> {
        let bytes = Self::embedded_bytes(name)?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_assets_present() {
        let names = AssetLoader::list_embedded();
        assert_eq!(names, vec!["chart.svg".to_string(), "config.yaml".to_string()]);
    }

    #[test]
    fn test_reads_embedded_config_without_override() {
        let loader = AssetLoader::new(None);
        assert_eq!(loader.config_source(), ConfigSource::Embedded);
        let yaml = loader.read_config_string().unwrap();
        assert!(yaml.contains("sensitivity:"));
    }

    #[test]
    fn test_missing_override_falls_back_to_embedded() {
        let loader = AssetLoader::new(Some(PathBuf::from("/nonexistent/colortally.yaml")));
        assert_eq!(loader.config_source(), ConfigSource::Embedded);
        assert!(loader.read_config_string().is_ok());
    }

    #[test]
    fn test_reads_override_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.yaml");
        fs::write(&path, "chart:\n  width: 800\n").unwrap();

        let loader = AssetLoader::new(Some(path.clone()));
        assert_eq!(loader.config_source(), ConfigSource::File(path));
        assert_eq!(loader.read_config_string().unwrap(), "chart:\n  width: 800\n");
    }

    #[test]
    fn test_init_writes_then_skips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let loader = AssetLoader::new(Some(path.clone()));

        let report = loader.init(false).unwrap();
        assert_eq!(report.written.len(), 1);
        assert!(path.exists());

        let report = loader.init(false).unwrap();
        assert!(report.written.is_empty());
        assert_eq!(report.skipped.len(), 1);

        let report = loader.init(true).unwrap();
        assert_eq!(report.written.len(), 1);
    }

    #[test]
    fn test_chart_template_embedded() {
        let template = AssetLoader::chart_template().unwrap();
        assert!(template.contains("{{ legend.x }}"));
    }
}
