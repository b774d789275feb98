//! Tool configuration.
//!
//! Configuration is read from a TOML file, `.metactl.toml` by default:
//!
//! ```toml
//! root = "${env:HOME}/catalog"
//! main = "${env:HOME}/catalog/camel-main-configuration-metadata.json"
//! ```
//!
//! `${env:VAR}` placeholders are expanded in both paths.

use std::path::{Path, PathBuf};

use anyhow::Context;
use propmeta::DirSchemaSource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::utils::replace_env_placeholders;

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = ".metactl.toml";

/// Where descriptors are read from.
#[derive(Default, Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Directory holding `components/`, `dataformats/`, `languages/`,
    /// `models/` and `others/`. Defaults to the working directory.
    pub root: Option<String>,
    /// Main configuration descriptor. Defaults to `<root>/main.json`.
    pub main: Option<String>,
}

impl ToolConfig {
    /// Load configuration from `path`, or from [`DEFAULT_CONFIG_PATH`].
    ///
    /// A missing default file yields the default configuration; a missing
    /// explicitly given file is an error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let explicit = path.is_some();
        let path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), Path::to_path_buf);

        if !explicit && !path.exists() {
            debug!("no {} found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Apply command line overrides.
    pub fn with_overrides(mut self, root: Option<String>, main: Option<String>) -> Self {
        if root.is_some() {
            self.root = root;
        }
        if main.is_some() {
            self.main = main;
        }
        self
    }

    /// Build the descriptor source this configuration points at.
    pub fn source(&self) -> DirSchemaSource {
        let root = self
            .root
            .as_deref()
            .map(replace_env_placeholders)
            .unwrap_or_else(|| ".".to_string());

        let source = DirSchemaSource::new(root);
        match self.main.as_deref() {
            Some(main) => source.with_main(replace_env_placeholders(main)),
            None => source,
        }
    }

    /// JSON Schema of the configuration file.
    pub fn schema_json() -> anyhow::Result<String> {
        let schema = schemars::schema_for!(ToolConfig);
        Ok(serde_json::to_string_pretty(&schema)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_explicit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metactl.toml");
        std::fs::write(&path, "root = \"/srv/catalog\"\n").unwrap();

        let config = ToolConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config.root.as_deref(), Some("/srv/catalog"));
        assert_eq!(config.main, None);
        assert_eq!(config.source().root(), Path::new("/srv/catalog"));
    }

    #[test]
    fn test_load_missing_explicit() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ToolConfig::load(Some(dir.path().join("none.toml").as_path())).is_err());
    }

    #[test]
    fn test_load_unknown_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metactl.toml");
        std::fs::write(&path, "roots = \"x\"\n").unwrap();
        assert!(ToolConfig::load(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = ToolConfig {
            root: Some("a".into()),
            main: Some("a/main.json".into()),
        }
        .with_overrides(Some("b".into()), None);
        assert_eq!(config.root.as_deref(), Some("b"));
        assert_eq!(config.main.as_deref(), Some("a/main.json"));
    }

    #[test]
    fn test_schema_json() {
        let schema = ToolConfig::schema_json().unwrap();
        assert!(schema.contains("\"root\""));
        assert!(schema.contains("\"main\""));
    }
}
