//! Descriptor text providers.
//!
//! A [`SchemaSource`] hands out the raw JSON of descriptors by kind and name.
//! A descriptor that does not exist is `None`, never an error.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use crate::data::types::DescriptorKind;

/// Supplies raw descriptor JSON.
pub trait SchemaSource: Send + Sync {
    /// JSON of the named descriptor of the given kind.
    fn descriptor_json(&self, kind: DescriptorKind, name: &str) -> Option<String>;

    /// JSON of the main configuration descriptor.
    fn main_json(&self) -> Option<String>;

    fn component_json(&self, name: &str) -> Option<String> {
        self.descriptor_json(DescriptorKind::Component, name)
    }

    fn data_format_json(&self, name: &str) -> Option<String> {
        self.descriptor_json(DescriptorKind::DataFormat, name)
    }

    fn language_json(&self, name: &str) -> Option<String> {
        self.descriptor_json(DescriptorKind::Language, name)
    }

    fn model_json(&self, name: &str) -> Option<String> {
        self.descriptor_json(DescriptorKind::Model, name)
    }

    fn other_json(&self, name: &str) -> Option<String> {
        self.descriptor_json(DescriptorKind::Other, name)
    }
}

impl<S: SchemaSource + ?Sized> SchemaSource for &S {
    fn descriptor_json(&self, kind: DescriptorKind, name: &str) -> Option<String> {
        (**self).descriptor_json(kind, name)
    }

    fn main_json(&self) -> Option<String> {
        (**self).main_json()
    }
}

const MAIN_FILE: &str = "main.json";

/// Reads descriptors from a directory tree.
///
/// ```text
/// <root>/components/<name>.json
/// <root>/dataformats/<name>.json
/// <root>/languages/<name>.json
/// <root>/models/<name>.json
/// <root>/others/<name>.json
/// <root>/main.json
/// ```
#[derive(Debug, Clone)]
pub struct DirSchemaSource {
    root: PathBuf,
    main: PathBuf,
}

impl DirSchemaSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let main = root.join(MAIN_FILE);
        Self { root, main }
    }

    /// Read the main configuration descriptor from another file.
    pub fn with_main(mut self, main: impl Into<PathBuf>) -> Self {
        self.main = main.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a descriptor is expected at.
    pub fn descriptor_path(&self, kind: DescriptorKind, name: &str) -> PathBuf {
        self.root.join(kind.dir_name()).join(format!("{name}.json"))
    }

    /// Names of all descriptors of a kind, sorted.
    pub fn names(&self, kind: DescriptorKind) -> Vec<String> {
        let dir = self.root.join(kind.dir_name());
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    warn!("cannot list {}: {e}", dir.display());
                }
                return Vec::new();
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().to_string()))
            .collect();
        names.sort();
        names
    }

    fn read(path: &Path) -> Option<String> {
        match fs::read_to_string(path) {
            Ok(content) => {
                debug!("loaded descriptor {}", path.display());
                Some(content)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!("cannot read descriptor {}: {e}", path.display());
                None
            }
        }
    }
}

impl SchemaSource for DirSchemaSource {
    fn descriptor_json(&self, kind: DescriptorKind, name: &str) -> Option<String> {
        Self::read(&self.descriptor_path(kind, name))
    }

    fn main_json(&self) -> Option<String> {
        Self::read(&self.main)
    }
}

/// Descriptors held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSchemaSource {
    descriptors: HashMap<(DescriptorKind, String), String>,
    main: Option<String>,
}

impl StaticSchemaSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_descriptor(
        mut self,
        kind: DescriptorKind,
        name: impl Into<String>,
        json: impl Into<String>,
    ) -> Self {
        self.insert(kind, name, json);
        self
    }

    pub fn with_main(mut self, json: impl Into<String>) -> Self {
        self.main = Some(json.into());
        self
    }

    pub fn insert(&mut self, kind: DescriptorKind, name: impl Into<String>, json: impl Into<String>) {
        self.descriptors.insert((kind, name.into()), json.into());
    }
}

impl SchemaSource for StaticSchemaSource {
    fn descriptor_json(&self, kind: DescriptorKind, name: &str) -> Option<String> {
        self.descriptors.get(&(kind, name.to_string())).cloned()
    }

    fn main_json(&self) -> Option<String> {
        self.main.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_source() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("components")).unwrap();
        fs::write(dir.path().join("components/aws-lambda.json"), "{}").unwrap();
        fs::write(dir.path().join("components/timer.json"), "{}").unwrap();
        fs::write(dir.path().join("components/README.md"), "").unwrap();
        fs::write(dir.path().join("main.json"), r#"{"properties": []}"#).unwrap();

        let source = DirSchemaSource::new(dir.path());
        assert_eq!(source.component_json("aws-lambda").as_deref(), Some("{}"));
        assert_eq!(source.component_json("missing"), None);
        assert_eq!(source.data_format_json("aws-lambda"), None);
        assert!(source.main_json().is_some());
        assert_eq!(source.names(DescriptorKind::Component), vec!["aws-lambda", "timer"]);
        assert!(source.names(DescriptorKind::Language).is_empty());
    }

    #[test]
    fn test_dir_source_main_override() {
        let dir = tempfile::tempdir().unwrap();
        let main = dir.path().join("main-configuration.json");
        fs::write(&main, "{}").unwrap();

        let source = DirSchemaSource::new(dir.path());
        assert_eq!(source.main_json(), None);
        let source = source.with_main(&main);
        assert_eq!(source.main_json().as_deref(), Some("{}"));
    }

    #[test]
    fn test_static_source() {
        let source = StaticSchemaSource::new()
            .with_descriptor(DescriptorKind::Language, "simple", "{\"language\": {}}")
            .with_main("{}");
        assert!(source.language_json("simple").is_some());
        assert!(source.component_json("simple").is_none());
        assert!(source.other_json("simple").is_none());
        assert_eq!(source.main_json().as_deref(), Some("{}"));
    }
}
