//! Source-backed descriptor lookups.
//!
//! [`Catalog`] fetches descriptor text from a [`SchemaSource`] and parses the
//! requested group. A descriptor the source does not have yields no rows.

use crate::{
    data::{parser, row::Row, types::DescriptorKind},
    error::Result,
    source::SchemaSource,
};

/// Group with the component level options of a component descriptor.
pub const COMPONENT_PROPERTIES: &str = "componentProperties";

pub struct Catalog<S> {
    source: S,
}

impl<S: SchemaSource> Catalog<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Raw descriptor JSON.
    pub fn json(&self, kind: DescriptorKind, name: &str) -> Option<String> {
        self.source.descriptor_json(kind, name)
    }

    /// Rows of one group of a descriptor.
    pub fn rows(&self, kind: DescriptorKind, name: &str, group: &str, flatten: bool) -> Result<Vec<Row>> {
        let json = self.json(kind, name);
        if json.is_none() {
            debug!("no {kind} descriptor named `{name}`");
        }
        parser::parse_json_schema(group, json.as_deref(), flatten)
    }

    /// One row per attribute of the descriptor's header group.
    pub fn info(&self, kind: DescriptorKind, name: &str) -> Result<Vec<Row>> {
        self.rows(kind, name, kind.header_group(), false)
    }

    /// One row per property of the descriptor.
    pub fn properties(&self, kind: DescriptorKind, name: &str) -> Result<Vec<Row>> {
        self.rows(kind, name, parser::PROPERTIES, true)
    }

    /// One row per component level option.
    pub fn component_properties(&self, name: &str) -> Result<Vec<Row>> {
        self.rows(DescriptorKind::Component, name, COMPONENT_PROPERTIES, true)
    }

    /// Rows of the main configuration descriptor.
    pub fn main_rows(&self) -> Result<Vec<Row>> {
        parser::parse_main_json_schema(self.source.main_json().as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{data::accessor, error::SchemaError, source::StaticSchemaSource};

    const TIMER: &str = r#"{
        "component": {"kind": "component", "scheme": "timer", "consumerOnly": true},
        "componentProperties": {"basicPropertyBinding": {"type": "boolean", "defaultValue": false}},
        "properties": {
            "timerName": {"kind": "path", "type": "string", "required": true},
            "period": {"kind": "parameter", "type": "integer", "defaultValue": 1000}
        }
    }"#;

    fn catalog() -> Catalog<StaticSchemaSource> {
        Catalog::new(
            StaticSchemaSource::new()
                .with_descriptor(DescriptorKind::Component, "timer", TIMER)
                .with_descriptor(DescriptorKind::DataFormat, "broken", "{\"dataformat\": 1}"),
        )
    }

    #[test]
    fn test_component_groups() {
        let catalog = catalog();

        let info = catalog.info(DescriptorKind::Component, "timer").unwrap();
        assert!(accessor::is_component_consumer_only(&info));
        assert!(!accessor::is_component_producer_only(&info));

        let props = catalog.properties(DescriptorKind::Component, "timer").unwrap();
        assert!(accessor::is_property_required(&props, "timername"));
        assert_eq!(accessor::get_property_default_value(&props, "period"), Some("1000"));

        let comp = catalog.component_properties("timer").unwrap();
        assert!(accessor::is_property_boolean(&comp, "basicPropertyBinding"));
    }

    #[test]
    fn test_missing_descriptor_is_empty() {
        let catalog = catalog();
        assert!(catalog.properties(DescriptorKind::Language, "simple").unwrap().is_empty());
        assert!(catalog.main_rows().unwrap().is_empty());
    }

    #[test]
    fn test_parse_failure_propagates() {
        let err = catalog().info(DescriptorKind::DataFormat, "broken").unwrap_err();
        assert!(matches!(err, SchemaError::TypeMismatch { .. }));
    }
}
