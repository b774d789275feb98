//! Rendering of rows and property answers.

use std::fmt::Write as _;

use colored::Colorize;
use propmeta::{Row, data::accessor};
use serde::Serialize;

/// Everything the accessors know about one property.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyReport {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Option<String>,
    pub java_type: Option<String>,
    pub kind: Option<String>,
    pub default_value: Option<String>,
    pub enums: Vec<String>,
    pub prefix: Option<String>,
    pub required: bool,
    pub deprecated: bool,
    pub multi_value: bool,
    pub consumer_only: bool,
    pub producer_only: bool,
}

impl PropertyReport {
    /// Describe the property an option key refers to.
    ///
    /// The key may carry optional prefixes or be a multi-value key.
    pub fn resolve(rows: &[Row], key: &str) -> Option<Self> {
        let name = accessor::resolve_property(rows, key)?.name()?;
        let owned = |v: Option<&str>| v.map(str::to_string);

        Some(Self {
            name: name.to_string(),
            ty: owned(accessor::get_property_type(rows, name)),
            java_type: owned(accessor::get_property_java_type(rows, name)),
            kind: owned(accessor::get_property_kind(rows, name)),
            default_value: owned(accessor::get_property_default_value(rows, name)),
            enums: accessor::get_property_enum(rows, name)
                .map(|e| e.split(',').map(str::to_string).collect())
                .unwrap_or_default(),
            prefix: owned(accessor::get_property_prefix(rows, name)),
            required: accessor::is_property_required(rows, name),
            deprecated: accessor::is_property_deprecated(rows, name),
            multi_value: accessor::is_property_multi_value(rows, name),
            consumer_only: accessor::is_property_consumer_only(rows, name),
            producer_only: accessor::is_property_producer_only(rows, name),
        })
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.name.bold());
        let fields = [
            ("type", self.ty.as_deref()),
            ("javaType", self.java_type.as_deref()),
            ("kind", self.kind.as_deref()),
            ("default", self.default_value.as_deref()),
            ("prefix", self.prefix.as_deref()),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                let _ = writeln!(out, "  {:<10} {value}", key.cyan());
            }
        }
        if !self.enums.is_empty() {
            let _ = writeln!(out, "  {:<10} {}", "enum".cyan(), self.enums.join(" | "));
        }

        let flags: Vec<&str> = [
            (self.required, "required"),
            (self.deprecated, "deprecated"),
            (self.multi_value, "multi-value"),
            (self.consumer_only, "consumer-only"),
            (self.producer_only, "producer-only"),
        ]
        .into_iter()
        .filter_map(|(set, label)| set.then_some(label))
        .collect();
        if !flags.is_empty() {
            let _ = writeln!(out, "  {:<10} {}", "flags".cyan(), flags.join(", ").yellow());
        }
        out
    }
}

/// Render rows, one line each: the name first, then remaining attributes.
pub fn render_rows(rows: &[Row]) -> String {
    let mut out = String::new();
    for row in rows {
        let mut line = match row.name() {
            Some(name) => format!("{}", name.bold()),
            None => String::new(),
        };
        for (key, value) in row.iter().filter(|(k, _)| *k != "name") {
            if !line.is_empty() {
                line.push(' ');
            }
            let _ = write!(line, "{}={value}", key.cyan());
        }
        out.push_str(&line);
        out.push('\n');
    }
    out
}
