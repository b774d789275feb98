//! Subcommands and their execution.
//!
//! Every command renders its answer into a string; the binary only prints it.

use anyhow::{Context, bail};
use clap::Subcommand;
use colored::Colorize;
use propmeta::{Catalog, DescriptorKind, DirSchemaSource, Row, SchemaSource, data::accessor};
use serde::Serialize;

use crate::{
    config::ToolConfig,
    report::{PropertyReport, render_rows},
};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List descriptor names of a kind
    List { kind: DescriptorKind },
    /// Print the rows of one descriptor group
    Rows {
        kind: DescriptorKind,
        name: String,
        #[arg(short, long, default_value = "properties")]
        group: String,
        /// Read the group as a single record, one row per attribute
        #[arg(long)]
        single: bool,
    },
    /// Print the header attributes of a descriptor
    Info { kind: DescriptorKind, name: String },
    /// Print property names of a descriptor
    Names { kind: DescriptorKind, name: String },
    /// Describe the property an option key refers to
    Describe {
        kind: DescriptorKind,
        name: String,
        key: String,
    },
    /// Print main configuration rows, or describe one option
    Main { key: Option<String> },
    /// Print the JSON Schema of the configuration file
    ConfigSchema,
}

/// Run a command against the descriptors `config` points at.
///
/// # Errors
///
/// Returns an error when a named descriptor does not exist, a key does not
/// resolve to a property, or a descriptor fails to parse.
pub fn execute(config: &ToolConfig, command: Command, json: bool) -> anyhow::Result<String> {
    let catalog = Catalog::new(config.source());
    debug!("reading descriptors from {}", catalog.source().root().display());

    match command {
        Command::ConfigSchema => Ok(format!("{}\n", ToolConfig::schema_json()?)),
        Command::List { kind } => {
            let names = catalog.source().names(kind);
            render_names(names.iter().map(String::as_str), json)
        }
        Command::Rows {
            kind,
            name,
            group,
            single,
        } => {
            require(&catalog, kind, &name)?;
            let rows = catalog.rows(kind, &name, &group, !single)?;
            rows_output(&rows, json)
        }
        Command::Info { kind, name } => {
            require(&catalog, kind, &name)?;
            let rows = catalog.info(kind, &name)?;
            let mut out = rows_output(&rows, json)?;
            if !json {
                out.push_str(&component_flags(&rows));
            }
            Ok(out)
        }
        Command::Names { kind, name } => {
            require(&catalog, kind, &name)?;
            let rows = catalog.properties(kind, &name)?;
            let names = accessor::get_names(&rows);
            render_names(names.iter().copied(), json)
        }
        Command::Describe { kind, name, key } => {
            require(&catalog, kind, &name)?;
            let rows = catalog.properties(kind, &name)?;
            let report = PropertyReport::resolve(&rows, &key)
                .with_context(|| format!("`{key}` is not an option of {kind} `{name}`"))?;
            report_output(&report, json)
        }
        Command::Main { key } => {
            if catalog.source().main_json().is_none() {
                bail!("no main configuration descriptor found");
            }
            let rows = catalog.main_rows()?;
            match key {
                Some(key) => {
                    let report = PropertyReport::resolve(&rows, &key)
                        .with_context(|| format!("`{key}` is not a main configuration option"))?;
                    report_output(&report, json)
                }
                None => rows_output(&rows, json),
            }
        }
    }
}

fn require(catalog: &Catalog<DirSchemaSource>, kind: DescriptorKind, name: &str) -> anyhow::Result<()> {
    if catalog.json(kind, name).is_none() {
        bail!(
            "no {kind} descriptor named `{name}` at {}",
            catalog.source().descriptor_path(kind, name).display()
        );
    }
    Ok(())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
}

fn render_names<'a>(names: impl Iterator<Item = &'a str>, json: bool) -> anyhow::Result<String> {
    if json {
        return to_json(&names.collect::<Vec<_>>());
    }
    Ok(names.map(|n| format!("{n}\n")).collect())
}

fn rows_output(rows: &[Row], json: bool) -> anyhow::Result<String> {
    if json { to_json(rows) } else { Ok(render_rows(rows)) }
}

fn report_output(report: &PropertyReport, json: bool) -> anyhow::Result<String> {
    if json { to_json(report) } else { Ok(report.render()) }
}

fn component_flags(rows: &[Row]) -> String {
    let flags = [
        ("consumer only", accessor::is_component_consumer_only(rows)),
        ("producer only", accessor::is_component_producer_only(rows)),
        ("lenient properties", accessor::is_component_lenient_properties(rows)),
    ];
    flags
        .into_iter()
        .map(|(label, set)| {
            let value = if set { "yes".green() } else { "no".dimmed() };
            format!("{:<20} {value}\n", label.cyan())
        })
        .collect()
}
