//! # metactl
//!
//! Command line inspection of component property metadata descriptors.
//!
//! `metactl` reads descriptors from a directory tree through
//! [`propmeta::DirSchemaSource`] and prints parsed rows and typed property
//! answers, as documentation generators and configuration tooling would
//! consume them.
//!
//! ## Modules
//!
//! - [`commands`] - Subcommands and their execution
//! - [`config`] - Tool configuration file
//! - [`report`] - Rendering of rows and property answers
//! - [`utils`] - Common helper functions

/// Subcommands and their execution.
pub mod commands;

/// Tool configuration file handling.
pub mod config;

/// Rendering of rows and property answers.
pub mod report;

/// Common helper functions.
pub mod utils;

#[macro_use]
extern crate log;
