use std::path::PathBuf;

use clap::Parser;
use log::debug;
use metactl::{
    commands::{Command, execute},
    config::ToolConfig,
};

#[derive(Parser)]
#[command(version, about = "Inspect component property metadata descriptors")]
struct Cli {
    /// Configuration file [default: .metactl.toml]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Descriptor directory, overrides `root` from the configuration file
    #[arg(long, global = true)]
    root: Option<String>,

    /// Main configuration descriptor, overrides `main` from the configuration file
    #[arg(long, global = true)]
    main: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = ToolConfig::load(cli.config.as_deref())?.with_overrides(cli.root, cli.main);
    debug!("config: {config:?}");

    print!("{}", execute(&config, cli.command, cli.json)?);
    Ok(())
}
