//! jobxml - render YAML job definitions as Jenkins XML

mod commands;

use std::path::PathBuf;

use anyhow::{
    Context,
    Result,
};
use clap::{
    Parser,
    Subcommand,
};
use jobxml_core::{
    create_component_registry,
    ConfigLoader,
    JobxmlConfig,
    XmlGenerator,
};

use crate::commands::{
    list,
    test,
};

#[derive(Parser)]
#[command(
    name = "jobxml",
    version,
    about = "Translate YAML job descriptions into Jenkins job XML"
)]
struct Cli {
    /// Settings file (defaults to JOBXML_CONFIG_PATH, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output from every component
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render jobs to stdout or an output directory
    Test(test::TestArgs),
    /// Show registered project types, modules and branch sources
    List(list::ListArgs),
}

fn load_config(path: Option<&PathBuf>) -> Result<JobxmlConfig> {
    match path {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => ConfigLoader::load_default().context("Failed to load config"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_ref())?;

    if cli.verbose {
        jobxml_core::logging::init_verbose();
    } else {
        jobxml_core::logging::init_with_default(&config.logging.filter);
    }

    let generator = XmlGenerator::new(create_component_registry(), config.render_options());

    match cli.command {
        Commands::Test(args) => test::run(args, &generator),
        Commands::List(args) => list::run(args, generator.registry()),
    }
}
