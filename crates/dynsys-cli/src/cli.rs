use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use dynsys::{DynamicSystem, EngineConfig};

use crate::commands::{
    LayoutArgs, LayoutTableArgs, OrderArgs, StructureArgs, VariantArgs, WrapArgs, run_layout,
    run_layout_table, run_order, run_structure, run_variant, run_wrap,
};
use crate::error::Result;
use crate::logging;

#[derive(Debug, Parser)]
#[command(
    name = "dynsys",
    about = "Inspect seeded variant, ordering, structure and layout decisions",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Engine config file (TOML, or JSON by extension). Defaults to the environment.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Force wrapper/decoy injection on.
    #[arg(long, global = true)]
    pub enable_structure: bool,

    /// Force variant, ordering and layout variation on.
    #[arg(long, global = true)]
    pub enable_variation: bool,

    /// Print reports as JSON lines.
    #[arg(long, global = true)]
    pub json: bool,

    /// Emit logs as JSON on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,
}

impl GlobalArgs {
    /// Engine config from the file or environment, with CLI flags applied on top.
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let base = match &self.config {
            Some(path) => EngineConfig::from_file(path).map_err(dynsys::Error::from)?,
            None => EngineConfig::from_env(),
        };
        Ok(base
            .with_structure(base.structure || self.enable_structure)
            .with_variation(base.variation || self.enable_variation))
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a variant identifier, class or text.
    Variant(VariantArgs),

    /// Print the seeded permutation for a list.
    Order(OrderArgs),

    /// Print the wrapper/decoy decision for a component.
    Structure(StructureArgs),

    /// Render an element with its wrapper/decoy applied.
    Wrap(WrapArgs),

    /// Show the layout selected for a seed.
    Layout(LayoutArgs),

    /// Tabulate layouts over a seed range.
    #[command(name = "layout-table")]
    LayoutTable(LayoutTableArgs),
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.global.log_json);
    // The binary prints the error itself; this only shows under a debug filter.
    run(cli).inspect_err(|error| {
        tracing::debug!(exit_code = error.exit_code(), %error, "command failed");
    })
}

pub fn run(cli: Cli) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with(cli, &mut out)
}

/// Dispatch with an explicit output sink.
pub fn run_with<W: Write + ?Sized>(cli: Cli, out: &mut W) -> Result<()> {
    let system = DynamicSystem::new(cli.global.engine_config()?);
    let json = cli.global.json;
    match cli.command {
        Commands::Variant(args) => run_variant(&system, args, json, out),
        Commands::Order(args) => run_order(&system, args, json, out),
        Commands::Structure(args) => run_structure(&system, args, json, out),
        Commands::Wrap(args) => run_wrap(&system, args, json, out),
        Commands::Layout(args) => run_layout(&system, args, json, out),
        Commands::LayoutTable(args) => run_layout_table(&system, args, json, out),
    }
}
