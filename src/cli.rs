use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use wrenbind_emit::EmitOptions;

use crate::config::{GeneratorConfig, Output};
use crate::driver;
use crate::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "wrenbind",
    version,
    about = "Generate Wren binding trampolines from WREN_METHOD declarations"
)]
pub struct WrenbindCli {
    /// Declaration sources, scanned in order.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[arg(short, long)]
    /// Write the generated source here instead of stdout.
    pub output: Option<PathBuf>,

    #[arg(long, alias = "debug")]
    /// Run a garbage collection at the start of every trampoline.
    pub debug_gc: bool,

    #[arg(long)]
    /// Do not emit includes for the declaration sources.
    pub no_includes: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    pub verbose: u8,

    #[arg(short, long, conflicts_with = "verbose")]
    /// Only log errors.
    pub quiet: bool,
}

impl WrenbindCli {
    /// Turn the parsed arguments into a generation config.
    pub fn config(&self) -> GeneratorConfig {
        let output = match &self.output {
            Some(path) => Output::File(path.clone()),
            None => Output::Stdout,
        };
        let emit = EmitOptions::new()
            .with_debug_gc(self.debug_gc)
            .with_include_sources(!self.no_includes);

        GeneratorConfig::new(self.files.iter().cloned())
            .with_output(output)
            .with_emit_options(emit)
    }
}

pub fn run() -> Result<()> {
    let cli = WrenbindCli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = cli.config();
    debug!(?config, "starting generation");

    let summary = driver::run(&config)
        .with_context(|| format!("failed to generate bindings into {}", config.output.describe()))?;
    debug!(?summary, "generation finished");
    Ok(())
}
