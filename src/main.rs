use anyhow::Result;
use clap::Parser;
use minipm::commands::{Config, run};
use minipm::report::OutputFormat;
use std::path::PathBuf;

/// minipm - Minimal package manager simulator
///
/// Reads a script of DEPEND, INSTALL, REMOVE, LIST and END commands and
/// reports every state change of the simulated package set.
///
/// Examples:
///   minipm -f commands.txt              # Report to stdout
///   minipm -f commands.txt -o out.txt   # Report to a file
#[derive(Parser, Debug)]
#[command(author, version = env!("MINIPM_VERSION"), about)]
struct Cli {
    /// Command script to execute
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: PathBuf,

    /// Write the report to this file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Report format (also via MINIPM_FORMAT)
    #[arg(
        long = "format",
        env = "MINIPM_FORMAT",
        value_enum,
        default_value_t = OutputFormat::Text
    )]
    pub format: OutputFormat,

    /// Do not echo command lines in the report
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            script: cli.file,
            output: cli.output,
            format: cli.format,
            echo: !cli.quiet,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = minipm::runtime::RealRuntime;

    run(runtime, cli.into())
}
