use anyhow::{Context, Result};
use log::debug;
use std::io::Write;

use crate::report::Reporter;
use crate::runtime::Runtime;

mod config;
mod depend;
mod install;
mod list;
mod remove;
mod script;
mod session;

pub use config::Config;
pub use script::Command;
pub use session::{Flow, Session};

/// Run the command script named by `config` and write its report.
#[tracing::instrument(skip(runtime))]
pub fn run<R: Runtime>(runtime: R, config: Config) -> Result<()> {
    let script = runtime.read_to_string(&config.script)?;
    debug!("Read {} line(s) from {:?}", script.lines().count(), config.script);

    let out: Box<dyn Write + Send> = match &config.output {
        Some(path) => runtime.create_file(path)?,
        None => Box::new(std::io::stdout()),
    };

    let reporter = Reporter::new(out, config.format);
    let mut session = Session::new(runtime, reporter).with_echo(config.echo);
    session
        .run_script(&script)
        .context("Failed to write report")
}
