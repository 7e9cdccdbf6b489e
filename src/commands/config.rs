use std::path::PathBuf;

use crate::report::OutputFormat;

/// Settings for one run, gathered from the command line and environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Command script to execute.
    pub script: PathBuf,
    /// Report destination; stdout when unset.
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    /// Echo each command line before the status lines it produces.
    pub echo: bool,
}

impl Config {
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
            output: None,
            format: OutputFormat::default(),
            echo: true,
        }
    }
}
