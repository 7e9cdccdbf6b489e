//! Report output.
//!
//! Every command line and every state change it causes becomes one
//! [`Entry`], written either as the human-readable status line or as one
//! JSON object per line.

use anyhow::Result;
use serde::Serialize;
use std::fmt;
use std::io::Write;

use crate::error::Error;
use crate::package::Event;

/// Indentation of status lines under their command.
const STATUS_INDENT: &str = "        ";
/// Indentation of `LIST` entries.
const LIST_INDENT: &str = "         ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Entry {
    Command { line: String },
    Installed { package: String },
    AlreadyInstalled { package: String },
    NotInstalled { package: String },
    Removed { package: String },
    StillNeeded { package: String },
    NoLongerNeeded { package: String },
    Listed { package: String },
    Failed { package: String, reason: String },
    Invalid { line: String, reason: String },
}

impl From<Event> for Entry {
    fn from(event: Event) -> Self {
        match event {
            Event::Installed(package) => Entry::Installed { package },
            Event::AlreadyInstalled(package) => Entry::AlreadyInstalled { package },
            Event::NotInstalled(package) => Entry::NotInstalled { package },
            Event::Removed(package) => Entry::Removed { package },
            Event::NoLongerNeeded(package) => Entry::NoLongerNeeded { package },
        }
    }
}

impl From<Error> for Entry {
    fn from(err: Error) -> Self {
        let package = err.package().to_string();
        // Alternate formatting prints the whole source chain on one line
        let reason = format!("{:#}", anyhow::Error::new(err));
        Entry::Failed { package, reason }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Command { line } => write!(f, "{}", line),
            Entry::Installed { package } => write!(f, "{}{} successfully installed", STATUS_INDENT, package),
            Entry::AlreadyInstalled { package } => {
                write!(f, "{}{} is already installed", STATUS_INDENT, package)
            }
            Entry::NotInstalled { package } => write!(f, "{}{} is not installed", STATUS_INDENT, package),
            Entry::Removed { package } => write!(f, "{}{} successfully removed", STATUS_INDENT, package),
            Entry::StillNeeded { package } => write!(f, "{}{} is still needed", STATUS_INDENT, package),
            Entry::NoLongerNeeded { package } => {
                write!(f, "{}{} is no longer needed", STATUS_INDENT, package)
            }
            Entry::Listed { package } => write!(f, "{}{}", LIST_INDENT, package),
            Entry::Failed { reason, .. } => write!(f, "{}{}", STATUS_INDENT, reason),
            Entry::Invalid { line, reason } => {
                write!(f, "{}invalid command '{}': {}", STATUS_INDENT, line, reason)
            }
        }
    }
}

/// Writes entries to the report sink in the configured format.
pub struct Reporter {
    out: Box<dyn Write + Send>,
    format: OutputFormat,
}

impl Reporter {
    pub fn new(out: Box<dyn Write + Send>, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn report(&mut self, entry: Entry) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", entry)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, &entry)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    pub fn report_all(&mut self, entries: impl IntoIterator<Item = Entry>) -> Result<()> {
        for entry in entries {
            self.report(entry)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
