use anyhow::Result;
use log::{debug, warn};

use super::script::Command;
use crate::package::PackageGraph;
use crate::report::{Entry, Reporter};
use crate::runtime::Runtime;

/// Whether the script should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Execution context for one command script.
///
/// The session is the only writer of the package graph. Errors raised by the
/// graph are reported and never abort the script; only failures to write the
/// report are returned.
pub struct Session<R: Runtime> {
    pub(super) runtime: R,
    pub(super) graph: PackageGraph,
    pub(super) reporter: Reporter,
    echo: bool,
}

impl<R: Runtime> Session<R> {
    pub fn new(runtime: R, reporter: Reporter) -> Self {
        Self {
            runtime,
            graph: PackageGraph::new(),
            reporter,
            echo: true,
        }
    }

    /// Echo command lines into the report (on by default).
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn graph(&self) -> &PackageGraph {
        &self.graph
    }

    /// Execute every line of `script` until it ends or an `END` command.
    #[tracing::instrument(skip(self, script))]
    pub fn run_script(&mut self, script: &str) -> Result<()> {
        for (index, line) in script.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if self.echo {
                self.reporter.report(Entry::Command {
                    line: line.to_string(),
                })?;
            }

            match line.parse::<Command>() {
                Ok(command) => {
                    if self.execute(command)? == Flow::Stop {
                        debug!("END reached at line {}", index + 1);
                        break;
                    }
                }
                Err(e) => {
                    warn!("Skipping line {}: {}", index + 1, e);
                    self.reporter.report(Entry::Invalid {
                        line: line.to_string(),
                        reason: e.to_string(),
                    })?;
                }
            }
        }
        self.reporter.flush()
    }

    /// Dispatch one parsed command.
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Depend {
                package,
                dependencies,
            } => self.depend(&package, &dependencies)?,
            Command::Install(name) => self.install(&name)?,
            Command::Remove(name) => self.remove(&name)?,
            Command::List => self.list()?,
            Command::End => return Ok(Flow::Stop),
            Command::Unknown(keyword) => debug!("Ignoring unknown command {}", keyword),
        }
        Ok(Flow::Continue)
    }

    /// Report the events the graph produced during the last operation.
    pub(super) fn flush_events(&mut self) -> Result<()> {
        let events = self.graph.take_events();
        self.reporter.report_all(events.into_iter().map(Entry::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::OutputFormat;
    use crate::runtime::MockRuntime;
    use crate::test_utils::{SharedBuffer, configure_mock_runtime_basics};

    fn session(buffer: &SharedBuffer) -> Session<MockRuntime> {
        let mut runtime = MockRuntime::new();
        configure_mock_runtime_basics(&mut runtime);
        Session::new(runtime, Reporter::new(Box::new(buffer.clone()), OutputFormat::Text))
    }

    #[test]
    fn test_depend_install_list_remove() {
        let buffer = SharedBuffer::default();
        let mut session = session(&buffer);

        session
            .run_script("DEPEND A B\nINSTALL A\nLIST\nREMOVE A\nLIST\n")
            .unwrap();

        assert_eq!(
            buffer.contents(),
            "DEPEND A B\n\
             INSTALL A\n\
             \x20       B successfully installed\n\
             \x20       A successfully installed\n\
             LIST\n\
             \x20        A\n\
             \x20        B\n\
             REMOVE A\n\
             \x20       A successfully removed\n\
             \x20       B is no longer needed\n\
             \x20       B successfully removed\n\
             LIST\n"
        );
    }

    #[test]
    fn test_end_stops_processing() {
        let buffer = SharedBuffer::default();
        let mut session = session(&buffer);

        session.run_script("INSTALL A\nEND\nINSTALL B\n").unwrap();

        assert!(session.graph().get("B").is_none());
        assert!(buffer.contents().ends_with("END\n"));
    }

    #[test]
    fn test_blank_and_unknown_lines_produce_nothing() {
        let buffer = SharedBuffer::default();
        let mut session = session(&buffer).with_echo(false);

        session.run_script("\n   \nFROB A\n").unwrap();

        assert_eq!(buffer.contents(), "");
        assert!(session.graph().is_empty());
    }

    #[test]
    fn test_invalid_line_does_not_stop_script() {
        let buffer = SharedBuffer::default();
        let mut session = session(&buffer).with_echo(false);

        session.run_script("INSTALL\nINSTALL A\n").unwrap();

        assert_eq!(
            buffer.contents(),
            "        invalid command 'INSTALL': INSTALL requires exactly one package name, got 0.\n\
             \x20       A successfully installed\n"
        );
    }

    #[test]
    fn test_execute_end_returns_stop() {
        let buffer = SharedBuffer::default();
        let mut session = session(&buffer);

        assert_eq!(session.execute(Command::End).unwrap(), Flow::Stop);
        assert_eq!(
            session.execute(Command::Unknown("FROB".into())).unwrap(),
            Flow::Continue
        );
    }
}
