use anyhow::Result;
use log::debug;

use super::Session;
use crate::report::Entry;
use crate::runtime::Runtime;

impl<R: Runtime> Session<R> {
    /// Register each of `dependencies` as a dependency of `package`.
    ///
    /// A rejected edge is reported and the remaining ones are still added.
    #[tracing::instrument(skip(self))]
    pub fn depend(&mut self, package: &str, dependencies: &[String]) -> Result<()> {
        let main = self.graph.register(package);
        for name in dependencies {
            let dependency = self.graph.register(name);
            if let Err(e) = self.graph.depends_on(main, dependency) {
                debug!("Rejected edge {} -> {}: {}", package, name, e);
                self.reporter.report(Entry::from(e))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::Session;
    use crate::report::{OutputFormat, Reporter};
    use crate::runtime::MockRuntime;
    use crate::test_utils::SharedBuffer;

    #[test]
    fn test_depend_registers_all_names() {
        let buffer = SharedBuffer::default();
        let mut session = Session::new(
            MockRuntime::new(),
            Reporter::new(Box::new(buffer.clone()), OutputFormat::Text),
        );

        session
            .depend("TELNET", &["TCPIP".into(), "NETCARD".into()])
            .unwrap();

        let graph = session.graph();
        let telnet = graph.get("TELNET").unwrap();
        assert_eq!(telnet.dependencies().len(), 2);
        assert_eq!(graph.get("NETCARD").unwrap().dependents().len(), 1);
        assert_eq!(buffer.contents(), "");
    }

    #[test]
    fn test_depend_reports_cycle_and_continues() {
        let buffer = SharedBuffer::default();
        let mut session = Session::new(
            MockRuntime::new(),
            Reporter::new(Box::new(buffer.clone()), OutputFormat::Text),
        );
        session.depend("A", &["B".into()]).unwrap();

        session.depend("B", &["A".into(), "C".into()]).unwrap();

        assert_eq!(
            buffer.contents(),
            "        cannot make B depend on A: A already depends on B\n"
        );
        let b = session.graph().get("B").unwrap();
        assert_eq!(b.dependencies().len(), 1);
    }
}
