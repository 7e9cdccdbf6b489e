use anyhow::Result;
use log::info;

use super::Session;
use crate::report::Entry;
use crate::runtime::Runtime;

impl<R: Runtime> Session<R> {
    /// Explicitly install `name` and its dependencies.
    #[tracing::instrument(skip(self))]
    pub fn install(&mut self, name: &str) -> Result<()> {
        let id = self.graph.register(name);
        let result = self.graph.install(id, true, &self.runtime);
        self.flush_events()?;

        if let Err(e) = result {
            info!("Install of {} failed: {}", name, e);
            self.reporter.report(Entry::from(e))?;
        }
        Ok(())
    }
}
