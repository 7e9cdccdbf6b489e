use anyhow::Result;
use log::info;

use super::Session;
use crate::error::Error;
use crate::report::Entry;
use crate::runtime::Runtime;

impl<R: Runtime> Session<R> {
    /// Explicitly remove `name`, cleaning up dependencies nobody needs.
    #[tracing::instrument(skip(self))]
    pub fn remove(&mut self, name: &str) -> Result<()> {
        let id = self.graph.register(name);
        let result = self.graph.remove(id, true, &self.runtime);
        self.flush_events()?;

        match result {
            Ok(()) => {}
            Err(Error::DependentPackageFound { package, dependent }) => {
                info!("{} is still required by {}", package, dependent);
                self.reporter.report(Entry::StillNeeded { package })?;
            }
            Err(e) => {
                info!("Removal of {} failed: {}", name, e);
                self.reporter.report(Entry::from(e))?;
            }
        }
        Ok(())
    }
}
