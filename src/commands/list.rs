use anyhow::Result;

use super::Session;
use crate::report::Entry;
use crate::runtime::Runtime;

impl<R: Runtime> Session<R> {
    /// Report every installed package in registration order.
    pub fn list(&mut self) -> Result<()> {
        let entries: Vec<Entry> = self
            .graph
            .installed_packages()
            .map(|p| Entry::Listed {
                package: p.name().to_string(),
            })
            .collect();
        self.reporter.report_all(entries)
    }
}
