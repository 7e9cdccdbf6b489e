//! Package side effects.
//!
//! There is no real installation mechanism behind these; they only log and
//! succeed. The `Result` return keeps the failure path open for callers.

use anyhow::Result;
use log::debug;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn install_package_impl(&self, name: &str) -> Result<()> {
        debug!("Installing {}", name);
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn remove_package_impl(&self, name: &str) -> Result<()> {
        debug!("Removing {}", name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};

    #[test]
    fn test_real_runtime_side_effects_succeed() {
        let runtime = RealRuntime;
        assert!(runtime.install_package("nano").is_ok());
        assert!(runtime.remove_package("nano").is_ok());
    }
}
