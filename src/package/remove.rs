use log::{debug, warn};

use super::{Event, PackageGraph, PackageId};
use crate::error::{Error, Result};
use crate::runtime::Runtime;

impl PackageGraph {
    /// Remove `id` if no installed package depends on it, then clean up the
    /// dependencies nobody needs anymore.
    ///
    /// `explicit` is false for removals triggered by the cleanup itself.
    /// A failed side effect leaves the package untouched. A failure while
    /// cleaning up is returned as [`Error::CleanupProcess`] but the package
    /// itself stays removed.
    #[tracing::instrument(skip(self, runtime))]
    pub fn remove<R: Runtime>(&mut self, id: PackageId, explicit: bool, runtime: &R) -> Result<()> {
        if let Some(dependent) = self.installed_dependent(id) {
            return Err(Error::DependentPackageFound {
                package: self.name_of(id),
                dependent: self.name_of(dependent),
            });
        }

        let name = self.name_of(id);
        if !explicit {
            self.emit(Event::NoLongerNeeded(name.clone()));
        } else if !self.package(id).is_installed() {
            self.emit(Event::NotInstalled(name));
            return Ok(());
        }

        runtime
            .remove_package(&name)
            .map_err(|source| Error::Removal {
                package: name.clone(),
                source,
            })?;

        let package = self.package_mut(id);
        package.installed = false;
        package.explicitly_installed = false;
        self.emit(Event::Removed(name));

        self.clean_up_dependencies(id, runtime)
    }

    fn installed_dependent(&self, id: PackageId) -> Option<PackageId> {
        self.package(id)
            .dependents()
            .iter()
            .copied()
            .find(|dependent| self.package(*dependent).is_installed())
    }

    /// Remove every implicitly installed dependency of `id`.
    ///
    /// Dependencies still required elsewhere are skipped. The remaining
    /// siblings are still visited after a failure; the first failure is
    /// returned.
    fn clean_up_dependencies<R: Runtime>(&mut self, id: PackageId, runtime: &R) -> Result<()> {
        let mut failure = None;

        let dependencies = self.package(id).dependencies().to_vec();
        for dependency in dependencies {
            let package = self.package(dependency);
            if package.is_explicitly_installed() || !package.is_installed() {
                continue;
            }

            match self.remove(dependency, false, runtime) {
                Ok(()) => {}
                Err(Error::DependentPackageFound { package, dependent }) => {
                    debug!("{} is still required by {}", package, dependent);
                }
                Err(err) => {
                    warn!("Cleanup after removing {} failed: {}", self.package(id).name(), err);
                    if failure.is_none() {
                        failure = Some(Error::CleanupProcess {
                            package: self.name_of(id),
                            dependency: self.name_of(dependency),
                            source: Box::new(err),
                        });
                    }
                }
            }
        }

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
