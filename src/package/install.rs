use log::{debug, warn};

use super::{Event, PackageGraph, PackageId};
use crate::error::{Error, Result};
use crate::runtime::Runtime;

impl PackageGraph {
    /// Install `id` after installing its dependencies, depth-first in
    /// declaration order.
    ///
    /// The first dependency that fails aborts the whole install; siblings
    /// installed before it stay installed. An already installed package only
    /// has its explicit flag upgraded, the side effect is not run again.
    #[tracing::instrument(skip(self, runtime))]
    pub fn install<R: Runtime>(&mut self, id: PackageId, explicit: bool, runtime: &R) -> Result<()> {
        let mut path = Vec::new();
        self.install_on_path(id, explicit, runtime, &mut path)
    }

    fn install_on_path<R: Runtime>(
        &mut self,
        id: PackageId,
        explicit: bool,
        runtime: &R,
        path: &mut Vec<PackageId>,
    ) -> Result<()> {
        path.push(id);
        let result = self
            .install_dependencies(id, runtime, path)
            .and_then(|()| self.install_package(id, explicit, runtime));
        path.pop();
        result
    }

    fn install_dependencies<R: Runtime>(
        &mut self,
        id: PackageId,
        runtime: &R,
        path: &mut Vec<PackageId>,
    ) -> Result<()> {
        let dependencies = self.package(id).dependencies().to_vec();
        for dependency in dependencies {
            // Only reachable through a cycle longer than one edge
            if path.contains(&dependency) {
                warn!(
                    "Dependency cycle between {} and {}, not descending again",
                    self.package(id).name(),
                    self.package(dependency).name()
                );
                continue;
            }

            if let Err(err) = self.install_on_path(dependency, false, runtime, path) {
                return Err(Error::DependencyInstallation {
                    package: self.name_of(id),
                    dependency: self.name_of(dependency),
                    source: Box::new(err),
                });
            }
        }
        Ok(())
    }

    fn install_package<R: Runtime>(&mut self, id: PackageId, explicit: bool, runtime: &R) -> Result<()> {
        let name = self.name_of(id);

        if self.package(id).is_installed() {
            if explicit {
                self.package_mut(id).explicitly_installed = true;
                self.emit(Event::AlreadyInstalled(name));
            } else {
                debug!("{} already installed as a dependency", name);
            }
            return Ok(());
        }

        runtime
            .install_package(&name)
            .map_err(|source| Error::Installation {
                package: name.clone(),
                source,
            })?;

        let package = self.package_mut(id);
        package.installed = true;
        package.explicitly_installed = explicit;
        self.emit(Event::Installed(name));
        Ok(())
    }
}
