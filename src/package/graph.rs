use std::collections::HashMap;

use log::debug;

use super::Event;
use crate::error::{Error, Result};

/// Index of a package inside its [`PackageGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackageId(usize);

/// A named node with installation state and both directions of its edges.
#[derive(Debug, Clone)]
pub struct Package {
    pub(super) name: String,
    pub(super) installed: bool,
    pub(super) explicitly_installed: bool,
    pub(super) dependencies: Vec<PackageId>,
    pub(super) dependents: Vec<PackageId>,
}

impl Package {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            installed: false,
            explicitly_installed: false,
            dependencies: Vec::new(),
            dependents: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_installed(&self) -> bool {
        self.installed
    }

    /// True only when a direct request installed (or re-marked) this package.
    pub fn is_explicitly_installed(&self) -> bool {
        self.explicitly_installed
    }

    /// Packages this one requires, in declaration order.
    pub fn dependencies(&self) -> &[PackageId] {
        &self.dependencies
    }

    /// Packages requiring this one, in registration order.
    pub fn dependents(&self) -> &[PackageId] {
        &self.dependents
    }
}

/// Name-keyed registry of every package referenced during a run.
///
/// Packages are created on first reference and never dropped; only their
/// installation state changes. Events produced by install and remove are
/// buffered until the caller drains them with [`PackageGraph::take_events`].
#[derive(Debug, Default)]
pub struct PackageGraph {
    packages: Vec<Package>,
    index: HashMap<String, PackageId>,
    events: Vec<Event>,
}

impl PackageGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `name`, creating the package if it has not been seen yet.
    pub fn register(&mut self, name: &str) -> PackageId {
        if let Some(id) = self.index.get(name) {
            return *id;
        }
        let id = PackageId(self.packages.len());
        debug!("Registering package {}", name);
        self.packages.push(Package::new(name));
        self.index.insert(name.to_string(), id);
        id
    }

    pub fn id(&self, name: &str) -> Option<PackageId> {
        self.index.get(name).copied()
    }

    pub fn get(&self, name: &str) -> Option<&Package> {
        self.id(name).map(|id| self.package(id))
    }

    pub fn package(&self, id: PackageId) -> &Package {
        &self.packages[id.0]
    }

    pub(super) fn package_mut(&mut self, id: PackageId) -> &mut Package {
        &mut self.packages[id.0]
    }

    pub(super) fn name_of(&self, id: PackageId) -> String {
        self.packages[id.0].name.clone()
    }

    /// All packages in registration order.
    pub fn packages(&self) -> impl Iterator<Item = &Package> {
        self.packages.iter()
    }

    /// Installed packages in registration order.
    pub fn installed_packages(&self) -> impl Iterator<Item = &Package> {
        self.packages.iter().filter(|p| p.installed)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Record that `package` requires `dependency`.
    ///
    /// Re-adding an existing edge is a no-op. Fails without touching either
    /// adjacency list if `dependency` already depends on `package` directly,
    /// or if both ids are the same package.
    pub fn depends_on(&mut self, package: PackageId, dependency: PackageId) -> Result<()> {
        if package == dependency || self.packages[package.0].dependents.contains(&dependency) {
            return Err(Error::Cycle {
                package: self.name_of(package),
                dependency: self.name_of(dependency),
            });
        }

        let dependencies = &mut self.packages[package.0].dependencies;
        if !dependencies.contains(&dependency) {
            dependencies.push(dependency);
        }
        let dependents = &mut self.packages[dependency.0].dependents;
        if !dependents.contains(&package) {
            dependents.push(package);
        }

        debug!(
            "{} depends on {}",
            self.packages[package.0].name, self.packages[dependency.0].name
        );
        Ok(())
    }

    /// Record that `dependent` requires `package`.
    pub fn required_by(&mut self, package: PackageId, dependent: PackageId) -> Result<()> {
        self.depends_on(dependent, package)
    }

    pub(super) fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Drain the events produced since the last call.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}
