//! Error kinds raised by the package graph.
//!
//! Each variant names the package it is about, so the command layer can
//! attribute the failure without inspecting the graph.

use thiserror::Error;

/// Failures of graph operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested edge contradicts an existing direct edge.
    #[error("cannot make {package} depend on {dependency}: {dependency} already depends on {package}")]
    Cycle { package: String, dependency: String },

    /// The install side effect failed.
    #[error("{package} failed to install")]
    Installation {
        package: String,
        #[source]
        source: anyhow::Error,
    },

    /// A dependency could not be installed, so the package was not installed either.
    #[error("there was a problem installing some dependencies of {package}: {dependency}")]
    DependencyInstallation {
        package: String,
        dependency: String,
        #[source]
        source: Box<Error>,
    },

    /// An installed package still depends on this one.
    #[error("{package} is still needed")]
    DependentPackageFound { package: String, dependent: String },

    /// The remove side effect failed.
    #[error("{package} could not be removed")]
    Removal {
        package: String,
        #[source]
        source: anyhow::Error,
    },

    /// The package was removed but one of its dependencies could not be.
    #[error("could not clean up {dependency} after removing {package}")]
    CleanupProcess {
        package: String,
        dependency: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Name of the package the error is attributed to.
    pub fn package(&self) -> &str {
        match self {
            Error::Cycle { package, .. }
            | Error::Installation { package, .. }
            | Error::DependencyInstallation { package, .. }
            | Error::DependentPackageFound { package, .. }
            | Error::Removal { package, .. }
            | Error::CleanupProcess { package, .. } => package,
        }
    }

    /// True for both installation kinds.
    pub fn is_installation_error(&self) -> bool {
        matches!(
            self,
            Error::Installation { .. } | Error::DependencyInstallation { .. }
        )
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
