//! Package graph module
//!
//! This module owns every package known to a run and implements the
//! dependency bookkeeping: edge registration with cycle rejection, transitive
//! installation, and removal with cascading cleanup of orphaned dependencies.
//!
//! Packages live in an arena inside [`PackageGraph`]; edges are
//! [`PackageId`] indices, so a back-reference never owns its target.

mod event;
mod graph;
mod install;
mod remove;

pub use event::Event;
pub use graph::{Package, PackageGraph, PackageId};
