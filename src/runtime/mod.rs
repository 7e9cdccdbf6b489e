//! Runtime abstraction for side effects.
//!
//! The package graph never touches the outside world itself: installing and
//! removing a package, as well as reading the command script and opening the
//! report sink, go through this trait so tests can inject failures.
//!
//! # Structure
//!
//! - `fs` - File system operations (read the script, create the report file)
//! - `process` - Package install/remove side effects

mod fs;
mod process;

use anyhow::Result;
use std::path::Path;

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Packages
    /// Perform the install side effect for `name`.
    fn install_package(&self, name: &str) -> Result<()>;

    /// Perform the remove side effect for `name`.
    fn remove_package(&self, name: &str) -> Result<()>;

    // File System
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn create_file(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn install_package(&self, name: &str) -> Result<()> {
        self.install_package_impl(name)
    }

    fn remove_package(&self, name: &str) -> Result<()> {
        self.remove_package_impl(name)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.read_to_string_impl(path)
    }

    fn create_file(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>> {
        self.create_file_impl(path)
    }
}
