pub mod commands;
pub mod error;
pub mod package;
pub mod report;
pub mod runtime;

pub use error::{Error, Result};
