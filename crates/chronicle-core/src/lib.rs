//! Chronicle Core - Shared foundations for the chronicle changelog generator
//!
//! This crate provides the error taxonomy and the configuration system used
//! by the git adapter, the changelog engine, and the CLI.

pub mod config;
pub mod error;

pub use error::{ChronicleError, ConfigError, GitError, Result};
