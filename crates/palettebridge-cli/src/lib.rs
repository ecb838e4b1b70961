//! PaletteBridge command-line shell.
//!
//! Owns the single mutable copy of the application state, persists it
//! through a [`storage::StateStorage`] backend and drives the pure core
//! operations from subcommands.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod storage;

pub use config::Config;
pub use error::{CliError, CliResult};
