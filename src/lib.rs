//! `envkit` - operator utilities for `.env` driven projects
//!
//! Resolves configuration from a `.env` file and the process environment,
//! compares the two, and inspects the PostgreSQL database they point at.

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    missing_docs,
    rust_2018_idioms
)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

/// Command line definitions
pub mod cli;
/// Command handlers for the binaries
pub mod commands;
/// Environment file vs process comparison
pub mod compare;
/// Configuration resolution from `.env` and the process environment
pub mod config;
/// PostgreSQL catalog access
pub mod database;
/// Error types
pub mod error;
/// Table inspection
pub mod inspect;
/// Logging setup
pub mod logging;
/// Tool settings
pub mod settings;

pub use config::{EnvLoader, ParserStrategy, ProcessEnv, ResolvedConfig};
pub use error::{EnvKitError, Result};
pub use settings::Settings;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
