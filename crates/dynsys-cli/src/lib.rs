#![forbid(unsafe_code)]

//! Command-line inspector for the dynsys engine.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;

pub use cli::{run, run_from_env, run_with};
pub use error::{CliError, Result};
