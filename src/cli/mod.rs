//! CLI module for the students API
//!
//! Provides command-line interface for:
//! - serve: Open (or create) the database and serve HTTP
//! - init-db: Create the database and `student` table, then exit

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, ServerArgs};
pub use commands::{init_db, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
