//! CLI argument definitions using clap
//!
//! Commands:
//! - student-api serve [--config <path>] [--host <host>] [--port <port>] [--database <path>]
//! - student-api init-db [--config <path>] [--database <path>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const ENV_HELP: &str = "Settings are read from the process environment \
(STUDENTS_CONFIG, STUDENTS_HOST, STUDENTS_PORT, STUDENTS_DATABASE, RUST_LOG). \
No .env file is loaded; export the variables or pass flags instead.";

/// Students API - CRUD HTTP service for student records
#[derive(Parser, Debug)]
#[command(name = "student-api")]
#[command(version, about, long_about = None)]
#[command(after_help = ENV_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServerArgs),

    /// Create the database and table, then exit
    InitDb {
        /// Path to configuration file
        #[arg(long, env = "STUDENTS_CONFIG")]
        config: Option<PathBuf>,

        /// SQLite database file
        #[arg(long, env = "STUDENTS_DATABASE")]
        database: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
pub struct ServerArgs {
    /// Path to configuration file
    #[arg(long, env = "STUDENTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long, env = "STUDENTS_HOST")]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(long, env = "STUDENTS_PORT")]
    pub port: Option<u16>,

    /// SQLite database file
    #[arg(long, env = "STUDENTS_DATABASE")]
    pub database: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from([
            "student-api",
            "serve",
            "--port",
            "9000",
            "--database",
            "/tmp/s.db",
        ])
        .unwrap();

        match cli.command {
            Command::Serve(args) => {
                assert_eq!(args.port, Some(9000));
                assert_eq!(args.database, Some(PathBuf::from("/tmp/s.db")));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_init_db() {
        let cli = Cli::try_parse_from(["student-api", "init-db", "--database", "x.db"]).unwrap();
        assert!(matches!(cli.command, Command::InitDb { .. }));
    }

    #[test]
    fn test_help_explains_environment_source() {
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("STUDENTS_DATABASE"));
        assert!(help.contains(".env"));
    }

    #[test]
    fn test_rejects_invalid_port() {
        assert!(Cli::try_parse_from(["student-api", "serve", "--port", "http"]).is_err());
    }
}
