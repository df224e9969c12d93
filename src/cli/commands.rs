//! CLI command implementations
//!
//! Both commands create the database and `student` table when missing;
//! `serve` then listens until Ctrl-C.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::config::ServiceConfig;
use crate::http_server::HttpServer;
use crate::observability::init_logging;
use crate::store::StudentStore;

use super::args::{Cli, Command, ServerArgs};
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args().command)
}

/// Run a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve(args) => serve(args),
        Command::InitDb { config, database } => init_db(config, database),
    }
}

/// Load the config file and apply command-line overrides
fn resolve_config(args: &ServerArgs) -> CliResult<ServiceConfig> {
    let mut config = ServiceConfig::load_or_default(args.config.as_deref())?;
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(database) = &args.database {
        config.store.path = database.clone();
    }
    Ok(config)
}

/// Open the database and serve HTTP until shutdown
pub fn serve(args: ServerArgs) -> CliResult<()> {
    let config = resolve_config(&args)?;
    init_logging(&config.logging);

    let store: Arc<dyn StudentStore> = Arc::new(config.store.open()?);
    let server = HttpServer::with_config(config.server, store);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_error(format!("cannot start runtime: {e}")))?;
    runtime.block_on(server.start())?;
    Ok(())
}

/// Create the database file and table, then exit
pub fn init_db(config: Option<PathBuf>, database: Option<PathBuf>) -> CliResult<()> {
    let args = ServerArgs {
        config,
        host: None,
        port: None,
        database,
    };
    let config = resolve_config(&args)?;
    init_logging(&config.logging);

    config.store.open()?;
    info!(path = %config.store.path.display(), "database ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_flags_override_config_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(&path, r#"{"server": {"host": "0.0.0.0", "port": 7000}}"#).unwrap();

        let args = ServerArgs {
            config: Some(path),
            host: None,
            port: Some(7100),
            database: Some(tmp.path().join("s.db")),
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 7100);
        assert_eq!(config.store.path, tmp.path().join("s.db"));
    }

    #[test]
    fn test_init_db_creates_database_file() {
        let tmp = TempDir::new().unwrap();
        let db = tmp.path().join("nested").join("students.db");

        init_db(None, Some(db.clone())).unwrap();
        assert!(db.exists());
    }

    #[test]
    fn test_missing_config_file_fails() {
        let tmp = TempDir::new().unwrap();
        let err = init_db(Some(tmp.path().join("absent.json")), None).unwrap_err();
        assert_eq!(err.code_str(), "STUDENTS_CLI_CONFIG_ERROR");
    }
}
