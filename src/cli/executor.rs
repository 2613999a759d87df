//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use super::handlers::ServeCommandHandler;
use super::parser::{Cli, Commands};
use crate::config::Settings;
use crate::error::{AppError, AppResult};

/// Execute a CLI command with the given settings
///
/// Running without a subcommand behaves like `serve`.
///
/// # Errors
/// Returns errors from command handlers or validation failures
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    validate_command_args(cli)?;

    match &cli.command {
        Some(Commands::Serve { dry_run, .. }) => {
            ServeCommandHandler::new(settings).execute(*dry_run).await
        }
        None => ServeCommandHandler::new(settings).execute(false).await,
    }
}

/// Validate command arguments before execution
fn validate_command_args(cli: &Cli) -> AppResult<()> {
    cli.validate().map_err(|reason| AppError::Validation {
        field: "cli_arguments".to_string(),
        reason,
    })?;

    if let Some(Commands::Serve { host, port, .. }) = &cli.command {
        validate_serve_args(host.as_deref(), *port);
    }

    Ok(())
}

/// Warn about host/port combinations that usually need extra privileges
fn validate_serve_args(host: Option<&str>, port: Option<u16>) {
    if let (Some(host_addr), Some(port_num)) = (host, port)
        && port_num < 1024
        && host_addr == "0.0.0.0"
    {
        tracing::warn!(
            port = port_num,
            "Binding to 0.0.0.0 on a privileged port requires root privileges"
        );
    }
}
