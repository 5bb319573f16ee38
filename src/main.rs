// src/main.rs
mod cli;
mod commands;
mod logging;

use bracket_planner::config::Config;
use bracket_planner::error::AppError;
use clap::Parser;
use cli::{Args, is_config_operation};
use commands::{
    handle_config_update_command, handle_generate_command, handle_list_config_command,
    validate_args,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Validate argument combinations
    validate_args(&args)?;

    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_operation(&args) {
        return handle_config_update_command(&args).await;
    }

    let config = Config::load().await?;

    // The guard must be kept alive for the duration of the program
    let (log_file_path, _guard) = logging::setup_logging(&args, &config).await?;
    info!("Logs are written to: {log_file_path}");

    handle_generate_command(&args, &config).await
}
