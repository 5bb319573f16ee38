use crate::cli::Args;
use bracket_planner::config::Config;
use bracket_planner::constants::display::LOG_FILE_NAME;
use bracket_planner::error::AppError;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_DIRECTIVE: &str = "bracket_planner=info";
const DEBUG_DIRECTIVE: &str = "bracket_planner=debug";

fn directive(raw: &str) -> Result<Directive, AppError> {
    raw.parse::<Directive>()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive '{raw}': {e}")))
}

fn env_filter() -> Result<EnvFilter, AppError> {
    Ok(EnvFilter::from_default_env().add_directive(directive(DEFAULT_DIRECTIVE)?))
}

/// Resolves the log directory and file name from `--log-file`, the config,
/// or the default location, in that order.
fn log_location(args: &Args, config: &Config) -> (String, String) {
    match args.log_file.as_ref().or(config.log_file_path.as_ref()) {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(LOG_FILE_NAME);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), LOG_FILE_NAME.to_string()),
    }
}

/// Sets up logging configuration for the application.
///
/// - Always logs to a daily rolling file
/// - With `--debug`, also logs to stderr so stdout stays clean for the bracket
/// - Creates log directory if it doesn't exist
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args, config: &Config) -> Result<(String, WorkerGuard), AppError> {
    let (log_dir, log_file_name) = log_location(args, config);

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(env_filter()?);

    let stderr_layer = if args.debug {
        Some(
            fmt::Layer::new()
                .with_writer(std::io::stderr)
                .with_ansi(true)
                .with_filter(env_filter()?.add_directive(directive(DEBUG_DIRECTIVE)?)),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| AppError::log_setup_error(format!("Failed to install subscriber: {e}")))?;

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}
