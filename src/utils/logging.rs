use chrono::Utc;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to open log file: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    SetLogger(#[from] log::SetLoggerError),
}

/// Parse a level name, falling back to `Info` for anything unrecognised.
pub fn parse_level(log_level_str: &str) -> log::LevelFilter {
    log_level_str
        .parse::<log::LevelFilter>()
        .unwrap_or(log::LevelFilter::Info)
}

/// Initialize the logger with the specified log level and optional output file.
/// `RUST_LOG` takes precedence over the configured level.
pub fn initialize_logger<P: AsRef<Path>>(
    log_path: Option<P>,
    log_level_str: &str,
) -> Result<(), LoggingError> {
    let log_level = parse_level(log_level_str);

    let log_file = match log_path {
        Some(path) => Some(Mutex::new(
            OpenOptions::new().create(true).append(true).open(path)?,
        )),
        None => None,
    };

    let logger = env_logger::Builder::new()
        .format(move |buf, record| {
            let timestamp = Utc::now().to_rfc3339();

            if let Some(Ok(mut file)) = log_file.as_ref().map(Mutex::lock) {
                let log_line = format!("{} [{}] - {}\n", timestamp, record.level(), record.args());
                let _ = file.write_all(log_line.as_bytes());
            }

            writeln!(buf, "{} [{}] - {}", timestamp, record.level(), record.args())
        })
        .filter_level(log_level)
        .parse_default_env()
        .build();

    let max_level = logger.filter();
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(max_level);

    Ok(())
}
