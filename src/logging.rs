//! Logging initialisation via tracing-subscriber.
//!
//! Call [`init`] once at startup. Logs are line-structured and go to stderr so
//! command output on stdout stays machine-readable.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoggingError {
    #[error("log level must not be empty")]
    Empty,

    #[error("unrecognised log level: '{0}'")]
    Unrecognised(String),
}

/// Parse a log level string into a [`LevelFilter`].
///
/// Case-insensitive. Besides the tracing names (`error`, `warn`, `info`,
/// `debug`, `trace`, `off`) the conventional `WARNING`, `CRITICAL` and `FATAL`
/// spellings found in service configs are accepted.
///
/// # Errors
/// Returns `LoggingError` on blank or unrecognised values.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggingError> {
    let level = level.trim();
    if level.is_empty() {
        return Err(LoggingError::Empty);
    }
    match level.to_ascii_lowercase().as_str() {
        "warning" => Ok(LevelFilter::WARN),
        "critical" | "fatal" => Ok(LevelFilter::ERROR),
        other => other
            .parse::<LevelFilter>()
            .map_err(|_| LoggingError::Unrecognised(level.to_owned())),
    }
}

/// Initialise the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; `level` is the fallback. Calling this again
/// once a subscriber is installed leaves the existing one in place.
///
/// # Errors
/// Returns `LoggingError` if `level` is needed and cannot be parsed.
pub fn init(level: &str) -> Result<(), LoggingError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::default().add_directive(parse_level(level)?.into()),
    };

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }

    Ok(())
}
