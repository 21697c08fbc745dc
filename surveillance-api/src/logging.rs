//! Optional logging setup for applications using this crate
//!
//! The library itself only emits `tracing` events. Applications that do not
//! install their own subscriber can call [`init_logging`] once at startup.

use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Logging mode for different use cases
#[derive(Debug, Clone, Copy)]
pub enum LoggingMode {
    /// No subscriber is installed
    Silent,
    /// Compact stderr output at `info`
    Development,
    /// Verbose output at `debug` with source locations
    Debug,
}

/// Logging configuration error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),

    #[error("Invalid filter directive: {0}")]
    InvalidFilter(String),
}

/// Initialize logging with the specified mode
///
/// # Examples
///
/// ```rust,ignore
/// surveillance_api::logging::init_logging(LoggingMode::Development)?;
/// ```
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    match mode {
        LoggingMode::Silent => Ok(()),
        LoggingMode::Development => init_with_filter("info", false),
        LoggingMode::Debug => init_with_filter("debug", true),
    }
}

/// Initialize logging with explicit filter directives, e.g. `surveillance_api=trace`
pub fn init_logging_with_filter(directives: &str) -> Result<(), LoggingError> {
    init_with_filter(directives, false)
}

fn init_with_filter(directives: &str, verbose: bool) -> Result<(), LoggingError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_new(directives)
        .map_err(|e| LoggingError::InvalidFilter(e.to_string()))?;

    let result = if verbose {
        Registry::default()
            .with(fmt::layer()
                .pretty()
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true))
            .with(filter)
            .try_init()
    } else {
        Registry::default()
            .with(fmt::layer()
                .with_target(false)
                .compact())
            .with(filter)
            .try_init()
    };

    result.map_err(|e| LoggingError::TracingInit(e.to_string()))
}

/// Check if a global subscriber has been installed
pub fn is_initialized() -> bool {
    tracing::dispatcher::has_been_set()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_mode() {
        assert!(init_logging(LoggingMode::Silent).is_ok());
    }

    #[test]
    fn test_invalid_filter() {
        let result = init_logging_with_filter("surveillance_api=notalevel");
        assert!(matches!(result, Err(LoggingError::InvalidFilter(_))));
    }
}
