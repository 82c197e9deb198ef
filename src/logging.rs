use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

pub const LOG_ENV: &str = "HSP_PROFILE_LOG";
pub const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter '{value}'")]
    Filter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("failed to install log subscriber: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Env var first, then the CLI value, then [`DEFAULT_FILTER`].
pub fn resolve_filter(env_value: Option<String>, cli_value: Option<&str>) -> String {
    env_value
        .filter(|v| !v.trim().is_empty())
        .or_else(|| cli_value.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

pub fn init(cli_value: Option<&str>) -> Result<(), LoggingError> {
    let value = resolve_filter(std::env::var(LOG_ENV).ok(), cli_value);
    let filter = EnvFilter::try_new(&value).map_err(|source| LoggingError::Filter {
        value: value.clone(),
        source,
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(LoggingError::Subscriber)
}
