use thiserror::Error;

/// Screener error types.
///
/// The scoring core never produces these: insufficient history is reported as
/// `None`. Errors only come from series construction, configuration and the
/// market-data collaborators.
#[derive(Error, Debug)]
pub enum ScreenerError {
    #[error("Invalid price series: {0}")]
    InvalidSeries(String),

    #[error("Data source error: {0}")]
    DataSource(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ScreenerError>;
