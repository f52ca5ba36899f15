use thiserror::Error;

/// Errors raised while scraping or parsing RERA listings
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    #[error("Tab operation failed: {0}")]
    TabOperationFailed(String),

    #[error("JavaScript evaluation failed: {0}")]
    EvaluationFailed(String),

    #[error("No results table matched any selector within {waited_secs}s")]
    TableNotFound { waited_secs: u64 },

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Reasons a located table could not be turned into rows
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("No headers found in table")]
    NoHeaders,

    #[error("No data rows found in table")]
    NoRows,
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
