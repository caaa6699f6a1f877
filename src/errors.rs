use thiserror::Error;

/// Errors raised while configuring a comparer. Comparing never fails.
#[derive(Debug, Error)]
pub enum NaturalSortError {
    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("unknown sort order: {0}")]
    UnknownOrder(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for NaturalSortError {
    fn from(e: serde_json::Error) -> Self {
        NaturalSortError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NaturalSortError>;
