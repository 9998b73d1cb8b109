use crate::{AlgorithmVariant, Value};

/// Result alias that carries the custom [`SortVizError`] type.
pub type Result<T> = std::result::Result<T, SortVizError>;

/// Common error type for the core crate.
///
/// Every variant is raised by the run controller or the configuration layer
/// before the sequence is touched. Faults inside an algorithm are defects and
/// panic instead of surfacing here.
#[derive(Debug, thiserror::Error)]
pub enum SortVizError {
    /// A sequence of zero elements was requested.
    #[error("sequence size must be positive, got {requested}")]
    InvalidSize { requested: usize },
    /// Counting and radix sort size their buckets by value and cannot accept
    /// negative input.
    #[error("{algorithm} sort requires non-negative values, found {value} at index {index}")]
    NegativeValue {
        algorithm: AlgorithmVariant,
        index: usize,
        value: Value,
    },
    /// Counting sort sizes its buckets by the maximum value, which must stay
    /// within `limit`.
    #[error("{algorithm} sort accepts values up to {limit}, found {value} at index {index}")]
    ValueTooLarge {
        algorithm: AlgorithmVariant,
        index: usize,
        value: Value,
        limit: Value,
    },
    /// Another run currently holds the sequence.
    #[error("a sorting run is already in progress")]
    ConcurrentRun,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("{0}")]
    Message(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl SortVizError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}

impl From<&str> for SortVizError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for SortVizError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}
