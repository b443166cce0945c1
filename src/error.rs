use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BisectError {
    /// A search bound lies outside the sequence or the range is reversed.
    InvalidArgument(&'static str),
}

pub type Result<T> = std::result::Result<T, BisectError>;

impl fmt::Display for BisectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BisectError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for BisectError {}
