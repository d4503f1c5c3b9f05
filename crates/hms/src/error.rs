use crate::duration::LooseDuration;

/// Duration error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A field was negative, NaN or infinite
    #[error("invalid duration: {0:?}")]
    InvalidDuration(LooseDuration),
}

/// Result type using the duration Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
