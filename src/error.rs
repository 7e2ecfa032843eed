//! Error types for the dot-product strategies and the sweep driver.

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Crate error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The two input sequences of a dot product differ in length
    #[error("Vectors must have the same length: left has {left} elements, right has {right}")]
    LengthMismatch {
        /// Length of the first sequence
        left: usize,
        /// Length of the second sequence
        right: usize,
    },

    /// No registered strategy has the requested name
    #[error("Strategy '{0}' not found")]
    UnknownStrategy(String),

    /// A strategy disagrees with the scalar reference
    #[error("Verification failed: {0}")]
    Verification(String),

    /// Writing samples to the output stream failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
