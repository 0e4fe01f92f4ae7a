use thiserror::Error;

/// Result type for transform operations.
pub type FftResult<T> = Result<T, FftError>;

/// Errors raised at the public boundary, before any computation starts.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// The sequence length is zero or not a power of two.
    #[error("transform length must be a positive power of two, got {0}")]
    InvalidLength(usize),

    /// A buffer does not match the length the plan was built for.
    #[error("buffer size mismatch: expected {expected}, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// A batch buffer is not a whole number of sequences.
    #[error("batch buffer of length {len} is not a multiple of the sequence length {chunk}")]
    BatchLength { len: usize, chunk: usize },
}
