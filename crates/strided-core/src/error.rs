//! Error types for strided BLAS kernels
//!
//! Provides a unified error type for all strided-blas crates.

use thiserror::Error;

/// Core error type for strided kernel operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Zero stride over more than one logical element
    #[error("Zero stride: a stride of 0 cannot address {len} logical elements")]
    ZeroStride { len: usize },

    /// A logical element maps outside the backing storage
    #[error("Out of bounds: index {index} is outside storage of length {len}")]
    OutOfBounds { index: isize, len: usize },

    /// An operand-level failure, tagged with the operand name
    #[error("Invalid operand `{operand}`: {source}")]
    Operand {
        operand: &'static str,
        #[source]
        source: Box<Error>,
    },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a zero stride over `len` elements
    pub fn zero_stride(len: usize) -> Self {
        Self::ZeroStride { len }
    }

    /// Create an error for an index outside storage of length `len`
    pub fn out_of_bounds(index: isize, len: usize) -> Self {
        Self::OutOfBounds { index, len }
    }

    /// Create an error for index arithmetic that does not fit in `isize`
    pub fn index_overflow(len: usize, stride: isize, offset: usize) -> Self {
        Self::InvalidParameter(format!(
            "index overflow addressing {len} elements with stride {stride} from offset {offset}"
        ))
    }

    /// Tag an error with the operand it was raised for
    pub fn operand(operand: &'static str, source: Error) -> Self {
        Self::Operand {
            operand,
            source: Box::new(source),
        }
    }

    /// Strip operand tags and return the underlying error
    pub fn root(&self) -> &Error {
        match self {
            Self::Operand { source, .. } => source.root(),
            other => other,
        }
    }
}
