//! Core traits and types for strided BLAS kernels
//!
//! This crate provides the two lower layers that kernels are built from:
//!
//! 1. **Data model** - [`StridedView`], a read-only logical vector over a
//!    slice with a signed stride and a starting offset
//! 2. **Primitives** - [`ComputePrimitives`], reductions that widen each
//!    element to its [`Numeric::Aggregate`] type before accumulating
//!
//! Nothing here allocates, and nothing holds mutable state, so every type is
//! safe to share across threads.
//!
//! # Example
//!
//! ```rust
//! use strided_core::{ComputePrimitives, ScalarBackend, StridedView};
//!
//! let x: &[f32] = &[1.0, -2.0, 3.0, -4.0];
//! let y: &[f32] = &[1.0, -2.0, 3.0, -4.0];
//!
//! let xv = StridedView::new(x, 4, 1)?;
//! let yv = StridedView::new(y, 4, -1)?;
//!
//! // (1)(-4) + (-2)(3) + (3)(-2) + (-4)(1)
//! let dot = ScalarBackend::new().strided_dot_product(&xv, &yv);
//! assert_eq!(dot, -20.0);
//! # Ok::<(), strided_core::Error>(())
//! ```

pub mod error;
pub mod kernels;
pub mod numeric;
pub mod primitives;
pub mod stride;

// Re-export core types
pub use error::{Error, Result};

pub use kernels::StridedKernel;
pub use numeric::Numeric;
pub use primitives::{scalar_backend, ComputePrimitives, ScalarBackend};
pub use stride::{stride_to_offset, StridedIter, StridedView};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ComputePrimitives, Error, Numeric, Result, ScalarBackend, StridedKernel, StridedView,
    };
}
