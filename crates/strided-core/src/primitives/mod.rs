//! Computational primitives for strided kernels
//!
//! Kernels are written against the [`ComputePrimitives`] trait and receive a
//! concrete backend at construction time. Dispatch is resolved at compile
//! time; no boxing and no dynamic dispatch.
//!
//! # Usage
//!
//! ```rust
//! use strided_core::{scalar_backend, ComputePrimitives, StridedView};
//!
//! let x: &[f32] = &[1.0, 2.0, 3.0];
//! let y: &[f32] = &[4.0, 5.0, 6.0];
//!
//! let backend = scalar_backend();
//! let contiguous = backend.dot_product(x, y);
//!
//! let xv = StridedView::new(x, 3, 1).unwrap();
//! let yv = StridedView::new(y, 3, -1).unwrap();
//! let reversed = backend.strided_dot_product(&xv, &yv);
//!
//! assert_eq!(contiguous, 32.0);
//! assert_eq!(reversed, 28.0);
//! ```

pub mod backends;
pub mod traits;

pub use backends::ScalarBackend;
pub use traits::ComputePrimitives;

/// Create a scalar backend (always available)
pub fn scalar_backend() -> ScalarBackend {
    ScalarBackend::new()
}
