//! Strided BLAS kernels with extended-precision accumulation
//!
//! Re-exports the workspace crates:
//!
//! - [`strided_core`] - strided views, numeric widening and compute primitives
//! - [`strided_dot`] - the `sdsdot` kernel and its entry points
//!
//! ```rust
//! use strided_blas::prelude::*;
//!
//! let x = [4.0f32, 2.0, -3.0, 5.0, -1.0];
//! let y = [2.0f32, 6.0, -1.0, -4.0, 8.0];
//!
//! assert_eq!(sdsdot(5, 0.0, &x, 1, &y, 1), -5.0);
//! ```

pub use strided_core;
pub use strided_dot;

pub use strided_core::{Error, Result};
pub use strided_dot::{sdsdot, sdsdot_ndarray, try_sdsdot, try_sdsdot_ndarray};

/// Prelude module for convenient imports
pub mod prelude {
    pub use strided_dot::prelude::*;
}
