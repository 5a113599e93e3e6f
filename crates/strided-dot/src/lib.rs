//! Single-precision strided dot product with extended accumulation
//!
//! This crate provides `sdsdot`: the dot product of two `f32` vectors plus a
//! scalar, with every product formed and summed in `f64` and a single
//! narrowing back to `f32` at the end.
//!
//! # Overview
//!
//! Each operand is addressed through a signed stride. A positive stride walks
//! storage forwards from slot 0; a negative stride starts at the slot of the
//! last logical element and walks backwards. Either way elements are paired
//! and summed in logical index order `0..n`.
//!
//! A non-positive `n` means "no work": the scalar comes back unchanged and
//! neither operand is read.
//!
//! # Entry points
//!
//! | Function | Start index | Preconditions |
//! |----------|-------------|---------------|
//! | [`sdsdot`] | from stride sign | caller's contract |
//! | [`sdsdot_ndarray`] | explicit | caller's contract |
//! | [`try_sdsdot`] | from stride sign | validated, `Result` |
//! | [`try_sdsdot_ndarray`] | explicit | validated, `Result` |
//!
//! The unchecked forms never read out of range: a violated contract ends in a
//! slice-index panic rather than a wrong answer. Build an [`SdsdotKernel`]
//! with [`KernelConfig::validating`] to turn violations into descriptive
//! panics, or use the `try_` forms to get an [`Error`] back.
//!
//! # Examples
//!
//! ```rust
//! use strided_dot::sdsdot;
//!
//! let x = [1.0f32, -2.0, 3.0, -4.0, 5.0, -6.0, 7.0, -8.0];
//! let y = [1.0f32, -2.0, 3.0, -4.0, 5.0, -6.0, 7.0, -8.0];
//!
//! // y is traversed backwards: logical y[0] is the physical last slot
//! let dot = sdsdot(8, 0.0, &x, 1, &y, -1);
//! assert_eq!(dot, -120.0);
//! ```
//!
//! ```rust
//! use strided_dot::{try_sdsdot, Error};
//!
//! let x = [1.0f32, 2.0, 3.0];
//! let y = [1.0f32, 2.0];
//!
//! let err = try_sdsdot(3, 0.0, &x, 1, &y, 1).unwrap_err();
//! assert!(matches!(err, Error::Operand { operand: "y", .. }));
//! ```

pub mod config;
pub mod kernel;

pub use config::{KernelConfig, PreconditionPolicy};
pub use kernel::SdsdotKernel;
pub use strided_core::{Error, Result};

/// Dot product of `x` and `y` plus `scalar`, accumulated in `f64`
///
/// Returns `scalar` when `n <= 0`.
///
/// # Panics
/// Panics if either operand needs more storage than it has.
pub fn sdsdot(n: isize, scalar: f32, x: &[f32], stride_x: isize, y: &[f32], stride_y: isize) -> f32 {
    SdsdotKernel::scalar().compute(n, scalar, x, stride_x, y, stride_y)
}

/// [`sdsdot`] with explicit starting indices into `x` and `y`
///
/// ```rust
/// use strided_dot::sdsdot_ndarray;
///
/// let x = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let y = [6.0f32, 7.0, 8.0, 9.0, 10.0, 11.0];
///
/// // x: 2, 4, 6   y: 6, 7, 8
/// assert_eq!(sdsdot_ndarray(3, 0.0, &x, 2, 1, &y, 1, 0), 88.0);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn sdsdot_ndarray(
    n: isize,
    scalar: f32,
    x: &[f32],
    stride_x: isize,
    offset_x: usize,
    y: &[f32],
    stride_y: isize,
    offset_y: usize,
) -> f32 {
    SdsdotKernel::scalar().compute_ndarray(n, scalar, x, stride_x, offset_x, y, stride_y, offset_y)
}

/// Checked [`sdsdot`]
pub fn try_sdsdot(
    n: isize,
    scalar: f32,
    x: &[f32],
    stride_x: isize,
    y: &[f32],
    stride_y: isize,
) -> Result<f32> {
    SdsdotKernel::scalar().try_compute(n, scalar, x, stride_x, y, stride_y)
}

/// Checked [`sdsdot_ndarray`]
#[allow(clippy::too_many_arguments)]
pub fn try_sdsdot_ndarray(
    n: isize,
    scalar: f32,
    x: &[f32],
    stride_x: isize,
    offset_x: usize,
    y: &[f32],
    stride_y: isize,
    offset_y: usize,
) -> Result<f32> {
    SdsdotKernel::scalar().try_compute_ndarray(n, scalar, x, stride_x, offset_x, y, stride_y, offset_y)
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        sdsdot, sdsdot_ndarray, try_sdsdot, try_sdsdot_ndarray, KernelConfig, PreconditionPolicy,
        SdsdotKernel,
    };
    pub use strided_core::prelude::*;
}
