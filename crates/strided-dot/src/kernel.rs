//! The sdsdot kernel
//!
//! `sdsdot` computes `scalar + Σ x[i] * y[i]` over `n` logical elements of two
//! strided `f32` vectors. Products are formed and summed in `f64`, the scalar
//! is added once at the end, and the result is narrowed to `f32` exactly once.

use crate::config::{KernelConfig, PreconditionPolicy};
use strided_core::{
    ComputePrimitives, Error, Numeric, Result, ScalarBackend, StridedKernel, StridedView,
};

/// Number of logical elements for a signed count, `None` when there is no work
#[inline]
fn logical_len(n: isize) -> Option<usize> {
    if n <= 0 {
        None
    } else {
        Some(n as usize)
    }
}

fn validate_operands(x: &StridedView<'_, f32>, y: &StridedView<'_, f32>) -> Result<()> {
    x.validate().map_err(|e| Error::operand("x", e))?;
    y.validate().map_err(|e| Error::operand("y", e))?;
    Ok(())
}

/// Kernel for the extended-precision strided dot product
#[derive(Clone, Debug)]
pub struct SdsdotKernel<P: ComputePrimitives<f32> = ScalarBackend> {
    primitives: P,
    config: KernelConfig,
}

impl<P: ComputePrimitives<f32>> SdsdotKernel<P> {
    /// Create a kernel with the default configuration
    pub fn new(primitives: P) -> Self {
        Self {
            primitives,
            config: KernelConfig::default(),
        }
    }

    /// Create a kernel with an explicit configuration
    pub fn with_config(primitives: P, config: KernelConfig) -> Self {
        log::trace!(
            "sdsdot kernel: backend={}, preconditions={}, unit_stride_fast_path={}",
            primitives.backend_name(),
            config.preconditions.name(),
            config.unit_stride_fast_path
        );
        Self { primitives, config }
    }

    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// BLAS-style dot product; a negative stride starts at the last element
    ///
    /// Returns `scalar` without touching `x` or `y` when `n <= 0`.
    pub fn compute(
        &self,
        n: isize,
        scalar: f32,
        x: &[f32],
        stride_x: isize,
        y: &[f32],
        stride_y: isize,
    ) -> f32 {
        let Some(len) = logical_len(n) else {
            return scalar;
        };
        let xv = StridedView::from_blas(x, len, stride_x);
        let yv = StridedView::from_blas(y, len, stride_y);
        self.run(scalar, &xv, &yv)
    }

    /// Dot product with explicit starting indices
    #[allow(clippy::too_many_arguments)]
    pub fn compute_ndarray(
        &self,
        n: isize,
        scalar: f32,
        x: &[f32],
        stride_x: isize,
        offset_x: usize,
        y: &[f32],
        stride_y: isize,
        offset_y: usize,
    ) -> f32 {
        let Some(len) = logical_len(n) else {
            return scalar;
        };
        let xv = StridedView::from_parts(x, len, stride_x, offset_x);
        let yv = StridedView::from_parts(y, len, stride_y, offset_y);
        self.run(scalar, &xv, &yv)
    }

    /// Checked BLAS-style dot product
    ///
    /// Fails if a stride is zero while `n > 1` or if either operand would
    /// reach outside its storage. `n <= 0` always succeeds with `scalar`.
    pub fn try_compute(
        &self,
        n: isize,
        scalar: f32,
        x: &[f32],
        stride_x: isize,
        y: &[f32],
        stride_y: isize,
    ) -> Result<f32> {
        let Some(len) = logical_len(n) else {
            return Ok(scalar);
        };
        let xv = StridedView::from_blas(x, len, stride_x);
        let yv = StridedView::from_blas(y, len, stride_y);
        validate_operands(&xv, &yv)?;
        Ok(self.accumulate(scalar, &xv, &yv))
    }

    /// Checked dot product with explicit starting indices
    #[allow(clippy::too_many_arguments)]
    pub fn try_compute_ndarray(
        &self,
        n: isize,
        scalar: f32,
        x: &[f32],
        stride_x: isize,
        offset_x: usize,
        y: &[f32],
        stride_y: isize,
        offset_y: usize,
    ) -> Result<f32> {
        let Some(len) = logical_len(n) else {
            return Ok(scalar);
        };
        let xv = StridedView::from_parts(x, len, stride_x, offset_x);
        let yv = StridedView::from_parts(y, len, stride_y, offset_y);
        validate_operands(&xv, &yv)?;
        Ok(self.accumulate(scalar, &xv, &yv))
    }

    fn run(&self, scalar: f32, x: &StridedView<'_, f32>, y: &StridedView<'_, f32>) -> f32 {
        match self.config.preconditions {
            PreconditionPolicy::Validate => {
                if let Err(e) = validate_operands(x, y) {
                    panic!("sdsdot precondition violated: {e}");
                }
            }
            PreconditionPolicy::Trust => {
                debug_assert!(
                    validate_operands(x, y).is_ok(),
                    "sdsdot precondition violated: {:?}",
                    validate_operands(x, y)
                );
            }
        }
        self.accumulate(scalar, x, y)
    }

    fn accumulate(&self, scalar: f32, x: &StridedView<'_, f32>, y: &StridedView<'_, f32>) -> f32 {
        let contiguous = if self.config.unit_stride_fast_path {
            x.as_contiguous().zip(y.as_contiguous())
        } else {
            None
        };
        let dot = match contiguous {
            Some((a, b)) => self.primitives.dot_product(a, b),
            None => self.primitives.strided_dot_product(x, y),
        };
        f32::narrow(dot + scalar.widen())
    }
}

impl SdsdotKernel<ScalarBackend> {
    /// Kernel on the scalar backend with the default configuration
    pub fn scalar() -> Self {
        Self::new(ScalarBackend::new())
    }
}

impl Default for SdsdotKernel<ScalarBackend> {
    fn default() -> Self {
        Self::scalar()
    }
}

impl<P: ComputePrimitives<f32>> StridedKernel<f32> for SdsdotKernel<P> {
    type Primitives = P;

    fn primitives(&self) -> &P {
        &self.primitives
    }

    fn name(&self) -> &'static str {
        "sdsdot"
    }
}
