//! Numeric trait for mixed-precision kernels
//!
//! Element types are stored at their own precision and accumulated at the
//! precision of their `Aggregate` type. Narrowing back to storage precision
//! happens exactly once, at the end of a reduction.

use bytemuck::Pod;
use num_traits::Float;
use std::fmt::Debug;
use std::ops::AddAssign;

/// Base trait for element types handled by strided kernels
pub trait Numeric: Pod + Float + Debug + Send + Sync {
    /// Type used for accumulation in reductions (dot products, sums)
    type Aggregate: Float + From<Self> + Into<f64> + AddAssign + Debug + Send + Sync;

    /// Promote to the accumulation type
    fn widen(self) -> Self::Aggregate {
        <Self::Aggregate as From<Self>>::from(self)
    }

    /// Narrow an accumulated value back to storage precision
    ///
    /// Uses IEEE-754 round-to-nearest; values beyond the storage range
    /// become infinite.
    fn narrow(agg: Self::Aggregate) -> Self;
}

impl Numeric for f32 {
    type Aggregate = f64; // Use f64 for better precision in aggregates

    fn narrow(agg: f64) -> f32 {
        agg as f32
    }
}

impl Numeric for f64 {
    type Aggregate = f64;

    fn narrow(agg: f64) -> f64 {
        agg
    }
}
