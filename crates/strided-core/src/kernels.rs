//! Kernel trait definitions
//!
//! Algorithm crates implement [`StridedKernel`] for their kernel types.
//! Kernels own a backend from the primitives layer and do the per-call
//! bookkeeping (length policy, views, narrowing) around it.

use crate::{primitives::ComputePrimitives, Numeric};

/// Base trait for all strided kernels
pub trait StridedKernel<T: Numeric = f32>: Clone + Send + Sync {
    /// The type of primitives used by this kernel
    type Primitives: ComputePrimitives<T>;

    /// Get the primitives used by this kernel
    fn primitives(&self) -> &Self::Primitives;

    /// Name of this kernel for debugging/logging
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
