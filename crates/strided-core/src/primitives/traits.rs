//! Compute primitives trait
//!
//! Every reduction promotes its elements to `T::Aggregate` before the
//! multiply and adds into a single accumulator in logical index order.

use crate::numeric::Numeric;
use crate::stride::StridedView;
use num_traits::Zero;

/// Trait for computational primitives with generic numeric support
///
/// Backends may override the defaults with faster loops, but must keep the
/// summation order (logical index 0 first, one product per addition) so
/// that every backend returns bit-identical results.
pub trait ComputePrimitives<T: Numeric = f32>: Clone + Send + Sync {
    /// Get the name of this backend
    fn backend_name(&self) -> &'static str;

    /// Dot product of two contiguous slices, accumulated in `T::Aggregate`
    fn dot_product(&self, a: &[T], b: &[T]) -> T::Aggregate {
        debug_assert_eq!(a.len(), b.len(), "Dot product operands must have same length");

        let mut acc = <T::Aggregate as Zero>::zero();
        for (&x, &y) in a.iter().zip(b.iter()) {
            acc += x.widen() * y.widen();
        }
        acc
    }

    /// Dot product of two strided views, accumulated in `T::Aggregate`
    ///
    /// Each view supplies its own start and per-step delta; the pairing is by
    /// logical index regardless of stride sign.
    fn strided_dot_product(&self, x: &StridedView<'_, T>, y: &StridedView<'_, T>) -> T::Aggregate {
        debug_assert_eq!(x.len(), y.len(), "Strided views must have same length");

        let mut acc = <T::Aggregate as Zero>::zero();
        for (a, b) in x.iter().zip(y.iter()) {
            acc += a.widen() * b.widen();
        }
        acc
    }
}
