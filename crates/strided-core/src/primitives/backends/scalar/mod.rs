//! Scalar backend implementation
//!
//! Plain loops that work for every numeric type. The contiguous dot product
//! is unrolled by [`UNROLL`] but still adds one product at a time, so it
//! agrees bit for bit with the generic strided loop.

use crate::primitives::ComputePrimitives;
use crate::Numeric;
use num_traits::Zero;

/// Block size of the unrolled contiguous loop
pub const UNROLL: usize = 5;

/// Scalar backend - works for all numeric types
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarBackend;

impl ScalarBackend {
    pub fn new() -> Self {
        Self
    }
}

impl<T: Numeric> ComputePrimitives<T> for ScalarBackend {
    fn backend_name(&self) -> &'static str {
        "scalar"
    }

    fn dot_product(&self, a: &[T], b: &[T]) -> T::Aggregate {
        debug_assert_eq!(a.len(), b.len(), "Dot product operands must have same length");

        let n = a.len().min(b.len());
        let (a, b) = (&a[..n], &b[..n]);
        let head = n % UNROLL;

        let mut acc = <T::Aggregate as Zero>::zero();

        // Clean-up loop first so the remainder keeps its logical position
        for i in 0..head {
            acc += a[i].widen() * b[i].widen();
        }

        for (ca, cb) in a[head..]
            .chunks_exact(UNROLL)
            .zip(b[head..].chunks_exact(UNROLL))
        {
            acc += ca[0].widen() * cb[0].widen();
            acc += ca[1].widen() * cb[1].widen();
            acc += ca[2].widen() * cb[2].widen();
            acc += ca[3].widen() * cb[3].widen();
            acc += ca[4].widen() * cb[4].widen();
        }

        acc
    }

    // Strided views use the default logical-order loop
}
