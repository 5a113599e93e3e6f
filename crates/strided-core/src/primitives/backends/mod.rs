//! Concrete backend implementations
//!
//! Plain types with direct implementations, no Box, no dyn.

pub mod scalar;

pub use scalar::ScalarBackend;
