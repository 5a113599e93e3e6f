//! Configuration types for the sdsdot kernel

use serde::{Deserialize, Serialize};

/// How the unchecked entry points treat caller preconditions
///
/// The checked entry points (`try_*`) always validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreconditionPolicy {
    /// The caller guarantees storage and strides are valid.
    /// Violations are caught by `debug_assert!` in debug builds and by slice
    /// bounds checks otherwise.
    Trust,

    /// Validate every call and panic with the validation error on violation
    Validate,
}

impl PreconditionPolicy {
    /// Get the name of this policy
    pub fn name(&self) -> &'static str {
        match self {
            Self::Trust => "trust",
            Self::Validate => "validate",
        }
    }
}

impl Default for PreconditionPolicy {
    fn default() -> Self {
        Self::Trust
    }
}

/// Kernel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Precondition handling for the unchecked entry points
    pub preconditions: PreconditionPolicy,

    /// Route unit-stride operands through the backend's contiguous loop
    pub unit_stride_fast_path: bool,
}

impl KernelConfig {
    /// Configuration that validates on every call
    pub fn validating() -> Self {
        Self {
            preconditions: PreconditionPolicy::Validate,
            ..Self::default()
        }
    }

    pub fn with_preconditions(mut self, preconditions: PreconditionPolicy) -> Self {
        self.preconditions = preconditions;
        self
    }

    pub fn with_unit_stride_fast_path(mut self, enabled: bool) -> Self {
        self.unit_stride_fast_path = enabled;
        self
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            preconditions: PreconditionPolicy::default(),
            unit_stride_fast_path: true,
        }
    }
}
