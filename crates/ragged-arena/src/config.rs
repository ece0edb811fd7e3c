//! Construction-time allocation hints.

use ragged_core::{RaggedError, RowSpan};

/// Initial allocation sizes for a `RaggedVec`.
///
/// Both values are hints only: the row sequence and the shared buffer
/// still grow on demand. Validated by
/// [`RaggedVec::with_config`](crate::RaggedVec::with_config).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RaggedConfig {
    /// Number of rows to pre-allocate descriptors for.
    ///
    /// Default: 0.
    pub row_capacity: usize,

    /// Number of element slots to pre-allocate in the shared buffer.
    ///
    /// Default: 0. Callers that know the total element count up front
    /// (for example `rows * cols`) avoid every buffer reallocation by
    /// setting this.
    pub element_capacity: usize,
}

impl RaggedConfig {
    /// A config with no pre-allocation.
    pub fn new() -> Self {
        Self {
            row_capacity: 0,
            element_capacity: 0,
        }
    }

    /// Set the row descriptor hint.
    pub fn row_capacity(mut self, rows: usize) -> Self {
        self.row_capacity = rows;
        self
    }

    /// Set the element slot hint.
    pub fn element_capacity(mut self, elements: usize) -> Self {
        self.element_capacity = elements;
        self
    }

    /// Check that both hints are representable as allocations of `T`.
    ///
    /// # Errors
    ///
    /// Returns [`RaggedError::CapacityOverflow`] if either hint would need
    /// more than `isize::MAX` bytes.
    pub fn validate<T>(&self) -> Result<(), RaggedError> {
        check_bytes(self.row_capacity, std::mem::size_of::<RowSpan>())?;
        check_bytes(self.element_capacity, std::mem::size_of::<T>())
    }
}

impl Default for RaggedConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn check_bytes(count: usize, elem_size: usize) -> Result<(), RaggedError> {
    match count.checked_mul(elem_size) {
        Some(bytes) if bytes <= isize::MAX as usize => Ok(()),
        _ => Err(RaggedError::CapacityOverflow { requested: count }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_preallocation() {
        let config = RaggedConfig::default();
        assert_eq!(config.row_capacity, 0);
        assert_eq!(config.element_capacity, 0);
        assert!(config.validate::<u64>().is_ok());
    }

    #[test]
    fn builder_sets_hints() {
        let config = RaggedConfig::new().row_capacity(8).element_capacity(64);
        assert_eq!(config.row_capacity, 8);
        assert_eq!(config.element_capacity, 64);
    }

    #[test]
    fn oversized_element_hint_is_rejected() {
        let config = RaggedConfig::new().element_capacity(usize::MAX / 2);
        assert_eq!(
            config.validate::<u64>(),
            Err(RaggedError::CapacityOverflow {
                requested: usize::MAX / 2
            })
        );
    }

    #[test]
    fn zero_sized_elements_never_overflow() {
        let config = RaggedConfig::new().element_capacity(usize::MAX);
        assert!(config.validate::<()>().is_ok());
    }
}
