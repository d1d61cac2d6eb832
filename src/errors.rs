use thiserror::Error;

/// Recoverable failures reported by [`UnorderedSet`](crate::unorderedset::UnorderedSet).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetError {
    /// An indexed access landed at or beyond the live element count.
    #[error("index {index} is out of range for a set of {len} elements")]
    OutOfRange {
        /// The requested logical index.
        index: usize,
        /// The number of live elements at the time of the access.
        len: usize,
    },
    /// The allocator could not provide a buffer for a capacity change.
    /// The set keeps its pre-call state.
    #[error("could not resize set from {from} to {to} slots")]
    AllocationFailure {
        /// Capacity before the attempted resize.
        from: usize,
        /// Capacity the resize asked for.
        to: usize,
    },
}
