use thiserror::Error;

/// Error types for `ByteVec` and `SlackVec` operations
///
/// Every failed call leaves the vector satisfying its invariants.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum SlackVecError {
    /// The vector state is structurally inconsistent with the requested element size
    #[error("Invalid vector state: {reason}")]
    InvalidHandle {
        /// Description of the violated invariant
        reason: &'static str,
    },
    /// Index or range is outside the current vector bounds
    #[error("Range out of bounds: {len} element(s) at index {index} in vector of size {size}")]
    OutOfRange {
        /// First index of the requested range
        index: usize,
        /// Number of elements in the requested range
        len: usize,
        /// Current size of the vector
        size: usize,
    },
    /// Capacity arithmetic would overflow
    #[error("Capacity overflow: {requested} elements of {element_size} bytes")]
    CapacityOverflow {
        /// Number of elements that could not be represented
        requested: usize,
        /// Element size in bytes
        element_size: usize,
    },
    /// The allocator refused the request
    #[error("Allocation failure: could not allocate {bytes} bytes")]
    AllocationFailure {
        /// Size of the refused allocation in bytes
        bytes: usize,
    },
    /// A parameter has an unusable value
    #[error("Invalid argument: {parameter} = {value}")]
    InvalidArgument {
        /// Name of the parameter
        parameter: &'static str,
        /// Provided value
        value: usize,
    },
}
