use thiserror::Error;

/// Errors returned by fallible ring buffer operations.
///
/// Every variant is caller-correctable. An operation that returns one of these
/// has left the buffer exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RingBufferError {
    #[error("Invalid capacity: a ring buffer must hold at least one element")]
    InvalidCapacity,

    #[error("Capacity too small: cannot resize to {requested} while holding {len} elements")]
    CapacityTooSmall { requested: usize, len: usize },

    #[error("Capacity exceeded: batch of {batch} elements does not fit in capacity {capacity}")]
    CapacityExceeded { batch: usize, capacity: usize },

    #[error("Empty input: a bulk write needs at least one element")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, RingBufferError>;
