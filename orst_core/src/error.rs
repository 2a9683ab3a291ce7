use thiserror::Error;

/// Alias for `Result<T, orst_core::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents all possible errors raised by the heap and the swap primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Raised when a heap is constructed with fewer slots than it needs to hold a root and two
    /// levels of children.
    #[error("heap capacity {capacity} is too small (minimum: {minimum})")]
    CapacityTooSmall { capacity: usize, minimum: usize },

    /// Raised when taking from a heap that holds no values.
    #[error("cannot take from an empty heap")]
    EmptyHeap,

    /// Raised when writing to the reserved slot of a heap storage.
    #[error("cannot assign to reserved index {index}")]
    ReservedIndex { index: usize },

    /// Raised when reading or swapping past the end of a sequence.
    #[error("index {index} is out of range (length: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Raised when a slot inside the populated region of a heap holds no value.
    #[error("slot {index} holds no value")]
    VacantSlot { index: usize },
}

impl Error {
    /// Returns `true` for the bounds errors: [`Error::ReservedIndex`] and
    /// [`Error::IndexOutOfRange`].
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            Error::ReservedIndex { .. } | Error::IndexOutOfRange { .. }
        )
    }
}
