use crate::{Error, Result};

/// Index of the root of a heap. Slot 0 is never used, which keeps the parent and child arithmetic
/// free of offsets.
pub const ROOT_INDEX: usize = 1;

/// Smallest capacity a [`HeapStorage`] accepts: a root and two levels of children.
pub const MIN_CAPACITY: usize = 5;

/// The 1-indexed, self-expanding buffer behind a [`Heap`](super::Heap).
///
/// Slots hold `Option<T>`, `None` marking a slot that has not been written. Writing to an index
/// past the end never fails: the buffer grows and every slot in between is left empty.
///
/// ```
/// use orst_core::heap::HeapStorage;
///
/// let mut storage = HeapStorage::new(10).unwrap();
/// storage.set(11, 10).unwrap();
/// storage.set(15, 20).unwrap();
///
/// assert_eq!(storage.get(11).unwrap(), Some(&10));
/// assert_eq!(storage.get(13).unwrap(), None);
/// assert_eq!(storage.get(15).unwrap(), Some(&20));
///
/// // The first slot is reserved.
/// assert!(storage.set(0, 1).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapStorage<T> {
    slots: Vec<Option<T>>,
}

impl<T> HeapStorage<T> {
    /// Creates a storage with room for `capacity` values besides the reserved slot.
    ///
    /// Fails with [`Error::CapacityTooSmall`] when `capacity` is below [`MIN_CAPACITY`].
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity < MIN_CAPACITY {
            return Err(Error::CapacityTooSmall {
                capacity,
                minimum: MIN_CAPACITY,
            });
        }
        Ok(Self::allocate(capacity))
    }

    pub(super) fn allocate(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity + 1);
        slots.resize_with(capacity + 1, || None);
        Self { slots }
    }

    /// Reads a slot. The reserved slot always reads as empty.
    ///
    /// Fails with [`Error::IndexOutOfRange`] past the end of the buffer.
    pub fn get(&self, index: usize) -> Result<Option<&T>> {
        self.slots
            .get(index)
            .map(Option::as_ref)
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.slots.len(),
            })
    }

    /// Writes `value` at `index`, growing the buffer when `index` is past the end.
    ///
    /// Fails with [`Error::ReservedIndex`] for index 0.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        if index == 0 {
            return Err(Error::ReservedIndex { index });
        }
        self.put(index, value);
        Ok(())
    }

    /// Exchanges two slots. The reserved slot can not take part in a swap.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        if let Some(index) = [a, b].into_iter().find(|&index| index == 0) {
            return Err(Error::ReservedIndex { index });
        }
        crate::swap(&mut self.slots, a, b)
    }

    /// Number of slots, including the reserved one.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    // There is always the reserved slot.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Infallible write for indexes that are known not to be 0.
    pub(super) fn put(&mut self, index: usize, value: T) {
        debug_assert_ne!(index, 0);

        let len = self.slots.len();
        if index < len {
            self.slots[index] = Some(value);
            return;
        }

        if index > len {
            log::trace!(
                "heap storage: growing from {len} to {} slots, {} left empty",
                index + 1,
                index - len
            );
            self.slots.resize_with(index, || None);
        }
        self.slots.push(Some(value));
    }

    pub(super) fn value(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub(super) fn take(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    pub(super) fn exchange(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
    }
}
