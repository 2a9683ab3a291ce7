//! A 1-indexed [binary heap](https://en.wikipedia.org/wiki/Binary_heap) over a self-expanding
//! buffer, ordered as either a min-heap or a max-heap.
//!
//! The heap exists to drive [`HeapSorter`](crate::HeapSorter), so its surface is kept to what
//! heap sort needs: [`store`](Heap::store), [`peek`](Heap::peek) and [`take`](Heap::take).
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `store`   | O(log n)   |
//! | `take`    | O(log n)   |
//! | `peek`    | O(1)       |
//!
//! # Example
//!
//! ```
//! use orst_core::heap::Heap;
//!
//! let mut heap = Heap::min(10).unwrap();
//! for value in [5, 3, 8, 1, 9, 2] {
//!     heap.store(value);
//! }
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.take(), Ok(1));
//! assert_eq!(heap.take(), Ok(2));
//! assert_eq!(heap.len(), 4);
//! ```

mod node;
mod storage;

pub use storage::{HeapStorage, MIN_CAPACITY, ROOT_INDEX};

use crate::{Error, Result};
use node::HeapNode;

/// Capacity of a [`Heap::default`].
pub const DEFAULT_CAPACITY: usize = 30;

/// Which end of the ordering sits at the root.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HeapKind {
    /// The smallest value is taken first.
    #[default]
    Min,
    /// The largest value is taken first.
    Max,
}

impl HeapKind {
    fn comparer<T: Ord>(self) -> fn(&T, &T) -> bool {
        match self {
            HeapKind::Min => |a, b| a < b,
            HeapKind::Max => |a, b| a > b,
        }
    }
}

/// A binary heap whose order is decided by a comparer.
///
/// The comparer returns `true` when its first argument belongs closer to the root than its
/// second. For every stored node, no child is preferred over its parent.
///
/// The storage may hold more slots than values: the heap keeps its own size and only the slots
/// `1..=len()` take part in the ordering.
pub struct Heap<T, C = fn(&T, &T) -> bool> {
    storage: HeapStorage<T>,
    comparer: C,
    size: usize,
}

impl<T: Ord> Heap<T> {
    /// Creates a min-heap or a max-heap with room for `capacity` values before it has to grow.
    ///
    /// Fails with [`Error::CapacityTooSmall`] when `capacity` is below [`MIN_CAPACITY`].
    pub fn new(kind: HeapKind, capacity: usize) -> Result<Self> {
        Self::with_comparer(capacity, kind.comparer())
    }

    pub fn min(capacity: usize) -> Result<Self> {
        Self::new(HeapKind::Min, capacity)
    }

    pub fn max(capacity: usize) -> Result<Self> {
        Self::new(HeapKind::Max, capacity)
    }
}

impl<T: Ord> Default for Heap<T> {
    /// A min-heap with [`DEFAULT_CAPACITY`].
    fn default() -> Self {
        Self {
            storage: HeapStorage::allocate(DEFAULT_CAPACITY),
            comparer: HeapKind::Min.comparer(),
            size: 0,
        }
    }
}

impl<T, C> Heap<T, C>
where
    C: Fn(&T, &T) -> bool,
{
    /// Creates a heap ordered by `comparer`.
    ///
    /// ```
    /// use orst_core::heap::Heap;
    ///
    /// // Longest string first.
    /// let mut heap = Heap::with_comparer(5, |a: &&str, b: &&str| a.len() > b.len()).unwrap();
    /// heap.store("ab");
    /// heap.store("abcd");
    /// heap.store("a");
    /// assert_eq!(heap.take(), Ok("abcd"));
    /// ```
    pub fn with_comparer(capacity: usize, comparer: C) -> Result<Self> {
        Ok(Self {
            storage: HeapStorage::new(capacity)?,
            comparer,
            size: 0,
        })
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the value at the root without removing it.
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.storage.value(ROOT_INDEX)
    }

    /// Adds a value to the heap. The storage grows as needed, so this never fails.
    pub fn store(&mut self, value: T) {
        self.size += 1;
        self.storage.put(self.size, value);
        let node = HeapNode::at(self.size);
        if !node.is_root() {
            self.heapify_up(node);
        }
    }

    /// Removes and returns the value at the root.
    ///
    /// The last value is moved into the root and sunk back into place. Fails with
    /// [`Error::EmptyHeap`] when nothing is stored.
    pub fn take(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyHeap);
        }

        let last = self.size;
        self.storage.swap(ROOT_INDEX, last)?;
        let taken = self
            .storage
            .take(last)
            .ok_or(Error::VacantSlot { index: last })?;
        self.size -= 1;

        if self.size >= 2 {
            self.heapify_down(HeapNode::root());
        }
        Ok(taken)
    }
}

impl<T, C> std::fmt::Debug for Heap<T, C>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Heap")
            .field("size", &self.size)
            .field("storage", &self.storage)
            .finish_non_exhaustive()
    }
}
