//! Navigation between the nodes of a [`Heap`] and the heapify operations that restore the heap
//! property after a store or a take.
//!
//! A node is nothing more than an index into the heap's storage:
//!
//! ```text
//!             1
//!       2            3
//!    4     5      6     7
//!   8 9  10 11  12 13  14 15
//!
//! parent = index / 2
//! left   = index * 2
//! right  = index * 2 + 1
//! ```

use super::storage::ROOT_INDEX;
use super::Heap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HeapNode {
    index: usize,
}

impl HeapNode {
    pub(crate) fn root() -> Self {
        Self { index: ROOT_INDEX }
    }

    pub(crate) fn at(index: usize) -> Self {
        debug_assert!(index >= ROOT_INDEX);
        Self { index }
    }

    pub(crate) fn index(self) -> usize {
        self.index
    }

    pub(crate) fn is_root(self) -> bool {
        self.index == ROOT_INDEX
    }

    pub(crate) fn parent(self) -> Option<Self> {
        (!self.is_root()).then(|| Self::at(self.index / 2))
    }

    /// Children past `size` are not part of the heap.
    pub(crate) fn left(self, size: usize) -> Option<Self> {
        Self::within(2 * self.index, size)
    }

    pub(crate) fn right(self, size: usize) -> Option<Self> {
        Self::within(2 * self.index + 1, size)
    }

    fn within(index: usize, size: usize) -> Option<Self> {
        (index <= size).then(|| Self::at(index))
    }
}

impl<T, C> Heap<T, C>
where
    C: Fn(&T, &T) -> bool,
{
    /// `true` when the value at `a` belongs closer to the root than the value at `b`.
    fn prefers(&self, a: HeapNode, b: HeapNode) -> bool {
        match (
            self.storage.value(a.index()),
            self.storage.value(b.index()),
        ) {
            (Some(a), Some(b)) => (self.comparer)(a, b),
            _ => false,
        }
    }

    /// Sinks the value at `node` until no child is preferred over it.
    pub(crate) fn heapify_down(&mut self, node: HeapNode) {
        let candidate = match (node.left(self.size), node.right(self.size)) {
            (None, None) => return,
            (Some(left), None) => left,
            (None, Some(right)) => right,
            (Some(left), Some(right)) => {
                if self.prefers(left, right) {
                    left
                } else {
                    right
                }
            }
        };

        if self.prefers(candidate, node) {
            self.storage.exchange(node.index(), candidate.index());
            self.heapify_down(candidate);
        }
    }

    /// Lifts the value at `node` while it is preferred over its parent.
    pub(crate) fn heapify_up(&mut self, node: HeapNode) {
        let Some(parent) = node.parent() else {
            return;
        };

        if self.prefers(node, parent) {
            self.storage.exchange(node.index(), parent.index());
            self.heapify_up(parent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation() {
        let root = HeapNode::root();
        assert!(root.is_root());
        assert_eq!(root.parent(), None);
        assert_eq!(root.left(3), Some(HeapNode::at(2)));
        assert_eq!(root.right(3), Some(HeapNode::at(3)));

        let node = HeapNode::at(5);
        assert_eq!(node.parent(), Some(HeapNode::at(2)));
        assert_eq!(node.left(20).map(HeapNode::index), Some(10));
        assert_eq!(node.right(20).map(HeapNode::index), Some(11));
        assert_eq!(HeapNode::at(4).parent(), HeapNode::at(5).parent());
    }

    #[test]
    fn children_past_size_are_absent() {
        let node = HeapNode::at(2);
        assert_eq!(node.left(3), None);
        assert_eq!(node.right(3), None);
        assert_eq!(node.left(4), Some(HeapNode::at(4)));
        assert_eq!(node.right(4), None);
    }

    #[test]
    fn heapify_down_picks_preferred_child() {
        let mut heap = Heap::min(5).unwrap();
        for value in [1, 3, 2] {
            heap.store(value);
        }
        // Break the root on purpose and let it sink.
        heap.storage.put(ROOT_INDEX, 9);
        heap.heapify_down(HeapNode::root());

        assert_eq!(heap.storage.value(1), Some(&2));
        assert_eq!(heap.storage.value(2), Some(&3));
        assert_eq!(heap.storage.value(3), Some(&9));
    }

    #[test]
    fn heapify_up_stops_below_preferred_parent() {
        let mut heap = Heap::max(5).unwrap();
        for value in [9, 4, 7] {
            heap.store(value);
        }
        heap.store(5);

        // 5 lands below 4 and swaps once, but not past 9.
        assert_eq!(heap.storage.value(1), Some(&9));
        assert_eq!(heap.storage.value(2), Some(&5));
        assert_eq!(heap.storage.value(4), Some(&4));
    }
}
