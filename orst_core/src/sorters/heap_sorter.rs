use crate::heap::Heap;
use crate::sorters::{apply_order, SMALL_ARRAY_THRESHOLD};
use crate::Sorter;

/// An implementation of [Heap Sort](https://en.wikipedia.org/wiki/Heapsort) on top of the
/// crate's [`Heap`].
///
/// # Usage
///```
/// use orst_core::{HeapSorter, InsertionSorter, Sorter};
///
/// let sorter = HeapSorter::new(InsertionSorter::default());
///
/// let mut slice = [12, 5, 9, 1, 20, 3, 3, 17, 8, 0, 4];
/// sorter.sort(&mut slice);
/// assert_eq!(slice, [0, 1, 3, 3, 4, 5, 8, 9, 12, 17, 20]);
///```
///
/// # Algorithm
///
/// Every element is stored into a min-heap sized to the slice and the heap is then drained, each
/// [`take`](Heap::take) handing back the smallest remaining element, which is written to the next
/// position of the slice. Sorting takes O(n log n) time and O(n) extra memory for the heap.
///
/// The heap holds references to the elements tagged with their position, so nothing is cloned;
/// the drained positions are applied to the slice at the end. Equal elements come out in their
/// original order.
///
/// Slices shorter than 10 elements are handed to the `small_array_sorter`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeapSorter<S> {
    small_array_sorter: S,
}

impl<S> HeapSorter<S> {
    pub fn new(small_array_sorter: S) -> Self {
        Self { small_array_sorter }
    }

    /// The sorter used for slices shorter than 10 elements.
    pub fn small_array_sorter(&self) -> &S {
        &self.small_array_sorter
    }
}

/// Positions of the elements of `slice` in the order a min-heap gives them back.
fn heap_order<T: Ord>(slice: &[T]) -> crate::Result<Vec<usize>> {
    let mut heap = Heap::min(slice.len())?;
    for (position, value) in slice.iter().enumerate() {
        heap.store((value, position));
    }

    let mut order = Vec::with_capacity(slice.len());
    while !heap.is_empty() {
        let (_, position) = heap.take()?;
        order.push(position);
    }
    Ok(order)
}

impl<T, S> Sorter<T> for HeapSorter<S>
where
    T: Ord,
    S: Sorter<T>,
{
    fn sort(&self, slice: &mut [T]) {
        if slice.len() < SMALL_ARRAY_THRESHOLD {
            log::debug!(
                "heap sort: {} elements, using {}",
                slice.len(),
                self.small_array_sorter.name()
            );
            self.small_array_sorter.sort(slice);
            return;
        }

        match heap_order(slice) {
            Ok(order) => apply_order(slice, &order),
            Err(err) => {
                log::warn!(
                    "heap sort: {err}, falling back to {}",
                    self.small_array_sorter.name()
                );
                self.small_array_sorter.sort(slice);
            }
        }
    }

    fn name(&self) -> &'static str {
        "Heap Sort"
    }
}
