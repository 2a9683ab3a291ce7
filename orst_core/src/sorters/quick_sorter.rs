use crate::Sorter;

/// An implementation of [Quick Sort](https://en.wikipedia.org/wiki/Quicksort)
///
/// # Usage
///```
/// use orst_core::{QuickSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// QuickSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Quicksort is an in-place sorting algorithm. Developed
/// by British computer scientist Tony Hoare in 1959 and published
/// in 1961 it is still a commonly used algorithm for
/// sorting.
///
/// # Algorithm
///
/// Quicksort is a divide-and-conquer algorithm. This implementation uses the
/// [Lomuto partition scheme](https://en.wikipedia.org/wiki/Quicksort#Lomuto_partition_scheme):
/// the last element of a range is the pivot, every element less than or equal to it is moved in
/// front of a boundary, and the pivot is finally swapped onto the boundary. The ranges on either
/// side of the pivot are then sorted the same way.
///
/// The pending ranges are kept on an explicit stack rather than on the call stack, and the
/// smaller range is always handled first. Already sorted input is the worst case for this pivot
/// choice (O(n²) comparisons) but the stack never grows past O(log n) entries.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuickSorter;

fn quicksort<T: Ord>(slice: &mut [T]) {
    if slice.len() < 2 {
        return;
    }

    let mut ranges = vec![(0, slice.len() - 1)];
    while let Some((low, high)) = ranges.pop() {
        if low >= high {
            continue;
        }

        let pivot = partition(slice, low, high);
        let left = (low, pivot.saturating_sub(1));
        let right = (pivot + 1, high);

        // Popped last, so the smaller one goes on top.
        if pivot - low < high - pivot {
            ranges.push(right);
            ranges.push(left);
        } else {
            ranges.push(left);
            ranges.push(right);
        }
    }
}

/// Partitions `slice[low..=high]` around `slice[high]` and returns the pivot's new index.
fn partition<T: Ord>(slice: &mut [T], low: usize, high: usize) -> usize {
    let mut boundary = low;
    for i in low..high {
        if slice[i] <= slice[high] {
            slice.swap(boundary, i);
            boundary += 1;
        }
    }
    slice.swap(boundary, high);
    boundary
}

impl<T> Sorter<T> for QuickSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        quicksort(slice)
    }

    fn name(&self) -> &'static str {
        "Quick Sort"
    }
}
