use crate::sorters::{apply_order, SMALL_ARRAY_THRESHOLD};
use crate::Sorter;

/// An implementation of [Merge Sort](https://en.wikipedia.org/wiki/Merge_sort)
///
/// # Usage
///```
/// use orst_core::{InsertionSorter, MergeSorter, Sorter};
///
/// let sorter = MergeSorter::new(InsertionSorter::default());
///
/// let mut slice = (0..20).rev().collect::<Vec<_>>();
/// sorter.sort(&mut slice);
/// assert_eq!(slice, (0..20).collect::<Vec<_>>());
///```
///
/// # Algorithm
///
/// The slice is split at its midpoint, both halves are sorted recursively and the sorted halves
/// are merged back into the slice by repeatedly taking the smaller of the two heads. When the
/// heads are equal the left one is taken first, which makes the sort stable.
///
/// Recursing all the way down to single elements costs more than it saves, so any slice shorter
/// than 10 elements is handed to the `small_array_sorter` instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct MergeSorter<S> {
    small_array_sorter: S,
}

impl<S> MergeSorter<S> {
    pub fn new(small_array_sorter: S) -> Self {
        Self { small_array_sorter }
    }

    /// The sorter used for slices shorter than 10 elements.
    pub fn small_array_sorter(&self) -> &S {
        &self.small_array_sorter
    }
}

impl<S> MergeSorter<S> {
    fn merge_sort<T>(&self, slice: &mut [T])
    where
        T: Ord,
        S: Sorter<T>,
    {
        if slice.len() < SMALL_ARRAY_THRESHOLD {
            self.small_array_sorter.sort(slice);
            return;
        }

        let mid = slice.len() / 2;
        {
            let (first, second) = slice.split_at_mut(mid);
            self.merge_sort(first);
            self.merge_sort(second);
        }
        merge(slice, mid);
    }
}

/// Merges the sorted runs `slice[..mid]` and `slice[mid..]`.
fn merge<T: Ord>(slice: &mut [T], mid: usize) {
    let (first, second) = slice.split_at(mid);

    // Already in order, nothing to interleave.
    if matches!((first.last(), second.first()), (Some(a), Some(b)) if a <= b) {
        return;
    }

    let mut order = Vec::with_capacity(slice.len());
    let (mut f, mut s) = (0, 0);
    while f < first.len() || s < second.len() {
        let take_first = f < first.len() && (s >= second.len() || first[f] <= second[s]);
        if take_first {
            order.push(f);
            f += 1;
        } else {
            order.push(mid + s);
            s += 1;
        }
    }

    apply_order(slice, &order);
}

impl<T, S> Sorter<T> for MergeSorter<S>
where
    T: Ord,
    S: Sorter<T>,
{
    fn sort(&self, slice: &mut [T]) {
        if slice.len() < SMALL_ARRAY_THRESHOLD {
            log::debug!(
                "merge sort: {} elements, using {}",
                slice.len(),
                self.small_array_sorter.name()
            );
        }
        self.merge_sort(slice)
    }

    fn name(&self) -> &'static str {
        "Merge Sort"
    }
}
