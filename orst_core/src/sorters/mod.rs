pub mod bubble_sorter;
pub mod heap_sorter;
pub mod insertion_sorter;
pub mod merge_sorter;
pub mod quick_sorter;
pub mod selection_sorter;

use clap::ValueEnum;

use crate::Sorter;
use bubble_sorter::{BubbleSorter, CocktailShakerSorter};
use heap_sorter::HeapSorter;
use insertion_sorter::InsertionSorter;
use merge_sorter::MergeSorter;
use quick_sorter::QuickSorter;
use selection_sorter::SelectionSorter;

/// Slices shorter than this are handed to the small array sorter by [`MergeSorter`] and
/// [`HeapSorter`].
pub(crate) const SMALL_ARRAY_THRESHOLD: usize = 10;

/// Every sorting algorithm in the crate, for picking one at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Bubble,
    CocktailShaker,
    Insertion,
    BinaryInsertion,
    Selection,
    Quick,
    Merge,
    Heap,
}

impl Algorithm {
    /// Builds the sorter for this algorithm. [`MergeSorter`] and [`HeapSorter`] get an
    /// [`InsertionSorter`] for their small slices.
    ///
    /// ```
    /// use orst_core::{Algorithm, Sorter};
    ///
    /// let mut slice = [5, 3, 1, 4, 2];
    /// Algorithm::Heap.sorter::<i32>().sort(&mut slice);
    /// assert_eq!(slice, [1, 2, 3, 4, 5]);
    /// ```
    pub fn sorter<T>(self) -> Box<dyn Sorter<T>>
    where
        T: Ord + 'static,
    {
        match self {
            Algorithm::Bubble => Box::new(BubbleSorter),
            Algorithm::CocktailShaker => Box::new(CocktailShakerSorter),
            Algorithm::Insertion => Box::new(InsertionSorter { smart: false }),
            Algorithm::BinaryInsertion => Box::new(InsertionSorter { smart: true }),
            Algorithm::Selection => Box::new(SelectionSorter),
            Algorithm::Quick => Box::new(QuickSorter),
            Algorithm::Merge => Box::new(MergeSorter::new(InsertionSorter::default())),
            Algorithm::Heap => Box::new(HeapSorter::new(InsertionSorter::default())),
        }
    }

    /// `true` for the algorithms with O(n²) running time.
    pub fn is_quadratic(self) -> bool {
        matches!(
            self,
            Algorithm::Bubble
                | Algorithm::CocktailShaker
                | Algorithm::Insertion
                | Algorithm::BinaryInsertion
                | Algorithm::Selection
        )
    }
}

/// Rearranges `slice` so that position `k` ends up holding the element that was at `order[k]`.
///
/// `order` must be a permutation of `0..slice.len()`. Each cycle of the permutation is walked
/// once with swaps, so elements are moved without being cloned.
pub(crate) fn apply_order<T>(slice: &mut [T], order: &[usize]) {
    debug_assert_eq!(slice.len(), order.len());

    let mut placed = vec![false; order.len()];
    for start in 0..order.len() {
        if placed[start] {
            continue;
        }

        let mut current = start;
        loop {
            placed[current] = true;
            let next = order[current];
            if next == start {
                break;
            }
            slice.swap(current, next);
            current = next;
        }
    }
}
