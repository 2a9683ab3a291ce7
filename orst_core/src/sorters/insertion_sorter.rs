use crate::Sorter;

/// An implementation of [Insertion Sort](https://en.wikipedia.org/wiki/Insertion_sort)
///
/// # Explanation
///
/// Insertion sort is a simple sorting algorithm that builds the final sorted array (or list) one
/// item at a time
///
/// Insertion sort iterates, consuming one input element each repetition, and grows a sorted output
/// list. At each iteration, insertion sort removes one element from the input data, finds the
/// location it belongs within the sorted list, and inserts it there. It repeats until no input
/// elements remain.
///
/// Sorting is done in-place, by iterating up the array, growing the sorted list behind it. The
/// run of larger values in the sorted list is shifted one slot to the right and the current value
/// is placed in the slot that opens up. This makes it cheap on small or nearly sorted input, which
/// is why [`MergeSorter`](crate::MergeSorter) and [`HeapSorter`](crate::HeapSorter) hand their
/// small slices to it.
///
/// With `smart` set, the insertion point is found with a binary search over the sorted list
/// instead of a linear scan. Both modes are stable: a value is always placed after the elements
/// equal to it.
///
/// # Usage
///```
/// use orst_core::{InsertionSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// InsertionSorter{ smart: true }.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
#[derive(Debug, Default, Clone, Copy)]
pub struct InsertionSorter {
    pub smart: bool,
}

impl<T> Sorter<T> for InsertionSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        if slice.len() < 2 {
            return;
        }

        for unsorted in 1..slice.len() {
            let (sorted, rest) = slice.split_at(unsorted);
            let value = &rest[0];

            let i = if !self.smart {
                let mut i = unsorted;
                while i > 0 && sorted[i - 1] > *value {
                    i -= 1;
                }
                i
            } else {
                sorted.partition_point(|probe| probe <= value)
            };

            if i != unsorted {
                slice[i..=unsorted].rotate_right(1);
            }
        }
    }

    fn name(&self) -> &'static str {
        if self.smart {
            "Insertion Sort (binary search)"
        } else {
            "Insertion Sort"
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn arbitrary_array_smart() {
        let mut slice = [1, 5, 4, 2, 3];
        InsertionSorter { smart: true }.sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn arbitrary_array_lame() {
        let mut slice = [1, 5, 4, 2, 3];
        InsertionSorter { smart: false }.sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array_smart() {
        let mut slice = (1..10).collect::<Vec<_>>();
        InsertionSorter { smart: true }.sort(&mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn sorted_array_lame() {
        let mut slice = (1..10).collect::<Vec<_>>();
        InsertionSorter { smart: false }.sort(&mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted_smart() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        InsertionSorter { smart: true }.sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted_lame() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        InsertionSorter { smart: false }.sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn equal_values_keep_their_order() {
        // Only the first field takes part in the comparison.
        #[derive(Debug, PartialEq, Eq)]
        struct Keyed(u8, char);

        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for Keyed {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        for smart in [true, false] {
            let mut slice = [Keyed(2, 'a'), Keyed(1, 'b'), Keyed(2, 'c'), Keyed(1, 'd')];
            InsertionSorter { smart }.sort(&mut slice);
            assert_eq!(
                slice,
                [Keyed(1, 'b'), Keyed(1, 'd'), Keyed(2, 'a'), Keyed(2, 'c')]
            );
        }
    }

    #[test]
    fn simple_edge_cases_smart() {
        let mut one = vec![1];
        InsertionSorter { smart: true }.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![1, 2];
        InsertionSorter { smart: true }.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut two = vec![2, 1];
        InsertionSorter { smart: true }.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        InsertionSorter { smart: true }.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }

    #[test]
    fn simple_edge_cases_lame() {
        let mut empty: Vec<i32> = vec![];
        InsertionSorter { smart: false }.sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![1];
        InsertionSorter { smart: false }.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![2, 1];
        InsertionSorter { smart: false }.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        InsertionSorter { smart: false }.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }
}
