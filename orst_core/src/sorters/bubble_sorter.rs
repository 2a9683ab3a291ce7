use crate::Sorter;

/// An implementation of [Bubble Sort](https://en.wikipedia.org/wiki/Bubble_sort)
///
/// # Usage
///```
/// use orst_core::{BubbleSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// BubbleSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Bubble sort, sometimes referred to as sinking sort,
/// is a simple sorting algorithm that repeatedly steps
/// through the list, compares adjacent elements and swaps
/// them if they are in the wrong order. The pass through
/// the list is repeated until a pass makes no swap. The
/// algorithm, which is a comparison sort, is named for the
/// way larger elements "bubble" to the end of the list.
///
/// Bubble sort is stable and sorts in place in O(n²) time.
#[derive(Debug, Default, Clone, Copy)]
pub struct BubbleSorter;

impl<T> Sorter<T> for BubbleSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        if slice.len() < 2 {
            return;
        }

        while ltr_pass(slice) {}
    }

    fn name(&self) -> &'static str {
        "Bubble Sort"
    }
}

/// An implementation of [Cocktail Shaker Sort](https://en.wikipedia.org/wiki/Cocktail_shaker_sort)
///
/// # Usage
///```
/// use orst_core::{CocktailShakerSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// CocktailShakerSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// A variation of bubble sort that alternates the direction of its passes. A left to right pass
/// carries the largest unsorted element to the end, and the right to left pass that follows
/// carries the smallest one to the front, so small elements near the end of the list
/// ("turtles") no longer need one pass each to reach their place.
///
/// Sorting stops as soon as a pass, in either direction, makes no swap.
#[derive(Debug, Default, Clone, Copy)]
pub struct CocktailShakerSorter;

impl<T> Sorter<T> for CocktailShakerSorter
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]) {
        if slice.len() < 2 {
            return;
        }

        let mut left_to_right = true;
        loop {
            let swapped = if left_to_right {
                ltr_pass(slice)
            } else {
                rtl_pass(slice)
            };
            if !swapped {
                break;
            }
            left_to_right = !left_to_right;
        }
    }

    fn name(&self) -> &'static str {
        "Cocktail Shaker Sort"
    }
}

// Returns whether anything was swapped.
fn ltr_pass<T: Ord>(slice: &mut [T]) -> bool {
    let mut swapped = false;
    for i in 1..slice.len() {
        if slice[i - 1] > slice[i] {
            slice.swap(i - 1, i);
            swapped = true;
        }
    }
    swapped
}

fn rtl_pass<T: Ord>(slice: &mut [T]) -> bool {
    let mut swapped = false;
    for i in (1..slice.len()).rev() {
        if slice[i] < slice[i - 1] {
            slice.swap(i - 1, i);
            swapped = true;
        }
    }
    swapped
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn arbitrary_array() {
        let mut slice = [1, 5, 4, 2, 3];
        BubbleSorter.sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn arbitrary_array_cocktail() {
        let mut slice = [1, 5, 4, 2, 3];
        CocktailShakerSorter.sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let mut slice = (1..10).collect::<Vec<_>>();
        BubbleSorter.sort(&mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());

        CocktailShakerSorter.sort(&mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        BubbleSorter.sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());

        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        CocktailShakerSorter.sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn turtle_at_the_end() {
        let mut slice = [2, 3, 4, 5, 6, 7, 8, 1];
        assert!(ltr_pass(&mut slice));
        assert_eq!(slice, [2, 3, 4, 5, 6, 7, 1, 8]);

        let mut slice = [2, 3, 4, 5, 6, 7, 8, 1];
        assert!(rtl_pass(&mut slice));
        assert_eq!(slice, [1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(!ltr_pass(&mut slice));
    }

    #[test]
    fn duplicates() {
        let mut slice = [3, 1, 3, 2, 1, 2];
        CocktailShakerSorter.sort(&mut slice);
        assert_eq!(slice, [1, 1, 2, 2, 3, 3]);
    }

    #[test]
    fn simple_edge_cases() {
        let mut empty: Vec<i32> = vec![];
        BubbleSorter.sort(&mut empty);
        CocktailShakerSorter.sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![1];
        BubbleSorter.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![1, 2];
        BubbleSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut two = vec![2, 1];
        BubbleSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        BubbleSorter.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);

        let mut three = vec![3, 1, 2];
        CocktailShakerSorter.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }
}
