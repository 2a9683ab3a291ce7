//! # Introduction
//!
//! Classic in-memory comparison sorting algorithms, in the spirit of [Crust of Rust: Sorting
//! Algorithms](https://www.youtube.com/watch?v=h4RkCyJyXmM), together with the 1-indexed binary
//! [`Heap`](heap::Heap) that backs the [`HeapSorter`].
//!
//! Every algorithm implements the [`Sorter`] trait and sorts a slice in place into
//! non-decreasing order.
//!
//! # Example
//!
//! ```
//! use orst_core::{BubbleSorter, InsertionSorter, MergeSorter, Sorter};
//!
//! let mut slice = vec![1, 3, 2, 5, 4];
//! BubbleSorter.sort(&mut slice);
//! assert_eq!(vec![1, 2, 3, 4, 5], slice);
//!
//! let merge = MergeSorter::new(InsertionSorter::default());
//! let mut slice = (0..100).rev().collect::<Vec<_>>();
//! merge.sort(&mut slice);
//! assert_eq!((0..100).collect::<Vec<_>>(), slice);
//! ```

pub mod benchmark;
mod error;
pub mod heap;
mod sorters;

pub use error::{Error, Result};
pub use sorters::bubble_sorter::{BubbleSorter, CocktailShakerSorter};
pub use sorters::heap_sorter::HeapSorter;
pub use sorters::insertion_sorter::InsertionSorter;
pub use sorters::merge_sorter::MergeSorter;
pub use sorters::quick_sorter::QuickSorter;
pub use sorters::selection_sorter::SelectionSorter;
pub use sorters::Algorithm;

use benchmark::BenchConfig;
use clap::{Args, Subcommand};
use heap::{Heap, HeapKind};

/// The sorting algorithm must implement the trait `Sorter`.
///
/// Implementors sort the slice in place into non-decreasing order. Sorters are driven through
/// `&self` so one instance can be reused across calls, or stored behind a `Box<dyn Sorter<T>>`
/// to pick an algorithm at runtime.
pub trait Sorter<T>
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]);

    /// A human readable name, used in benchmark reports.
    fn name(&self) -> &'static str;
}

impl<T, S> Sorter<T> for &S
where
    T: Ord,
    S: Sorter<T> + ?Sized,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        (**self).sort(slice)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<T, S> Sorter<T> for Box<S>
where
    T: Ord,
    S: Sorter<T> + ?Sized,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        (**self).sort(slice)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Exchanges the elements at positions `a` and `b`.
///
/// Nothing is touched when `a == b`. If either position is out of bounds,
/// [`Error::IndexOutOfRange`] is returned and the slice is left as it was.
///
/// ```
/// let mut slice = [1, 2, 3];
/// orst_core::swap(&mut slice, 0, 2).unwrap();
/// assert_eq!(slice, [3, 2, 1]);
///
/// assert!(orst_core::swap(&mut slice, 0, 3).is_err());
/// assert_eq!(slice, [3, 2, 1]);
/// ```
pub fn swap<T>(slice: &mut [T], a: usize, b: usize) -> Result<()> {
    let len = slice.len();
    if let Some(index) = [a, b].into_iter().find(|&index| index >= len) {
        return Err(Error::IndexOutOfRange { index, len });
    }
    if a != b {
        slice.swap(a, b);
    }
    Ok(())
}

/// Clap arguments for the `orst` command line. Install the `orst` binary and run `orst --help`
/// to see what options are available.
#[derive(Debug, Args)]
#[command(flatten_help = true, subcommand_required = true)]
pub struct OrstArgs {
    #[command(subcommand)]
    command: OrstCommands,
}

#[derive(Clone, Subcommand, Debug)]
#[command(arg_required_else_help = true)]
enum OrstCommands {
    /// Sort a list of integers with the chosen algorithm.
    Sort {
        #[arg(short, long, value_enum, default_value_t = Algorithm::Quick)]
        algorithm: Algorithm,

        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Store integers into a binary heap and print the order they are taken out in.
    Heap {
        /// Build a max-heap instead of a min-heap.
        #[arg(long)]
        max: bool,

        #[arg(short, long, default_value_t = heap::DEFAULT_CAPACITY)]
        capacity: usize,

        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Compare the algorithms on random data.
    Bench(BenchArgs),
}

#[derive(Clone, Args, Debug)]
struct BenchArgs {
    /// List sizes to benchmark.
    #[arg(short, long, value_delimiter = ',', default_values_t = [0, 1, 100, 10_000, 100_000])]
    sizes: Vec<usize>,

    /// Seed for the random data, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Lists longer than this are not handed to the O(n²) algorithms.
    #[arg(long, default_value_t = 10_000)]
    quadratic_limit: usize,

    /// Only benchmark these algorithms. Defaults to all of them.
    #[arg(short, long, value_enum, value_delimiter = ',')]
    algorithm: Vec<Algorithm>,
}

impl From<BenchArgs> for BenchConfig {
    fn from(args: BenchArgs) -> Self {
        let mut config = BenchConfig {
            sizes: args.sizes,
            seed: args.seed,
            quadratic_limit: args.quadratic_limit,
            ..BenchConfig::default()
        };
        if !args.algorithm.is_empty() {
            config.algorithms = args.algorithm;
        }
        config
    }
}

impl OrstArgs {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            OrstCommands::Sort {
                algorithm,
                mut values,
            } => {
                let sorter = algorithm.sorter::<i64>();
                sorter.sort(&mut values);
                log::debug!(
                    "sorted {} values with {}",
                    values.len(),
                    Sorter::<i64>::name(&sorter)
                );
                println!("{}", join(&values));
            }
            OrstCommands::Heap {
                max,
                capacity,
                values,
            } => {
                let kind = if max { HeapKind::Max } else { HeapKind::Min };
                let mut heap = Heap::new(kind, capacity)?;
                for value in values {
                    heap.store(value);
                }

                let mut taken = Vec::with_capacity(heap.len());
                while !heap.is_empty() {
                    taken.push(heap.take()?);
                }
                println!("{}", join(&taken));
            }
            OrstCommands::Bench(args) => benchmark::run_orst(&args.into())?,
        }
        Ok(())
    }
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
