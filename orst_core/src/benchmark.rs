//! Compares the sorting algorithms by the number of comparisons they make and the time they take
//! on random data.

use anyhow::bail;
use clap::ValueEnum;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::{
    cell::Cell,
    rc::Rc,
    time::{Duration, Instant},
};

use prettytable::{row, Table};

use crate::{Algorithm, Sorter};

const ZERO: usize = 0;
const ONE: usize = 1;
const HUNDRED: usize = 100;
const TEN_THOUSAND: usize = 10_000;
const HUNDRED_THOUSAND: usize = 100_000;

/// What to benchmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// List sizes, each benchmarked in turn.
    pub sizes: Vec<usize>,
    /// Seed for the random data. A fresh seed is drawn when `None`.
    pub seed: Option<u64>,
    /// The O(n²) algorithms are skipped for lists longer than this.
    pub quadratic_limit: usize,
    pub algorithms: Vec<Algorithm>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: vec![ZERO, ONE, HUNDRED, TEN_THOUSAND, HUNDRED_THOUSAND],
            seed: None,
            quadratic_limit: TEN_THOUSAND,
            algorithms: Algorithm::value_variants().to_vec(),
        }
    }
}

// In this the `elem` will be compared and the `comparison_counter` will be ignored.
#[derive(Clone)]
struct SortEvaluator<T> {
    elem: T,
    // Shared by every element of a list, bumped on each comparison.
    comparison_counter: Rc<Cell<usize>>,
}

impl<T> SortEvaluator<T> {
    fn new(elem: T, comparison_counter: Rc<Cell<usize>>) -> Self {
        Self {
            elem,
            comparison_counter,
        }
    }

    fn count(&self) {
        self.comparison_counter
            .set(self.comparison_counter.get() + 1);
    }
}

impl<T: Eq> Eq for SortEvaluator<T> {}

impl<T: PartialEq> PartialEq for SortEvaluator<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count();
        self.elem == other.elem
    }
}

impl<T: PartialOrd> PartialOrd for SortEvaluator<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.count();
        self.elem.partial_cmp(&other.elem)
    }
}

impl<T: Ord> Ord for SortEvaluator<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.count();
        self.elem.cmp(&other.elem)
    }
}

/// Outcome of one sorter on one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchResult {
    pub comparisons: usize,
    pub elapsed: Duration,
}

fn run_bench<T, S>(
    sorter: S,
    values: &mut [SortEvaluator<T>],
    comparisons: &Rc<Cell<usize>>,
) -> anyhow::Result<BenchResult>
where
    T: Ord,
    S: Sorter<SortEvaluator<T>>,
{
    comparisons.set(0);
    let now = Instant::now();
    sorter.sort(values);
    let elapsed = now.elapsed();
    let result = BenchResult {
        comparisons: comparisons.get(),
        elapsed,
    };

    // Checked on the bare elements so the check is not counted.
    if values.windows(2).any(|pair| pair[0].elem > pair[1].elem) {
        bail!("{} left {} values unsorted", sorter.name(), values.len());
    }

    log::info!(
        "Sorting {} values with {} finished in {} milliseconds",
        values.len(),
        sorter.name(),
        elapsed.as_millis()
    );
    Ok(result)
}

/// Runs `algorithm` on a copy of `values`.
pub fn bench_algorithm(algorithm: Algorithm, values: &[i32]) -> anyhow::Result<BenchResult> {
    let counter = Rc::new(Cell::new(0));
    let mut evaluators = values
        .iter()
        .map(|&value| SortEvaluator::new(value, counter.clone()))
        .collect::<Vec<_>>();
    run_bench(
        algorithm.sorter::<SortEvaluator<i32>>(),
        &mut evaluators,
        &counter,
    )
}

/// Benchmarks every configured algorithm on every configured list size and prints a table per
/// size.
pub fn run_orst(config: &BenchConfig) -> anyhow::Result<()> {
    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!("benchmark seed: {seed}");
    let mut random = StdRng::seed_from_u64(seed);

    for &n in &config.sizes {
        let values = (0..n).map(|_| random.gen::<i32>()).collect::<Vec<_>>();

        let pb = ProgressBar::new(config.algorithms.len() as u64);
        pb.set_style(ProgressStyle::with_template(
            "{msg:>30} -> {spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] ({pos}/{len})",
        )?);

        let mut table = Table::new();
        table.add_row(row![
            "Sorter".bold(),
            "Comparisons Made".bold(),
            "Time Taken".bold()
        ]);

        for &algorithm in &config.algorithms {
            let name = Sorter::<i32>::name(&algorithm.sorter::<i32>());
            pb.set_message(name);

            if algorithm.is_quadratic() && n > config.quadratic_limit {
                table.add_row(row![name, "Not Doing It".red(), "It is Stupid"]);
            } else {
                let result = bench_algorithm(algorithm, &values)?;
                table.add_row(row![
                    name,
                    result.comparisons.to_string(),
                    format!("{:?}", result.elapsed)
                ]);
            }
            pb.inc(1);
        }
        pb.finish_and_clear();

        println!(
            "{} {}",
            "List Size -> ".bold().underline().blue(),
            n.to_string().bold()
        );
        table.printstd();
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluator_counts_comparisons() {
        let counter = Rc::new(Cell::new(0));
        let a = SortEvaluator::new(1, counter.clone());
        let b = SortEvaluator::new(2, counter.clone());

        assert!(a < b);
        assert!(a != b);
        assert_eq!(a.cmp(&b), std::cmp::Ordering::Less);
        assert_eq!(counter.get(), 3);
    }

    #[test]
    fn every_algorithm_benches() {
        let values = (0..200).map(|i| (i * 7919) % 200).collect::<Vec<i32>>();
        for &algorithm in Algorithm::value_variants() {
            let result = bench_algorithm(algorithm, &values).unwrap();
            assert!(result.comparisons > 0, "{algorithm:?}");
        }
    }

    #[test]
    fn nothing_to_compare() {
        for &algorithm in Algorithm::value_variants() {
            assert_eq!(bench_algorithm(algorithm, &[]).unwrap().comparisons, 0);
            assert_eq!(bench_algorithm(algorithm, &[42]).unwrap().comparisons, 0);
        }
    }

    #[test]
    fn unsorted_output_is_an_error() {
        struct Noop;
        impl<T: Ord> Sorter<T> for Noop {
            fn sort(&self, _: &mut [T]) {}
            fn name(&self) -> &'static str {
                "Noop"
            }
        }

        let counter = Rc::new(Cell::new(0));
        let mut values = [3, 1, 2].map(|value| SortEvaluator::new(value, counter.clone()));
        let err = run_bench(Noop, &mut values[..], &counter).unwrap_err();
        assert_eq!(err.to_string(), "Noop left 3 values unsorted");
    }

    #[test]
    fn default_config() {
        let config = BenchConfig::default();
        assert_eq!(config.algorithms.len(), Algorithm::value_variants().len());
        assert_eq!(config.quadratic_limit, TEN_THOUSAND);
        assert!(config.seed.is_none());
    }

    #[test]
    fn seeded_run() {
        let config = BenchConfig {
            sizes: vec![ZERO, 20],
            seed: Some(7),
            quadratic_limit: 10,
            algorithms: vec![Algorithm::Quick, Algorithm::Bubble],
        };
        run_orst(&config).unwrap();
    }
}
