//! The individual demonstrations.
//!
//! Each demo prints its result lines unconditionally and its explanatory
//! lines (headers, steps, counters, commentary) only outside quiet mode.

use anyhow::Result;
use tracing::debug;

use algolab_cli::commentary;
use algolab_cli::output::{
    format_number, format_sequence, BenchmarkReport, FibonacciReport, Report, ResultEntry,
    SortReport, TimingEntry,
};
use algolab_cli::ui::{print_header, print_step};
use algolab_cli::CliResultPresenter;
use algolab_core::array_ops::FixedArray;
use algolab_core::complexity;
use algolab_core::constants::{DEMO_ARRAY, DEMO_ARRAY_CAPACITY};
use algolab_core::error::AlgoError;
use algolab_core::fibonacci::naive_call_count;
use algolab_core::linked_list::LinkedList;
use algolab_core::matrix::Matrix;
use algolab_core::memo::fibonacci_memoized_counted;
use algolab_core::quicksort::{quicksort_counted, quicksort_slice};
use algolab_core::recursion::{factorial, factorial_big, hanoi, permutations, subsets};
use algolab_core::registry::DefaultFactory;
use algolab_core::search::{binary_search_iterative, binary_search_recursive, linear_search};
use algolab_orchestration::benchmark::run_benchmark;
use algolab_orchestration::calculator_selection::get_calculators_to_run;
use algolab_orchestration::interfaces::ResultPresenter;
use algolab_orchestration::orchestrator::{analyze_comparison_results, execute_calculations};

use crate::config::AppConfig;

/// Shared state for one run of the demos.
pub struct Session<'a> {
    config: &'a AppConfig,
    presenter: CliResultPresenter,
    report: Report,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(config: &'a AppConfig, version: &'static str) -> Self {
        Self {
            config,
            presenter: CliResultPresenter::new(config.verbose, config.quiet),
            report: Report {
                version,
                ..Report::default()
            },
        }
    }

    /// Report accumulated so far.
    #[must_use]
    pub fn report(&self) -> &Report {
        &self.report
    }

    fn header(&self, text: &str) {
        if !self.config.quiet {
            print_header(text);
        }
    }

    fn step(&self, index: usize, text: &str) {
        if !self.config.quiet {
            print_step(index, text);
        }
    }

    fn detail(&self, text: &str) {
        if !self.config.quiet {
            println!("{text}");
        }
    }

    fn commentary(&self, commentary: &complexity::Commentary) {
        commentary::print(commentary, self.config.quiet);
    }

    /// Direct access, front insertion, linear search and in-place sorting on a
    /// fixed array.
    pub fn arrays(&self) -> Result<()> {
        self.header("Arrays");
        let mut array = FixedArray::from_slice(&DEMO_ARRAY, DEMO_ARRAY_CAPACITY)?;
        self.detail(&format!(
            "array ({} of {} slots): {}",
            array.len(),
            array.capacity(),
            format_sequence(array.as_slice())
        ));

        self.step(1, "Direct access - O(1)");
        let index = 3;
        if let Some(value) = array.get(index) {
            println!("array[{index}] = {value}");
        }

        self.step(2, "Insert at front - O(n)");
        array.insert_front(1)?;
        println!("after inserting 1: {}", format_sequence(array.as_slice()));

        self.step(3, "Linear search - O(n)");
        let target = 40;
        match linear_search(array.as_slice(), &target) {
            Some(i) => println!("found {target} at index {i}"),
            None => println!("{target} not found"),
        }

        self.step(4, "Sort in place - O(n log n)");
        quicksort_slice(array.as_mut_slice());
        println!("sorted in place: {}", format_sequence(array.as_slice()));
        Ok(())
    }

    /// Linear, iterative binary and recursive binary search.
    pub fn search(&self) {
        self.header("Searching");
        let mut sorted = DEMO_ARRAY;
        quicksort_slice(&mut sorted);
        self.detail(&format!("sorted input: {}", format_sequence(&sorted)));

        for (step, target) in [35, 12].into_iter().enumerate() {
            let linear = linear_search(&sorted, &target);
            let iterative = binary_search_iterative(&sorted, &target);
            let recursive = binary_search_recursive(&sorted, &target);
            debug!(value = target, ?linear, ?iterative, ?recursive, "searched");

            self.step(step + 1, &format!("Looking for {target}"));
            self.detail(&format!("  linear search    O(n):     {}", found(linear)));
            self.detail(&format!("  binary iterative O(log n): {}", found(iterative)));
            println!("binary search for {target}: {}", found(recursive));
        }
    }

    /// QuickSort on the demo array followed by the random-input benchmark.
    pub fn sort(&mut self) -> Result<()> {
        self.header("QuickSort");
        let input = DEMO_ARRAY.to_vec();
        let mut values = input.clone();
        let end = values.len() - 1;
        self.detail(&format!("before: {}", format_sequence(&values)));
        let stats = quicksort_counted(&mut values, 0, end);
        println!("sorted: {}", format_sequence(&values));
        self.detail(&format!(
            "{} comparisons, {} swaps, {} partitions",
            stats.comparisons, stats.swaps, stats.partitions
        ));
        self.commentary(&complexity::quicksort());

        self.report.quicksort = Some(SortReport {
            input,
            sorted: values,
            comparisons: stats.comparisons,
            swaps: stats.swaps,
        });

        self.header("Sort benchmark");
        self.detail(&format!(
            "{} random values, seed {}",
            format_number(self.config.size as u64),
            self.config.seed
        ));
        let timings = run_benchmark(self.config.size, self.config.seed)?;
        self.presenter.present_timings(self.config.size, &timings);
        self.report.benchmark = Some(BenchmarkReport {
            size: self.config.size,
            seed: self.config.seed,
            timings: timings.iter().map(TimingEntry::from).collect(),
        });
        Ok(())
    }

    /// Factorial, Tower of Hanoi, permutations and subsets.
    pub fn recursion(&self) -> Result<()> {
        self.header("Recursion");

        self.step(1, "Factorial - O(n)");
        println!("10! = {}", format_number(factorial(10)?));
        match factorial(25) {
            Ok(value) => self.detail(&format!("25! = {value}")),
            Err(AlgoError::Overflow { .. }) => {
                self.detail(&format!("25! overflows u64; as a big integer: {}", factorial_big(25)));
            }
            Err(e) => return Err(e.into()),
        }

        self.step(2, "Tower of Hanoi - O(2^n)");
        let moves = hanoi(3, 'A', 'C', 'B');
        for mv in &moves {
            self.detail(&format!("  {mv}"));
        }
        println!("hanoi(3): {} moves", moves.len());

        self.step(3, "Permutations - O(n!)");
        let items = [1, 2, 3];
        let perms = permutations(&items);
        for perm in &perms {
            self.detail(&format!("  {}", format_sequence(perm)));
        }
        println!("permutations of {}: {}", format_sequence(&items), perms.len());

        self.step(4, "Subsets - O(2^n)");
        let letters = ['a', 'b', 'c'];
        let all = subsets(&letters);
        for subset in &all {
            self.detail(&format!("  {}", format_sequence(subset)));
        }
        println!("subsets of {}: {}", format_sequence(&letters), all.len());
        Ok(())
    }

    /// Memoized Fibonacci compared against the other calculators.
    pub fn fibonacci(&mut self) -> Result<()> {
        let n = self.config.n;
        self.header(&format!("Fibonacci F({n})"));

        let factory = DefaultFactory::new();
        let calculators = get_calculators_to_run(&self.config.algo, n, &factory)?;
        let results = execute_calculations(&calculators, n);

        self.report.fibonacci = Some(FibonacciReport {
            n,
            results: results.iter().map(ResultEntry::from).collect(),
        });

        if results.iter().all(|r| r.outcome.is_err()) {
            for result in &results {
                self.presenter.present_result(n, result);
            }
            if let Some(err) = results.iter().find_map(|r| r.outcome.as_ref().err()) {
                return Err(err.clone().into());
            }
        }

        for result in &results {
            if result.outcome.is_err() || self.config.verbose {
                self.presenter.present_result(n, result);
            }
        }
        if !self.config.verbose {
            if let Some(result) = results.iter().find(|r| r.outcome.is_ok()) {
                self.presenter.present_result(n, result);
            }
        }
        if results.len() > 1 {
            self.presenter.present_comparison(&results);
            analyze_comparison_results(&results)?;
        }

        if let Ok((_, stats)) = fibonacci_memoized_counted(n) {
            self.detail(&format!(
                "memo table: {} indices computed once each, {} cache hits",
                stats.total_computations(),
                stats.hits
            ));
            if let Ok(index) = u64::try_from(n) {
                self.detail(&format!(
                    "naive recursion would make {} calls",
                    format_number(naive_call_count(index))
                ));
            }
        }
        self.commentary(&complexity::memoized_fibonacci());
        Ok(())
    }

    /// Row-major traversal and multiplication of two 3x3 matrices.
    pub fn matrix(&self) -> Result<()> {
        self.header("Matrices");
        let a = Matrix::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]])?;
        let b = Matrix::from_rows(&[vec![9, 8, 7], vec![6, 5, 4], vec![3, 2, 1]])?;

        self.step(1, "Traversal - O(n²)");
        self.detail(&format!("A row by row: {}", format_sequence(&a.traverse())));

        self.step(2, "Multiplication - O(n³)");
        let product = a.multiply(&b)?;
        self.detail("A x B =");
        print!("{product}");
        Ok(())
    }

    /// Push, search and pop on a singly linked list.
    pub fn list(&self) {
        self.header("Linked list");
        let mut list = LinkedList::new();
        for value in [10, 20, 30] {
            list.push_front(value);
        }
        let contents: Vec<i64> = list.iter().copied().collect();
        println!("list: {}", format_sequence(&contents));

        self.step(1, "Front access and insertion - O(1)");
        if let Some(front) = list.front() {
            self.detail(&format!("front = {front}"));
        }

        self.step(2, "Search - O(n)");
        let target = 10;
        self.detail(&format!("{target} is at position {}", found(list.position(&target))));

        self.step(3, "Remove front - O(1)");
        if let Some(removed) = list.pop_front() {
            self.detail(&format!("removed {removed}, {} left", list.len()));
        }
    }

    /// One line per complexity class.
    pub fn summary(&self) {
        self.header("Complexity summary");
        for line in commentary::summary() {
            self.detail(&line);
        }
    }
}

fn found(index: Option<usize>) -> String {
    index.map_or_else(|| "not found".to_string(), |i| format!("index {i}"))
}
