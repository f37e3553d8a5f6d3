//! Big-O commentary rendering.

use algolab_core::complexity::{Commentary, Complexity};

/// Lines describing one algorithm's complexity.
#[must_use]
pub fn render(commentary: &Commentary) -> Vec<String> {
    let mut lines = vec![
        format!("Complexity analysis: {}", commentary.algorithm),
        format!("  time:  {}", commentary.time),
        format!("  space: {}", commentary.space),
    ];
    lines.extend(commentary.notes.iter().map(|note| format!("  - {note}")));
    lines
}

/// Example operations for each complexity class, as shown in the summary.
#[must_use]
pub fn examples(class: Complexity) -> &'static str {
    match class {
        Complexity::Constant => "direct access: array[i], linked list push_front",
        Complexity::Logarithmic => "binary search",
        Complexity::Linear => {
            "linear search, front insertion, iterative and memoized fibonacci, factorial"
        }
        Complexity::Linearithmic => "quicksort (average), merge sort",
        Complexity::Quadratic => "bubble sort, matrix traversal, quicksort (worst case)",
        Complexity::Cubic => "naive matrix multiplication",
        Complexity::Exponential => "naive recursive fibonacci, tower of hanoi, subsets",
        Complexity::Factorial => "all permutations",
    }
}

/// One line per complexity class, slowest-growing first.
#[must_use]
pub fn summary() -> Vec<String> {
    Complexity::all()
        .into_iter()
        .map(|class| format!("{:<11}- {}", class.notation(), examples(class)))
        .collect()
}

/// Print commentary unless `quiet`.
pub fn print(commentary: &Commentary, quiet: bool) {
    if quiet {
        return;
    }
    println!();
    for line in render(commentary) {
        println!("{line}");
    }
}
