//! Big-O complexity classes and the commentary attached to each demo.

use std::fmt;

use serde::Serialize;

/// Asymptotic growth class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Constant,
    Logarithmic,
    Linear,
    Linearithmic,
    Quadratic,
    Cubic,
    Exponential,
    Factorial,
}

impl Complexity {
    /// Big-O notation for this class.
    #[must_use]
    pub fn notation(self) -> &'static str {
        match self {
            Self::Constant => "O(1)",
            Self::Logarithmic => "O(log n)",
            Self::Linear => "O(n)",
            Self::Linearithmic => "O(n log n)",
            Self::Quadratic => "O(n²)",
            Self::Cubic => "O(n³)",
            Self::Exponential => "O(2^n)",
            Self::Factorial => "O(n!)",
        }
    }

    /// All classes, from slowest-growing to fastest-growing.
    #[must_use]
    pub fn all() -> [Self; 8] {
        [
            Self::Constant,
            Self::Logarithmic,
            Self::Linear,
            Self::Linearithmic,
            Self::Quadratic,
            Self::Cubic,
            Self::Exponential,
            Self::Factorial,
        ]
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notation())
    }
}

/// Time and space analysis for one algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commentary {
    /// Algorithm name as shown to the user.
    pub algorithm: &'static str,
    /// Time complexity.
    pub time: Complexity,
    /// Auxiliary space complexity.
    pub space: Complexity,
    /// Free-form explanation lines.
    pub notes: Vec<&'static str>,
}

impl Commentary {
    #[must_use]
    pub fn new(algorithm: &'static str, time: Complexity, space: Complexity) -> Self {
        Self {
            algorithm,
            time,
            space,
            notes: Vec::new(),
        }
    }

    /// Append an explanation line.
    #[must_use]
    pub fn note(mut self, line: &'static str) -> Self {
        self.notes.push(line);
        self
    }
}

/// Commentary for memoized Fibonacci.
#[must_use]
pub fn memoized_fibonacci() -> Commentary {
    Commentary::new("memoized fibonacci", Complexity::Linear, Complexity::Linear)
        .note("each index 0..=n is computed once; repeats are O(1) table reads")
        .note("without the table the recursion is O(2^n)")
        .note("the table holds n + 1 slots, so space grows linearly")
}

/// Commentary for QuickSort with last-element pivot.
#[must_use]
pub fn quicksort() -> Commentary {
    Commentary::new("quicksort", Complexity::Linearithmic, Complexity::Logarithmic)
        .note("Lomuto partition around the last element of the range")
        .note("already-sorted or reversed input degrades to O(n²)")
        .note("recursing into the smaller side bounds the stack to O(log n)")
}
