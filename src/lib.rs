//! Wall-clock benchmarks for the classic comparison sorts: load JSON-encoded
//! integer arrays of increasing size, time each algorithm once per input,
//! render SVG line charts, and write a JSON report with machine specs,
//! timings, and complexity classes.

pub mod chart;
pub mod dataset;
pub mod harness;
pub mod pipeline;
pub mod schema;
pub mod sorts;

use schema::Complexity;

/// The five benchmarked sorting algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

impl Algorithm {
    /// Fixed run order: every input is measured, charted, and listed in this
    /// order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    /// Display name, used as the report key and chart label.
    pub fn display_name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
        }
    }

    /// File name of this algorithm's individual chart: the display name with
    /// spaces replaced by underscores.
    pub fn chart_file_name(self) -> String {
        format!("grafico_{}.svg", self.display_name().replace(' ', "_"))
    }

    /// Textbook big-O classification reported under `"complexidades"`.
    pub fn complexity(self) -> Complexity {
        let (best, average, worst) = match self {
            Algorithm::Bubble => ("O(n)", "O(n^2)", "O(n^2)"),
            Algorithm::Selection => ("O(n^2)", "O(n^2)", "O(n^2)"),
            Algorithm::Insertion => ("O(n)", "O(n^2)", "O(n^2)"),
            Algorithm::Merge => ("O(n log n)", "O(n log n)", "O(n log n)"),
            Algorithm::Quick => ("O(n log n)", "O(n log n)", "O(n^2)"),
        };
        Complexity {
            best: best.to_string(),
            average: average.to_string(),
            worst: worst.to_string(),
        }
    }

    /// Sort `data` in place with this algorithm's routine.
    pub fn run<T: Ord + Clone>(self, data: &mut [T]) {
        match self {
            Algorithm::Bubble => sorts::bubble_sort(data),
            Algorithm::Selection => sorts::selection_sort(data),
            Algorithm::Insertion => sorts::insertion_sort(data),
            Algorithm::Merge => sorts::merge_sort(data),
            Algorithm::Quick => sorts::quick_sort(data),
        }
    }
}
