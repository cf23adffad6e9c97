//! Benchmark parameter types.
//!
//! Groups related benchmark parameters into structs so that benchmark
//! helper functions stay under the Clippy `too-many-arguments` threshold.

use std::fmt;

/// Parameters for a generation benchmark run.
#[derive(Clone, Debug)]
pub struct GenerationBenchParams {
    /// Number of nodes in the generated graph.
    pub nodes: usize,
    /// Attachment count for each node past the seed set.
    pub edges_per_node: usize,
    /// Same-group attachment bias.
    pub homophily: f64,
}

impl fmt::Display for GenerationBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},m={},h={}",
            self.nodes, self.edges_per_node, self.homophily,
        )
    }
}

/// Parameters for an ensemble benchmark run.
#[derive(Clone, Debug)]
pub struct EnsembleBenchParams {
    /// Number of nodes per generated graph.
    pub nodes: usize,
    /// Number of independent runs in the ensemble.
    pub runs: usize,
}

impl fmt::Display for EnsembleBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},runs={}", self.nodes, self.runs)
    }
}
