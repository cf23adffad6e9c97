//! Homophilic preferential-attachment graph generation.
//!
//! Provides the [`Generator`] runtime entry point: label sampling, the
//! forward growth loop, and edge commits around the weighted target
//! selection in [`crate::select`].

use std::num::NonZeroUsize;

use rand::rngs::SmallRng;
use tracing::{info, instrument};

use crate::{
    Result,
    builder::GeneratorBuilder,
    graph::{Graph, Group, NodeId},
    seed::run_rng,
    select::{SelectionContext, pick_targets},
};

/// Generates a homophilic Barabási–Albert graph in one call.
///
/// Grows a graph of `nodes` nodes where each node past the initial
/// `edges_per_node` seed nodes attaches to up to `edges_per_node` existing
/// nodes, weighted by degree and by group affinity. Passing a seed makes the
/// run reproducible.
///
/// # Errors
/// Returns the same validation errors as [`GeneratorBuilder::build`].
///
/// # Examples
/// ```
/// use homba_core::homophilic_ba_graph;
///
/// let graph = homophilic_ba_graph(100, 2, 0.25, 0.5, Some(42))?;
/// assert_eq!(graph.node_count(), 100);
/// assert_eq!(graph.minority_count(), 25);
/// assert!(graph.edge_count() <= 98 * 2);
/// # Ok::<(), homba_core::GeneratorError>(())
/// ```
pub fn homophilic_ba_graph(
    nodes: usize,
    edges_per_node: usize,
    minority_fraction: f64,
    homophily: f64,
    seed: Option<u64>,
) -> Result<Graph> {
    let mut builder = GeneratorBuilder::new(nodes, edges_per_node)
        .with_minority_fraction(minority_fraction)
        .with_homophily(homophily);
    if let Some(seed) = seed {
        builder = builder.with_seed(seed);
    }
    Ok(builder.build()?.generate())
}

/// Entry point for generating graphs from one validated configuration.
///
/// A generator can be reused: every [`Generator::generate`] call owns a fresh
/// RNG, so a seeded generator reproduces the same graph on each call while an
/// unseeded one draws new entropy per call.
///
/// # Examples
/// ```
/// use homba_core::GeneratorBuilder;
///
/// let generator = GeneratorBuilder::new(40, 2)
///     .with_minority_fraction(0.25)
///     .with_seed(11)
///     .build()
///     .expect("builder must succeed");
/// let graph = generator.generate();
/// assert_eq!(graph.node_count(), 40);
/// assert_eq!(graph.minority_count(), 10);
/// assert_eq!(generator.generate(), graph);
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    nodes: usize,
    edges_per_node: NonZeroUsize,
    minority_fraction: f64,
    homophily: f64,
    seed: Option<u64>,
}

impl Generator {
    pub(crate) fn new(
        nodes: usize,
        edges_per_node: NonZeroUsize,
        minority_fraction: f64,
        homophily: f64,
        seed: Option<u64>,
    ) -> Self {
        Self {
            nodes,
            edges_per_node,
            minority_fraction,
            homophily,
            seed,
        }
    }

    /// Returns the total node count of generated graphs.
    #[must_use]
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Returns the attachment count for each node past the seed set.
    #[must_use]
    pub fn edges_per_node(&self) -> NonZeroUsize {
        self.edges_per_node
    }

    /// Returns the fraction of nodes labelled minority.
    #[must_use]
    pub fn minority_fraction(&self) -> f64 {
        self.minority_fraction
    }

    /// Returns the same-group attachment bias.
    #[must_use]
    pub fn homophily(&self) -> f64 {
        self.homophily
    }

    /// Returns the seed this generator runs with, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Generates one graph.
    ///
    /// Labels `floor(minority_fraction * nodes)` uniformly chosen nodes as
    /// minority, then grows the graph one node at a time from the
    /// `edges_per_node` seed nodes, committing the selected targets of each
    /// new node as undirected edges. Nodes whose selection comes up short
    /// under-connect silently; the graph is valid regardless.
    ///
    /// # Examples
    /// ```
    /// use homba_core::GeneratorBuilder;
    ///
    /// let graph = GeneratorBuilder::new(25, 1)
    ///     .with_seed(3)
    ///     .build()
    ///     .expect("builder must succeed")
    ///     .generate();
    /// assert_eq!(graph.node_count(), 25);
    /// assert!(graph.edge_count() <= 24);
    /// ```
    #[must_use]
    pub fn generate(&self) -> Graph {
        let mut rng = run_rng(self.seed);
        self.generate_with_rng(&mut rng)
    }

    #[instrument(
        name = "core.generate",
        skip(self, rng),
        fields(
            nodes = self.nodes,
            edges_per_node = self.edges_per_node.get(),
            minority_fraction = self.minority_fraction,
            homophily = self.homophily,
            seed = ?self.seed,
        ),
    )]
    pub(crate) fn generate_with_rng(&self, rng: &mut SmallRng) -> Graph {
        let mut graph = Graph::with_labels(self.sample_labels(rng));
        let quota = self.edges_per_node.get();
        let mut candidates: Vec<NodeId> = (0..quota).collect();

        for source in quota..self.nodes {
            let ctx = SelectionContext {
                graph: &graph,
                candidates: &candidates,
                homophily: self.homophily,
                quota,
            };
            for target in pick_targets(&ctx, source, rng) {
                graph.add_edge(source, target);
            }
            // Even an unconnected node becomes a candidate for later nodes.
            candidates.push(source);
        }

        info!(
            edges = graph.edge_count(),
            minority = graph.minority_count(),
            "generation completed"
        );
        graph
    }

    /// Samples the minority label set without replacement.
    fn sample_labels(&self, rng: &mut SmallRng) -> Vec<Group> {
        let minority = (self.minority_fraction * self.nodes as f64) as usize;
        let mut labels = vec![Group::Majority; self.nodes];
        for index in rand::seq::index::sample(rng, self.nodes, minority) {
            labels[index] = Group::Minority;
        }
        labels
    }
}
