//! Growing graph state produced by the generator.
//!
//! Stores node group labels, the undirected edge list, and incrementally
//! maintained degrees. Mutation is crate-private; the growth loop appends
//! nodes' edges and nothing is ever removed.

/// Index identifying a node within a generated graph.
pub type NodeId = usize;

/// Group membership assigned to a node at initialisation.
///
/// Labels are fixed for the lifetime of the graph.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Group {
    /// Member of the smaller group selected by `minority_fraction`.
    Minority,
    /// Member of the remaining population.
    Majority,
}

/// Undirected edge between two distinct nodes.
///
/// `source` is the node that initiated the attachment, so `source > target`
/// holds for every edge: new nodes only ever attach to earlier ones.
///
/// # Examples
/// ```
/// use homba_core::GeneratorBuilder;
///
/// let graph = GeneratorBuilder::new(6, 2).with_seed(9).build()?.generate();
/// for edge in graph.edges() {
///     assert!(edge.source() > edge.target());
/// }
/// # Ok::<(), homba_core::GeneratorError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
}

impl Edge {
    #[must_use]
    #[inline]
    pub(crate) fn new(source: NodeId, target: NodeId) -> Self {
        debug_assert!(source > target, "edges must point backwards in time");
        Self { source, target }
    }

    /// Returns the attaching (newer) endpoint.
    #[rustfmt::skip]
    #[must_use]
    pub fn source(self) -> NodeId { self.source }

    /// Returns the attached-to (older) endpoint.
    #[rustfmt::skip]
    #[must_use]
    pub fn target(self) -> NodeId { self.target }

    /// Returns both endpoints as an unordered pair.
    #[rustfmt::skip]
    #[must_use]
    pub fn endpoints(self) -> (NodeId, NodeId) { (self.source, self.target) }
}

/// A generated homophilic preferential-attachment graph.
///
/// Nodes are the indices `0..node_count()`. Degrees are maintained
/// incrementally as edges are committed, so lookups are O(1) and always
/// reflect the graph at its current point of growth.
///
/// # Examples
/// ```
/// use homba_core::homophilic_ba_graph;
///
/// let graph = homophilic_ba_graph(50, 3, 0.2, 0.8, Some(7))?;
/// assert_eq!(graph.node_count(), 50);
/// assert_eq!(graph.edge_count(), graph.edges().len());
/// # Ok::<(), homba_core::GeneratorError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph {
    labels: Vec<Group>,
    edges: Vec<Edge>,
    degrees: Vec<usize>,
}

impl Graph {
    /// Creates an edgeless graph over the given labels.
    pub(crate) fn with_labels(labels: Vec<Group>) -> Self {
        let degrees = vec![0; labels.len()];
        Self {
            labels,
            edges: Vec::new(),
            degrees,
        }
    }

    /// Commits one undirected edge and bumps both endpoint degrees.
    ///
    /// Callers guarantee the endpoints are distinct, in bounds, and not yet
    /// connected; the growth loop only ever offers each (source, target)
    /// pair once.
    pub(crate) fn add_edge(&mut self, source: NodeId, target: NodeId) {
        self.edges.push(Edge::new(source, target));
        self.degrees[source] += 1;
        self.degrees[target] += 1;
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Returns the number of committed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterates the node indices in increasing order.
    #[must_use]
    pub fn nodes(&self) -> std::ops::Range<NodeId> {
        0..self.labels.len()
    }

    /// Returns the edges in commit order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns every node's group label, indexed by node.
    #[must_use]
    pub fn labels(&self) -> &[Group] {
        &self.labels
    }

    /// Returns every node's current degree, indexed by node.
    #[must_use]
    pub fn degrees(&self) -> &[usize] {
        &self.degrees
    }

    /// Looks up the group label of `node`, or `None` if out of bounds.
    #[must_use]
    pub fn label(&self, node: NodeId) -> Option<Group> {
        self.labels.get(node).copied()
    }

    /// Looks up the current degree of `node`, or `None` if out of bounds.
    #[must_use]
    pub fn degree(&self, node: NodeId) -> Option<usize> {
        self.degrees.get(node).copied()
    }

    /// Counts the nodes carrying the minority label.
    #[must_use]
    pub fn minority_count(&self) -> usize {
        self.labels
            .iter()
            .filter(|&&label| label == Group::Minority)
            .count()
    }
}
