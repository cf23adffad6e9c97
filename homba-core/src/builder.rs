//! Builder utilities for configuring graph generation.
//!
//! Exposes the parameter surface and validation used before constructing
//! [`Generator`] instances. All range checks happen in [`GeneratorBuilder::build`];
//! a constructed generator can no longer fail.

use std::num::NonZeroUsize;

use crate::{Result, error::GeneratorError, generator::Generator};

/// Configures and constructs [`Generator`] instances.
///
/// The node count and per-node attachment count are structural and therefore
/// required up front; the mixing parameters default to a balanced, unbiased
/// population and an unseeded run.
///
/// # Examples
/// ```
/// use homba_core::GeneratorBuilder;
///
/// let generator = GeneratorBuilder::new(100, 3)
///     .with_minority_fraction(0.2)
///     .with_homophily(0.8)
///     .with_seed(42)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(generator.nodes(), 100);
/// assert_eq!(generator.edges_per_node().get(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorBuilder {
    nodes: usize,
    edges_per_node: usize,
    minority_fraction: f64,
    homophily: f64,
    seed: Option<u64>,
}

impl GeneratorBuilder {
    /// Creates a builder for a graph of `nodes` nodes where each new node
    /// attaches to `edges_per_node` targets.
    ///
    /// # Examples
    /// ```
    /// use homba_core::GeneratorBuilder;
    ///
    /// let builder = GeneratorBuilder::new(50, 2);
    /// assert_eq!(builder.minority_fraction(), 0.5);
    /// assert_eq!(builder.homophily(), 0.5);
    /// assert_eq!(builder.seed(), None);
    /// ```
    #[must_use]
    pub fn new(nodes: usize, edges_per_node: usize) -> Self {
        Self {
            nodes,
            edges_per_node,
            minority_fraction: 0.5,
            homophily: 0.5,
            seed: None,
        }
    }

    /// Overrides the fraction of nodes labelled minority.
    #[must_use]
    pub fn with_minority_fraction(mut self, fraction: f64) -> Self {
        self.minority_fraction = fraction;
        self
    }

    /// Overrides the same-group attachment bias.
    #[must_use]
    pub fn with_homophily(mut self, homophily: f64) -> Self {
        self.homophily = homophily;
        self
    }

    /// Seeds the run so repeated generations reproduce the same graph.
    ///
    /// # Examples
    /// ```
    /// use homba_core::GeneratorBuilder;
    ///
    /// let builder = GeneratorBuilder::new(50, 2).with_seed(7);
    /// assert_eq!(builder.seed(), Some(7));
    /// ```
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured total node count.
    #[must_use]
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Returns the configured per-node attachment count.
    #[must_use]
    pub fn edges_per_node(&self) -> usize {
        self.edges_per_node
    }

    /// Returns the configured minority fraction.
    #[must_use]
    pub fn minority_fraction(&self) -> f64 {
        self.minority_fraction
    }

    /// Returns the configured homophily bias.
    #[must_use]
    pub fn homophily(&self) -> f64 {
        self.homophily
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration and constructs a [`Generator`].
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidEdgesPerNode`] when `edges_per_node`
    /// is zero, [`GeneratorError::InsufficientNodes`] when fewer nodes than
    /// `edges_per_node` are requested, and
    /// [`GeneratorError::InvalidMinorityFraction`] or
    /// [`GeneratorError::InvalidHomophily`] when either parameter falls
    /// outside `[0, 1]` (a NaN is rejected like any other out-of-range
    /// value).
    ///
    /// # Examples
    /// ```
    /// use homba_core::GeneratorBuilder;
    ///
    /// let generator = GeneratorBuilder::new(10, 2).build().expect("configuration is valid");
    /// assert_eq!(generator.nodes(), 10);
    /// ```
    pub fn build(self) -> Result<Generator> {
        let edges_per_node = NonZeroUsize::new(self.edges_per_node).ok_or(
            GeneratorError::InvalidEdgesPerNode {
                got: self.edges_per_node,
            },
        )?;
        if self.nodes < edges_per_node.get() {
            return Err(GeneratorError::InsufficientNodes {
                nodes: self.nodes,
                edges_per_node: edges_per_node.get(),
            });
        }
        if !(0.0..=1.0).contains(&self.minority_fraction) {
            return Err(GeneratorError::InvalidMinorityFraction {
                got: self.minority_fraction,
            });
        }
        if !(0.0..=1.0).contains(&self.homophily) {
            return Err(GeneratorError::InvalidHomophily {
                got: self.homophily,
            });
        }

        Ok(Generator::new(
            self.nodes,
            edges_per_node,
            self.minority_fraction,
            self.homophily,
            self.seed,
        ))
    }
}
