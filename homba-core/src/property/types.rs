//! Type definitions for generation property tests.
//!
//! Provides the plan fixture and the mixing regimes used by the generation
//! strategies and property runners.

use test_strategy::Arbitrary;

use crate::{Generator, GeneratorBuilder, Graph};

/// Group-mixing regime realised as a homophily parameter.
///
/// Spans the balanced middle and both degenerate extremes so runners can
/// assert exact edge partitions where affinity weights vanish.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum MixingRegime {
    /// Affinity-neutral attachment.
    #[weight(3)]
    Balanced,
    /// Same-group attachment favoured.
    #[weight(2)]
    Homophilous,
    /// Cross-group attachment favoured.
    #[weight(2)]
    Heterophilous,
    /// Cross-group weights vanish entirely.
    #[weight(1)]
    SameGroupOnly,
    /// Same-group weights vanish entirely.
    #[weight(1)]
    CrossGroupOnly,
}

impl MixingRegime {
    /// Returns the homophily parameter realising this regime.
    pub(super) fn homophily(self) -> f64 {
        match self {
            Self::Balanced => 0.5,
            Self::Homophilous => 0.8,
            Self::Heterophilous => 0.2,
            Self::SameGroupOnly => 1.0,
            Self::CrossGroupOnly => 0.0,
        }
    }
}

/// Fixture for generation property tests.
///
/// Captures every knob of one seeded generation run so a failing case
/// replays exactly from its debug output.
#[derive(Clone, Debug)]
pub(super) struct GenerationPlan {
    /// Total node count.
    pub nodes: usize,
    /// Attachment count for each node past the seed set.
    pub edges_per_node: usize,
    /// Fraction of nodes labelled minority.
    pub minority_fraction: f64,
    /// Group-mixing regime for the run.
    pub regime: MixingRegime,
    /// RNG seed for the run.
    pub seed: u64,
}

impl GenerationPlan {
    /// Builds the validated generator for this plan.
    pub(super) fn generator(&self) -> Generator {
        GeneratorBuilder::new(self.nodes, self.edges_per_node)
            .with_minority_fraction(self.minority_fraction)
            .with_homophily(self.regime.homophily())
            .with_seed(self.seed)
            .build()
            .expect("plan bounds guarantee valid parameters")
    }

    /// Generates the graph for this plan.
    pub(super) fn generate(&self) -> Graph {
        self.generator().generate()
    }
}
