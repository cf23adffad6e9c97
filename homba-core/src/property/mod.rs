//! Property-based tests for homophilic graph generation.
//!
//! Verifies structural invariants (node and label counts, edge direction,
//! uniqueness, attachment quotas, degree bookkeeping), seeded determinism,
//! and the exact edge partitions forced by degenerate mixing regimes, across
//! randomly drawn generation plans.

mod strategies;
mod structural;
mod types;
