//! Shared test utilities used across the homba workspace.

pub mod ci;
pub mod tracing;
