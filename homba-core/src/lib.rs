//! Homba core library: homophilic Barabási–Albert graph generation.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod ensemble;
mod error;
mod generator;
mod graph;
mod seed;
mod select;

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::GeneratorBuilder,
    error::{GeneratorError, GeneratorErrorCode, Result},
    generator::{Generator, homophilic_ba_graph},
    graph::{Edge, Graph, Group, NodeId},
};
