//! Computes the maximal safe walks (omnitigs) of a directed multigraph.
//!
//! A walk is seeded from every edge and extended along each outgoing edge of its last node that passes a reachability-based safety test.
//! Walks that cannot be extended anymore are collected into a deduplicated set, see [Omnitigs](omnitigs::Omnitigs).
#![warn(missing_docs)]
#![recursion_limit = "1024"]
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

/// Contains the error types used by this crate.
pub mod error;
/// Omnitigs and the algorithm to compute them.
pub mod omnitigs;

pub use traitgraph;
