// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lonely edges: edges that belong to exactly one perfect matching.
//!
//! [`classify`] enumerates all perfect matchings of a graph once, folding
//! each into a [`Coverage`], and keeps the edges hit exactly once. A graph
//! without perfect matchings, for example any graph of odd order, has no
//! lonely edges.
//!
//! # Examples
//!
//! ```
//! use lonely_edges::graph::graph6;
//! use lonely_edges::lonely;
//!
//! // K4 has three perfect matchings, each edge is in exactly one of them.
//! let k4 = graph6::decode("C~").unwrap();
//! let lonely = lonely::classify(&k4);
//! assert_eq!(lonely.count(), 6);
//! assert_eq!(lonely.matchings(), 3);
//! ```

use crate::graph::Graph;
use crate::matching::{self, Coverage, MatchingVisitor};
use crate::sets::EdgeSet;
use std::fmt;

/// Result of classifying one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LonelyEdges {
    edges: EdgeSet,
    matchings: u64,
}

impl LonelyEdges {
    /// Number of lonely edges.
    pub fn count(&self) -> usize {
        self.edges.len()
    }

    /// The lonely edges, as edge identifiers of the classified graph.
    pub fn edges(&self) -> EdgeSet {
        self.edges
    }

    /// Number of perfect matchings of the classified graph.
    pub fn matchings(&self) -> u64 {
        self.matchings
    }

    /// Display the lonely edges as `"(u,v) (u,v) ... "` using `graph`'s labels.
    pub fn listing<'a>(&'a self, graph: &'a Graph) -> Listing<'a> {
        Listing {
            edges: &self.edges,
            graph,
        }
    }
}

impl From<Coverage> for LonelyEdges {
    fn from(coverage: Coverage) -> Self {
        Self {
            edges: coverage.hit_exactly_once(),
            matchings: coverage.matchings(),
        }
    }
}

/// See [`LonelyEdges::listing`].
#[derive(Debug)]
pub struct Listing<'a> {
    edges: &'a EdgeSet,
    graph: &'a Graph,
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in self.edges {
            let (u, v) = self.graph.endpoints(edge);
            write!(f, "({},{}) ", u, v)?;
        }
        Ok(())
    }
}

/// Compute the lonely edges of `graph`.
pub fn classify(graph: &Graph) -> LonelyEdges {
    classify_with(graph, &mut ())
}

/// Compute the lonely edges of `graph`, showing every perfect matching to
/// `observer` as it is found.
pub fn classify_with<V: MatchingVisitor + ?Sized>(graph: &Graph, observer: &mut V) -> LonelyEdges {
    let mut coverage = Coverage::new();
    matching::enumerate(graph, graph.vertices(), &mut (&mut coverage, observer));
    coverage.into()
}
