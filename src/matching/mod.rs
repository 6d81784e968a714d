// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive enumeration of the matchings saturating a vertex subset.
//!
//! [`enumerate`] visits every set of pairwise disjoint edges that covers each
//! vertex of a target subset exactly once and touches no vertex outside it.
//! When the target is the whole vertex set these are the perfect matchings of
//! the graph; with `v` and its neighbors removed they are the v-joins used by
//! [`crate::children`].
//!
//! # Search Algorithm
//!
//! The search always extends the smallest uncovered vertex `v`: for each
//! neighbor `w` of `v` still in the target, recurse with `{v, w}` removed and
//! edge `vw` added. Each matching is therefore produced exactly once, in an
//! order fixed by the canonical edge numbering. A vertex with no remaining
//! partner ends its branch silently. No subproblems are shared between
//! branches.
//!
//! Completed matchings are handed to a [`MatchingVisitor`]; only complete
//! matchings are ever visited.
//!
//! # Examples
//!
//! ```
//! use lonely_edges::graph::Graph;
//! use lonely_edges::matching::{self, Coverage};
//!
//! let c4 = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (0, 3)]).unwrap();
//! let mut coverage = Coverage::new();
//! matching::enumerate(&c4, c4.vertices(), &mut coverage);
//!
//! assert_eq!(coverage.matchings(), 2);
//! assert_eq!(coverage.hit_exactly_once().len(), 4);
//! ```

pub mod coverage;
pub mod printer;

pub use coverage::Coverage;
pub use printer::MatchingPrinter;

use crate::graph::Graph;
use crate::sets::{EdgeSet, VertexSet};

/// Receives each complete matching found by an enumeration.
pub trait MatchingVisitor {
    /// Called once per complete matching, in enumeration order.
    fn visit(&mut self, graph: &Graph, matching: &EdgeSet);
}

/// The no-op visitor.
impl MatchingVisitor for () {
    fn visit(&mut self, _graph: &Graph, _matching: &EdgeSet) {}
}

impl<V: MatchingVisitor + ?Sized> MatchingVisitor for &mut V {
    fn visit(&mut self, graph: &Graph, matching: &EdgeSet) {
        (**self).visit(graph, matching);
    }
}

/// An absent visitor ignores every matching.
impl<V: MatchingVisitor> MatchingVisitor for Option<V> {
    fn visit(&mut self, graph: &Graph, matching: &EdgeSet) {
        if let Some(visitor) = self {
            visitor.visit(graph, matching);
        }
    }
}

/// Both visitors see every matching, first `.0` then `.1`.
impl<A: MatchingVisitor, B: MatchingVisitor> MatchingVisitor for (A, B) {
    fn visit(&mut self, graph: &Graph, matching: &EdgeSet) {
        self.0.visit(graph, matching);
        self.1.visit(graph, matching);
    }
}

/// Visitor wrapping a closure, see [`from_fn`].
#[derive(Debug, Clone)]
pub struct FromFn<F>(F);

/// Create a visitor from a closure.
///
/// ```
/// use lonely_edges::graph::Graph;
/// use lonely_edges::matching;
///
/// let k4 = Graph::from_edges(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]).unwrap();
/// let mut sizes = Vec::new();
/// matching::enumerate(&k4, k4.vertices(), &mut matching::from_fn(|_, m| sizes.push(m.len())));
/// assert_eq!(sizes, vec![2, 2, 2]);
/// ```
pub fn from_fn<F: FnMut(&Graph, &EdgeSet)>(f: F) -> FromFn<F> {
    FromFn(f)
}

impl<F: FnMut(&Graph, &EdgeSet)> MatchingVisitor for FromFn<F> {
    fn visit(&mut self, graph: &Graph, matching: &EdgeSet) {
        (self.0)(graph, matching);
    }
}

/// Visit every matching of `graph` saturating exactly `target`.
pub fn enumerate<V: MatchingVisitor + ?Sized>(graph: &Graph, target: VertexSet, visitor: &mut V) {
    enumerate_from(graph, target, EdgeSet::empty(), visitor);
}

/// Visit every extension of `partial` by a matching saturating exactly `target`.
///
/// `partial` must be disjoint from `target`; each visited matching is
/// `partial` plus the edges chosen over `target`.
pub fn enumerate_from<V: MatchingVisitor + ?Sized>(
    graph: &Graph,
    target: VertexSet,
    partial: EdgeSet,
    visitor: &mut V,
) {
    // Removing a pair keeps parity, so an odd target never reaches the empty set.
    if target.len() % 2 == 1 {
        return;
    }
    extend(graph, target, partial, visitor);
}

fn extend<V: MatchingVisitor + ?Sized>(
    graph: &Graph,
    remaining: VertexSet,
    matching: EdgeSet,
    visitor: &mut V,
) {
    let Some(v) = remaining.first() else {
        visitor.visit(graph, &matching);
        return;
    };

    for w in graph.neighbors(v).intersection(&remaining) {
        let id = graph
            .edge_id(v, w)
            .expect("Invariant failure: adjacent vertices have an edge id");
        let mut next_matching = matching;
        next_matching.insert(id);
        let mut next_remaining = remaining;
        next_remaining.remove(v);
        next_remaining.remove(w);
        extend(graph, next_remaining, next_matching, visitor);
    }
}

/// Number of matchings of `graph` saturating exactly `target`.
pub fn count_matchings(graph: &Graph, target: VertexSet) -> u64 {
    let mut count = 0u64;
    enumerate(graph, target, &mut from_fn(|_, _| count += 1));
    count
}

/// All perfect matchings of `graph`, in enumeration order.
pub fn perfect_matchings(graph: &Graph) -> Vec<EdgeSet> {
    let mut found = Vec::new();
    enumerate(graph, graph.vertices(), &mut from_fn(|_, m| found.push(*m)));
    found
}
