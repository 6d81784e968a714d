// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! How often each edge is used by the matchings of one enumeration.

use crate::graph::Graph;
use crate::matching::MatchingVisitor;
use crate::sets::EdgeSet;

/// Edges hit at least once and at least twice by the visited matchings.
///
/// Each visited matching `m` updates the pair as
/// `twice = twice ∪ (once ∩ m)` followed by `once = once ∪ m`, so after an
/// enumeration `once \ twice` is exactly the set of edges used by a single
/// matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Coverage {
    hit_once: EdgeSet,
    hit_twice: EdgeSet,
    matchings: u64,
}

impl Coverage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edges in at least one visited matching.
    pub fn hit_at_least_once(&self) -> EdgeSet {
        self.hit_once
    }

    /// Edges in at least two visited matchings.
    pub fn hit_at_least_twice(&self) -> EdgeSet {
        self.hit_twice
    }

    /// Edges in exactly one visited matching.
    pub fn hit_exactly_once(&self) -> EdgeSet {
        self.hit_once.difference(&self.hit_twice)
    }

    /// Number of matchings visited.
    pub fn matchings(&self) -> u64 {
        self.matchings
    }
}

impl MatchingVisitor for Coverage {
    fn visit(&mut self, _graph: &Graph, matching: &EdgeSet) {
        self.hit_twice = self.hit_twice.union(&self.hit_once.intersection(matching));
        self.hit_once = self.hit_once.union(matching);
        self.matchings += 1;
    }
}
