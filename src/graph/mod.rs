// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Simple undirected graphs with a canonical edge numbering.
//!
//! A [`Graph`] stores one neighbor [`VertexSet`] per vertex together with a
//! bijection between adjacent vertex pairs and dense edge identifiers
//! `0..size()`. The numbering is fixed at construction: vertices are scanned in
//! increasing order and, for each vertex, its larger neighbors in increasing
//! order. Every search in the crate iterates edges and vertices in this order,
//! so results are reproducible run to run.
//!
//! # Examples
//!
//! ```
//! use lonely_edges::graph::Graph;
//!
//! // A path on four vertices
//! let g = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
//! assert_eq!(g.size(), 3);
//! assert_eq!(g.edge_id(2, 1), Some(1));
//! assert_eq!(g.endpoints(2), (2, 3));
//! assert_eq!(g.to_string(), "0: 1 \n1: 0 2 \n2: 1 3 \n3: 2 \n\n");
//! ```

pub mod error;
pub mod graph6;

pub use error::{Graph6Error, GraphError};

use crate::sets::{VertexSet, CAPACITY};
use std::fmt;

/// Dense identifier of an edge, in `0..Graph::size()`.
pub type EdgeId = usize;

/// An immutable simple undirected graph on at most CAPACITY vertices and edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    order: usize,
    adjacency: Vec<VertexSet>,
    /// Row-major `order x order` lookup from vertex pair to edge identifier.
    edge_ids: Vec<Option<EdgeId>>,
    /// Edge identifier to its endpoints, smaller vertex first.
    endpoints: Vec<(usize, usize)>,
}

impl Graph {
    /// Build a graph from one neighbor set per vertex.
    ///
    /// Validates that the adjacency is simple and symmetric, then assigns
    /// edge identifiers in canonical order.
    ///
    /// # Errors
    ///
    /// - [`GraphError::TooManyVertices`] if `order > CAPACITY`
    /// - [`GraphError::TooManyEdges`] if the graph has more than CAPACITY edges
    /// - a structural error if the adjacency is malformed
    pub fn build(order: usize, adjacency: Vec<VertexSet>) -> Result<Self, GraphError> {
        check_order(order as u64)?;
        if adjacency.len() != order {
            return Err(GraphError::AdjacencyLength {
                order,
                actual: adjacency.len(),
            });
        }

        for (vertex, neighbors) in adjacency.iter().enumerate() {
            for neighbor in neighbors {
                if neighbor >= order {
                    return Err(GraphError::NeighborOutOfRange {
                        vertex,
                        neighbor,
                        order,
                    });
                }
                if neighbor == vertex {
                    return Err(GraphError::SelfLoop { vertex });
                }
                if !adjacency[neighbor].contains(vertex) {
                    return Err(GraphError::Asymmetric {
                        u: vertex,
                        v: neighbor,
                    });
                }
            }
        }

        let mut edge_ids = vec![None; order * order];
        let mut endpoints = Vec::new();
        for u in 0..order {
            for v in adjacency[u].iter().filter(|&v| v > u) {
                if endpoints.len() == CAPACITY {
                    return Err(GraphError::TooManyEdges { capacity: CAPACITY });
                }
                let id = endpoints.len();
                edge_ids[order * u + v] = Some(id);
                edge_ids[order * v + u] = Some(id);
                endpoints.push((u, v));
            }
        }

        Ok(Self {
            order,
            adjacency,
            edge_ids,
            endpoints,
        })
    }

    /// Build a graph from an edge list.
    ///
    /// Repeated edges collapse into one.
    ///
    /// # Errors
    ///
    /// As [`Graph::build`]; additionally rejects endpoints outside `0..order`
    /// and self-loops.
    pub fn from_edges(order: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        check_order(order as u64)?;
        let mut adjacency = vec![VertexSet::empty(); order];
        for &(u, v) in edges {
            if u >= order || v >= order {
                return Err(GraphError::NeighborOutOfRange {
                    vertex: u,
                    neighbor: v,
                    order,
                });
            }
            if u == v {
                return Err(GraphError::SelfLoop { vertex: u });
            }
            adjacency[u].insert(v);
            adjacency[v].insert(u);
        }
        Self::build(order, adjacency)
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of edges.
    pub fn size(&self) -> usize {
        self.endpoints.len()
    }

    /// The set of all vertices `{0, ..., order-1}`.
    pub fn vertices(&self) -> VertexSet {
        VertexSet::full(self.order)
    }

    /// Neighbor sets, indexed by vertex.
    pub fn adjacency(&self) -> &[VertexSet] {
        &self.adjacency
    }

    /// Neighbors of `v`.
    pub fn neighbors(&self, v: usize) -> VertexSet {
        self.adjacency[v]
    }

    pub fn degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }

    /// Whether every vertex has degree exactly 3.
    pub fn is_cubic(&self) -> bool {
        (0..self.order).all(|v| self.degree(v) == 3)
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adjacency[u].contains(v)
    }

    /// Identifier of the edge `{u, v}`, if the vertices are adjacent.
    pub fn edge_id(&self, u: usize, v: usize) -> Option<EdgeId> {
        if u >= self.order || v >= self.order {
            return None;
        }
        self.edge_ids[self.order * u + v]
    }

    /// Endpoints of edge `id`, smaller vertex first.
    ///
    /// # Panics
    ///
    /// Panics if `id >= size()`.
    pub fn endpoints(&self, id: EdgeId) -> (usize, usize) {
        self.endpoints[id]
    }

    /// All edges in identifier order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.endpoints.iter().copied()
    }
}

/// Reject vertex counts that a vertex set cannot index.
pub(crate) fn check_order(order: u64) -> Result<(), GraphError> {
    if order > CAPACITY as u64 {
        return Err(GraphError::TooManyVertices {
            order,
            capacity: CAPACITY,
        });
    }
    Ok(())
}

impl fmt::Display for Graph {
    /// Adjacency dump: one `"v: n1 n2 ... "` line per vertex, then a blank line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, neighbors) in self.adjacency.iter().enumerate() {
            write!(f, "{}: ", v)?;
            for neighbor in neighbors {
                write!(f, "{} ", neighbor)?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}
