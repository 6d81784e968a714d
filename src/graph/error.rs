// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for graph decoding, construction and transformation.

use thiserror::Error;

/// A graph6 line that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Graph6Error {
    /// The line holds no graph at all.
    #[error("empty graph6 string")]
    Empty,

    /// A byte outside the printable range `63..=126`.
    #[error("invalid graph6 byte {byte:#04x} at position {position}")]
    InvalidByte { position: usize, byte: u8 },

    /// The order prefix ended before all its bytes were read.
    #[error("truncated graph6 vertex count")]
    TruncatedOrder,

    /// The adjacency body has the wrong number of bytes for the order.
    #[error("graph6 body has {actual} bytes, expected {expected}")]
    BodyLength { expected: usize, actual: usize },
}

/// Input that cannot be turned into a graph the enumerator can process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error(transparent)]
    Decode(#[from] Graph6Error),

    /// More vertices than a vertex set can index.
    #[error("graph has {order} vertices, at most {capacity} supported")]
    TooManyVertices { order: u64, capacity: usize },

    /// More edges than an edge set can index.
    #[error("graph has more than {capacity} edges")]
    TooManyEdges { capacity: usize },

    /// The adjacency list does not have one entry per vertex.
    #[error("adjacency has {actual} rows for {order} vertices")]
    AdjacencyLength { order: usize, actual: usize },

    #[error("vertex {vertex} has neighbor {neighbor} outside 0..{order}")]
    NeighborOutOfRange {
        vertex: usize,
        neighbor: usize,
        order: usize,
    },

    #[error("self-loop at vertex {vertex}")]
    SelfLoop { vertex: usize },

    #[error("adjacency is not symmetric at ({u},{v})")]
    Asymmetric { u: usize, v: usize },

    /// Triangle blow-up needs a vertex of degree exactly 3.
    #[error("vertex {vertex} has degree {degree}, blow-up needs degree 3")]
    NotCubicVertex { vertex: usize, degree: usize },
}
