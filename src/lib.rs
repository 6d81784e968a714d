// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lonely edges of graphs, and the cubic children that keep them.
//!
//! An edge is **lonely** when exactly one perfect matching of the graph
//! contains it. This crate finds lonely edges by exhaustive enumeration of
//! perfect matchings, and grows cubic graphs by blowing up a vertex into a
//! triangle, optionally keeping only the children with as many lonely edges
//! as their parent.
//!
//! # Architecture
//!
//! - [`sets`]: fixed-capacity bitsets over vertex and edge indices. Capacity is
//!   chosen at compile time with the `capacity_*` features.
//! - [`graph`]: simple undirected graphs with a canonical edge numbering, and
//!   the graph6 codec.
//! - [`matching`]: enumeration of the matchings saturating a vertex subset,
//!   handed to [`matching::MatchingVisitor`]s.
//! - [`lonely`]: the lonely-edge classifier, built on [`matching::Coverage`].
//! - [`children`]: triangle blow-ups and the v-join test.
//! - [`config`] and [`driver`]: the command-line surface and the per-line
//!   processing loop used by the `lonely-edges` binary.
//!
//! # Example
//!
//! ```
//! use lonely_edges::graph::graph6;
//! use lonely_edges::lonely;
//!
//! // The 3-prism: two triangles joined by a perfect matching.
//! let prism = graph6::decode("E{Sw").unwrap();
//! let lonely = lonely::classify(&prism);
//! assert_eq!(lonely.matchings(), 4);
//! assert_eq!(lonely.count(), 6);
//! ```

pub mod children;
pub mod config;
pub mod driver;
pub mod graph;
pub mod lonely;
pub mod matching;
pub mod sets;

// Re-export commonly used types
pub use graph::{Graph, GraphError};
pub use lonely::LonelyEdges;
pub use sets::{EdgeSet, VertexSet};
