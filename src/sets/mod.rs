// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed-capacity sets over a dense integer domain.
//!
//! This module contains the set representation shared by every other component:
//! - BitSet: array-of-words bitset over `0..CAPACITY`
//! - VertexSet / EdgeSet: aliases naming what a given set holds
//! - CAPACITY: the compile-time bound on vertices and edges

pub mod bit_set;
pub mod constants;

// Re-export for convenience
pub use bit_set::{BitSet, BitSetIter, EdgeSet, VertexSet};
pub use constants::*;
