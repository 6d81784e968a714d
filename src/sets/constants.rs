// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time capacity of every vertex and edge set.
//!
//! CAPACITY bounds both the number of vertices and the number of edges of a
//! graph the crate can process. It can be configured at compile time via cargo
//! features.
//!
//! # Supported CAPACITY values
//!
//! - 64: one word per set, cubic graphs up to 42 vertices
//! - 128: two words per set, cubic graphs up to 84 vertices - **default**
//! - 256: four words per set, cubic graphs up to 170 vertices
//!
//! # Example
//!
//! ```bash
//! # Default: CAPACITY=128
//! cargo build
//!
//! # Build for CAPACITY=256
//! cargo build --features capacity_256
//! ```

/// Maximum number of elements (vertices or edge identifiers) in a set.
///
/// This is configurable at compile time via cargo features:
/// - `capacity_64` → CAPACITY=64
/// - `capacity_128` → CAPACITY=128 (explicit)
/// - `capacity_256` → CAPACITY=256
/// - (default) → CAPACITY=128 (when no feature specified)
#[cfg(not(any(
    feature = "capacity_64",
    feature = "capacity_128",
    feature = "capacity_256"
)))]
pub const CAPACITY: usize = 128;

#[cfg(feature = "capacity_64")]
pub const CAPACITY: usize = 64;

#[cfg(feature = "capacity_128")]
pub const CAPACITY: usize = 128;

#[cfg(feature = "capacity_256")]
pub const CAPACITY: usize = 256;

/// Number of bits in one storage word.
pub const WORD_BITS: usize = u64::BITS as usize;

/// Number of u64 words needed to represent a set of CAPACITY elements.
pub const SET_WORDS: usize = CAPACITY.div_ceil(WORD_BITS);

/// Compile-time assertion that the capacity fills whole words.
const _: () = assert!(
    CAPACITY % WORD_BITS == 0,
    "CAPACITY must be a multiple of 64"
);
