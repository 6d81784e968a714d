// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The graph6 line format.
//!
//! A graph6 line is printable ASCII: a vertex-count prefix followed by the
//! upper triangle of the adjacency matrix (column-major over `j < i`, by
//! increasing `i`), packed six bits per byte, most significant bit first, each
//! byte offset by 63. The vertex count takes one byte `n + 63` for `n <= 62`,
//! byte 126 and three 6-bit groups for `n <= 258047`, or two bytes 126 and six
//! 6-bit groups beyond that.
//!
//! # Examples
//!
//! ```
//! use lonely_edges::graph::graph6;
//!
//! let k4 = graph6::decode("C~\n").unwrap();
//! assert_eq!(k4.order(), 4);
//! assert_eq!(k4.size(), 6);
//! assert_eq!(graph6::encode(&k4), "C~");
//! ```

use crate::graph::{check_order, Graph, Graph6Error, GraphError};
use crate::sets::VertexSet;

/// Offset added to every 6-bit group.
const BIAS: u8 = 63;

/// Marker byte introducing a multi-byte vertex count.
const LONG_ORDER: u8 = 126;

/// Optional header some generators put in front of each line.
const HEADER: &str = ">>graph6<<";

/// Largest order encodable in a single byte.
const SMALL_ORDER_MAX: u64 = 62;

/// Largest order encodable in the 4-byte form.
const MEDIUM_ORDER_MAX: u64 = 258_047;

/// Largest order encodable at all.
const LARGE_ORDER_MAX: u64 = 68_719_476_735;

fn triangle_bits(order: usize) -> usize {
    order * order.saturating_sub(1) / 2
}

/// Decode one graph6 line into a [`Graph`].
///
/// A trailing newline (and carriage return) and a leading `>>graph6<<` header
/// are accepted.
///
/// # Errors
///
/// [`GraphError::Decode`] for malformed lines, and any error of
/// [`Graph::build`] when the graph exceeds the set capacity. The vertex count
/// is checked against the capacity before anything is allocated.
pub fn decode(line: &str) -> Result<Graph, GraphError> {
    let line = line.trim_end_matches(['\n', '\r']);
    let line = line.strip_prefix(HEADER).unwrap_or(line);
    let bytes = line.as_bytes();
    if bytes.is_empty() {
        return Err(Graph6Error::Empty.into());
    }
    if let Some(position) = bytes.iter().position(|b| !(BIAS..=LONG_ORDER).contains(b)) {
        return Err(Graph6Error::InvalidByte {
            position,
            byte: bytes[position],
        }
        .into());
    }

    let (order, body) = decode_order(bytes)?;
    check_order(order)?;
    let order = order as usize;

    let expected = triangle_bits(order).div_ceil(6);
    if body.len() != expected {
        return Err(Graph6Error::BodyLength {
            expected,
            actual: body.len(),
        }
        .into());
    }

    let mut adjacency = vec![VertexSet::empty(); order];
    let mut k = 0usize;
    for i in 1..order {
        for j in 0..i {
            let group = body[k / 6] - BIAS;
            if (group >> (5 - k % 6)) & 1 != 0 {
                adjacency[i].insert(j);
                adjacency[j].insert(i);
            }
            k += 1;
        }
    }

    Graph::build(order, adjacency)
}

/// Split the vertex-count prefix from the body.
fn decode_order(bytes: &[u8]) -> Result<(u64, &[u8]), Graph6Error> {
    let groups = |prefix: &[u8]| {
        prefix
            .iter()
            .fold(0u64, |acc, &b| (acc << 6) | u64::from(b - BIAS))
    };

    if bytes[0] != LONG_ORDER {
        return Ok((u64::from(bytes[0] - BIAS), &bytes[1..]));
    }
    if bytes.get(1) == Some(&LONG_ORDER) {
        if bytes.len() < 8 {
            return Err(Graph6Error::TruncatedOrder);
        }
        return Ok((groups(&bytes[2..8]), &bytes[8..]));
    }
    if bytes.len() < 4 {
        return Err(Graph6Error::TruncatedOrder);
    }
    Ok((groups(&bytes[1..4]), &bytes[4..]))
}

/// Encode a graph as a graph6 line, without the trailing newline.
pub fn encode(graph: &Graph) -> String {
    encode_adjacency(graph.order(), graph.adjacency())
}

/// Encode neighbor sets as a graph6 line, without the trailing newline.
///
/// # Panics
///
/// Panics if `adjacency` has fewer than `order` rows.
pub fn encode_adjacency(order: usize, adjacency: &[VertexSet]) -> String {
    let mut out: Vec<u8> = Vec::with_capacity(8 + triangle_bits(order).div_ceil(6));
    encode_order(order as u64, &mut out);

    let mut group = 0u8;
    let mut filled = 0;
    for i in 1..order {
        for j in 0..i {
            group <<= 1;
            if adjacency[i].contains(j) {
                group |= 1;
            }
            filled += 1;
            if filled == 6 {
                out.push(group + BIAS);
                group = 0;
                filled = 0;
            }
        }
    }
    // Pad final group with 0's.
    if filled != 0 {
        out.push((group << (6 - filled)) + BIAS);
    }

    out.into_iter().map(char::from).collect()
}

fn encode_order(order: u64, out: &mut Vec<u8>) {
    let push_groups = |out: &mut Vec<u8>, count: u32| {
        for k in (0..count).rev() {
            out.push(((order >> (6 * k)) & 0x3f) as u8 + BIAS);
        }
    };

    if order <= SMALL_ORDER_MAX {
        out.push(order as u8 + BIAS);
    } else if order <= MEDIUM_ORDER_MAX {
        out.push(LONG_ORDER);
        push_groups(out, 3);
    } else {
        assert!(order <= LARGE_ORDER_MAX, "vertex count {} not encodable", order);
        out.push(LONG_ORDER);
        out.push(LONG_ORDER);
        push_groups(out, 6);
    }
}
