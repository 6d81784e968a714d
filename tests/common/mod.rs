// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use lonely_edges::children;
use lonely_edges::graph::{graph6, Graph};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use std::collections::BTreeMap;

pub const K4: &str = "C~";
pub const PRISM: &str = "E{Sw";
pub const K33: &str = "EFz_";
pub const PETERSEN: &str = "IheA@GUAo";
/// A cubic graph on 8 vertices with 4 lonely edges and 5 perfect matchings.
pub const GTPTQW: &str = "GTPTQW";

pub fn decode(line: &str) -> Graph {
    graph6::decode(line).unwrap_or_else(|err| panic!("{:?} should decode: {}", line, err))
}

pub fn cube() -> Graph {
    let edges: Vec<_> = (0..8usize)
        .flat_map(|i| ((i + 1)..8).map(move |j| (i, j)))
        .filter(|&(i, j)| (i ^ j).count_ones() == 1)
        .collect();
    Graph::from_edges(8, &edges).unwrap()
}

/// The 3-connected cubic graphs used as seeds for random growth.
pub fn cubic_seeds() -> Vec<Graph> {
    vec![decode(K4), decode(PRISM), decode(K33), decode(PETERSEN), cube(), decode(GTPTQW)]
}

/// G(n, p) with edges drawn in canonical order.
pub fn random_graph<R: Rng>(rng: &mut R, order: usize, p: f64) -> Graph {
    let mut edges = Vec::new();
    for u in 0..order {
        for v in (u + 1)..order {
            if rng.random_bool(p) {
                edges.push((u, v));
            }
        }
    }
    Graph::from_edges(order, &edges).unwrap()
}

/// A random cubic graph grown from a seed by `steps` random blow-ups.
pub fn random_cubic<R: Rng>(rng: &mut R, steps: usize) -> Graph {
    let mut graph = cubic_seeds()
        .choose(rng)
        .cloned()
        .expect("seeds are not empty");
    for _ in 0..steps {
        let v = rng.random_range(0..graph.order());
        graph = children::blow_up(&graph, v).unwrap();
    }
    graph
}

/// Every way of pairing up `0..order`, each pairing as a list of `(u, v)` with `u < v`.
pub fn pairings(order: usize) -> Vec<Vec<(usize, usize)>> {
    fn pair_up(rest: &[usize], current: &mut Vec<(usize, usize)>, out: &mut Vec<Vec<(usize, usize)>>) {
        let Some((&first, others)) = rest.split_first() else {
            out.push(current.clone());
            return;
        };
        for (i, &partner) in others.iter().enumerate() {
            let remaining: Vec<usize> = others
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, &w)| w)
                .collect();
            current.push((first, partner));
            pair_up(&remaining, current, out);
            current.pop();
        }
    }

    let mut out = Vec::new();
    if order % 2 == 0 {
        let vertices: Vec<usize> = (0..order).collect();
        pair_up(&vertices, &mut Vec::new(), &mut out);
    }
    out
}

/// Lonely edges and matching count found by checking every pairing of the vertices.
pub fn brute_force_lonely(graph: &Graph) -> (Vec<(usize, usize)>, u64) {
    let mut hits: BTreeMap<(usize, usize), u64> = BTreeMap::new();
    let mut matchings = 0;
    for pairing in pairings(graph.order()) {
        if pairing.iter().all(|&(u, v)| graph.has_edge(u, v)) {
            matchings += 1;
            for edge in pairing {
                *hits.entry(edge).or_default() += 1;
            }
        }
    }
    let lonely = hits
        .into_iter()
        .filter(|&(_, count)| count == 1)
        .map(|(edge, _)| edge)
        .collect();
    (lonely, matchings)
}

/// Endpoints of `graph`'s lonely edges, sorted.
pub fn lonely_endpoints(graph: &Graph) -> Vec<(usize, usize)> {
    let mut edges: Vec<_> = lonely_edges::lonely::classify(graph)
        .edges()
        .iter()
        .map(|e| graph.endpoints(e))
        .collect();
    edges.sort_unstable();
    edges
}

/// Shuffle the labels of `graph`.
pub fn relabel<R: Rng>(rng: &mut R, graph: &Graph) -> Graph {
    let mut labels: Vec<usize> = (0..graph.order()).collect();
    labels.shuffle(rng);
    let edges: Vec<_> = graph.edges().map(|(u, v)| (labels[u], labels[v])).collect();
    Graph::from_edges(graph.order(), &edges).unwrap()
}
