// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Children of cubic graphs: triangle blow-ups of a single vertex.
//!
//! Blowing up a vertex `v` of degree 3 adds two vertices `a = n` and
//! `b = n + 1`, moves the edge to `v`'s smallest neighbor onto `a` and the edge
//! to its second smallest neighbor onto `b`, and adds the triangle
//! `{v, a}, {v, b}, {a, b}`. The child has two more vertices and three more
//! edges, and is cubic whenever the parent is.
//!
//! Two generation modes are offered:
//!
//! - [`all_children`]: one child per vertex, isomorphic duplicates included.
//! - [`children_preserving_lonely_count`]: only the children whose lonely-edge
//!   count equals the parent's. Rather than classifying each child, the
//!   decision is made on the parent with the **v-join test**: enumerate the
//!   matchings saturating every vertex except `v` and its neighbors; the
//!   blow-up at `v` keeps the lonely-edge count iff none of those matchings
//!   uses a lonely edge of the parent. The test is sound for cubic parents and
//!   intended for 3-connected cubic graphs.
//!
//! Both modes require degree exactly 3 at every vertex they visit; any other
//! degree yields [`GraphError::NotCubicVertex`] for that vertex.
//!
//! # Examples
//!
//! ```
//! use lonely_edges::children;
//! use lonely_edges::graph::graph6;
//! use lonely_edges::lonely;
//!
//! let k4 = graph6::decode("C~").unwrap();
//! let lonely = lonely::classify(&k4);
//!
//! let kept: Vec<_> = children::children_preserving_lonely_count(&k4, lonely.edges(), &mut ())
//!     .map(|child| child.unwrap().vertex)
//!     .collect();
//! assert_eq!(kept, vec![0, 1, 2, 3]);
//! ```

use crate::graph::{check_order, Graph, GraphError};
use crate::matching::{self, Coverage, MatchingVisitor};
use crate::sets::{EdgeSet, VertexSet};

/// A graph obtained by blowing up `vertex` of its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Child {
    /// The parent vertex that was blown up.
    pub vertex: usize,
    pub graph: Graph,
}

fn require_cubic_vertex(graph: &Graph, v: usize) -> Result<(), GraphError> {
    let degree = graph.degree(v);
    if degree != 3 {
        return Err(GraphError::NotCubicVertex { vertex: v, degree });
    }
    Ok(())
}

/// Blow up vertex `v` of `graph` into a triangle.
///
/// # Errors
///
/// - [`GraphError::NotCubicVertex`] if `v` does not have degree 3
/// - [`GraphError::TooManyVertices`] / [`GraphError::TooManyEdges`] if the
///   child no longer fits the set capacity
///
/// # Panics
///
/// Panics if `v >= graph.order()`.
pub fn blow_up(graph: &Graph, v: usize) -> Result<Graph, GraphError> {
    require_cubic_vertex(graph, v)?;
    let n = graph.order();
    check_order(n as u64 + 2)?;

    let (a, b) = (n, n + 1);
    let mut adjacency = graph.adjacency().to_vec();
    adjacency.push(VertexSet::from(&[v, b][..]));
    adjacency.push(VertexSet::from(&[v, a][..]));

    // The third neighbor stays attached to v.
    for (new, neighbor) in [a, b].into_iter().zip(graph.neighbors(v)) {
        adjacency[neighbor].remove(v);
        adjacency[neighbor].insert(new);
        adjacency[new].insert(neighbor);
        adjacency[v].remove(neighbor);
        adjacency[v].insert(new);
    }

    Graph::build(n + 2, adjacency)
}

/// Every child of `graph`, one per vertex, in vertex order.
pub fn all_children(graph: &Graph) -> impl Iterator<Item = Result<Child, GraphError>> + '_ {
    (0..graph.order()).map(move |v| blow_up(graph, v).map(|child| Child { vertex: v, graph: child }))
}

/// Edges used by at least one v-join of `v`.
///
/// A v-join here is a matching saturating all vertices except `v` and its
/// neighbors. Each one found is also shown to `observer`. Edges incident to
/// `v` are never hit.
pub fn v_join_hits<V: MatchingVisitor + ?Sized>(graph: &Graph, v: usize, observer: &mut V) -> EdgeSet {
    let mut restricted = graph.vertices().difference(&graph.neighbors(v));
    restricted.remove(v);

    let mut coverage = Coverage::new();
    matching::enumerate(graph, restricted, &mut (&mut coverage, observer));
    coverage.hit_at_least_once()
}

/// The v-join test: whether blowing up `v` keeps the lonely-edge count of
/// `graph`, whose lonely edges are `lonely`.
///
/// # Errors
///
/// [`GraphError::NotCubicVertex`] if `v` does not have degree 3.
pub fn preserves_lonely_count<V: MatchingVisitor + ?Sized>(
    graph: &Graph,
    v: usize,
    lonely: EdgeSet,
    observer: &mut V,
) -> Result<bool, GraphError> {
    require_cubic_vertex(graph, v)?;
    Ok(v_join_hits(graph, v, observer).intersection(&lonely).is_empty())
}

/// The children of `graph` with the same number of lonely edges, in vertex
/// order, where `lonely` holds the lonely edges of `graph`.
///
/// Vertices failing the v-join test are skipped without building a child.
/// Every v-join enumerated along the way is shown to `observer`, which stays
/// reachable through [`PreservingChildren::observer`] between children.
pub fn children_preserving_lonely_count<'a, V: MatchingVisitor + ?Sized>(
    graph: &'a Graph,
    lonely: EdgeSet,
    observer: &'a mut V,
) -> PreservingChildren<'a, V> {
    PreservingChildren {
        graph,
        lonely,
        next_vertex: 0,
        observer,
    }
}

/// Iterator returned by [`children_preserving_lonely_count`].
#[derive(Debug)]
pub struct PreservingChildren<'a, V: ?Sized> {
    graph: &'a Graph,
    lonely: EdgeSet,
    next_vertex: usize,
    observer: &'a mut V,
}

impl<V: ?Sized> PreservingChildren<'_, V> {
    /// The observer shown every v-join so far.
    pub fn observer(&mut self) -> &mut V {
        &mut *self.observer
    }
}

impl<V: MatchingVisitor + ?Sized> Iterator for PreservingChildren<'_, V> {
    type Item = Result<Child, GraphError>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next_vertex < self.graph.order() {
            let v = self.next_vertex;
            self.next_vertex += 1;
            match preserves_lonely_count(self.graph, v, self.lonely, &mut *self.observer) {
                Ok(true) => {
                    return Some(blow_up(self.graph, v).map(|child| Child { vertex: v, graph: child }));
                }
                Ok(false) => {}
                Err(err) => return Some(Err(err)),
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::graph6;
    use crate::lonely;

    fn k4() -> Graph {
        graph6::decode("C~").unwrap()
    }

    fn prism() -> Graph {
        Graph::from_edges(
            6,
            &[(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5), (0, 3), (1, 4), (2, 5)],
        )
        .unwrap()
    }

    #[test]
    fn test_blow_up_k4() {
        let child = blow_up(&k4(), 0).unwrap();
        let adjacency: Vec<Vec<usize>> = child.adjacency().iter().map(|s| s.iter().collect()).collect();
        assert_eq!(
            adjacency,
            vec![
                vec![3, 4, 5],
                vec![2, 3, 4],
                vec![1, 3, 5],
                vec![0, 1, 2],
                vec![0, 1, 5],
                vec![0, 2, 4],
            ]
        );
        assert_eq!(graph6::encode(&child), "ENqg");
    }

    #[test]
    fn test_blow_up_keeps_cubic() {
        let parent = prism();
        for v in 0..parent.order() {
            let child = blow_up(&parent, v).unwrap();
            assert_eq!(child.order(), parent.order() + 2);
            assert_eq!(child.size(), parent.size() + 3);
            assert!(child.is_cubic());
            assert!(child.has_edge(v, parent.order()));
            assert!(child.has_edge(v, parent.order() + 1));
            assert!(child.has_edge(parent.order(), parent.order() + 1));
        }
    }

    #[test]
    fn test_blow_up_requires_degree_three() {
        let path = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        assert_eq!(
            blow_up(&path, 1),
            Err(GraphError::NotCubicVertex { vertex: 1, degree: 2 })
        );
        assert!(matches!(
            preserves_lonely_count(&path, 0, EdgeSet::empty(), &mut ()),
            Err(GraphError::NotCubicVertex { vertex: 0, degree: 1 })
        ));
    }

    #[test]
    fn test_all_children() {
        let parent = prism();
        let children: Vec<_> = all_children(&parent).collect::<Result<_, _>>().unwrap();
        assert_eq!(children.len(), 6);
        for (v, child) in children.iter().enumerate() {
            assert_eq!(child.vertex, v);
            assert_eq!(child.graph, blow_up(&parent, v).unwrap());
        }
    }

    #[test]
    fn test_v_join_of_prism() {
        // Removing 0 and its neighbors 1, 2, 3 leaves the single edge {4, 5}.
        let parent = prism();
        let hits = v_join_hits(&parent, 0, &mut ());
        assert_eq!(hits, EdgeSet::singleton(parent.edge_id(4, 5).unwrap()));
    }

    #[test]
    fn test_k4_keeps_every_child() {
        let parent = k4();
        let lonely = lonely::classify(&parent);
        let children: Vec<_> = children_preserving_lonely_count(&parent, lonely.edges(), &mut ())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(children.len(), 4);
        for child in &children {
            assert_eq!(lonely::classify(&child.graph).count(), 6);
        }
    }

    #[test]
    fn test_prism_keeps_no_child() {
        let parent = prism();
        let lonely = lonely::classify(&parent);
        assert_eq!(
            children_preserving_lonely_count(&parent, lonely.edges(), &mut ()).count(),
            0
        );
        // The pruning agrees with classifying every child directly.
        for child in all_children(&parent) {
            assert_eq!(lonely::classify(&child.unwrap().graph).count(), 5);
        }
    }

    #[test]
    fn test_observer_sees_v_joins() {
        let parent = prism();
        let mut count = 0;
        let lonely = lonely::classify(&parent).edges();
        let _ = children_preserving_lonely_count(
            &parent,
            lonely,
            &mut matching::from_fn(|_, _| count += 1),
        )
        .count();
        // One v-join per vertex: the edge of the opposite triangle left over.
        assert_eq!(count, 6);
    }

    #[test]
    fn test_observer_reachable_between_children() {
        let parent = k4();
        let lonely = lonely::classify(&parent).edges();
        let mut coverage = Coverage::new();
        let mut children = children_preserving_lonely_count(&parent, lonely, &mut coverage);
        assert_eq!(children.next().map(|c| c.unwrap().vertex), Some(0));
        // K4 minus a closed neighborhood is empty: one empty v-join per vertex.
        assert_eq!(children.observer().matchings(), 1);
        assert_eq!(children.by_ref().count(), 3);
        assert_eq!(children.observer().matchings(), 4);
    }
}
