//! Kruskal's algorithm over the triangulation's edges.
//!
//! The Euclidean minimum spanning tree of a point set is always a subgraph
//! of its Delaunay triangulation, so Kruskal only has to consider the O(n)
//! triangulation edges instead of the complete graph.

use crate::delaunay::{Edge, Triangulation};
use crate::math::CoordType;

/// Index-based disjoint-set forest with full path compression and
/// union by size.
pub struct DisjointSet {
    nodes: Vec<Node>,
}

#[derive(Clone, Copy)]
struct Node {
    parent: usize,
    size: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets, one per element id.
    pub fn new(n: usize) -> Self {
        Self {
            nodes: (0..n).map(|i| Node { parent: i, size: 1 }).collect(),
        }
    }

    /// Canonical root of the set containing `i`. Every node on the walked
    /// path is repointed directly at the root as the recursion unwinds.
    pub fn find(&mut self, i: usize) -> usize {
        let parent = self.nodes[i].parent;
        if parent == i {
            return i;
        }

        let root = self.find(parent);
        self.nodes[i].parent = root;
        root
    }

    /// Merges the sets containing `i` and `j`; a no-op when they already
    /// share a root. The root of the smaller tree is reparented under the
    /// root of the larger, ties going under `j`'s root. The recorded sizes
    /// are a balance heuristic only and are not maintained after the merge.
    pub fn union(&mut self, i: usize, j: usize) {
        let root_i = self.find(i);
        let root_j = self.find(j);

        if root_i == root_j {
            return;
        }

        if self.nodes[root_i].size <= self.nodes[root_j].size {
            self.nodes[root_i].parent = root_j;
        } else {
            self.nodes[root_j].parent = root_i;
        }
    }
}

/// Minimum spanning tree selected from a triangulation's edges.
pub struct SpanningTree<T>
where
    T: CoordType,
{
    /// The accepted edges, in ascending length order.
    pub edges: Vec<Edge<T>>,

    /// The longest accepted edge; `None` when the triangulation had fewer
    /// than two points. Useful downstream, e.g. as a clustering threshold.
    pub longest: Option<Edge<T>>,
}

/// Computes the Euclidean minimum spanning tree of the triangulated points.
///
/// Sorts the triangulation's edges by length and runs a single Kruskal pass
/// over them, accepting every edge whose endpoints are not yet connected.
pub fn minimum_spanning_tree<T>(triangulation: &Triangulation<T>) -> SpanningTree<T>
where
    T: CoordType,
{
    let mut candidates = triangulation.edges.clone();
    candidates.sort_unstable_by(|a, b| a.length.partial_cmp(&b.length).unwrap());

    let mut forest = DisjointSet::new(triangulation.points.len());
    let mut edges = Vec::with_capacity(triangulation.points.len().saturating_sub(1));
    let mut longest = None;

    for edge in candidates {
        if forest.find(edge.start) != forest.find(edge.end) {
            forest.union(edge.start, edge.end);
            // candidates arrive shortest first, so the edge accepted last
            // is the longest accepted so far
            longest = Some(edge);
            edges.push(edge);
        }
    }

    SpanningTree { edges, longest }
}
