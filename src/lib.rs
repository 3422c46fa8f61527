/*!
2D [Delaunay triangulation](https://en.wikipedia.org/wiki/Delaunay_triangulation)
and [Euclidean minimum spanning tree](https://en.wikipedia.org/wiki/Euclidean_minimum_spanning_tree)
for Rust.

The triangulation is computed by Guibas and Stolfi's divide-and-conquer
algorithm over a quad-edge structure, with Dwyer's alternating-axis splits.
The EMST is then obtained by running Kruskal's algorithm on the
triangulation's edges alone, which is valid because the EMST is always a
subgraph of the Delaunay triangulation.

Predicates use ordinary floating-point comparisons; exactly collinear or
cocircular configurations get a fixed, deterministic classification rather
than an exact-arithmetic tie-break.

# Example

```rust
use delaunay_mst::{minimum_spanning_tree, triangulate};
use geo_types::point;

let points = vec![
    point!(x: 0., y: 0.),
    point!(x: 1., y: 0.),
    point!(x: 1., y: 1.),
    point!(x: 0., y: 1.),
];

let triangulation = triangulate(&points);
assert_eq!(triangulation.edges.len(), 5); // four sides and a diagonal

let mst = minimum_spanning_tree(&triangulation);
assert_eq!(mst.edges.len(), 3);
assert_eq!(mst.longest.unwrap().length, 1.0);
```
*/

pub use delaunay::{Edge, Triangulation};
use geo_types::Point;
pub use math::CoordType;
pub use mst::{minimum_spanning_tree, DisjointSet, SpanningTree};

mod delaunay;
mod math;
mod mst;
mod quadedge;

/// Triangulate a set of 2D points. See [`Triangulation::triangulate`].
pub fn triangulate<T>(points: &[Point<T>]) -> Triangulation<T>
where
    T: CoordType,
{
    Triangulation::triangulate(points)
}
