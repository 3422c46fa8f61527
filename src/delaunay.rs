use std::cmp::Ordering;

use geo_types::Point;

use crate::math::{cmp_x_first, cmp_y_first, CoordType, DelaunayMath};
use crate::quadedge::EdgeArena;

/// An undirected edge of the triangulation. `start` and `end` index the
/// point vector of the [`Triangulation`] that produced the edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge<T> {
    pub start: usize,
    pub end: usize,

    /// Euclidean distance between the endpoints.
    pub length: T,
}

/// Result of the Delaunay triangulation.
pub struct Triangulation<T>
where
    T: CoordType,
{
    /// The triangulated points, sorted lexicographically (x first, then y)
    /// with exact coordinate duplicates collapsed. The position of a point
    /// in this vector is its stable identifier.
    pub points: Vec<Point<T>>,

    /// Every surviving undirected edge of the triangulation, one record per
    /// edge (not merely the convex hull).
    pub edges: Vec<Edge<T>>,
}

impl<T> Triangulation<T>
where
    T: CoordType,
{
    /// Triangulate a set of 2D points.
    ///
    /// The input may be unordered and may contain exact duplicates; it is
    /// sorted and deduplicated first, so identical point multisets always
    /// yield the same triangulation. Fewer than two distinct points produce
    /// an empty edge list; a fully collinear input produces the chain of
    /// hull edges and no triangle.
    pub fn triangulate(input: &[Point<T>]) -> Self {
        let mut points = input.to_vec();
        points.sort_unstable_by(cmp_x_first);
        points.dedup();

        let n = points.len();
        if n < 2 {
            return Self {
                points,
                edges: Vec::new(),
            };
        }

        let mut builder = Builder {
            points: &points,
            arena: EdgeArena::with_point_count(n),
        };

        let mut order: Vec<usize> = (0..n).collect();
        builder.triangulate_range(&mut order, true);
        let edges = builder.extract_edges();

        Self { points, edges }
    }
}

/// Mutable context threaded through the divide-and-conquer recursion: the
/// canonical point slice plus the growing quad-edge arena.
struct Builder<'a, T>
where
    T: CoordType,
{
    points: &'a [Point<T>],
    arena: EdgeArena,
}

impl<'a, T> DelaunayMath<T> for Builder<'a, T> where T: CoordType {}

impl<'a, T> Builder<'a, T>
where
    T: CoordType,
{
    #[inline]
    fn point(&self, i: usize) -> Point<T> {
        self.points[i]
    }

    #[inline]
    fn org(&self, e: usize) -> Point<T> {
        self.points[self.arena.org(e)]
    }

    #[inline]
    fn dest(&self, e: usize) -> Point<T> {
        self.points[self.arena.dest(e)]
    }

    /// True if point `p` lies strictly to the left of directed edge `e`.
    #[inline]
    fn left_of(&self, e: usize, p: usize) -> bool {
        Self::ccw(self.point(p), self.org(e), self.dest(e))
    }

    /// True if point `p` lies strictly to the right of directed edge `e`.
    #[inline]
    fn right_of(&self, e: usize, p: usize) -> bool {
        Self::ccw(self.point(p), self.dest(e), self.org(e))
    }

    fn cmp_axis(&self, i: usize, j: usize, vertical: bool) -> Ordering {
        if vertical {
            cmp_x_first(&self.points[i], &self.points[j])
        } else {
            cmp_y_first(&self.points[i], &self.points[j])
        }
    }

    /// True if the origin of edge `e` precedes the origin of edge `f` under
    /// the current axis ordering.
    fn org_before(&self, e: usize, f: usize, vertical: bool) -> bool {
        self.cmp_axis(self.arena.org(e), self.arena.org(f), vertical) == Ordering::Less
    }

    fn sort_range(&self, order: &mut [usize], vertical: bool) {
        order.sort_unstable_by(|&i, &j| self.cmp_axis(i, j, vertical));
    }

    /// Recursively triangulates the points selected by `order`, alternating
    /// the split axis on every level. Returns the counter-clockwise hull
    /// edge out of the range's first extreme point and the clockwise hull
    /// edge out of its last, under the ordering of the current axis.
    fn triangulate_range(&mut self, order: &mut [usize], vertical: bool) -> (usize, usize) {
        match order.len() {
            2 => {
                self.sort_range(order, vertical);
                let e = self.arena.make_edge(order[0], order[1]);
                (e, EdgeArena::sym(e))
            }
            3 => self.triangulate_triple(order, vertical),
            _ => self.triangulate_halves(order, vertical),
        }
    }

    /// Three-point base case: a two-edge chain spliced at the middle point,
    /// closed into a triangle according to the orientation of the triple.
    fn triangulate_triple(&mut self, order: &mut [usize], vertical: bool) -> (usize, usize) {
        self.sort_range(order, vertical);
        let (p1, p2, p3) = (order[0], order[1], order[2]);

        let a = self.arena.make_edge(p1, p2);
        let b = self.arena.make_edge(p2, p3);
        self.arena.splice(EdgeArena::sym(a), b);

        if Self::ccw(self.point(p1), self.point(p2), self.point(p3)) {
            // counter-clockwise triple
            self.arena.connect(b, a);
            (a, EdgeArena::sym(b))
        } else if Self::ccw(self.point(p1), self.point(p3), self.point(p2)) {
            // clockwise triple
            let c = self.arena.connect(b, a);
            (EdgeArena::sym(c), c)
        } else {
            // collinear triple: leave the chain open, no triangle exists
            (a, EdgeArena::sym(b))
        }
    }

    /// Recursive case: median split along the current axis, triangulate the
    /// halves under the other axis, then merge along the seam.
    fn triangulate_halves(&mut self, order: &mut [usize], vertical: bool) -> (usize, usize) {
        let middle = (order.len() + 1) / 2;
        order.select_nth_unstable_by(middle, |&i, &j| self.cmp_axis(i, j, vertical));
        let (left_half, right_half) = order.split_at_mut(middle);

        let (mut ldo, mut ldi) = self.triangulate_range(left_half, !vertical);
        let (mut rdi, mut rdo) = self.triangulate_range(right_half, !vertical);

        // The halves were built under the other axis, so their reported
        // boundary edges may not be extreme under this one. Walk each of
        // them around its hull until it is.
        if vertical {
            while self.org_before(self.arena.onext(EdgeArena::sym(ldo)), ldo, vertical) {
                ldo = self.arena.onext(EdgeArena::sym(ldo));
            }
            while self.org_before(ldi, EdgeArena::sym(self.arena.onext(ldi)), vertical) {
                ldi = EdgeArena::sym(self.arena.onext(ldi));
            }
            while self.org_before(self.arena.onext(EdgeArena::sym(rdi)), rdi, vertical) {
                rdi = self.arena.onext(EdgeArena::sym(rdi));
            }
            while self.org_before(rdo, EdgeArena::sym(self.arena.onext(rdo)), vertical) {
                rdo = EdgeArena::sym(self.arena.onext(rdo));
            }
        } else {
            while self.org_before(EdgeArena::sym(self.arena.oprev(ldo)), ldo, vertical) {
                ldo = EdgeArena::sym(self.arena.oprev(ldo));
            }
            while self.org_before(ldi, self.arena.oprev(EdgeArena::sym(ldi)), vertical) {
                ldi = self.arena.oprev(EdgeArena::sym(ldi));
            }
            while self.org_before(EdgeArena::sym(self.arena.oprev(rdi)), rdi, vertical) {
                rdi = EdgeArena::sym(self.arena.oprev(rdi));
            }
            while self.org_before(rdo, self.arena.oprev(EdgeArena::sym(rdo)), vertical) {
                rdo = self.arena.oprev(EdgeArena::sym(rdo));
            }
        }

        // Locate the lower tangent: advance whichever candidate still sees
        // the other structure's origin on the wrong side.
        loop {
            if self.left_of(ldi, self.arena.org(rdi)) {
                ldi = self.arena.oprev(EdgeArena::sym(ldi));
            } else if self.right_of(rdi, self.arena.org(ldi)) {
                rdi = self.arena.onext(EdgeArena::sym(rdi));
            } else {
                break;
            }
        }

        // The cross edge between the halves becomes the base of the merge.
        let basel = self.arena.connect(EdgeArena::sym(rdi), ldi);
        if self.arena.org(ldi) == self.arena.org(ldo) {
            ldo = EdgeArena::sym(basel);
        }
        if self.arena.org(rdi) == self.arena.org(rdo) {
            rdo = basel;
        }

        self.stitch(basel);

        (ldo, rdo)
    }

    /// Stitches the two halves together from the base cross edge upward.
    /// Everything below the base is final; each round legalizes one
    /// candidate per side by the circle-emptiness test (deleting edges that
    /// fail it), connects the winning candidate to the base and continues
    /// from the new base, until the upper tangent is reached.
    fn stitch(&mut self, mut basel: usize) {
        loop {
            let mut rcand = self.arena.oprev(basel);
            let mut lcand = self.arena.onext(EdgeArena::sym(basel));
            let mut valid_r = self.right_of(basel, self.arena.dest(rcand));
            let mut valid_l = self.right_of(basel, self.arena.dest(lcand));

            // Advance the left candidate past every edge whose successor
            // point falls inside the candidate triangle's circumcircle,
            // deleting the failed edges as we go.
            if valid_l {
                while Self::in_circle(
                    self.dest(basel),
                    self.org(basel),
                    self.dest(lcand),
                    self.dest(self.arena.onext(lcand)),
                ) {
                    let next = self.arena.onext(lcand);
                    self.arena.delete_edge(lcand);
                    lcand = next;
                }
            }

            // Same for the right side, rotating the other way.
            if valid_r {
                while Self::in_circle(
                    self.dest(basel),
                    self.org(basel),
                    self.dest(rcand),
                    self.dest(self.arena.oprev(rcand)),
                ) {
                    let prev = self.arena.oprev(rcand);
                    self.arena.delete_edge(rcand);
                    rcand = prev;
                }
            }

            valid_r = self.right_of(basel, self.arena.dest(rcand));
            valid_l = self.right_of(basel, self.arena.dest(lcand));

            // Neither candidate lies above the base: the upper tangent has
            // been reached and the merge is complete.
            if !valid_r && !valid_l {
                break;
            }

            // Connect the right candidate unless the left one is the only
            // valid choice, or beats it in the mutual in-circle comparison.
            if !valid_l
                || (valid_r
                    && Self::in_circle(
                        self.dest(lcand),
                        self.org(lcand),
                        self.org(rcand),
                        self.dest(rcand),
                    ))
            {
                basel = self.arena.connect(rcand, EdgeArena::sym(basel));
            } else {
                basel = self.arena.connect(EdgeArena::sym(basel), EdgeArena::sym(lcand));
            }
        }
    }

    /// Emits one result edge per surviving undirected pair. Only the forward
    /// (even-slot) half of each pair is visited; deletion flags are set on
    /// both halves, so filtering the forward record alone is sufficient.
    fn extract_edges(&self) -> Vec<Edge<T>> {
        (0..self.arena.len())
            .step_by(2)
            .filter(|&e| !self.arena.is_deleted(e))
            .map(|e| Edge {
                start: self.arena.org(e),
                end: self.arena.dest(e),
                length: Self::dist(self.org(e), self.dest(e)),
            })
            .collect()
    }
}
