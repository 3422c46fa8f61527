use std::cmp::Ordering;

use approx::AbsDiffEq;
use geo_types::{CoordFloat, Point};
use num_traits::Float;

pub trait CoordType: CoordFloat + AbsDiffEq<Epsilon = Self> {}

impl CoordType for f64 {}
impl CoordType for f32 {}

/// Ordering used by vertical splits: x ascending, then y ascending.
/// This is also the canonical order of the point vector after init.
pub(crate) fn cmp_x_first<T>(a: &Point<T>, b: &Point<T>) -> Ordering
where
    T: CoordType,
{
    match a.x().partial_cmp(&b.x()).unwrap() {
        Ordering::Equal => a.y().partial_cmp(&b.y()).unwrap(),
        ord => ord,
    }
}

/// Ordering used by horizontal splits: y descending, then x descending.
pub(crate) fn cmp_y_first<T>(a: &Point<T>, b: &Point<T>) -> Ordering
where
    T: CoordType,
{
    match b.y().partial_cmp(&a.y()).unwrap() {
        Ordering::Equal => b.x().partial_cmp(&a.x()).unwrap(),
        ord => ord,
    }
}

pub trait DelaunayMath<T>
where
    T: CoordType,
{
    /// True iff `a`, `b`, `c` make a strictly counter-clockwise turn
    /// (positive signed area). Collinear triples are not counter-clockwise
    /// in either orientation.
    #[inline]
    fn ccw(a: Point<T>, b: Point<T>, c: Point<T>) -> bool {
        (b.x() - a.x()) * (c.y() - a.y()) - (b.y() - a.y()) * (c.x() - a.x()) > T::zero()
    }

    /// True iff `d` lies strictly inside the circumcircle of the
    /// counter-clockwise triangle `a`, `b`, `c`, via the sign of the lifted
    /// 3x3 determinant. Points exactly on the circle are not inside.
    fn in_circle(a: Point<T>, b: Point<T>, c: Point<T>, d: Point<T>) -> bool {
        let e = a - d;
        let f = b - d;
        let g = c - d;

        let ap = e.dot(e);
        let bp = f.dot(f);
        let cp = g.dot(g);

        e.x() * (f.y() * cp - bp * g.y()) - e.y() * (f.x() * cp - bp * g.x())
            + ap * (f.x() * g.y() - f.y() * g.x())
            > T::zero()
    }

    /// Euclidean distance between two points.
    #[inline]
    fn dist(a: Point<T>, b: Point<T>) -> T {
        let d = b - a;
        Float::hypot(d.x(), d.y())
    }
}
