use approx::assert_abs_diff_eq;
use delaunay_mst::{minimum_spanning_tree, triangulate, CoordType, DisjointSet, Edge};
use geo_types::{point, Point};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn random_points<T>(n: usize, seed: u64) -> Vec<Point<T>>
where
    T: CoordType,
{
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let x: f64 = rng.gen_range(0.0..100.0);
            let y: f64 = rng.gen_range(0.0..100.0);
            point!(x: T::from(x).unwrap(), y: T::from(y).unwrap())
        })
        .collect()
}

/// Normalizes an edge list to a sorted set of undirected index pairs.
fn edge_set<T>(edges: &[Edge<T>]) -> Vec<(usize, usize)>
where
    T: CoordType,
{
    let mut set: Vec<_> = edges
        .iter()
        .map(|e| (e.start.min(e.end), e.start.max(e.end)))
        .collect();
    set.sort_unstable();
    set
}

/// Signed area of the triangle `a`, `b`, `c` (positive when
/// counter-clockwise).
fn orient<T>(a: Point<T>, b: Point<T>, c: Point<T>) -> T
where
    T: CoordType,
{
    (b.x() - a.x()) * (c.y() - a.y()) - (b.y() - a.y()) * (c.x() - a.x())
}

/// True if `d` lies strictly inside the circumcircle of `a`, `b`, `c`
/// (any orientation of the triple).
fn strictly_in_circumcircle<T>(a: Point<T>, b: Point<T>, c: Point<T>, d: Point<T>) -> bool
where
    T: CoordType,
{
    let e = a - d;
    let f = b - d;
    let g = c - d;

    let det = e.x() * (f.y() * g.dot(g) - f.dot(f) * g.y())
        - e.y() * (f.x() * g.dot(g) - f.dot(f) * g.x())
        + e.dot(e) * (f.x() * g.y() - f.y() * g.x());

    if orient(a, b, c) > T::zero() {
        det > T::zero()
    } else {
        det < T::zero()
    }
}

/// True if the open segments `(p1, p2)` and `(p3, p4)` properly cross.
fn segments_cross<T>(p1: Point<T>, p2: Point<T>, p3: Point<T>, p4: Point<T>) -> bool
where
    T: CoordType,
{
    let d1 = orient(p1, p2, p3);
    let d2 = orient(p1, p2, p4);
    let d3 = orient(p3, p4, p1);
    let d4 = orient(p3, p4, p2);

    d1 * d2 < T::zero() && d3 * d4 < T::zero()
}

pub fn square_scenario<T>()
where
    T: CoordType,
{
    let points = vec![
        point!(x: T::zero(), y: T::zero()),
        point!(x: T::one(), y: T::zero()),
        point!(x: T::zero(), y: T::one()),
        point!(x: T::one(), y: T::one()),
    ];

    let triangulation = triangulate(&points);
    assert_eq!(triangulation.points.len(), 4);
    assert_eq!(
        triangulation.edges.len(),
        5,
        "unit square must yield four sides and one diagonal"
    );

    let mst = minimum_spanning_tree(&triangulation);
    assert_eq!(mst.edges.len(), 3);
    for edge in &mst.edges {
        assert_eq!(edge.length, T::one());
    }
    assert_eq!(mst.longest.unwrap().length, T::one());
}

pub fn collinear_scenario<T>()
where
    T: CoordType,
{
    let points = vec![
        point!(x: T::zero(), y: T::zero()),
        point!(x: T::one(), y: T::zero()),
        point!(x: T::from(2).unwrap(), y: T::zero()),
    ];

    let triangulation = triangulate(&points);
    assert_eq!(
        triangulation.edges.len(),
        2,
        "collinear points must form a chain, not a triangle"
    );

    let mst = minimum_spanning_tree(&triangulation);
    assert_eq!(edge_set(&mst.edges), edge_set(&triangulation.edges));
    assert_eq!(mst.longest.unwrap().length, T::one());
}

pub fn duplicate_collapse<T>()
where
    T: CoordType,
{
    let unique = vec![
        point!(x: T::zero(), y: T::zero()),
        point!(x: T::one(), y: T::zero()),
        point!(x: T::zero(), y: T::one()),
        point!(x: T::one(), y: T::one()),
    ];
    let mut duplicated = unique.clone();
    duplicated.push(unique[3]);
    duplicated.push(unique[0]);
    duplicated.push(unique[0]);

    let expected = triangulate(&unique);
    let actual = triangulate(&duplicated);

    assert_eq!(actual.points, expected.points);
    assert_eq!(edge_set(&actual.edges), edge_set(&expected.edges));
    for edge in &actual.edges {
        assert_ne!(edge.start, edge.end, "no self-referencing edge");
    }

    let expected_mst = minimum_spanning_tree(&expected);
    let actual_mst = minimum_spanning_tree(&actual);
    assert_eq!(edge_set(&actual_mst.edges), edge_set(&expected_mst.edges));
}

pub fn determinism<T>()
where
    T: CoordType,
{
    let mut rng = StdRng::seed_from_u64(7);

    // a coarse integer grid, so the input contains coordinate duplicates
    let mut points: Vec<Point<T>> = (0..60)
        .map(|_| {
            let x = rng.gen_range(0..20) as f64;
            let y = rng.gen_range(0..20) as f64;
            point!(x: T::from(x).unwrap(), y: T::from(y).unwrap())
        })
        .collect();

    let reference = triangulate(&points);
    let reference_edges = edge_set(&reference.edges);
    let reference_mst = edge_set(&minimum_spanning_tree(&reference).edges);

    for _ in 0..5 {
        points.shuffle(&mut rng);
        let triangulation = triangulate(&points);
        assert_eq!(triangulation.points, reference.points);
        assert_eq!(edge_set(&triangulation.edges), reference_edges);
        assert_eq!(
            edge_set(&minimum_spanning_tree(&triangulation).edges),
            reference_mst
        );
    }
}

pub fn bad_input<T>()
where
    T: CoordType,
{
    let mut points: Vec<Point<T>> = vec![];
    let triangulation = triangulate(&points);
    assert!(triangulation.points.is_empty());
    assert!(triangulation.edges.is_empty());
    assert!(minimum_spanning_tree(&triangulation).longest.is_none());

    points.push(point!(x: T::zero(), y: T::zero()));
    let triangulation = triangulate(&points);
    assert_eq!(triangulation.points.len(), 1);
    assert!(triangulation.edges.is_empty());
    let mst = minimum_spanning_tree(&triangulation);
    assert!(mst.edges.is_empty());
    assert!(mst.longest.is_none());

    points.push(point!(x: T::one(), y: T::one()));
    let triangulation = triangulate(&points);
    assert_eq!(triangulation.edges.len(), 1);
    let mst = minimum_spanning_tree(&triangulation);
    assert_eq!(mst.edges.len(), 1);
    assert_eq!(mst.longest.unwrap().length, triangulation.edges[0].length);
}

pub fn planarity<T>()
where
    T: CoordType,
{
    for seed in 0..3 {
        let triangulation = triangulate(&random_points::<T>(30, seed));
        let points = &triangulation.points;
        let edges = &triangulation.edges;

        for (i, a) in edges.iter().enumerate() {
            for b in &edges[i + 1..] {
                if a.start == b.start || a.start == b.end || a.end == b.start || a.end == b.end {
                    continue;
                }
                assert!(
                    !segments_cross(
                        points[a.start],
                        points[a.end],
                        points[b.start],
                        points[b.end]
                    ),
                    "triangulation edges ({}, {}) and ({}, {}) cross",
                    a.start,
                    a.end,
                    b.start,
                    b.end
                );
            }
        }
    }
}

/// Compares the edge set against a brute-force enumeration of all triangles
/// with an empty circumcircle, which for points in general position is
/// exactly the Delaunay triangulation.
pub fn delaunay_matches_bruteforce<T>()
where
    T: CoordType,
{
    for seed in 0..5 {
        let triangulation = triangulate(&random_points::<T>(12, 100 + seed));
        let points = &triangulation.points;
        let n = points.len();

        let mut expected = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                for k in (j + 1)..n {
                    if orient(points[i], points[j], points[k]) == T::zero() {
                        continue;
                    }
                    let empty = (0..n).filter(|&m| m != i && m != j && m != k).all(|m| {
                        !strictly_in_circumcircle(points[i], points[j], points[k], points[m])
                    });
                    if empty {
                        expected.push((i, j));
                        expected.push((i, k));
                        expected.push((j, k));
                    }
                }
            }
        }
        expected.sort_unstable();
        expected.dedup();

        assert_eq!(edge_set(&triangulation.edges), expected);
    }
}

/// Verifies the EMST against brute-force Kruskal over the complete graph.
pub fn emst_matches_bruteforce<T>()
where
    T: CoordType,
{
    for seed in 0..5 {
        let triangulation = triangulate(&random_points::<T>(50, 200 + seed));
        let n = triangulation.points.len();

        let mst = minimum_spanning_tree(&triangulation);
        assert_eq!(mst.edges.len(), n - 1);

        let points = &triangulation.points;
        let mut complete: Vec<(usize, usize, T)> = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[j] - points[i];
                complete.push((i, j, d.dot(d).sqrt()));
            }
        }
        complete.sort_unstable_by(|a, b| a.2.partial_cmp(&b.2).unwrap());

        let mut forest = DisjointSet::new(n);
        let mut brute_total = T::zero();
        for (i, j, length) in complete {
            if forest.find(i) != forest.find(j) {
                forest.union(i, j);
                brute_total = brute_total + length;
            }
        }

        let total = mst
            .edges
            .iter()
            .fold(T::zero(), |acc, edge| acc + edge.length);
        assert_abs_diff_eq!(total, brute_total, epsilon = T::from(1e-6).unwrap());

        let max_length = mst
            .edges
            .iter()
            .map(|edge| edge.length)
            .fold(T::zero(), |a, b| a.max(b));
        assert_eq!(mst.longest.unwrap().length, max_length);
    }
}
