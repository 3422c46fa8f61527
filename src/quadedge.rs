//! Quad-edge storage for a planar subdivision, after Guibas and Stolfi.
//!
//! Every undirected edge is a pair of mutually symmetric directed records
//! occupying adjacent arena slots, so the reverse of edge `e` is always
//! `e ^ 1`. The directed edges sharing an origin form a doubly linked
//! rotational ring through `onext`/`oprev`. Edges removed during stitching
//! are only unlinked from their rings and flagged; their slots stay
//! allocated until the arena is dropped, which frees each pair exactly once.

/// One directed edge. `org` and `dest` index the point set the arena was
/// built over; `onext`/`oprev` index other records of the same arena.
#[derive(Clone, Debug)]
struct EdgeRecord {
    org: usize,
    dest: usize,
    onext: usize,
    oprev: usize,
    deleted: bool,
}

pub(crate) struct EdgeArena {
    records: Vec<EdgeRecord>,
}

impl EdgeArena {
    pub fn with_point_count(n: usize) -> Self {
        // at most 3n - 6 undirected edges survive; stitching deletes a few more
        let max_edges = if n > 2 { 3 * n } else { 1 };

        Self {
            records: Vec::with_capacity(2 * max_edges),
        }
    }

    /// The reverse-direction record of `e`. Pairs occupy adjacent slots, so
    /// this is a pure index computation and involutive by construction.
    #[inline]
    pub fn sym(e: usize) -> usize {
        e ^ 1
    }

    #[inline]
    pub fn org(&self, e: usize) -> usize {
        self.records[e].org
    }

    #[inline]
    pub fn dest(&self, e: usize) -> usize {
        self.records[e].dest
    }

    #[inline]
    pub fn onext(&self, e: usize) -> usize {
        self.records[e].onext
    }

    #[inline]
    pub fn oprev(&self, e: usize) -> usize {
        self.records[e].oprev
    }

    #[inline]
    pub fn is_deleted(&self, e: usize) -> bool {
        self.records[e].deleted
    }

    /// Number of directed records (twice the number of undirected edges,
    /// deleted ones included).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Allocates the directed edge `org -> dest` and its reverse, each as a
    /// singleton rotational ring. Returns the forward edge, which sits at an
    /// even slot; its reverse is the odd partner.
    pub fn make_edge(&mut self, org: usize, dest: usize) -> usize {
        let e = self.records.len();

        self.records.push(EdgeRecord {
            org,
            dest,
            onext: e,
            oprev: e,
            deleted: false,
        });
        self.records.push(EdgeRecord {
            org: dest,
            dest: org,
            onext: e + 1,
            oprev: e + 1,
            deleted: false,
        });

        e
    }

    /// Splices the origin rings of `a` and `b`: joins them when they are
    /// distinct and splits one ring in two when they are the same. Identical
    /// arguments are a no-op.
    pub fn splice(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }

        let onext_a = self.records[a].onext;
        let onext_b = self.records[b].onext;

        self.records[onext_a].oprev = b;
        self.records[onext_b].oprev = a;
        self.records[a].onext = onext_b;
        self.records[b].onext = onext_a;
    }

    /// Creates an edge from `a`'s destination to `b`'s origin and splices it
    /// into the rings at both endpoints, so it is topologically consistent
    /// with the surrounding subdivision. Returns the new forward edge.
    pub fn connect(&mut self, a: usize, b: usize) -> usize {
        let (org, dest) = (self.dest(a), self.org(b));
        let e = self.make_edge(org, dest);

        let a_sym_oprev = self.oprev(Self::sym(a));
        self.splice(e, a_sym_oprev);
        self.splice(Self::sym(e), b);

        e
    }

    /// Unlinks `e` and its reverse from their rotational rings and flags
    /// both halves as deleted. Logical deletion only; the slots are
    /// reclaimed when the arena is dropped.
    pub fn delete_edge(&mut self, e: usize) {
        let oprev = self.oprev(e);
        self.splice(e, oprev);

        let sym = Self::sym(e);
        let sym_oprev = self.oprev(sym);
        self.splice(sym, sym_oprev);

        self.records[e].deleted = true;
        self.records[sym].deleted = true;
    }
}
