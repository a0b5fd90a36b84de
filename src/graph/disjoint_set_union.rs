// disjoint set union over dense vertex indices, with union by rank
// and path halving.  Used for connected components and for the
// neighborhood clustering step of the random chordal generator.

#[derive(Debug)]
pub(crate) struct DisjointSetUnion {
    parents: Vec<usize>,
    ranks: Vec<usize>,
}

impl DisjointSetUnion {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parents: (0..n).collect(),
            ranks: vec![0; n],
        }
    }

    pub(crate) fn union(&mut self, x: usize, y: usize) {
        let r = self.root(x);
        let s = self.root(y);

        if r == s {
            return;
        }

        match self.ranks[r].cmp(&self.ranks[s]) {
            std::cmp::Ordering::Greater => self.parents[s] = r,
            std::cmp::Ordering::Less => self.parents[r] = s,
            std::cmp::Ordering::Equal => {
                self.parents[s] = r;
                self.ranks[r] += 1;
            }
        }
    }

    pub(crate) fn root(&mut self, mut x: usize) -> usize {
        while x != self.parents[x] {
            self.parents[x] = self.parents[self.parents[x]];
            x = self.parents[x];
        }
        x
    }
}

#[test]
fn test_union() {
    let mut dsu = DisjointSetUnion::new(6);
    dsu.union(0, 1);
    dsu.union(2, 3);
    dsu.union(1, 2);
    assert_eq!(dsu.root(0), dsu.root(3));
    assert_eq!(dsu.root(3), dsu.root(1));
    assert_ne!(dsu.root(4), dsu.root(2));

    // union with itself is a no-op
    dsu.union(5, 5);
    assert_eq!(dsu.root(5), 5);
    assert_ne!(dsu.root(4), dsu.root(5));
}

#[test]
fn test_root_is_shared() {
    let mut dsu = DisjointSetUnion::new(8);
    for (x, y) in [(0, 1), (2, 3), (1, 2), (4, 5), (6, 7), (5, 7)] {
        dsu.union(x, y);
    }
    let a = dsu.root(3);
    assert!((0..4).all(|i| dsu.root(i) == a));
    let b = dsu.root(7);
    assert!((4..8).all(|i| dsu.root(i) == b));
    assert_ne!(a, b);
}
