use super::ChordalError;
use crate::graph::{DenseGraph, Graph, Vertex};
use indexmap::IndexMap;
use std::collections::{BinaryHeap, HashMap};

// ---------------------------
// Vertex orderings
// ---------------------------

/// A permutation of the vertices of a graph, as produced by
/// [`compute_ordering`](super::compute_ordering).
///
/// The sequence is the lexicographic breadth-first visiting order.  When
/// the graph is chordal, the same sequence read backwards is a perfect
/// elimination ordering; see [`Ordering::elimination_order`].

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ordering {
    vertices: Vec<Vertex>,
    // vertex -> index in `vertices`, built with the sequence
    position: IndexMap<Vertex, usize>,
}

impl Ordering {
    fn from_vertices(vertices: Vec<Vertex>) -> Self {
        let position = vertices.iter().enumerate().map(|(i, &v)| (v, i)).collect();
        Self { vertices, position }
    }

    pub(crate) fn from_dense(g: &DenseGraph, order: &[usize]) -> Self {
        Self::from_vertices(order.iter().map(|&i| g.vertex(i)).collect())
    }

    pub fn as_slice(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    /// Map from each vertex to its index in the sequence.
    pub fn position_map(&self) -> &IndexMap<Vertex, usize> {
        &self.position
    }

    /// Index of `v` in the sequence, if it is part of the ordering.
    pub fn position_of(&self, v: Vertex) -> Option<usize> {
        self.position.get(&v).copied()
    }

    /// The sequence reversed.  This is a perfect elimination ordering
    /// exactly when the graph is chordal.
    pub fn elimination_order(&self) -> Vec<Vertex> {
        self.vertices.iter().rev().copied().collect()
    }

    /// Dense indices of the sequence with respect to `graph`.  Fails unless
    /// the ordering is a permutation of the vertices of `graph`.
    pub(crate) fn to_dense(&self, graph: &Graph) -> Result<Vec<usize>, ChordalError> {
        if self.vertices.len() != graph.vertex_count() {
            return Err(ChordalError::OrderingMismatch);
        }
        let mut seen = vec![false; self.vertices.len()];
        let mut order = Vec::with_capacity(self.vertices.len());
        for &v in &self.vertices {
            let i = graph.index_of(v).ok_or(ChordalError::OrderingMismatch)?;
            if std::mem::replace(&mut seen[i], true) {
                return Err(ChordalError::OrderingMismatch);
            }
            order.push(i);
        }
        Ok(order)
    }
}

impl<'a> IntoIterator for &'a Ordering {
    type Item = &'a Vertex;
    type IntoIter = std::slice::Iter<'a, Vertex>;
    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

/// Inverse of a dense ordering: `position[v]` is the index of `v` in `order`.
pub(crate) fn positions(order: &[usize], n: usize) -> Vec<usize> {
    let mut position = vec![usize::MAX; n];
    for (k, &v) in order.iter().enumerate() {
        position[v] = k;
    }
    position
}

// ---------------------------
// Lexicographic breadth first search
// ---------------------------

// A label is the list of stamps n, n-1, ... received from ordered
// neighbors.  Vec<usize> compares element-wise with a proper prefix
// ordered first, which is exactly the lexicographic order needed here.
type Label = Vec<usize>;

// Vertices grouped by identical label, plus a max-heap over the labels
// that currently own a non-empty bucket.  A vertex is not removed from
// its old bucket when its label grows; stale entries are dropped when
// they surface.
#[derive(Debug, Default)]
struct LabelBuckets {
    buckets: HashMap<Label, Vec<usize>>,
    heap: BinaryHeap<Label>,
}

impl LabelBuckets {
    fn insert(&mut self, label: &Label, v: usize) {
        let bucket = self.buckets.entry(label.clone()).or_default();
        if bucket.is_empty() {
            self.heap.push(label.clone());
        }
        bucket.push(v);
    }

    // pop the most recently inserted live vertex from the bucket with
    // the greatest label
    fn pop_greatest(&mut self, labels: &[Label], ordered: &[bool]) -> Option<usize> {
        loop {
            let label = self.heap.peek()?.clone();
            let bucket = self.buckets.get_mut(&label)?;
            let v = bucket.pop();

            if bucket.is_empty() {
                self.buckets.remove(&label);
                self.heap.pop();
            }

            match v {
                Some(v) if !ordered[v] && labels[v] == label => return Some(v),
                _ => continue,
            }
        }
    }
}

/// Lexicographic BFS over dense indices.  The vertex placed at position
/// `k` stamps `n - k` onto the label of each unordered neighbor.
pub(crate) fn lex_bfs(g: &DenseGraph) -> Vec<usize> {
    let n = g.len();
    let mut order = Vec::with_capacity(n);
    let mut ordered = vec![false; n];
    let mut labels: Vec<Label> = vec![Label::new(); n];
    let mut buckets = LabelBuckets::default();

    for v in 0..n {
        buckets.insert(&labels[v], v);
    }

    while let Some(v) = buckets.pop_greatest(&labels, &ordered) {
        let stamp = n - order.len();
        ordered[v] = true;
        order.push(v);

        if order.len() == n {
            break;
        }

        for &u in g.neighbors(v) {
            if !ordered[u] {
                labels[u].push(stamp);
                buckets.insert(&labels[u], u);
            }
        }
    }

    order
}

#[test]
fn test_lex_bfs_is_permutation() {
    let g = Graph::from_edges([(10, 3), (3, 7), (7, 10), (7, 1), (20, 21)]);
    let dense = DenseGraph::new(&g);
    let mut order = lex_bfs(&dense);
    assert_eq!(order.len(), dense.len());
    order.sort();
    assert_eq!(order, (0..dense.len()).collect::<Vec<_>>());
}

#[test]
fn test_lex_bfs_known_sequence() {
    // ties go to the most recently bucketed vertex
    let g = Graph::from_edges([
        (0, 1),
        (0, 2),
        (1, 2),
        (1, 3),
        (2, 3),
        (2, 4),
        (3, 4),
        (3, 5),
        (4, 5),
    ]);
    let dense = DenseGraph::new(&g);
    let ordering = Ordering::from_dense(&dense, &lex_bfs(&dense));
    assert_eq!(ordering.as_slice(), &[5, 4, 3, 2, 1, 0]);
    assert_eq!(ordering.elimination_order(), vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(ordering.position_map()[&5], 0);
    assert_eq!(ordering.position_of(0), Some(5));
    assert_eq!(ordering.position_of(6), None);
    assert!(ordering
        .iter()
        .enumerate()
        .all(|(i, &v)| ordering.position_of(v) == Some(i)));
}

#[test]
fn test_lex_bfs_empty_graph() {
    let dense = DenseGraph::new(&Graph::new());
    assert!(lex_bfs(&dense).is_empty());
}

#[test]
fn test_to_dense_rejects_non_permutations() {
    let g = Graph::from_edges([(1, 2), (2, 3)]);
    let ok = Ordering::from_vertices(vec![3, 1, 2]);
    assert_eq!(ok.to_dense(&g).unwrap(), vec![2, 0, 1]);

    let repeated = Ordering::from_vertices(vec![1, 1, 2]);
    assert!(repeated.to_dense(&g).is_err());

    let foreign = Ordering::from_vertices(vec![1, 2, 4]);
    assert!(foreign.to_dense(&g).is_err());

    let short = Ordering::from_vertices(vec![1]);
    assert!(short.to_dense(&g).is_err());
}
