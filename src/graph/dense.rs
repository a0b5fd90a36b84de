use super::{Graph, Vertex, VertexSet};

// ---------------------------
// Dense renumbering of a Graph
// ---------------------------

/// Snapshot of a [`Graph`] with vertices renumbered `0..n` in insertion order.
///
/// All per-vertex state inside the engines (labels, positions, colors) is
/// stored in arrays indexed by these dense indices, so vertex identifiers
/// can be sparse or arbitrarily large.  The snapshot does not track later
/// changes to the source graph.

#[derive(Debug, Clone)]
pub struct DenseGraph {
    // dense index -> caller's identifier
    ids: Vec<Vertex>,
    // neighbors of each vertex, as dense indices
    adj: Vec<VertexSet>,
}

impl DenseGraph {
    pub fn new(graph: &Graph) -> Self {
        let ids: Vec<Vertex> = graph.vertices().collect();
        let adj = ids
            .iter()
            .map(|&v| {
                graph
                    .neighbors(v)
                    .map(|nbrs| nbrs.iter().filter_map(|&w| graph.index_of(w)).collect())
                    .unwrap_or_default()
            })
            .collect();
        Self { ids, adj }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn neighbors(&self, i: usize) -> &VertexSet {
        &self.adj[i]
    }

    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.adj[i].contains(&j)
    }

    /// The caller's identifier for dense index `i`.
    pub fn vertex(&self, i: usize) -> Vertex {
        self.ids[i]
    }

    /// Translate a collection of dense indices back to identifiers.
    pub fn vertices_of<'a, I>(&self, indices: I) -> VertexSet
    where
        I: IntoIterator<Item = &'a usize>,
    {
        indices.into_iter().map(|&i| self.ids[i]).collect()
    }
}

impl From<&Graph> for DenseGraph {
    fn from(graph: &Graph) -> Self {
        Self::new(graph)
    }
}

#[test]
fn test_dense_renumbering() {
    let g = Graph::from_edges([(1000, 7), (7, 42), (42, 1000), (42, 5)]);
    let d = DenseGraph::new(&g);

    assert_eq!(d.len(), 4);
    assert_eq!(d.vertex(0), 1000);
    assert_eq!(d.vertex(1), 7);
    assert_eq!(d.vertex(2), 42);
    assert_eq!(d.vertex(3), 5);

    assert!(d.has_edge(0, 1));
    assert!(d.has_edge(2, 3));
    assert!(!d.has_edge(1, 3));
    assert_eq!(d.neighbors(2).len(), 3);
    assert_eq!(d.vertices_of(&[3, 0]), VertexSet::from([5, 1000]));
}
