use super::{DisjointSetUnion, GraphError, Vertex, VertexSet};
use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ---------------------------
// Undirected simple graph
// ---------------------------

/// Undirected simple graph over arbitrary vertex identifiers.
///
/// Self-loops are never stored and every edge is stored once in each
/// direction, so `neighbors(v)` reports each neighbor exactly once.
/// Vertices keep their insertion order, which is also the order used when
/// the graph is renumbered into a [`DenseGraph`](super::DenseGraph).

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "GraphData", into = "GraphData"))]
pub struct Graph {
    adj: IndexMap<Vertex, VertexSet>,
    nedges: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            adj: IndexMap::with_capacity(n),
            nedges: 0,
        }
    }

    /// Build a graph from an edge list.  Self-loops contribute their vertex
    /// but no edge, and repeated edges are stored once.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (Vertex, Vertex)>,
    {
        let mut g = Self::new();
        for (u, v) in edges {
            g.add_edge(u, v);
        }
        g
    }

    /// Adds an isolated vertex.  Returns false if it was already present.
    pub fn add_vertex(&mut self, v: Vertex) -> bool {
        if self.adj.contains_key(&v) {
            return false;
        }
        self.adj.insert(v, VertexSet::new());
        true
    }

    /// Adds the edge `{u,v}`, creating missing endpoints.  Returns true only
    /// if a new edge was stored.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex) -> bool {
        self.add_vertex(u);
        self.add_vertex(v);

        if u == v {
            return false;
        }

        let inserted = self.adj[&u].insert(v) | self.adj[&v].insert(u);
        if inserted {
            self.nedges += 1;
        }
        inserted
    }

    pub fn remove_edge(&mut self, u: Vertex, v: Vertex) -> bool {
        let removed = match self.adj.get_mut(&u) {
            Some(nbrs) => nbrs.swap_remove(&v),
            None => false,
        };
        if removed {
            if let Some(nbrs) = self.adj.get_mut(&v) {
                nbrs.swap_remove(&u);
            }
            self.nedges -= 1;
        }
        removed
    }

    pub fn contains_vertex(&self, v: Vertex) -> bool {
        self.adj.contains_key(&v)
    }

    pub fn has_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.adj.get(&u).is_some_and(|nbrs| nbrs.contains(&v))
    }

    pub fn neighbors(&self, v: Vertex) -> Result<&VertexSet, GraphError> {
        self.adj.get(&v).ok_or(GraphError::UnknownVertex(v))
    }

    pub fn degree(&self, v: Vertex) -> Result<usize, GraphError> {
        Ok(self.neighbors(v)?.len())
    }

    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.adj.keys().copied()
    }

    /// Iterates over every edge exactly once.  The first endpoint of each
    /// pair is the one inserted into the graph first.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.adj.iter().enumerate().flat_map(move |(i, (&u, nbrs))| {
            nbrs.iter()
                .filter(move |&w| self.adj.get_index_of(w).is_some_and(|j| j > i))
                .map(move |&w| (u, w))
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nedges
    }

    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Position of `v` in insertion order, i.e. its dense index.
    pub fn index_of(&self, v: Vertex) -> Option<usize> {
        self.adj.get_index_of(&v)
    }

    pub(crate) fn vertex_at(&self, i: usize) -> Option<Vertex> {
        self.adj.get_index(i).map(|(&v, _)| v)
    }

    /// Subgraph induced by `keep`.  Identifiers not in the graph are ignored.
    pub fn induced_subgraph<I>(&self, keep: I) -> Graph
    where
        I: IntoIterator<Item = Vertex>,
    {
        let keep: VertexSet = keep
            .into_iter()
            .filter(|&v| self.contains_vertex(v))
            .collect();

        let mut sub = Graph::with_capacity(keep.len());
        for &v in &keep {
            sub.add_vertex(v);
        }
        for &u in &keep {
            for &w in &self.adj[&u] {
                if keep.contains(&w) {
                    sub.add_edge(u, w);
                }
            }
        }
        sub
    }

    /// Graph on the same vertices whose edges are exactly the non-edges of self.
    pub fn complement(&self) -> Graph {
        let mut g = Graph::with_capacity(self.vertex_count());
        for v in self.vertices() {
            g.add_vertex(v);
        }
        for (i, (&u, nbrs)) in self.adj.iter().enumerate() {
            for (&w, _) in self.adj.iter().skip(i + 1) {
                if !nbrs.contains(&w) {
                    g.add_edge(u, w);
                }
            }
        }
        g
    }

    /// True if every pair of distinct members of `set` is adjacent.
    pub fn is_clique(&self, set: &VertexSet) -> bool {
        set.iter().enumerate().all(|(i, &u)| {
            self.contains_vertex(u) && set.iter().skip(i + 1).all(|&w| self.has_edge(u, w))
        })
    }

    /// True if no two members of `set` are adjacent.
    pub fn is_independent_set(&self, set: &VertexSet) -> bool {
        set.iter().enumerate().all(|(i, &u)| {
            self.contains_vertex(u) && set.iter().skip(i + 1).all(|&w| !self.has_edge(u, w))
        })
    }

    /// Vertex sets of the connected components, each listed in insertion order.
    pub fn connected_components(&self) -> Vec<VertexSet> {
        let mut dsu = DisjointSetUnion::new(self.vertex_count());
        for (i, nbrs) in self.adj.values().enumerate() {
            for w in nbrs {
                if let Some(j) = self.adj.get_index_of(w) {
                    dsu.union(i, j);
                }
            }
        }

        let mut components: IndexMap<usize, VertexSet> = IndexMap::new();
        for (i, &v) in self.adj.keys().enumerate() {
            components.entry(dsu.root(i)).or_default().insert(v);
        }
        components.into_values().collect()
    }
}

// serialized form: explicit vertex list (to keep isolated
// vertices and their order) plus each edge once

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct GraphData {
    vertices: Vec<Vertex>,
    edges: Vec<(Vertex, Vertex)>,
}

#[cfg(feature = "serde")]
impl From<GraphData> for Graph {
    fn from(data: GraphData) -> Self {
        let mut g = Graph::with_capacity(data.vertices.len());
        for v in data.vertices {
            g.add_vertex(v);
        }
        for (u, v) in data.edges {
            g.add_edge(u, v);
        }
        g
    }
}

#[cfg(feature = "serde")]
impl From<Graph> for GraphData {
    fn from(g: Graph) -> Self {
        GraphData {
            vertices: g.vertices().collect(),
            edges: g.edges().collect(),
        }
    }
}

#[test]
fn test_add_and_remove_edges() {
    let mut g = Graph::new();
    assert!(g.add_edge(1, 2));
    assert!(!g.add_edge(2, 1));
    assert!(!g.add_edge(3, 3));
    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.edge_count(), 1);
    assert!(g.has_edge(2, 1));
    assert!(!g.has_edge(3, 3));
    assert_eq!(g.degree(3).unwrap(), 0);

    assert!(g.remove_edge(2, 1));
    assert!(!g.remove_edge(1, 2));
    assert_eq!(g.edge_count(), 0);
    assert!(g.neighbors(1).unwrap().is_empty());
    assert!(matches!(g.neighbors(7), Err(GraphError::UnknownVertex(7))));
}

#[test]
fn test_edges_listed_once() {
    let g = Graph::from_edges([(0, 1), (1, 2), (2, 0), (2, 3), (3, 2)]);
    let edges: Vec<_> = g.edges().collect();
    assert_eq!(edges.len(), g.edge_count());
    assert_eq!(edges, vec![(0, 1), (0, 2), (1, 2), (2, 3)]);
}

#[test]
fn test_induced_subgraph_and_complement() {
    let g = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]);

    let sub = g.induced_subgraph([0, 2, 3, 99]);
    assert_eq!(sub.vertex_count(), 3);
    assert_eq!(sub.edge_count(), 3);
    assert!(!sub.contains_vertex(99));

    let c = g.complement();
    assert_eq!(c.vertex_count(), 4);
    assert_eq!(c.edge_count(), 1);
    assert!(c.has_edge(1, 3));
}

#[test]
fn test_clique_and_independent_checks() {
    let g = Graph::from_edges([(0, 1), (1, 2), (0, 2), (2, 3)]);
    assert!(g.is_clique(&VertexSet::from([0, 1, 2])));
    assert!(!g.is_clique(&VertexSet::from([0, 1, 3])));
    assert!(g.is_independent_set(&VertexSet::from([0, 3])));
    assert!(!g.is_independent_set(&VertexSet::from([2, 3])));
    assert!(!g.is_independent_set(&VertexSet::from([0, 42])));
}

#[test]
fn test_connected_components() {
    let mut g = Graph::from_edges([(0, 1), (1, 2), (5, 6)]);
    g.add_vertex(9);
    let comps = g.connected_components();
    assert_eq!(comps.len(), 3);
    assert_eq!(comps[0], VertexSet::from([0, 1, 2]));
    assert_eq!(comps[1], VertexSet::from([5, 6]));
    assert_eq!(comps[2], VertexSet::from([9]));
}
