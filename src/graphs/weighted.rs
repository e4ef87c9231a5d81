use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Range;
use std::slice;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{MstError, MstResult};
use crate::graphs::{
    edge::Edge,
    edges::{Edges, InsertEdge, ReadEdges, Weighted},
    graph::Graph,
    undirected::Undirected,
    vertices::Vertices,
};

/// Dense edge identifier, assigned in insertion order.
pub type EdgeId = usize;

/// Endpoints are stored as node indices.
#[derive(Debug, Clone, Copy, PartialEq)]
struct EdgeRecord {
    source: usize,
    target: usize,
    weight: f64,
}

/// Simple undirected weighted graph with an optional payload per node.
///
/// Nodes are registered once and indexed densely in registration order.
/// Edges are identified by their insertion position.
///
/// Invariants enforced on insertion:
/// - node identifiers are unique,
/// - both endpoints of an edge are registered nodes,
/// - no self loops,
/// - weights are finite and non-negative,
/// - at most one edge per unordered pair of nodes.
#[derive(Debug, Clone)]
pub struct WeightedGraph<N, P = ()> {
    /// Node identifiers in registration order.
    nodes: Vec<N>,
    /// Payload of each node, parallel to `nodes`.
    payloads: Vec<P>,
    /// Node identifier to index in `nodes`.
    index: FxHashMap<N, usize>,
    /// Edges in insertion order.
    edges: Vec<EdgeRecord>,
    /// Normalised `(min, max)` index pairs that already have an edge.
    pairs: FxHashSet<(usize, usize)>,
    /// Incident edge identifiers of each node.
    incidence: Vec<Vec<EdgeId>>,
}

impl<N, P> Default for WeightedGraph<N, P> {
    /// Graph with no nodes and no edges.
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            payloads: Vec::new(),
            index: FxHashMap::default(),
            edges: Vec::new(),
            pairs: FxHashSet::default(),
            incidence: Vec::new(),
        }
    }
}

impl<N, P> WeightedGraph<N, P>
where
    N: Copy + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            payloads: Vec::with_capacity(nodes),
            index: FxHashMap::with_capacity_and_hasher(nodes, Default::default()),
            edges: Vec::with_capacity(edges),
            pairs: FxHashSet::with_capacity_and_hasher(edges, Default::default()),
            incidence: Vec::with_capacity(nodes),
        }
    }

    pub(crate) fn reserve_edges(&mut self, additional: usize) {
        self.edges.reserve(additional);
        self.pairs.reserve(additional);
    }

    /// Registers a node carrying `payload`.
    pub fn add_node_with(&mut self, id: N, payload: P) -> MstResult<()> {
        if self.index.contains_key(&id) {
            return Err(MstError::DuplicateNode(format!("{id:?}")));
        }

        self.index.insert(id, self.nodes.len());
        self.nodes.push(id);
        self.payloads.push(payload);
        self.incidence.push(Vec::new());
        Ok(())
    }

    /// Registers a node with the default payload.
    pub fn add_node(&mut self, id: N) -> MstResult<()>
    where
        P: Default,
    {
        self.add_node_with(id, P::default())
    }

    /// Inserts an undirected edge between two registered nodes.
    pub fn add_edge(&mut self, a: N, b: N, weight: f64) -> MstResult<EdgeId> {
        self.insert(Edge::new(a, b, weight)?)
    }

    /// Inserts an already validated edge.
    pub fn insert(&mut self, edge: Edge<N>) -> MstResult<EdgeId> {
        let (a, b) = edge.endpoints();
        let source = self.require(&a)?;
        let target = self.require(&b)?;

        let pair = (source.min(target), source.max(target));
        if !self.pairs.insert(pair) {
            return Err(MstError::duplicate_edge(&a, &b));
        }

        let id = self.edges.len();
        self.edges.push(EdgeRecord {
            source,
            target,
            weight: edge.weight(),
        });
        self.incidence[source].push(id);
        self.incidence[target].push(id);
        Ok(id)
    }

    /// Builds a graph from a node list and `(a, b, weight)` triples.
    ///
    /// Nodes receive the default payload. The first violated invariant
    /// aborts construction.
    pub fn from_edges<I, E>(nodes: I, edges: E) -> MstResult<Self>
    where
        P: Default,
        I: IntoIterator<Item = N>,
        E: IntoIterator<Item = (N, N, f64)>,
    {
        let mut graph = Self::new();
        for id in nodes {
            graph.add_node(id)?;
        }
        for (a, b, weight) in edges {
            graph.add_edge(a, b, weight)?;
        }
        Ok(graph)
    }

    #[inline]
    fn require(&self, id: &N) -> MstResult<usize> {
        self.index_of(id).ok_or_else(|| MstError::missing_endpoint(id))
    }

    /// Dense index of a node, in registration order.
    #[inline]
    pub fn index_of(&self, id: &N) -> Option<usize> {
        self.index.get(id).copied()
    }

    #[inline]
    pub fn contains_node(&self, id: &N) -> bool {
        self.index.contains_key(id)
    }

    /// Node identifier at a dense index.
    #[inline]
    pub fn node(&self, index: usize) -> Option<N> {
        self.nodes.get(index).copied()
    }

    /// All node identifiers in registration order.
    #[inline]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn payload(&self, id: &N) -> Option<&P> {
        self.index_of(id).map(|index| &self.payloads[index])
    }

    pub fn payload_mut(&mut self, id: &N) -> Option<&mut P> {
        let index = self.index_of(id)?;
        Some(&mut self.payloads[index])
    }

    /// Node identifier and payload at a dense index.
    pub(crate) fn entry(&self, index: usize) -> (N, &P) {
        (self.nodes[index], &self.payloads[index])
    }

    /// The edge with the given identifier, as a value.
    pub fn edge(&self, id: EdgeId) -> Option<Edge<N>> {
        let record = self.edges.get(id)?;
        Some(self.to_edge(record))
    }

    fn to_edge(&self, record: &EdgeRecord) -> Edge<N> {
        Edge::from_validated(
            self.nodes[record.source],
            self.nodes[record.target],
            record.weight,
        )
    }

    /// The edge connecting `a` and `b`, if any.
    pub fn find_edge(&self, a: &N, b: &N) -> Option<EdgeId> {
        let a = self.index_of(a)?;
        let b = self.index_of(b)?;
        self.incidence[a].iter().copied().find(|&id| {
            let record = &self.edges[id];
            (record.source == a && record.target == b) || (record.source == b && record.target == a)
        })
    }

    /// Iterator over all edges as values, in insertion order.
    pub fn edge_values(&self) -> impl Iterator<Item = Edge<N>> + '_ {
        self.edges.iter().map(|record| self.to_edge(record))
    }
}

impl<N, P> Vertices for WeightedGraph<N, P>
where
    N: Copy + Eq + Hash + Debug,
{
    type Vertex = N;

    type Vertices<'a>
        = std::iter::Copied<slice::Iter<'a, N>>
    where
        Self: 'a;

    /// Nodes in registration order.
    fn vertices(&self) -> Self::Vertices<'_> {
        self.nodes.iter().copied()
    }

    fn vertex_count(&self) -> usize {
        self.nodes.len()
    }
}

impl<N, P> Edges for WeightedGraph<N, P>
where
    N: Copy + Eq + Hash + Debug,
{
    type Vertex = N;

    type Edge = EdgeId;
}

impl<N, P> ReadEdges for WeightedGraph<N, P>
where
    N: Copy + Eq + Hash + Debug,
{
    type Edges<'a>
        = WeightedEdges<'a, N, P>
    where
        Self: 'a;

    /// Edges in insertion order.
    fn edges(&self) -> Self::Edges<'_> {
        WeightedEdges::all(self)
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<N, P> Weighted for WeightedGraph<N, P>
where
    N: Copy + Eq + Hash + Debug,
{
    /// Panics when `edge` is not an identifier of this graph.
    fn weight(&self, edge: Self::Edge) -> f64 {
        self.edges[edge].weight
    }
}

impl<N, P> InsertEdge for WeightedGraph<N, P>
where
    N: Copy + Eq + Hash + Debug,
{
    fn insert_edge(&mut self, (a, b): (N, N), weight: f64) -> MstResult<EdgeId> {
        self.add_edge(a, b, weight)
    }
}

impl<N, P> Undirected for WeightedGraph<N, P>
where
    N: Copy + Eq + Hash + Debug,
{
    /// Panics when `edge` is not an identifier of this graph.
    fn endpoints(&self, edge: Self::Edge) -> (N, N) {
        let record = &self.edges[edge];
        (self.nodes[record.source], self.nodes[record.target])
    }

    /// Unknown vertices have no incident edges.
    fn incident(&self, vertex: N) -> Self::Edges<'_> {
        match self.index_of(&vertex) {
            Some(index) => WeightedEdges::incident(self, index, None),
            None => WeightedEdges::empty(self),
        }
    }

    fn degree(&self, vertex: N) -> usize {
        self.index_of(&vertex)
            .map_or(0, |index| self.incidence[index].len())
    }

    /// Self loops are rejected on insertion.
    fn loop_degree(&self, _vertex: N) -> usize {
        0
    }

    fn connections(&self, a: N, b: N) -> Self::Edges<'_> {
        match (self.index_of(&a), self.index_of(&b)) {
            (Some(a), Some(b)) => WeightedEdges::incident(self, a, Some(b)),
            _ => WeightedEdges::empty(self),
        }
    }
}

impl<N, P> Graph for WeightedGraph<N, P>
where
    N: Copy + Eq + Hash + Debug,
{
    type Vertex = N;
    type Vertices = Self;
    type Edges = Self;

    fn edge_store(&self) -> &Self::Edges {
        self
    }

    fn vertex_store(&self) -> &Self::Vertices {
        self
    }
}

/// Edge identifiers walked by [`WeightedEdges`].
enum EdgeCursor<'a> {
    /// A contiguous range of identifiers, used for the full edge list.
    Range(Range<usize>),
    /// The incidence list of one node.
    Incident {
        from: usize,
        ids: slice::Iter<'a, EdgeId>,
    },
}

/// Iterator over edges of a [`WeightedGraph`].
///
/// The iterator yields triples: `(source, edge, target)`.
/// For the full edge list the endpoints are reported in insertion order.
/// For incidence queries the first component is the queried vertex and the
/// result is optionally filtered by the neighbour.
pub struct WeightedEdges<'a, N, P> {
    graph: &'a WeightedGraph<N, P>,
    cursor: EdgeCursor<'a>,
    /// Optional neighbour filter for incidence queries.
    neighbour: Option<usize>,
}

impl<'a, N, P> WeightedEdges<'a, N, P> {
    fn all(graph: &'a WeightedGraph<N, P>) -> Self {
        Self {
            graph,
            cursor: EdgeCursor::Range(0..graph.edges.len()),
            neighbour: None,
        }
    }

    fn incident(graph: &'a WeightedGraph<N, P>, from: usize, neighbour: Option<usize>) -> Self {
        Self {
            graph,
            cursor: EdgeCursor::Incident {
                from,
                ids: graph.incidence[from].iter(),
            },
            neighbour,
        }
    }

    fn empty(graph: &'a WeightedGraph<N, P>) -> Self {
        Self {
            graph,
            cursor: EdgeCursor::Range(0..0),
            neighbour: None,
        }
    }
}

impl<'a, N, P> Iterator for WeightedEdges<'a, N, P>
where
    N: Copy,
{
    type Item = (N, EdgeId, N);

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = &self.graph.nodes;
        match &mut self.cursor {
            EdgeCursor::Range(range) => {
                let id = range.next()?;
                let record = &self.graph.edges[id];
                Some((nodes[record.source], id, nodes[record.target]))
            }
            EdgeCursor::Incident { from, ids } => {
                for &id in ids.by_ref() {
                    let record = &self.graph.edges[id];
                    let other = if record.source == *from {
                        record.target
                    } else {
                        record.source
                    };
                    if self.neighbour.is_some_and(|filter| filter != other) {
                        continue;
                    }
                    return Some((nodes[*from], id, nodes[other]));
                }
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.cursor {
            EdgeCursor::Range(range) => range.size_hint(),
            EdgeCursor::Incident { ids, .. } if self.neighbour.is_none() => ids.size_hint(),
            EdgeCursor::Incident { ids, .. } => (0, ids.size_hint().1),
        }
    }
}
