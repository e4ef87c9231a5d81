use crate::error::MstResult;

/// Common vertex and edge identifier types used by edge-related traits.
///
/// Types implementing graph traits are expected to use:
/// - [`Edges::Vertex`] to identify vertices, and
/// - [`Edges::Edge`] to identify edges.
pub trait Edges {
    /// Type used to identify vertices.
    ///
    /// Typically a small copyable value such as `usize` or `char`.
    type Vertex: Eq + Copy;

    /// Type used to identify edges.
    ///
    /// Usually a dense index such as `usize`. Edge identifiers are what
    /// a spanning forest reports back, so they must stay valid for as long
    /// as the graph is not mutated.
    type Edge: Eq + Copy;
}

/// A graph that supports read-only access to its edges.
///
/// Each edge is identified by an [`Edges::Edge`] value and connects two
/// vertices identified by [`Edges::Vertex`]. Edges can be enumerated via
/// [`ReadEdges::edges`], which yields triples of the form
/// `(source, edge, target)`. For undirected graphs the order of `source`
/// and `target` is the order the edge was inserted with.
pub trait ReadEdges: Edges {
    /// Iterator over edge triples.
    type Edges<'a>: Iterator<Item = (Self::Vertex, Self::Edge, Self::Vertex)>
    where
        Self: 'a;

    /// Returns an iterator over all edges in the graph.
    ///
    /// The order must be stable for a given graph instance. Kruskal uses it
    /// as the tie-break between edges of equal weight.
    fn edges(&self) -> Self::Edges<'_>;

    /// Returns the number of edges.
    fn edge_count(&self) -> usize {
        self.edges().count()
    }
}

/// Edges that carry a real-valued weight.
pub trait Weighted: ReadEdges {
    /// Weight of `edge`.
    ///
    /// Well-formed graphs only hold finite, non-negative weights.
    fn weight(&self, edge: Self::Edge) -> f64;

    /// Sum of all edge weights.
    fn total_weight(&self) -> f64 {
        self.edges().map(|(_, edge, _)| self.weight(edge)).sum()
    }
}

/// A graph that supports insertion of weighted edges.
pub trait InsertEdge: Edges {
    /// Inserts a new edge between `endpoints` with the given weight.
    ///
    /// On success, returns the identifier of the inserted edge. Fails when
    /// the edge would violate an invariant of the graph, for instance an
    /// unknown endpoint, a self loop, an invalid weight or a parallel edge.
    fn insert_edge(
        &mut self,
        endpoints: (Self::Vertex, Self::Vertex),
        weight: f64,
    ) -> MstResult<Self::Edge>;
}
