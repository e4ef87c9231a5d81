use crate::graphs::edges::ReadEdges;

/// Structural queries on finite undirected graphs.
///
/// Vertices and edges are identified by small copyable values and every
/// edge is an unordered connection between two vertices.
/// Connectivity algorithms are written as generic helper functions on top
/// of this interface, see [`crate::graphs::components`].
pub trait Undirected: ReadEdges {
    /// Endpoints of an undirected edge.
    ///
    /// For a loop edge, both components are equal.
    fn endpoints(&self, edge: Self::Edge) -> (Self::Vertex, Self::Vertex);

    /// Returns all edges incident to `vertex`.
    ///
    /// Each item is a triple `(vertex, edge, neighbour)`, so the first
    /// component always equals the given vertex.
    fn incident(&self, vertex: Self::Vertex) -> Self::Edges<'_>;

    /// Returns the degree of the given vertex.
    ///
    /// Loop edges contribute 2 to the degree.
    fn degree(&self, vertex: Self::Vertex) -> usize {
        self.incident(vertex).count() + self.loop_degree(vertex)
    }

    /// Returns the number of loop edges incident to the given vertex.
    fn loop_degree(&self, vertex: Self::Vertex) -> usize;

    /// Returns true when there exists at least one edge between `a` and `b`.
    ///
    /// This checks for a single edge only,
    /// it does not perform a reachability query through longer paths.
    fn is_connected(&self, a: Self::Vertex, b: Self::Vertex) -> bool {
        self.connections(a, b).next().is_some()
    }

    /// Returns true when `edge` connects `a` and `b` in some order.
    fn has_edge(&self, a: Self::Vertex, edge: Self::Edge, b: Self::Vertex) -> bool {
        self.connections(a, b).any(|(_, e, _)| e == edge)
    }

    /// Returns an iterator over all edges whose endpoints are `a` and `b`
    /// (in either order).
    ///
    /// Each item is a triple `(a, edge, b)`.
    fn connections(&self, a: Self::Vertex, b: Self::Vertex) -> Self::Edges<'_>;
}
