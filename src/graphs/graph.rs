use crate::graphs::{
    edges::{ReadEdges, Weighted},
    vertices::Vertices,
};

/// High level abstraction for a finite weighted graph.
///
/// Graph composes two separate components, a vertex store and an edge store,
/// that agree on the vertex identifier type.
/// The Vertices type describes the vertex set.
/// The Edges type describes the weighted edge set.
///
/// Concrete graph types can use a single structure for both roles or use
/// separate structures for vertex data and edge data.
pub trait Graph {
    /// Vertex identifier shared by both stores.
    type Vertex: Eq + Copy;

    /// Vertex storage component.
    type Vertices: Vertices<Vertex = Self::Vertex>;

    /// Edge storage component.
    type Edges: Weighted<Vertex = Self::Vertex>;

    /// Returns a shared reference to the edge storage.
    fn edge_store(&self) -> &Self::Edges;

    /// Returns a shared reference to the vertex storage.
    fn vertex_store(&self) -> &Self::Vertices;

    /// Size measure for the whole graph: vertices plus edges.
    fn size(&self) -> usize {
        self.vertex_store().vertex_count() + self.edge_store().edge_count()
    }

    /// Returns true when the graph has neither vertices nor edges.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
