//! Kruskal's algorithm as a lazy trace of accepted edges.
//!
//! A [`KruskalTrace`] owns a copy of the graph's edges sorted by weight and
//! a fresh [`DisjointSet`] over its vertices. Each call to
//! [`KruskalTrace::step`] examines exactly one edge: it is accepted when its
//! endpoints are in different components and rejected otherwise. Iterating
//! the trace yields only accepted edges, in the order they join the forest.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;
use std::iter::FusedIterator;

use rayon::slice::ParallelSliceMut;
use tracing::{debug, trace};

use crate::config::{EmptyGraphPolicy, MstConfig};
use crate::error::{MstError, MstResult};
use crate::graphs::{
    edge::validate_weight,
    edges::{Edges, ReadEdges, Weighted},
    graph::Graph,
    vertices::Vertices,
};
use crate::mst::disjoint_set::DisjointSet;

/// Edge identifier type of a graph's edge store.
pub type EdgeOf<G> = <<G as Graph>::Edges as Edges>::Edge;

/// An edge of a spanning forest, as reported by the trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeEdge<V, E> {
    pub source: V,
    pub edge: E,
    pub target: V,
    pub weight: f64,
}

impl<V: Copy, E> TreeEdge<V, E> {
    #[inline]
    pub fn endpoints(&self) -> (V, V) {
        (self.source, self.target)
    }
}

/// Outcome of examining one edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision<V, E> {
    /// The edge joined two components and is part of the forest.
    Accepted(TreeEdge<V, E>),
    /// Both endpoints were already connected.
    Rejected(TreeEdge<V, E>),
}

impl<V, E> Decision<V, E> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Decision::Accepted(_))
    }

    pub fn edge(&self) -> &TreeEdge<V, E> {
        match self {
            Decision::Accepted(edge) | Decision::Rejected(edge) => edge,
        }
    }
}

/// A sorted edge with its endpoints resolved to union-find indices.
#[derive(Debug, Clone, Copy)]
struct Candidate<V, E> {
    edge: TreeEdge<V, E>,
    /// Position in the graph's edge order, the tie-break between equal weights.
    position: usize,
    source: usize,
    target: usize,
}

fn by_weight_then_position<V, E>(a: &Candidate<V, E>, b: &Candidate<V, E>) -> Ordering {
    a.edge
        .weight
        .total_cmp(&b.edge.weight)
        .then(a.position.cmp(&b.position))
}

/// Incremental Kruskal scan over one graph.
///
/// The trace is finite and cannot be rewound; call
/// [`MstBuilder::trace`] again for a fresh scan.
#[derive(Debug)]
pub struct KruskalTrace<V, E> {
    candidates: std::vec::IntoIter<Candidate<V, E>>,
    sets: DisjointSet<V>,
    early_exit: bool,
    examined: usize,
    accepted: usize,
    total_weight: f64,
}

impl<V, E> KruskalTrace<V, E>
where
    V: Copy + Eq + Hash + Debug,
    E: Copy,
{
    /// Examines the next edge in weight order.
    ///
    /// Returns `None` once all edges are examined, or once a single
    /// component remains when early exit is enabled.
    pub fn step(&mut self) -> Option<Decision<V, E>> {
        if self.early_exit && self.sets.component_count() == 1 {
            return None;
        }

        let candidate = self.candidates.next()?;
        self.examined += 1;

        if self.sets.union_indices(candidate.source, candidate.target) {
            self.accepted += 1;
            self.total_weight += candidate.edge.weight;
            trace!(
                from = ?candidate.edge.source,
                to = ?candidate.edge.target,
                weight = candidate.edge.weight,
                components = self.sets.component_count(),
                "accepted edge"
            );
            Some(Decision::Accepted(candidate.edge))
        } else {
            trace!(
                from = ?candidate.edge.source,
                to = ?candidate.edge.target,
                weight = candidate.edge.weight,
                "rejected edge"
            );
            Some(Decision::Rejected(candidate.edge))
        }
    }

    /// Current number of components, counting every vertex.
    #[inline]
    pub fn component_count(&self) -> usize {
        self.sets.component_count()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.sets.len()
    }

    /// Edges examined so far, accepted or rejected.
    #[inline]
    pub fn examined(&self) -> usize {
        self.examined
    }

    /// Edges accepted so far.
    #[inline]
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Edges not yet examined.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }

    /// Sum of the weights accepted so far.
    #[inline]
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Returns true when the scan has reached its terminal state.
    pub fn is_finished(&self) -> bool {
        self.remaining() == 0 || (self.early_exit && self.component_count() == 1)
    }

    /// Consumes the rest of the trace into the final forest.
    ///
    /// `prefix` are the edges already pulled from this trace, if any.
    pub fn finish(mut self, prefix: Vec<TreeEdge<V, E>>) -> SpanningForest<V, E> {
        let mut edges = prefix;
        edges.extend(self.by_ref());
        debug_assert_eq!(edges.len(), self.accepted);

        debug!(
            vertices = self.vertex_count(),
            examined = self.examined,
            accepted = self.accepted,
            components = self.component_count(),
            total_weight = self.total_weight,
            "spanning forest complete"
        );

        SpanningForest {
            edges,
            vertex_count: self.vertex_count(),
            component_count: self.component_count(),
            total_weight: self.total_weight,
        }
    }
}

impl<V, E> Iterator for KruskalTrace<V, E>
where
    V: Copy + Eq + Hash + Debug,
    E: Copy,
{
    type Item = TreeEdge<V, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Decision::Accepted(edge) = self.step()? {
                return Some(edge);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Each accepted edge removes one component.
        let merges_left = self.component_count().saturating_sub(1);
        (0, Some(merges_left.min(self.remaining())))
    }
}

impl<V, E> FusedIterator for KruskalTrace<V, E>
where
    V: Copy + Eq + Hash + Debug,
    E: Copy,
{
}

/// A minimum spanning forest.
///
/// Edges are in acceptance order, which is ascending weight order.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningForest<V, E> {
    edges: Vec<TreeEdge<V, E>>,
    vertex_count: usize,
    component_count: usize,
    total_weight: f64,
}

impl<V, E> SpanningForest<V, E> {
    #[inline]
    pub fn edges(&self) -> &[TreeEdge<V, E>] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<TreeEdge<V, E>> {
        self.edges
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TreeEdge<V, E>> {
        self.edges.iter()
    }

    /// Number of edges, always `vertex_count - component_count`.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of connected components of the input graph.
    #[inline]
    pub fn component_count(&self) -> usize {
        self.component_count
    }

    #[inline]
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Returns true when the input graph was connected and non-empty.
    pub fn is_spanning_tree(&self) -> bool {
        self.component_count == 1
    }
}

impl<'a, V, E> IntoIterator for &'a SpanningForest<V, E> {
    type Item = &'a TreeEdge<V, E>;
    type IntoIter = std::slice::Iter<'a, TreeEdge<V, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// Builds minimum spanning forests with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct MstBuilder {
    config: MstConfig,
}

impl MstBuilder {
    /// Builder with a validated configuration.
    pub fn new(config: MstConfig) -> MstResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &MstConfig {
        &self.config
    }

    /// Starts a fresh Kruskal scan over `graph`.
    ///
    /// Copies and sorts the edges, then resolves every endpoint against the
    /// vertex store. Fails with [`MstError::UnknownNode`] when an edge
    /// references a vertex the vertex store does not list, with
    /// [`MstError::InvalidWeight`] on a negative or non-finite weight, and
    /// with [`MstError::EmptyGraph`] on an empty graph when the policy
    /// rejects those. Nothing is emitted before validation succeeds.
    pub fn trace<G>(&self, graph: &G) -> MstResult<KruskalTrace<G::Vertex, EdgeOf<G>>>
    where
        G: Graph,
        G::Vertex: Hash + Debug + Send,
        EdgeOf<G>: Send,
    {
        let sets = DisjointSet::new(graph.vertex_store().vertices());
        if sets.is_empty() && self.config.empty_graph_policy == EmptyGraphPolicy::Reject {
            return Err(MstError::EmptyGraph);
        }

        let store = graph.edge_store();
        let mut candidates = Vec::with_capacity(store.edge_count());
        for (position, (source, edge, target)) in store.edges().enumerate() {
            let weight = validate_weight(store.weight(edge))?;
            let source_index = sets
                .index_of(&source)
                .ok_or_else(|| MstError::unknown_node(&source))?;
            let target_index = sets
                .index_of(&target)
                .ok_or_else(|| MstError::unknown_node(&target))?;

            candidates.push(Candidate {
                edge: TreeEdge {
                    source,
                    edge,
                    target,
                    weight,
                },
                position,
                source: source_index,
                target: target_index,
            });
        }

        let parallel = candidates.len() >= self.config.parallel_sort_threshold;
        if parallel {
            candidates.par_sort_unstable_by(by_weight_then_position);
        } else {
            candidates.sort_unstable_by(by_weight_then_position);
        }

        debug!(
            vertices = sets.len(),
            edges = candidates.len(),
            parallel,
            "sorted candidate edges"
        );

        Ok(KruskalTrace {
            candidates: candidates.into_iter(),
            sets,
            early_exit: self.config.early_exit,
            examined: 0,
            accepted: 0,
            total_weight: 0.0,
        })
    }

    /// Minimum spanning forest of `graph`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn build<G>(&self, graph: &G) -> MstResult<SpanningForest<G::Vertex, EdgeOf<G>>>
    where
        G: Graph,
        G::Vertex: Hash + Debug + Send,
        EdgeOf<G>: Send,
    {
        Ok(self.trace(graph)?.finish(Vec::new()))
    }
}

/// Minimum spanning forest of `graph` with the default configuration.
pub fn kruskal_mst<G>(graph: &G) -> MstResult<SpanningForest<G::Vertex, EdgeOf<G>>>
where
    G: Graph,
    G::Vertex: Hash + Debug + Send,
    EdgeOf<G>: Send,
{
    MstBuilder::default().build(graph)
}
