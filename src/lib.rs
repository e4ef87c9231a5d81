//! Minimum spanning forests over weighted undirected graphs.
//!
//! The crate is split into a graph model ([`graphs`]) and the Kruskal
//! engine ([`mst`]). The engine sorts the edges of any [`graphs::graph::Graph`]
//! whose edge store is [`graphs::edges::Weighted`], then accepts edges in
//! ascending order while a [`mst::disjoint_set::DisjointSet`] rejects the
//! ones that would close a cycle. Accepted edges are observable one at a
//! time through [`mst::kruskal::KruskalTrace`] or a bounded channel.

pub mod config;
pub mod error;
pub mod graphs;
pub mod mst;

pub use config::{EmptyGraphPolicy, MstConfig, TraceDelivery};
pub use error::{MstError, MstResult};
pub use graphs::edge::Edge;
pub use graphs::geometry::Point;
pub use graphs::weighted::WeightedGraph;
pub use mst::disjoint_set::DisjointSet;
pub use mst::kruskal::{Decision, KruskalTrace, MstBuilder, SpanningForest, TreeEdge, kruskal_mst};
pub use mst::stream::StreamedForest;
