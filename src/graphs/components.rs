//! Connected-component labelling by layered breadth-first search.
//!
//! This is independent of the union-find used by the spanning forest
//! engine, so the two can be checked against each other.

use std::hash::Hash;
use std::mem;

use bit_vec::BitVec;
use rustc_hash::FxHashMap;

use crate::graphs::{graph::Graph, undirected::Undirected, vertices::Vertices};

/// Connected components of `graph`.
///
/// Components are listed in order of their first vertex in the vertex
/// store, and members of each component keep vertex store order.
/// Edges whose endpoints are not in the vertex store are ignored.
pub fn connected_components<G>(graph: &G) -> Vec<Vec<G::Vertex>>
where
    G: Graph,
    G::Edges: Undirected,
    G::Vertex: Hash,
{
    let vertices: Vec<G::Vertex> = graph.vertex_store().vertices().collect();
    let mut index: FxHashMap<G::Vertex, usize> =
        FxHashMap::with_capacity_and_hasher(vertices.len(), Default::default());
    for (i, &v) in vertices.iter().enumerate() {
        index.entry(v).or_insert(i);
    }

    let edges = graph.edge_store();
    let mut visited = BitVec::from_elem(vertices.len(), false);
    let mut components = Vec::new();
    let mut frontier = Vec::new();
    let mut next = Vec::new();

    for start in 0..vertices.len() {
        if visited[start] {
            continue;
        }
        visited.set(start, true);

        let mut members = vec![start];
        frontier.push(start);

        while !frontier.is_empty() {
            for &from in &frontier {
                for (_, _, to) in edges.incident(vertices[from]) {
                    let Some(&to) = index.get(&to) else {
                        continue;
                    };
                    if !visited[to] {
                        visited.set(to, true);
                        next.push(to);
                    }
                }
            }

            members.extend_from_slice(&next);
            frontier.clear();
            mem::swap(&mut frontier, &mut next);
        }

        members.sort_unstable();
        components.push(members.into_iter().map(|i| vertices[i]).collect());
    }

    debug_assert!(visited.all(), "every vertex belongs to a component");
    components
}

/// Number of connected components of `graph`.
pub fn component_count<G>(graph: &G) -> usize
where
    G: Graph,
    G::Edges: Undirected,
    G::Vertex: Hash,
{
    connected_components(graph).len()
}
