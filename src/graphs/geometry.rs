//! Planar node positions and Euclidean edge weights.
//!
//! Positions are payload only. The spanning forest engine never looks at
//! them, it only sees the weights derived from them.

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::{MstError, MstResult};
use crate::graphs::weighted::WeightedGraph;

/// A point in the plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Constructor that rejects NaN and infinite coordinates.
    pub fn try_new(x: f64, y: f64) -> MstResult<Self> {
        let point = Self::new(x, y);
        point.validate()?;
        Ok(point)
    }

    pub fn validate(&self) -> MstResult<()> {
        if self.x.is_finite() && self.y.is_finite() {
            Ok(())
        } else {
            Err(MstError::InvalidCoordinate {
                x: self.x,
                y: self.y,
            })
        }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl<N> WeightedGraph<N, Point>
where
    N: Copy + Eq + Hash + Debug,
{
    /// Complete graph over positioned nodes.
    ///
    /// Every unordered pair of nodes is connected by one edge weighted with
    /// the Euclidean distance between their positions. Edges are inserted in
    /// lexicographic order of node registration, `(0, 1), (0, 2), ..., (1, 2), ...`.
    pub fn complete<I>(nodes: I) -> MstResult<Self>
    where
        I: IntoIterator<Item = (N, Point)>,
    {
        let nodes = nodes.into_iter();
        let mut graph = Self::with_capacity(nodes.size_hint().0, 0);

        for (id, position) in nodes {
            position.validate()?;
            graph.add_node_with(id, position)?;
        }

        let count = graph.nodes().len();
        graph.reserve_edges(count * count.saturating_sub(1) / 2);

        for i in 0..count {
            for j in (i + 1)..count {
                let (a, pa) = graph.entry(i);
                let (b, pb) = graph.entry(j);
                let weight = pa.distance(pb);
                graph.add_edge(a, b, weight)?;
            }
        }

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::edges::{ReadEdges, Weighted};
    use crate::graphs::vertices::Vertices;

    #[test]
    fn distance_is_euclidean_and_symmetric() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn try_new_rejects_non_finite() {
        assert!(Point::try_new(1.0, 2.0).is_ok());
        assert!(matches!(
            Point::try_new(f64::NAN, 0.0),
            Err(MstError::InvalidCoordinate { .. })
        ));
        assert!(Point::try_new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn complete_graph_has_every_pair_once() {
        let nodes = [
            ('A', Point::new(0.0, 0.0)),
            ('B', Point::new(3.0, 4.0)),
            ('C', Point::new(6.0, 8.0)),
            ('D', Point::new(0.0, 1.0)),
        ];
        let g = WeightedGraph::complete(nodes).unwrap();

        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 6);

        let triples: Vec<_> = g.edges().map(|(u, _, v)| (u, v)).collect();
        assert_eq!(
            triples,
            vec![
                ('A', 'B'),
                ('A', 'C'),
                ('A', 'D'),
                ('B', 'C'),
                ('B', 'D'),
                ('C', 'D')
            ]
        );

        assert_eq!(g.weight(0), 5.0);
        assert_eq!(g.weight(1), 10.0);
        assert_eq!(g.weight(2), 1.0);
        assert_eq!(g.payload(&'B'), Some(&Point::new(3.0, 4.0)));
    }

    #[test]
    fn complete_graph_on_one_node_has_no_edges() {
        let g = WeightedGraph::complete([(7u32, Point::new(1.0, 1.0))]).unwrap();
        assert_eq!(g.vertex_count(), 1);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn complete_graph_rejects_bad_input() {
        let bad = WeightedGraph::complete([(0u8, Point::new(f64::NAN, 0.0))]);
        assert!(matches!(bad, Err(MstError::InvalidCoordinate { .. })));

        let dup = WeightedGraph::complete([(0u8, Point::default()), (0u8, Point::default())]);
        assert!(matches!(dup, Err(MstError::DuplicateNode(_))));
    }
}
