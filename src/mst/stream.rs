//! Pushing accepted edges to a consumer running at its own pace.
//!
//! The scan runs on the caller's thread and forwards each accepted edge
//! into a bounded channel. A consumer that goes away never stops the scan:
//! once the receiver is dropped, delivery stops and the forest is still
//! completed.

use std::fmt::Debug;
use std::hash::Hash;

use crossbeam_channel::{Receiver, Sender, TrySendError, bounded};
use tracing::{debug, warn};

use crate::config::TraceDelivery;
use crate::error::MstResult;
use crate::graphs::graph::Graph;
use crate::mst::kruskal::{EdgeOf, MstBuilder, SpanningForest, TreeEdge};

/// A spanning forest together with what happened to its trace.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamedForest<V, E> {
    pub forest: SpanningForest<V, E>,
    /// Edges handed to the channel.
    pub delivered: usize,
    /// Edges dropped because the channel was full.
    pub dropped: usize,
    /// The receiver was gone before the scan finished.
    pub disconnected: bool,
}

impl MstBuilder {
    /// Bounded channel sized by `trace_capacity`.
    pub fn channel<V, E>(&self) -> (Sender<TreeEdge<V, E>>, Receiver<TreeEdge<V, E>>) {
        bounded(self.config().trace_capacity.max(1))
    }

    /// Builds the forest of `graph` while forwarding every accepted edge to `sender`.
    ///
    /// With [`TraceDelivery::Block`] a full channel stalls the scan until the
    /// consumer catches up. With [`TraceDelivery::DropWhenFull`] the edge is
    /// skipped and counted in `dropped` instead. The returned forest always
    /// holds every accepted edge, whatever the consumer saw.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(delivery = ?self.config().trace_delivery)
    )]
    pub fn stream<G>(
        &self,
        graph: &G,
        sender: &Sender<TreeEdge<G::Vertex, EdgeOf<G>>>,
    ) -> MstResult<StreamedForest<G::Vertex, EdgeOf<G>>>
    where
        G: Graph,
        G::Vertex: Hash + Debug + Send,
        EdgeOf<G>: Send,
    {
        let delivery = self.config().trace_delivery;
        let mut trace = self.trace(graph)?;
        let mut accepted = Vec::with_capacity(trace.vertex_count().saturating_sub(1));

        let mut delivered = 0;
        let mut dropped = 0;
        let mut disconnected = false;

        for edge in trace.by_ref() {
            accepted.push(edge);
            if disconnected {
                continue;
            }

            let sent = match delivery {
                TraceDelivery::Block => sender.send(edge).map_err(|_| ()),
                TraceDelivery::DropWhenFull => match sender.try_send(edge) {
                    Ok(()) => Ok(()),
                    Err(TrySendError::Full(_)) => {
                        dropped += 1;
                        continue;
                    }
                    Err(TrySendError::Disconnected(_)) => Err(()),
                },
            };

            match sent {
                Ok(()) => delivered += 1,
                Err(()) => {
                    warn!(
                        delivered,
                        "trace receiver disconnected, finishing without delivery"
                    );
                    disconnected = true;
                }
            }
        }

        let forest = trace.finish(accepted);
        debug!(delivered, dropped, disconnected, "trace stream closed");

        Ok(StreamedForest {
            forest,
            delivered,
            dropped,
            disconnected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MstConfig;
    use crate::graphs::geometry::Point;
    use crate::graphs::weighted::WeightedGraph;
    use crate::mst::kruskal::kruskal_mst;

    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use std::thread;

    fn scattered(seed: u64, n: usize) -> WeightedGraph<usize, Point> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let points: Vec<_> = (0..n)
            .map(|i| {
                let p = Point::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0));
                (i, p)
            })
            .collect();
        WeightedGraph::complete(points).unwrap()
    }

    #[test]
    fn blocking_stream_delivers_every_edge_in_order() {
        let g = scattered(1, 30);
        let builder = MstBuilder::new(MstConfig::default().with_trace_capacity(1)).unwrap();
        let (tx, rx) = builder.channel();

        let consumer = thread::spawn(move || rx.iter().collect::<Vec<_>>());
        let streamed = builder.stream(&g, &tx).unwrap();
        drop(tx);
        let received = consumer.join().unwrap();

        assert_eq!(streamed.delivered, 29);
        assert_eq!(streamed.dropped, 0);
        assert!(!streamed.disconnected);
        assert_eq!(received, streamed.forest.edges());
        assert_eq!(streamed.forest, kruskal_mst(&g).unwrap());
    }

    #[test]
    fn dropped_receiver_does_not_stop_the_scan() {
        let g = scattered(2, 20);
        let builder = MstBuilder::default();
        let (tx, rx) = builder.channel();
        drop(rx);

        let streamed = builder.stream(&g, &tx).unwrap();
        assert!(streamed.disconnected);
        assert_eq!(streamed.delivered, 0);
        assert_eq!(streamed.forest.len(), 19);
        assert!(streamed.forest.is_spanning_tree());
    }

    #[test]
    fn consumer_cancelled_midway() {
        let g = scattered(3, 40);
        let builder = MstBuilder::new(MstConfig::default().with_trace_capacity(1)).unwrap();
        let (tx, rx) = builder.channel();

        // Take three edges, then hang up.
        let consumer = thread::spawn(move || rx.iter().take(3).collect::<Vec<_>>());
        let streamed = builder.stream(&g, &tx).unwrap();
        let received = consumer.join().unwrap();

        assert_eq!(received.len(), 3);
        assert_eq!(&streamed.forest.edges()[..3], received.as_slice());
        assert!(streamed.delivered >= 3);
        assert_eq!(streamed.forest.len(), 39);
    }

    #[test]
    fn drop_when_full_never_blocks() {
        let g = scattered(4, 25);
        let builder = MstBuilder::new(
            MstConfig::default()
                .with_trace_capacity(2)
                .with_trace_delivery(TraceDelivery::DropWhenFull),
        )
        .unwrap();
        let (tx, rx) = builder.channel();

        // Nobody drains the channel while the scan runs.
        let streamed = builder.stream(&g, &tx).unwrap();

        assert_eq!(streamed.delivered, 2);
        assert_eq!(streamed.dropped, 22);
        assert!(!streamed.disconnected);
        assert_eq!(streamed.forest.len(), 24);

        let buffered: Vec<_> = rx.try_iter().collect();
        assert_eq!(buffered, streamed.forest.edges()[..2]);
    }

    #[test]
    fn empty_graph_streams_nothing() {
        let g = WeightedGraph::<u8>::new();
        let builder = MstBuilder::default();
        let (tx, rx) = builder.channel();
        let streamed = builder.stream(&g, &tx).unwrap();
        assert_eq!(streamed.delivered, 0);
        assert!(streamed.forest.is_empty());
        assert!(rx.try_recv().is_err());
    }
}
