//! Builder configuration.

use serde::{Deserialize, Serialize};

use crate::error::{MstError, MstResult};

/// Edge count at which the initial sort moves to the rayon pool.
pub const DEFAULT_PARALLEL_SORT_THRESHOLD: usize = 1 << 14;

/// Default capacity of a streaming trace channel.
pub const DEFAULT_TRACE_CAPACITY: usize = 64;

/// What a build does with a graph that has no nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyGraphPolicy {
    /// Return an empty forest with zero components.
    #[default]
    Degenerate,
    /// Fail with [`MstError::EmptyGraph`].
    Reject,
}

/// How accepted edges are pushed into a streaming channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceDelivery {
    /// Wait for room in the channel.
    #[default]
    Block,
    /// Drop the edge when the channel is full.
    DropWhenFull,
}

/// Configuration for [`crate::mst::kruskal::MstBuilder`].
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```
/// use spantree::config::{EmptyGraphPolicy, MstConfig};
/// let config = MstConfig::from_json_str(r#"{ "empty_graph_policy": "reject" }"#).unwrap();
/// assert_eq!(config.empty_graph_policy, EmptyGraphPolicy::Reject);
/// assert!(config.early_exit);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MstConfig {
    /// Sorts with at least this many edges run in parallel.
    /// Default: 16384
    pub parallel_sort_threshold: usize,

    /// Stop scanning once every vertex is in a single component.
    /// Default: true
    pub early_exit: bool,

    /// Behaviour on graphs with zero nodes.
    /// Default: degenerate (empty forest)
    pub empty_graph_policy: EmptyGraphPolicy,

    /// Capacity of channels created by `MstBuilder::channel`.
    /// Must be at least 1. Default: 64
    pub trace_capacity: usize,

    /// Delivery mode used by `MstBuilder::stream`.
    /// Default: block
    pub trace_delivery: TraceDelivery,
}

impl Default for MstConfig {
    fn default() -> Self {
        Self {
            parallel_sort_threshold: DEFAULT_PARALLEL_SORT_THRESHOLD,
            early_exit: true,
            empty_graph_policy: EmptyGraphPolicy::default(),
            trace_capacity: DEFAULT_TRACE_CAPACITY,
            trace_delivery: TraceDelivery::default(),
        }
    }
}

impl MstConfig {
    /// Parses and validates a JSON configuration document.
    pub fn from_json_str(json: &str) -> MstResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| MstError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is in range.
    pub fn validate(&self) -> MstResult<()> {
        if self.trace_capacity == 0 {
            return Err(MstError::InvalidConfig(
                "trace_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_parallel_sort_threshold(mut self, threshold: usize) -> Self {
        self.parallel_sort_threshold = threshold;
        self
    }

    pub fn with_early_exit(mut self, early_exit: bool) -> Self {
        self.early_exit = early_exit;
        self
    }

    pub fn with_empty_graph_policy(mut self, policy: EmptyGraphPolicy) -> Self {
        self.empty_graph_policy = policy;
        self
    }

    pub fn with_trace_capacity(mut self, capacity: usize) -> Self {
        self.trace_capacity = capacity;
        self
    }

    pub fn with_trace_delivery(mut self, delivery: TraceDelivery) -> Self {
        self.trace_delivery = delivery;
        self
    }
}
