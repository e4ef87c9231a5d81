use std::fmt::Debug;

use crate::error::{MstError, MstResult};

/// Checks that `weight` is usable as an edge weight.
///
/// Weights must be finite and non-negative. `-0.0` is accepted and
/// normalised to `0.0`.
pub fn validate_weight(weight: f64) -> MstResult<f64> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(MstError::InvalidWeight { weight });
    }
    Ok(weight + 0.0)
}

/// An undirected weighted edge between two distinct nodes.
///
/// The order of `source` and `target` is only the order the edge was
/// written in, it carries no direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<N> {
    source: N,
    target: N,
    weight: f64,
}

impl<N> Edge<N>
where
    N: Copy + Eq + Debug,
{
    /// Validated edge constructor.
    ///
    /// Fails on self loops and on weights that are negative, NaN or infinite.
    pub fn new(source: N, target: N, weight: f64) -> MstResult<Self> {
        if source == target {
            return Err(MstError::SelfLoop(format!("{source:?}")));
        }
        let weight = validate_weight(weight)?;
        Ok(Self {
            source,
            target,
            weight,
        })
    }

    /// Edge rebuilt from a graph that already validated it.
    pub(crate) fn from_validated(source: N, target: N, weight: f64) -> Self {
        debug_assert!(source != target);
        debug_assert!(weight.is_finite() && weight >= 0.0);
        Self {
            source,
            target,
            weight,
        }
    }

    #[inline]
    pub fn source(&self) -> N {
        self.source
    }

    #[inline]
    pub fn target(&self) -> N {
        self.target
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[inline]
    pub fn endpoints(&self) -> (N, N) {
        (self.source, self.target)
    }
}

impl<N> TryFrom<(N, N, f64)> for Edge<N>
where
    N: Copy + Eq + Debug,
{
    type Error = MstError;

    fn try_from((source, target, weight): (N, N, f64)) -> MstResult<Self> {
        Self::new(source, target, weight)
    }
}
