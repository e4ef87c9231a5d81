//! Union-find over arbitrary node identifiers.
//!
//! Identifiers are mapped to dense indices once, on construction. The
//! forest itself is two parallel arrays: a parent index per entry and the
//! size of the component rooted at each root. `find` compresses the path it
//! walks and `union` hangs the smaller tree under the larger one, which
//! together keep the amortised cost of every operation inverse-Ackermann.

use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::error::{MstError, MstResult};

#[derive(Debug, Clone)]
pub struct DisjointSet<N> {
    /// Registered identifiers, indexed densely.
    nodes: Vec<N>,
    /// Identifier to dense index.
    index: FxHashMap<N, usize>,
    /// Parent index. Roots point to themselves.
    parent: Vec<usize>,
    /// Component size, only meaningful at roots.
    size: Vec<usize>,
    /// Number of roots.
    components: usize,
}

impl<N> Default for DisjointSet<N> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: FxHashMap::default(),
            parent: Vec::new(),
            size: Vec::new(),
            components: 0,
        }
    }
}

impl<N> DisjointSet<N>
where
    N: Copy + Eq + Hash + Debug,
{
    /// Every node starts as its own singleton component.
    ///
    /// Repeated identifiers are registered once, at their first position.
    pub fn new<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        let nodes = nodes.into_iter();
        let mut sets = Self::with_capacity(nodes.size_hint().0);
        for node in nodes {
            sets.insert(node);
        }
        sets
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            parent: Vec::with_capacity(capacity),
            size: Vec::with_capacity(capacity),
            components: 0,
        }
    }

    /// Registers `node` as a new singleton.
    ///
    /// Returns false, leaving the structure unchanged, when it is already registered.
    pub fn insert(&mut self, node: N) -> bool {
        if self.index.contains_key(&node) {
            return false;
        }

        let i = self.nodes.len();
        self.index.insert(node, i);
        self.nodes.push(node);
        self.parent.push(i);
        self.size.push(1);
        self.components += 1;
        true
    }

    /// Number of registered nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn contains(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Number of disjoint components.
    #[inline]
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Dense index assigned to `node`.
    #[inline]
    pub fn index_of(&self, node: &N) -> Option<usize> {
        self.index.get(node).copied()
    }

    #[inline]
    fn require(&self, node: &N) -> MstResult<usize> {
        self.index_of(node).ok_or_else(|| MstError::unknown_node(node))
    }

    /// Representative of the component containing `node`.
    ///
    /// Compresses the path from `node` to its root.
    pub fn find(&mut self, node: &N) -> MstResult<N> {
        let i = self.require(node)?;
        let root = self.find_index(i);
        Ok(self.nodes[root])
    }

    /// Merges the components of `a` and `b`.
    ///
    /// Returns true when a merge happened. Returns false when both were
    /// already in the same component, in which case the structure is left
    /// exactly as it was.
    pub fn union(&mut self, a: &N, b: &N) -> MstResult<bool> {
        let a = self.require(a)?;
        let b = self.require(b)?;
        Ok(self.union_indices(a, b))
    }

    /// Returns true when `a` and `b` are in the same component.
    pub fn connected(&mut self, a: &N, b: &N) -> MstResult<bool> {
        let a = self.require(a)?;
        let b = self.require(b)?;
        Ok(self.find_index(a) == self.find_index(b))
    }

    /// Number of nodes in the component containing `node`.
    pub fn component_size(&mut self, node: &N) -> MstResult<usize> {
        let i = self.require(node)?;
        let root = self.find_index(i);
        Ok(self.size[root])
    }

    /// The partition as lists of nodes.
    ///
    /// Sets are ordered by their first registered member and members keep
    /// registration order.
    pub fn sets(&mut self) -> Vec<Vec<N>> {
        let mut slot_of_root: FxHashMap<usize, usize> = FxHashMap::default();
        let mut sets: Vec<Vec<N>> = Vec::with_capacity(self.components);

        for i in 0..self.nodes.len() {
            let root = self.find_index(i);
            let slot = *slot_of_root.entry(root).or_insert_with(|| {
                sets.push(Vec::new());
                sets.len() - 1
            });
            sets[slot].push(self.nodes[i]);
        }

        sets
    }

    /// Root index of the entry at index `i`, compressing the walked path.
    ///
    /// Panics when `i` is out of range.
    pub(crate) fn find_index(&mut self, i: usize) -> usize {
        let root = self.root_of(i);
        self.compress(i, root);
        root
    }

    /// Root index of the entry at index `i`, leaving parent links untouched.
    fn root_of(&self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        root
    }

    /// Points every node on the path from `i` directly at `root`.
    fn compress(&mut self, i: usize, root: usize) {
        let mut node = i;
        while self.parent[node] != root && self.parent[node] != node {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
    }

    /// Union by size on dense indices.
    ///
    /// On equal sizes the root of `a` stays the root. When both entries are
    /// already connected nothing is written, not even path compression.
    pub(crate) fn union_indices(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.root_of(a);
        let root_b = self.root_of(b);
        if root_a == root_b {
            return false;
        }

        self.compress(a, root_a);
        self.compress(b, root_b);

        let (mut a, mut b) = (root_a, root_b);
        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }

        self.parent[b] = a;
        self.size[a] += self.size[b];
        self.components -= 1;
        true
    }
}

impl<N> FromIterator<N> for DisjointSet<N>
where
    N: Copy + Eq + Hash + Debug,
{
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        Self::new(iter)
    }
}
