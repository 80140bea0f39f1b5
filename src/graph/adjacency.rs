//! Read-only adjacency views.
//!
//! A graph is a mapping from node to the ordered list of nodes one edge away.
//! Nodes that only ever appear inside a neighbor list are legal hops with no
//! outgoing edges, but they are not keys: [`Adjacency::contains_node`] reports
//! `false` for them.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// An ordered adjacency mapping.
///
/// Implementations must return neighbors in a stable order; search results
/// break ties between equal-length paths by that order.
pub trait Adjacency {
    /// Node identifier type.
    type Node: Eq + Hash;

    /// Returns `true` if `node` is a key of the mapping.
    fn contains_node(&self, node: &Self::Node) -> bool;

    /// Returns the neighbors of `node` in list order.
    ///
    /// Nodes without an entry have no outgoing edges and yield an empty slice.
    fn neighbors(&self, node: &Self::Node) -> &[Self::Node];

    /// Number of keys in the mapping.
    fn node_count(&self) -> usize;

    /// Total length of all neighbor lists.
    fn edge_count(&self) -> usize;

    /// Returns `true` if the mapping has no keys.
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }
}

impl<N, S> Adjacency for HashMap<N, Vec<N>, S>
where
    N: Eq + Hash,
    S: BuildHasher,
{
    type Node = N;

    #[inline]
    fn contains_node(&self, node: &N) -> bool {
        self.contains_key(node)
    }

    #[inline]
    fn neighbors(&self, node: &N) -> &[N] {
        self.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    fn node_count(&self) -> usize {
        self.len()
    }

    fn edge_count(&self) -> usize {
        self.values().map(Vec::len).sum()
    }
}

impl<N> Adjacency for BTreeMap<N, Vec<N>>
where
    N: Ord + Hash,
{
    type Node = N;

    #[inline]
    fn contains_node(&self, node: &N) -> bool {
        self.contains_key(node)
    }

    #[inline]
    fn neighbors(&self, node: &N) -> &[N] {
        self.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    fn node_count(&self) -> usize {
        self.len()
    }

    fn edge_count(&self) -> usize {
        self.values().map(Vec::len).sum()
    }
}

/// Dense index adjacency: the keys are exactly `0..len`.
///
/// Neighbor indices past the end are allowed and behave like neighbor-only
/// nodes in a map: reachable, but without edges and never a valid endpoint.
impl Adjacency for [Vec<usize>] {
    type Node = usize;

    #[inline]
    fn contains_node(&self, node: &usize) -> bool {
        *node < self.len()
    }

    #[inline]
    fn neighbors(&self, node: &usize) -> &[usize] {
        self.get(*node).map(Vec::as_slice).unwrap_or(&[])
    }

    fn node_count(&self) -> usize {
        self.len()
    }

    fn edge_count(&self) -> usize {
        self.iter().map(Vec::len).sum()
    }
}

impl Adjacency for Vec<Vec<usize>> {
    type Node = usize;

    #[inline]
    fn contains_node(&self, node: &usize) -> bool {
        self.as_slice().contains_node(node)
    }

    #[inline]
    fn neighbors(&self, node: &usize) -> &[usize] {
        self.as_slice().neighbors(node)
    }

    fn node_count(&self) -> usize {
        self.len()
    }

    fn edge_count(&self) -> usize {
        self.as_slice().edge_count()
    }
}

impl<G> Adjacency for &G
where
    G: Adjacency + ?Sized,
{
    type Node = G::Node;

    #[inline]
    fn contains_node(&self, node: &Self::Node) -> bool {
        (**self).contains_node(node)
    }

    #[inline]
    fn neighbors(&self, node: &Self::Node) -> &[Self::Node] {
        (**self).neighbors(node)
    }

    fn node_count(&self) -> usize {
        (**self).node_count()
    }

    fn edge_count(&self) -> usize {
        (**self).edge_count()
    }
}
