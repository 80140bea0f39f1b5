//! Visited sets for graph traversals.
//!
//! Nodes are recorded by reference into the graph (or the caller's endpoint),
//! so marking a node never clones it. A set lives for exactly one traversal.

use std::collections::HashSet;
use std::hash::Hash;

/// Nodes already scheduled for expansion during one traversal.
pub(crate) struct VisitedSet<'a, N> {
    seen: HashSet<&'a N>,
}

impl<'a, N> VisitedSet<'a, N>
where
    N: Eq + Hash,
{
    pub(crate) fn new() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: HashSet::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns `true` iff this call observed the node as not-yet-visited and marks it visited.
    #[inline]
    pub(crate) fn try_visit(&mut self, node: &'a N) -> bool {
        self.seen.insert(node)
    }
}
