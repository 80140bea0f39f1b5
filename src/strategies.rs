//! Proptest strategies for adjacency mappings.
//!
//! Enabled by the `proptest` feature so downstream crates can property-test
//! code built on [`Adjacency`](crate::Adjacency) with the same generators
//! used by this crate's own tests.

use std::collections::HashMap;

use proptest::collection::{hash_map, vec};
use proptest::prelude::*;

/// Key universe of [`keyed_adjacency`]: keys are drawn from `0..KEY_SPACE`.
pub const KEY_SPACE: u8 = 24;

/// Neighbor universe of [`keyed_adjacency`]. Ids in `KEY_SPACE..NEIGHBOR_SPACE`
/// only ever appear as neighbors.
pub const NEIGHBOR_SPACE: u8 = 32;

/// Dense index adjacency with `1..=max_nodes` nodes.
///
/// Every neighbor index is in range; self-loops, duplicate edges and cycles
/// are all generated.
///
/// # Panics
///
/// Panics if `max_nodes` is zero.
pub fn dense_adjacency(
    max_nodes: usize,
    max_degree: usize,
) -> impl Strategy<Value = Vec<Vec<usize>>> {
    assert!(max_nodes > 0, "dense adjacency needs at least one node");
    (1..=max_nodes).prop_flat_map(move |n| vec(vec(0..n, 0..=max_degree), n))
}

/// Keyed adjacency over small `u8` ids, possibly empty.
///
/// Some neighbors are not keys, which exercises the keys-only membership rule.
pub fn keyed_adjacency(max_degree: usize) -> impl Strategy<Value = HashMap<u8, Vec<u8>>> {
    hash_map(
        0..KEY_SPACE,
        vec(0..NEIGHBOR_SPACE, 0..=max_degree),
        0..=16,
    )
}

/// A dense adjacency together with a `(start, goal)` pair of valid indices.
pub fn dense_with_endpoints(
    max_nodes: usize,
    max_degree: usize,
) -> impl Strategy<Value = (Vec<Vec<usize>>, usize, usize)> {
    dense_adjacency(max_nodes, max_degree).prop_flat_map(|adj| {
        let n = adj.len();
        (Just(adj), 0..n, 0..n)
    })
}
