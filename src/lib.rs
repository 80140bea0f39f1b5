//! # `hopline` - Breadth-First Shortest Paths
//!
//! A small toolkit for finding the shortest path between two nodes of an
//! unweighted graph given as an adjacency mapping: node identifier to the
//! ordered sequence of its neighbors.
//!
//! ## Guarantees
//!
//! ### Correctness
//! - **Fewest edges**: breadth-first search explores nodes in non-decreasing
//!   distance from the start, so the first path to reach the goal is shortest.
//! - **Deterministic ties**: among equal-length paths, the one found first by
//!   walking neighbor lists in order wins. Adjacency is therefore always an
//!   ordered slice, never a set.
//! - **Bounded work**: a node is marked visited when it is enqueued, so every
//!   node enters the queue at most once and a search costs `O(V + E)`.
//!
//! ### Purity
//! - The input graph is only ever borrowed immutably.
//! - All search state (queue, visited set, predecessor map) lives for the
//!   duration of one call. Concurrent searches over a shared graph are safe.
//! - No input makes a search panic: empty graphs, self-loops and cycles are
//!   all handled through the return value.
//!
//! ## Membership
//!
//! Start and goal are looked up against the mapping's **keys** only. A node
//! that appears solely inside some neighbor list is treated as unknown when
//! used as an endpoint, even though it is a legal intermediate hop with no
//! outgoing edges. Callers that want to query such nodes should insert them
//! as keys with an empty neighbor list.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use hopline::find_shortest_path;
//!
//! let mut graph = HashMap::new();
//! graph.insert("A", vec!["B", "C"]);
//! graph.insert("B", vec!["D"]);
//! graph.insert("C", vec!["D"]);
//! graph.insert("D", vec![]);
//!
//! // B precedes C in A's list, so the tie is broken towards B.
//! assert_eq!(find_shortest_path(&graph, &"A", &"D"), vec!["A", "B", "D"]);
//! assert_eq!(find_shortest_path(&graph, &"A", &"A"), vec!["A"]);
//! assert!(find_shortest_path(&graph, &"A", &"Z").is_empty());
//! ```
//!
//! When the empty result is too ambiguous, [`try_find_shortest_path`] reports
//! which of the three "no path" cases occurred, and [`ShortestPathFinder`]
//! exposes the configurable variant with traversal statistics.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod graph;
pub mod search;

#[cfg(any(test, feature = "proptest"))]
pub mod strategies;

pub use graph::{bfs_distances, Adjacency, Bfs};
pub use search::{
    find_shortest_path, try_find_shortest_path, NoPath, SearchConfig, SearchOutcome,
    SearchStats, ShortestPathFinder, Strategy,
};
