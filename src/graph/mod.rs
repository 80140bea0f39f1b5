//! Adjacency views and plain traversals over them.
//!
//! Graphs are never built by this crate. Anything that can answer "is this a
//! key?" and "what are this node's neighbors, in order?" is a graph:
//! - `adjacency`: the [`Adjacency`] trait and its impls for std maps and
//!   dense index lists
//! - `traversal`: level-order iteration and hop distances

pub mod adjacency;
pub mod traversal;
pub(crate) mod access;

pub use adjacency::Adjacency;
pub use traversal::{bfs_distances, Bfs};
