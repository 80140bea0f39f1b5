//! Shortest path search.
//!
//! [`find_shortest_path`] is the whole contract most callers need: the
//! fewest-edges path from `start` to `goal` inclusive, or an empty vector.
//! An empty result means one of three things: the start is not a key, the
//! goal is not a key, or the goal cannot be reached. [`try_find_shortest_path`]
//! and [`ShortestPathFinder`] tell them apart.
//!
//! Endpoint checks happen before any traversal, in this order:
//! 1. `start` must be a key of the graph.
//! 2. `goal` must be a key of the graph.
//! 3. `start == goal` returns `[start]` without touching the adjacency lists.

mod config;
mod outcome;
mod predecessor;
mod prefix;

#[cfg(test)]
mod properties;

pub use config::{SearchConfig, Strategy};
pub use outcome::{NoPath, SearchOutcome, SearchStats};

use crate::graph::Adjacency;

/// Finds a shortest path from `start` to `goal`.
///
/// Returns the nodes of the path, both endpoints included, or an empty vector
/// when either endpoint is not a key of `graph` or no path exists. Among
/// paths of equal length, the one reached first by walking neighbor lists in
/// order is returned.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use hopline::find_shortest_path;
///
/// let graph = HashMap::from([(1, vec![2]), (2, vec![])]);
/// assert_eq!(find_shortest_path(&graph, &1, &2), vec![1, 2]);
/// assert!(find_shortest_path(&graph, &2, &1).is_empty());
/// ```
pub fn find_shortest_path<G>(graph: &G, start: &G::Node, goal: &G::Node) -> Vec<G::Node>
where
    G: Adjacency + ?Sized,
    G::Node: Clone,
{
    ShortestPathFinder::new().find(graph, start, goal)
}

/// Like [`find_shortest_path`], but reports why no path was returned.
///
/// # Errors
///
/// Returns [`NoPath::UnknownStart`] or [`NoPath::UnknownGoal`] when an
/// endpoint is not a key of `graph` (start is checked first), and
/// [`NoPath::Unreachable`] when the goal cannot be reached.
pub fn try_find_shortest_path<G>(
    graph: &G,
    start: &G::Node,
    goal: &G::Node,
) -> Result<Vec<G::Node>, NoPath>
where
    G: Adjacency + ?Sized,
    G::Node: Clone,
{
    ShortestPathFinder::new().try_find(graph, start, goal)
}

/// A configured shortest path search.
///
/// Holds no state between searches; one finder can serve any number of
/// graphs and threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShortestPathFinder {
    config: SearchConfig,
}

impl ShortestPathFinder {
    /// Creates a finder with the default configuration.
    pub const fn new() -> Self {
        Self {
            config: SearchConfig::new(),
        }
    }

    /// Creates a finder with the given configuration.
    pub const fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Finds a shortest path, or an empty vector. See [`find_shortest_path`].
    pub fn find<G>(&self, graph: &G, start: &G::Node, goal: &G::Node) -> Vec<G::Node>
    where
        G: Adjacency + ?Sized,
        G::Node: Clone,
    {
        self.search(graph, start, goal).into_path()
    }

    /// Finds a shortest path or the reason there is none.
    ///
    /// # Errors
    ///
    /// See [`try_find_shortest_path`].
    pub fn try_find<G>(
        &self,
        graph: &G,
        start: &G::Node,
        goal: &G::Node,
    ) -> Result<Vec<G::Node>, NoPath>
    where
        G: Adjacency + ?Sized,
        G::Node: Clone,
    {
        self.search(graph, start, goal).path
    }

    /// Runs one search and returns the path together with traversal counters.
    pub fn search<G>(&self, graph: &G, start: &G::Node, goal: &G::Node) -> SearchOutcome<G::Node>
    where
        G: Adjacency + ?Sized,
        G::Node: Clone,
    {
        let mut stats = SearchStats::default();
        let path = self
            .locate(graph, start, goal, &mut stats)
            .map(|nodes| nodes.into_iter().cloned().collect());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            strategy = self.config.strategy.name(),
            max_hops = ?self.config.max_hops,
            found = path.is_ok(),
            hops = path.as_ref().map_or(0, |p: &Vec<G::Node>| p.len().saturating_sub(1)),
            nodes_visited = stats.nodes_visited,
            max_frontier = stats.max_frontier,
            "shortest path search finished"
        );

        SearchOutcome { path, stats }
    }

    /// Validates the endpoints and dispatches to the configured strategy.
    fn locate<'a, G>(
        &self,
        graph: &'a G,
        start: &'a G::Node,
        goal: &'a G::Node,
        stats: &mut SearchStats,
    ) -> Result<Vec<&'a G::Node>, NoPath>
    where
        G: Adjacency + ?Sized,
    {
        if !graph.contains_node(start) {
            #[cfg(feature = "tracing")]
            tracing::trace!(reason = %NoPath::UnknownStart, "rejecting search");
            return Err(NoPath::UnknownStart);
        }
        if !graph.contains_node(goal) {
            #[cfg(feature = "tracing")]
            tracing::trace!(reason = %NoPath::UnknownGoal, "rejecting search");
            return Err(NoPath::UnknownGoal);
        }
        if start == goal {
            stats.nodes_visited = 1;
            return Ok(vec![start]);
        }

        let found = match self.config.strategy {
            Strategy::PathPrefix => prefix::search(graph, start, goal, &self.config, stats),
            Strategy::Predecessor => predecessor::search(graph, start, goal, &self.config, stats),
        };
        found.ok_or(NoPath::Unreachable)
    }
}
