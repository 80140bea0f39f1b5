//! Property tests for the shortest path search.
//!
//! Distances are checked against petgraph's Dijkstra with unit weights, which
//! shares no code with the search under test.

use std::collections::{HashMap, HashSet};

use petgraph::algo::dijkstra;
use petgraph::graph::{DiGraph, NodeIndex};
use proptest::prelude::*;

use super::{
    find_shortest_path, try_find_shortest_path, NoPath, SearchConfig, ShortestPathFinder, Strategy,
};
use crate::graph::{bfs_distances, Adjacency};
use crate::strategies::{dense_with_endpoints, keyed_adjacency, NEIGHBOR_SPACE};

fn oracle_distance(adj: &[Vec<usize>], start: usize, goal: usize) -> Option<usize> {
    let mut g = DiGraph::<(), ()>::new();
    let nodes: Vec<NodeIndex> = (0..adj.len()).map(|_| g.add_node(())).collect();
    for (u, list) in adj.iter().enumerate() {
        for &v in list {
            g.add_edge(nodes[u], nodes[v], ());
        }
    }
    dijkstra(&g, nodes[start], Some(nodes[goal]), |_| 1usize)
        .get(&nodes[goal])
        .copied()
}

fn is_valid_path<G>(graph: &G, path: &[G::Node]) -> bool
where
    G: Adjacency + ?Sized,
{
    let distinct: HashSet<&G::Node> = path.iter().collect();
    distinct.len() == path.len()
        && path
            .windows(2)
            .all(|pair| graph.neighbors(&pair[0]).contains(&pair[1]))
}

fn finder(strategy: Strategy) -> ShortestPathFinder {
    ShortestPathFinder::with_config(SearchConfig::new().with_strategy(strategy))
}

proptest! {
    #[test]
    fn path_length_matches_true_distance((adj, start, goal) in dense_with_endpoints(24, 3)) {
        let path = find_shortest_path(&adj, &start, &goal);

        match oracle_distance(&adj, start, goal) {
            Some(dist) => {
                prop_assert_eq!(path.len(), dist + 1);
                prop_assert_eq!(path.first(), Some(&start));
                prop_assert_eq!(path.last(), Some(&goal));
                prop_assert!(is_valid_path(&adj, &path));
            }
            None => prop_assert!(path.is_empty()),
        }
    }

    #[test]
    fn path_length_matches_level_assignment((adj, start, goal) in dense_with_endpoints(24, 3)) {
        let levels = bfs_distances(&adj, &start);
        let outcome = ShortestPathFinder::new().search(&adj, &start, &goal);

        prop_assert_eq!(outcome.hops(), levels.get(&goal).copied());
    }

    #[test]
    fn start_to_itself_is_singleton((adj, start, _goal) in dense_with_endpoints(16, 4)) {
        prop_assert_eq!(find_shortest_path(&adj, &start, &start), vec![start]);
    }

    #[test]
    fn unknown_endpoints_yield_empty(
        graph in keyed_adjacency(4),
        start in 0..NEIGHBOR_SPACE,
        goal in 0..NEIGHBOR_SPACE,
    ) {
        let path = find_shortest_path(&graph, &start, &goal);
        let expected = if !graph.contains_key(&start) {
            Some(NoPath::UnknownStart)
        } else if !graph.contains_key(&goal) {
            Some(NoPath::UnknownGoal)
        } else {
            None
        };

        match expected {
            Some(reason) => {
                prop_assert!(path.is_empty());
                prop_assert_eq!(try_find_shortest_path(&graph, &start, &goal), Err(reason));
            }
            None => {
                if path.is_empty() {
                    prop_assert_eq!(
                        try_find_shortest_path(&graph, &start, &goal),
                        Err(NoPath::Unreachable)
                    );
                } else {
                    prop_assert!(is_valid_path(&graph, &path));
                }
            }
        }
    }

    #[test]
    fn strategies_are_indistinguishable((adj, start, goal) in dense_with_endpoints(24, 3)) {
        let prefix = finder(Strategy::PathPrefix).search(&adj, &start, &goal);
        let predecessor = finder(Strategy::Predecessor).search(&adj, &start, &goal);

        prop_assert_eq!(prefix, predecessor);
    }

    #[test]
    fn repeated_searches_are_identical_and_pure(graph in keyed_adjacency(3), start in 0u8..24, goal in 0u8..24) {
        let before: HashMap<u8, Vec<u8>> = graph.clone();

        let first = find_shortest_path(&graph, &start, &goal);
        let second = find_shortest_path(&graph, &start, &goal);

        prop_assert_eq!(first, second);
        prop_assert_eq!(graph, before);
    }

    #[test]
    fn hop_limit_only_truncates(
        (adj, start, goal) in dense_with_endpoints(20, 3),
        max_hops in 0usize..6,
    ) {
        for strategy in Strategy::ALL {
            let unbounded = finder(strategy).try_find(&adj, &start, &goal);
            let bounded = ShortestPathFinder::with_config(
                SearchConfig::new().with_strategy(strategy).with_max_hops(max_hops),
            )
            .try_find(&adj, &start, &goal);

            match &unbounded {
                Ok(path) if path.len() - 1 <= max_hops => prop_assert_eq!(&bounded, &unbounded),
                _ => prop_assert_eq!(bounded, Err(NoPath::Unreachable)),
            }
        }
    }

    #[test]
    fn visited_count_never_exceeds_reachable((adj, start, goal) in dense_with_endpoints(24, 3)) {
        let reachable = bfs_distances(&adj, &start).len();
        let outcome = ShortestPathFinder::new().search(&adj, &start, &goal);

        prop_assert!(outcome.stats.nodes_visited <= reachable);
        prop_assert!(outcome.stats.max_frontier <= reachable);
        if !outcome.is_found() {
            prop_assert_eq!(outcome.stats.nodes_visited, reachable);
        }
    }
}
