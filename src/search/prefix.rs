//! Breadth-first search over path prefixes.
//!
//! The queue holds whole partial paths from the start, so the path to the
//! goal is available the moment the goal is seen.

use std::collections::VecDeque;

use crate::graph::access::visited::VisitedSet;
use crate::graph::Adjacency;
use crate::search::{SearchConfig, SearchStats};

/// Searches from `start` to `goal`.
///
/// Both endpoints must be keys of `graph` and distinct; the caller checks that.
pub(super) fn search<'a, G>(
    graph: &'a G,
    start: &'a G::Node,
    goal: &'a G::Node,
    config: &SearchConfig,
    stats: &mut SearchStats,
) -> Option<Vec<&'a G::Node>>
where
    G: Adjacency + ?Sized,
{
    let mut queue: VecDeque<Vec<&'a G::Node>> = VecDeque::new();
    let mut visited = VisitedSet::new();

    queue.push_back(vec![start]);
    visited.try_visit(start);
    stats.max_frontier = 1;

    while let Some(path) = queue.pop_front() {
        let Some(&node) = path.last() else {
            continue;
        };
        if config.exhausted(path.len() - 1) {
            continue;
        }

        for neighbor in graph.neighbors(node) {
            // Goal before visited: the goal is never enqueued, so it is never marked.
            if neighbor == goal {
                stats.nodes_visited = visited.len();
                let mut found = path;
                found.push(neighbor);
                return Some(found);
            }

            if visited.try_visit(neighbor) {
                let mut next = Vec::with_capacity(path.len() + 1);
                next.extend_from_slice(&path);
                next.push(neighbor);
                queue.push_back(next);
                stats.max_frontier = stats.max_frontier.max(queue.len());
            }
        }
    }

    stats.nodes_visited = visited.len();
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(adj: &[Vec<usize>], start: usize, goal: usize) -> (Option<Vec<usize>>, SearchStats) {
        let mut stats = SearchStats::default();
        let path = search(adj, &start, &goal, &SearchConfig::new(), &mut stats)
            .map(|p| p.into_iter().copied().collect());
        (path, stats)
    }

    #[test]
    fn first_listed_neighbor_wins_ties() {
        // 0 -> 1,2 ; 1 -> 3 ; 2 -> 3
        let adj: Vec<Vec<usize>> = vec![vec![1, 2], vec![3], vec![3], vec![]];
        let (path, stats) = run(&adj, 0, 3);

        assert_eq!(path, Some(vec![0, 1, 3]));
        // 0, 1 and 2 are marked before 3 is seen from 1.
        assert_eq!(stats.nodes_visited, 3);
        assert_eq!(stats.max_frontier, 2);
    }

    #[test]
    fn cycles_terminate() {
        // 0 <-> 1, 2 unreachable
        let adj: Vec<Vec<usize>> = vec![vec![1, 0], vec![0, 1], vec![]];
        let (path, stats) = run(&adj, 0, 2);

        assert_eq!(path, None);
        assert_eq!(stats.nodes_visited, 2);
    }

    #[test]
    fn hop_limit_prunes_long_paths() {
        // 0 -> 1 -> 2 -> 3
        let adj: Vec<Vec<usize>> = vec![vec![1], vec![2], vec![3], vec![]];
        let mut stats = SearchStats::default();

        let bounded = SearchConfig::new().with_max_hops(2);
        assert!(search(&adj, &0, &3, &bounded, &mut stats).is_none());

        let exact = SearchConfig::new().with_max_hops(3);
        let path = search(&adj, &0, &3, &exact, &mut stats).map(|p| p.len());
        assert_eq!(path, Some(4));
    }
}
