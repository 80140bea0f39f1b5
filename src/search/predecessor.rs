//! Breadth-first search with a predecessor map.
//!
//! Stores parent pointers instead of cloning path prefixes at each node; the
//! path is rebuilt once by walking parents back from the goal.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use crate::graph::Adjacency;
use crate::search::{SearchConfig, SearchStats};

/// Searches from `start` to `goal`.
///
/// Both endpoints must be keys of `graph` and distinct; the caller checks that.
/// Visits nodes in exactly the same order as the path-prefix search.
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
    // node -> parent; the start has none. Doubles as the visited set.
    let mut parents: HashMap<&'a G::Node, Option<&'a G::Node>> = HashMap::new();
    let mut queue: VecDeque<(&'a G::Node, usize)> = VecDeque::new();

    parents.insert(start, None);
    queue.push_back((start, 0));
    stats.max_frontier = 1;

    while let Some((node, depth)) = queue.pop_front() {
        if config.exhausted(depth) {
            continue;
        }

        for neighbor in graph.neighbors(node) {
            if neighbor == goal {
                stats.nodes_visited = parents.len();
                parents.insert(neighbor, Some(node));
                return Some(reconstruct(&parents, goal));
            }

            if let Entry::Vacant(slot) = parents.entry(neighbor) {
                slot.insert(Some(node));
                queue.push_back((neighbor, depth + 1));
                stats.max_frontier = stats.max_frontier.max(queue.len());
            }
        }
    }

    stats.nodes_visited = parents.len();
    None
}

/// Walk parent pointers from `goal` back to the start.
fn reconstruct<'a, N>(parents: &HashMap<&'a N, Option<&'a N>>, goal: &'a N) -> Vec<&'a N>
where
    N: Eq + std::hash::Hash,
{
    let mut path = vec![goal];
    let mut current = goal;

    while let Some(&Some(parent)) = parents.get(current) {
        path.push(parent);
        current = parent;
    }

    path.reverse();
    path
}
