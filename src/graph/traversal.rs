//! Level-order traversal over any [`Adjacency`].

use std::collections::{HashMap, VecDeque};

use crate::graph::access::visited::VisitedSet;
use crate::graph::Adjacency;

/// An iterator for Breadth-First Search (BFS).
///
/// Yields `(node, depth)` pairs in BFS order, starting with `(start, 0)`.
/// Neighbors are visited in list order, and each node is yielded once at its
/// minimum depth. A `start` that is not a key of the graph yields nothing.
pub struct Bfs<'a, G>
where
    G: Adjacency + ?Sized,
{
    graph: &'a G,
    visited: VisitedSet<'a, G::Node>,
    queue: VecDeque<(&'a G::Node, usize)>,
}

impl<'a, G> Bfs<'a, G>
where
    G: Adjacency + ?Sized,
{
    /// Creates a new BFS iterator starting from `start`.
    pub fn new(graph: &'a G, start: &'a G::Node) -> Self {
        let mut visited = VisitedSet::with_capacity(graph.node_count());
        let mut queue = VecDeque::new();

        if graph.contains_node(start) {
            visited.try_visit(start);
            queue.push_back((start, 0));
        }

        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl<'a, G> Iterator for Bfs<'a, G>
where
    G: Adjacency + ?Sized,
{
    type Item = (&'a G::Node, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.queue.pop_front()?;

        for neighbor in self.graph.neighbors(node) {
            if self.visited.try_visit(neighbor) {
                self.queue.push_back((neighbor, depth + 1));
            }
        }

        Some((node, depth))
    }
}

/// Computes the hop distance from `start` to every node it can reach.
///
/// `start` maps to `0`. Neighbor-only nodes that are reachable are included.
/// Returns an empty map when `start` is not a key of the graph.
pub fn bfs_distances<G>(graph: &G, start: &G::Node) -> HashMap<G::Node, usize>
where
    G: Adjacency + ?Sized,
    G::Node: Clone,
{
    Bfs::new(graph, start)
        .map(|(node, depth)| (node.clone(), depth))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bfs_yields_level_order() {
        // 0 -> 1,2 ; 1 -> 3 ; 2 -> 3 ; 3 -> 0
        let adj: Vec<Vec<usize>> = vec![vec![1, 2], vec![3], vec![3], vec![0]];

        let order: Vec<_> = Bfs::new(&adj, &0).map(|(n, d)| (*n, d)).collect();
        assert_eq!(order, vec![(0, 0), (1, 1), (2, 1), (3, 2)]);
    }

    #[test]
    fn bfs_from_unknown_start_is_empty() {
        let adj: Vec<Vec<usize>> = vec![vec![5]];
        assert_eq!(Bfs::new(&adj, &5).count(), 0);
        assert!(bfs_distances(&adj, &9).is_empty());
    }

    #[test]
    fn distances_include_neighbor_only_nodes() {
        let mut graph = HashMap::new();
        graph.insert("root", vec!["leaf", "mid"]);
        graph.insert("mid", vec!["deep"]);

        let dist = bfs_distances(&graph, &"root");
        assert_eq!(dist.len(), 4);
        assert_eq!(dist["root"], 0);
        assert_eq!(dist["leaf"], 1);
        assert_eq!(dist["deep"], 2);
    }
}
