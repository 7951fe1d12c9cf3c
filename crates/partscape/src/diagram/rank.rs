//! Rank assignment.
//!
//! Cycles are broken first: a depth-first search in discovery order marks
//! every edge that closes a cycle (including self-loops) as a back edge.
//! The remaining edges form a DAG, and each node's rank is the length of
//! the longest path reaching it from a source.

use std::collections::{BTreeSet, HashSet};

use log::debug;
use petgraph::{
    graph::{DiGraph, EdgeIndex, NodeIndex},
    visit::EdgeRef,
};

/// Ranks for every node, indexed by `NodeIndex::index()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    ranks: Vec<usize>,
    back_edges: HashSet<EdgeIndex>,
}

impl Ranking {
    pub fn rank(&self, node: NodeIndex) -> usize {
        self.ranks[node.index()]
    }

    pub fn ranks(&self) -> &[usize] {
        &self.ranks
    }

    /// Number of ranks in use.
    pub fn rank_count(&self) -> usize {
        self.ranks.iter().max().map_or(0, |&max| max + 1)
    }

    pub fn is_back_edge(&self, edge: EdgeIndex) -> bool {
        self.back_edges.contains(&edge)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    White,
    Gray,
    Black,
}

/// Assign a rank to every node. Terminates on any graph, cyclic or not.
pub fn assign_ranks<N, E>(graph: &DiGraph<N, E>) -> Ranking {
    let n = graph.node_count();

    // Outgoing edges per node in edge-index order.
    let mut outgoing: Vec<Vec<(EdgeIndex, NodeIndex)>> = vec![Vec::new(); n];
    let mut in_degree = vec![0usize; n];
    for edge in graph.edge_references() {
        outgoing[edge.source().index()].push((edge.id(), edge.target()));
        in_degree[edge.target().index()] += 1;
    }

    let back_edges = find_back_edges(&outgoing, &in_degree);
    if !back_edges.is_empty() {
        debug!(back_edges = back_edges.len(); "Wiring graph has cycles, ignoring back edges for ranking");
    }

    let ranks = longest_path(&outgoing, &back_edges);
    Ranking { ranks, back_edges }
}

fn find_back_edges(
    outgoing: &[Vec<(EdgeIndex, NodeIndex)>],
    in_degree: &[usize],
) -> HashSet<EdgeIndex> {
    let n = outgoing.len();
    let mut marks = vec![Mark::White; n];
    let mut back_edges = HashSet::new();

    // Sources first, then whatever is left inside pure cycles.
    let roots = (0..n)
        .filter(|&v| in_degree[v] == 0)
        .chain(0..n)
        .collect::<Vec<_>>();

    for root in roots {
        if marks[root] != Mark::White {
            continue;
        }
        marks[root] = Mark::Gray;
        // (node, position of the next outgoing edge to visit)
        let mut stack = vec![(root, 0usize)];

        while let Some(frame) = stack.last_mut() {
            let (node, next) = *frame;
            let Some(&(edge, target)) = outgoing[node].get(next) else {
                marks[node] = Mark::Black;
                stack.pop();
                continue;
            };
            frame.1 += 1;

            match marks[target.index()] {
                Mark::White => {
                    marks[target.index()] = Mark::Gray;
                    stack.push((target.index(), 0));
                }
                Mark::Gray => {
                    back_edges.insert(edge);
                }
                Mark::Black => {}
            }
        }
    }

    back_edges
}

/// Longest-path layering over the edges that are not back edges.
fn longest_path(
    outgoing: &[Vec<(EdgeIndex, NodeIndex)>],
    back_edges: &HashSet<EdgeIndex>,
) -> Vec<usize> {
    let n = outgoing.len();
    let mut remaining = vec![0usize; n];
    for edges in outgoing {
        for (edge, target) in edges {
            if !back_edges.contains(edge) {
                remaining[target.index()] += 1;
            }
        }
    }

    let mut ranks = vec![0usize; n];
    let mut ready: BTreeSet<usize> = (0..n).filter(|&v| remaining[v] == 0).collect();

    while let Some(node) = ready.pop_first() {
        for (edge, target) in &outgoing[node] {
            if back_edges.contains(edge) {
                continue;
            }
            let t = target.index();
            ranks[t] = ranks[t].max(ranks[node] + 1);
            remaining[t] -= 1;
            if remaining[t] == 0 {
                ready.insert(t);
            }
        }
    }

    ranks
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn graph(n: usize, edges: &[(usize, usize)]) -> DiGraph<(), ()> {
        let mut graph = DiGraph::new();
        let nodes: Vec<NodeIndex> = (0..n).map(|_| graph.add_node(())).collect();
        for &(a, b) in edges {
            graph.add_edge(nodes[a], nodes[b], ());
        }
        graph
    }

    #[test]
    fn test_chain() {
        let ranking = assign_ranks(&graph(3, &[(0, 1), (1, 2)]));
        assert_eq!(ranking.ranks(), &[0, 1, 2]);
        assert_eq!(ranking.rank_count(), 3);
    }

    #[test]
    fn test_longest_path_wins() {
        // 0 → 1 → 2 and a shortcut 0 → 2
        let ranking = assign_ranks(&graph(3, &[(0, 2), (0, 1), (1, 2)]));
        assert_eq!(ranking.ranks(), &[0, 1, 2]);
    }

    #[test]
    fn test_cycle_terminates() {
        let g = graph(3, &[(0, 1), (1, 2), (2, 0)]);
        let ranking = assign_ranks(&g);

        assert_eq!(ranking.ranks(), &[0, 1, 2]);
        assert!(ranking.is_back_edge(EdgeIndex::new(2)));
        assert!(!ranking.is_back_edge(EdgeIndex::new(0)));
    }

    #[test]
    fn test_cycle_behind_source() {
        // 0 → 1 ⇄ 2
        let ranking = assign_ranks(&graph(3, &[(0, 1), (1, 2), (2, 1)]));
        assert_eq!(ranking.ranks(), &[0, 1, 2]);
        assert!(ranking.is_back_edge(EdgeIndex::new(2)));
    }

    #[test]
    fn test_self_loop() {
        let ranking = assign_ranks(&graph(2, &[(0, 0), (0, 1)]));
        assert_eq!(ranking.ranks(), &[0, 1]);
        assert!(ranking.is_back_edge(EdgeIndex::new(0)));
    }

    #[test]
    fn test_empty_graph() {
        let ranking = assign_ranks(&graph(0, &[]));
        assert!(ranking.ranks().is_empty());
        assert_eq!(ranking.rank_count(), 0);
    }

    fn dag_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
        (2usize..12).prop_flat_map(|n| {
            let edge = (0..n, 0..n).prop_filter_map("forward edges only", |(a, b)| {
                (a < b).then_some((a, b))
            });
            (Just(n), prop::collection::vec(edge, 0..30))
        })
    }

    fn any_graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
        (1usize..12).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..30)))
    }

    proptest! {
        #[test]
        fn acyclic_edges_increase_rank((n, edges) in dag_strategy()) {
            let ranking = assign_ranks(&graph(n, &edges));
            for &(a, b) in &edges {
                prop_assert!(ranking.ranks()[b] > ranking.ranks()[a]);
            }
        }

        #[test]
        fn forward_edges_increase_rank_in_any_graph((n, edges) in any_graph_strategy()) {
            let g = graph(n, &edges);
            let ranking = assign_ranks(&g);
            prop_assert_eq!(ranking.ranks().len(), n);
            for edge in g.edge_references() {
                if !ranking.is_back_edge(edge.id()) {
                    prop_assert!(ranking.rank(edge.target()) > ranking.rank(edge.source()));
                }
            }
        }
    }
}
