//! Coordinate assignment.
//!
//! Ranks advance along the x-axis; within a rank, slots stack along the
//! y-axis and the stack is centered against the tallest rank. Dummy slots
//! have no height but keep their spacing, which leaves room for the long
//! edges routed through them.

use partscape_core::geometry::{Point, Size};

use super::order::{Layers, Slot};
use crate::config::DiagramConfig;

/// Slot centers and the overall extent of the diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinates {
    centers: Vec<Point>,
    size: Size,
}

impl Coordinates {
    /// Center of the given slot.
    pub fn center(&self, slot: usize) -> Point {
        self.centers[slot]
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

pub fn assign_coordinates(layers: &Layers, config: &DiagramConfig) -> Coordinates {
    let node = config.node_size();
    let slot_height = |slot: usize| match layers.slot(slot) {
        Slot::Node(_) => node.height(),
        Slot::Dummy => 0.0,
    };

    let rank_heights: Vec<f32> = layers
        .ranks()
        .iter()
        .map(|rank| {
            let boxes: f32 = rank.iter().map(|&slot| slot_height(slot)).sum();
            let gaps = rank.len().saturating_sub(1) as f32 * config.node_spacing();
            boxes + gaps
        })
        .collect();
    let height = rank_heights.iter().copied().fold(0.0, f32::max);

    let slot_count = layers.ranks().iter().map(Vec::len).sum();
    let mut centers = vec![Point::default(); slot_count];

    for (rank, slots) in layers.ranks().iter().enumerate() {
        let x = rank as f32 * (node.width() + config.rank_spacing()) + node.width() / 2.0;
        let mut y = (height - rank_heights[rank]) / 2.0;
        for &slot in slots {
            let h = slot_height(slot);
            centers[slot] = Point::new(x, y + h / 2.0);
            y += h + config.node_spacing();
        }
    }

    let rank_count = layers.ranks().len();
    let width = if rank_count == 0 {
        0.0
    } else {
        rank_count as f32 * node.width() + (rank_count - 1) as f32 * config.rank_spacing()
    };

    Coordinates {
        centers,
        size: Size::new(width, height),
    }
}

#[cfg(test)]
mod tests {
    use petgraph::graph::{DiGraph, NodeIndex};

    use super::*;
    use crate::diagram::rank::assign_ranks;

    fn coordinates(n: usize, edges: &[(usize, usize)]) -> Coordinates {
        let mut graph: DiGraph<(), ()> = DiGraph::new();
        let nodes: Vec<NodeIndex> = (0..n).map(|_| graph.add_node(())).collect();
        for &(a, b) in edges {
            graph.add_edge(nodes[a], nodes[b], ());
        }
        let layers = Layers::new(&graph, &assign_ranks(&graph));
        assign_coordinates(&layers, &DiagramConfig::default())
    }

    #[test]
    fn test_ranks_advance_along_x() {
        let coords = coordinates(2, &[(0, 1)]);
        assert_eq!(coords.center(0), Point::new(90.0, 40.0));
        assert_eq!(coords.center(1), Point::new(320.0, 40.0));
        assert_eq!(coords.size(), Size::new(410.0, 80.0));
    }

    #[test]
    fn test_short_rank_is_centered() {
        // One source feeding two sinks
        let coords = coordinates(3, &[(0, 1), (0, 2)]);
        assert_eq!(coords.size().height(), 210.0);
        assert_eq!(coords.center(0).y(), 105.0);
        assert_eq!(coords.center(1).y(), 40.0);
        assert_eq!(coords.center(2).y(), 170.0);
    }

    #[test]
    fn test_dummy_slot_takes_spacing_only() {
        // 0 → 1 → 2 and 0 → 2; rank 1 holds node 1 and one dummy
        let coords = coordinates(3, &[(0, 1), (1, 2), (0, 2)]);
        assert_eq!(coords.size().height(), 130.0);
        assert_eq!(coords.center(1).y(), 40.0);
        assert_eq!(coords.center(3), Point::new(320.0, 130.0));
    }

    #[test]
    fn test_empty() {
        let coords = coordinates(0, &[]);
        assert_eq!(coords.size(), Size::new(0.0, 0.0));
    }
}
