//! Layered wiring diagram.
//!
//! The diagram is laid out left to right in four phases:
//!
//! 1. ranking - break cycles and assign longest-path ranks ([`assign_ranks`])
//! 2. ordering - insert dummy slots and reduce crossings within ranks ([`Layers`])
//! 3. positioning - slot centers from the fixed node box and spacing
//!    ([`assign_coordinates`])
//! 4. anchor conversion - nodes are reported by their top-left corner
//!
//! Node identity is the trimmed part reference of a connection, so two
//! connections naming the same part collapse onto one node.

mod graph;
mod order;
mod position;
mod rank;

use log::info;

use partscape_core::{
    geometry::Point,
    model::{Part, WireConnection},
};

use crate::{
    config::DiagramConfig,
    scene::{DiagramEdge, DiagramNode, DiagramScene},
};

pub use graph::{NodeColors, WiringEdge, WiringGraph, WiringNode};
pub use order::{Layers, Slot};
pub use position::{Coordinates, assign_coordinates};
pub use rank::{Ranking, assign_ranks};

/// Lay out the wiring diagram for a connection list.
///
/// # Examples
///
/// ```
/// use partscape::{config::DiagramConfig, diagram::layout_diagram};
/// use partscape_core::model::{Part, WireConnection};
///
/// let parts = vec![Part::new("ESP32").with_kind("microcontroller")];
/// let wiring = vec![WireConnection::new("ESP32", "Relay")];
///
/// let diagram = layout_diagram(&wiring, &parts, &DiagramConfig::default());
/// assert_eq!(diagram.nodes.len(), 2);
/// assert_eq!(diagram.nodes[0].color, "#3b82f6");
/// assert!(diagram.nodes[1].rank > diagram.nodes[0].rank);
/// ```
pub fn layout_diagram(
    connections: &[WireConnection],
    parts: &[Part],
    config: &DiagramConfig,
) -> DiagramScene {
    let wiring = WiringGraph::from_connections(connections, parts);
    let graph = wiring.graph();

    let ranking = assign_ranks(graph);
    let mut layers = Layers::new(graph, &ranking);
    layers.minimize_crossings(config.ordering_sweeps());
    let coordinates = assign_coordinates(&layers, config);

    let size = config.node_size();
    let half = size.half_extent();

    let nodes: Vec<DiagramNode> = wiring
        .nodes()
        .map(|(idx, node)| {
            let top_left = coordinates.center(idx.index()).sub_point(half);
            DiagramNode {
                id: node.id.clone(),
                label: node.id.clone(),
                x: top_left.x(),
                y: top_left.y(),
                width: size.width(),
                height: size.height(),
                color: node.colors.fill.to_string(),
                border_color: node.colors.border.to_string(),
                rank: ranking.rank(idx),
            }
        })
        .collect();

    let edges: Vec<DiagramEdge> = wiring
        .edges()
        .map(|(idx, source, target, edge)| {
            let chain = layers.chain(idx.index());
            let interior = chain
                .iter()
                .skip(1)
                .take(chain.len().saturating_sub(2))
                .map(|&slot| coordinates.center(slot));

            let start = coordinates
                .center(source.index())
                .add_point(Point::new(half.x(), 0.0));
            let end = coordinates
                .center(target.index())
                .sub_point(Point::new(half.x(), 0.0));

            DiagramEdge {
                id: edge.id.clone(),
                source: graph[source].id.clone(),
                target: graph[target].id.clone(),
                label: edge.label.clone(),
                color: edge.color.clone(),
                arrow_head: true,
                points: std::iter::once(start)
                    .chain(interior)
                    .chain(std::iter::once(end))
                    .collect(),
            }
        })
        .collect();

    info!(
        nodes = nodes.len(),
        edges = edges.len(),
        ranks = ranking.rank_count();
        "Laid out wiring diagram"
    );

    DiagramScene {
        nodes,
        edges,
        size: coordinates.size(),
    }
}
