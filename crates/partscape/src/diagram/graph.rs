//! Wiring graph extraction.

use indexmap::IndexMap;
use log::debug;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};

use partscape_core::model::{Part, WireConnection};

/// Edge color for connections without a wire color.
const DEFAULT_EDGE_COLOR: &str = "#888888";
/// Shown in place of a missing pin label.
const UNKNOWN_PIN: &str = "?";

/// Node fill and border colors keyed by part type fragments.
const PALETTE: &[(&str, NodeColors)] = &[
    ("microcontroller", NodeColors::new("#3b82f6", "#1e3a8a")),
    ("sensor", NodeColors::new("#10b981", "#064e3b")),
    ("actuator", NodeColors::new("#f59e0b", "#78350f")),
    ("power", NodeColors::new("#ef4444", "#7f1d1d")),
];
const NEUTRAL: NodeColors = NodeColors::new("#ffffff", "#333333");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeColors {
    pub fill: &'static str,
    pub border: &'static str,
}

impl NodeColors {
    const fn new(fill: &'static str, border: &'static str) -> Self {
        Self { fill, border }
    }
}

/// A diagram node: one distinct trimmed part reference.
#[derive(Debug, Clone, PartialEq)]
pub struct WiringNode {
    pub id: String,
    pub colors: NodeColors,
}

/// A diagram edge: one connection.
#[derive(Debug, Clone, PartialEq)]
pub struct WiringEdge {
    pub id: String,
    pub label: String,
    pub color: String,
}

/// Directed graph of the wiring.
///
/// Node indices follow discovery order and edge indices follow connection
/// order, which the layout relies on for deterministic tie-breaking.
#[derive(Debug, Default)]
pub struct WiringGraph {
    graph: DiGraph<WiringNode, WiringEdge>,
}

impl WiringGraph {
    /// Extract nodes and edges from the connection list.
    pub fn from_connections(connections: &[WireConnection], parts: &[Part]) -> Self {
        let mut graph = DiGraph::new();
        let mut nodes: IndexMap<String, NodeIndex> = IndexMap::new();

        for (index, connection) in connections.iter().enumerate() {
            let from = connection.from_part.trim();
            let to = connection.to_part.trim();
            if from.is_empty() || to.is_empty() {
                debug!(index = index, from = from, to = to; "Skipping connection with an empty endpoint");
                continue;
            }

            let mut node = |id: &str| {
                *nodes.entry(id.to_string()).or_insert_with(|| {
                    graph.add_node(WiringNode {
                        id: id.to_string(),
                        colors: node_colors(id, parts),
                    })
                })
            };
            let source = node(from);
            let target = node(to);

            graph.add_edge(
                source,
                target,
                WiringEdge {
                    id: format!("e-{index}"),
                    label: format!(
                        "{} → {}",
                        connection.from_pin.as_deref().unwrap_or(UNKNOWN_PIN),
                        connection.to_pin.as_deref().unwrap_or(UNKNOWN_PIN)
                    ),
                    color: connection
                        .wire_color
                        .clone()
                        .unwrap_or_else(|| DEFAULT_EDGE_COLOR.to_string()),
                },
            );
        }

        Self { graph }
    }

    pub fn graph(&self) -> &DiGraph<WiringNode, WiringEdge> {
        &self.graph
    }

    /// Nodes in discovery order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &WiringNode)> {
        self.graph
            .node_indices()
            .map(move |idx| (idx, &self.graph[idx]))
    }

    /// Edges in connection order, as `(index, source, target, edge)`.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeIndex, NodeIndex, NodeIndex, &WiringEdge)> {
        self.graph.edge_indices().filter_map(move |idx| {
            let (source, target) = self.graph.edge_endpoints(idx)?;
            Some((idx, source, target, &self.graph[idx]))
        })
    }
}

/// Colors for a node, from the first part whose name overlaps the reference.
fn node_colors(id: &str, parts: &[Part]) -> NodeColors {
    let Some(part) = parts
        .iter()
        .find(|part| !part.name.is_empty() && (id.contains(&part.name) || part.name.contains(id)))
    else {
        return NEUTRAL;
    };

    let kind = part.kind_lowercase();
    PALETTE
        .iter()
        .find(|(fragment, _)| kind.contains(fragment))
        .map(|&(_, colors)| colors)
        .unwrap_or(NEUTRAL)
}
