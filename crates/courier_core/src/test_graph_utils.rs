use crate::geopoint::GeoPoint;
use crate::graph::AdjacencyGraph;
use crate::types::NodeId;

/// Graph used across the matrix and search tests:
///
/// ```text
/// 0 --5--> 1 --3--> 2 --1--> 3
///  \__________10___/
/// ```
///
/// Every node sits at (lat = id, lng = 0) and every edge carries its endpoint
/// pair as geometry, so path reconstruction is easy to assert on.
pub fn shortcut_graph() -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::new(4);

    for node in 0..4 {
        graph
            .set_node_coordinate(node, GeoPoint::new(node as f64, 0.0))
            .unwrap();
    }

    for &(from, to, weight) in &[(0, 1, 5.0), (1, 2, 3.0), (0, 2, 10.0), (2, 3, 1.0)] {
        graph
            .add_edge(
                from,
                to,
                weight,
                vec![
                    GeoPoint::new(from as f64, 0.0),
                    GeoPoint::new(to as f64, 0.0),
                ],
            )
            .unwrap();
    }

    graph
}

/// Straight chain 0 -> 1 -> ... -> n-1 with uniform edge weight.
pub fn chain_graph(nodes: usize, weight: f64) -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::new(nodes);

    for node in 0..nodes - 1 {
        graph.add_edge(node, node + 1, weight, vec![]).unwrap();
    }

    graph
}

/// Bidirectional grid where node (row, col) maps to `row * cols + col` and
/// every step costs 1. Handy for triangle-inequality style assertions.
pub fn grid_graph(rows: usize, cols: usize) -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::new(rows * cols);

    let node = |row: usize, col: usize| -> NodeId { row * cols + col };

    for row in 0..rows {
        for col in 0..cols {
            if col + 1 < cols {
                graph.add_edge(node(row, col), node(row, col + 1), 1.0, vec![]).unwrap();
                graph.add_edge(node(row, col + 1), node(row, col), 1.0, vec![]).unwrap();
            }
            if row + 1 < rows {
                graph.add_edge(node(row, col), node(row + 1, col), 1.0, vec![]).unwrap();
                graph.add_edge(node(row + 1, col), node(row, col), 1.0, vec![]).unwrap();
            }
        }
    }

    graph
}
