use crate::error::GraphError;
use crate::geopoint::GeoPoint;
use crate::types::{EdgeId, NodeId, Weight};

pub struct GraphEdge {
    start_node: NodeId,
    end_node: NodeId,
    weight: Weight,
}

impl GraphEdge {
    pub fn start_node(&self) -> NodeId {
        self.start_node
    }

    pub fn end_node(&self) -> NodeId {
        self.end_node
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}

/// Capability interface the search and matrix layers depend on. The graph
/// representation (in-memory adjacency, memory-mapped storage) can vary
/// without touching the routing logic.
pub trait Graph {
    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    fn contains_node(&self, node: NodeId) -> bool;

    fn node_outgoing_edges_iter(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_;

    fn edge(&self, edge_id: EdgeId) -> &GraphEdge;

    fn edge_geometry(&self, edge_id: EdgeId) -> &[GeoPoint];

    /// Coordinate of a node, when the graph carries them. Only needed for
    /// the haversine fallback of the matrix layer.
    fn node_coordinate(&self, node: NodeId) -> Option<GeoPoint> {
        let _ = node;
        None
    }
}

/// Directed weighted graph backed by a flat edge list and per-node outgoing
/// adjacency. Built once by the graph-loading collaborator, then shared
/// read-only across requests.
pub struct AdjacencyGraph {
    nodes: usize,
    edges: Vec<GraphEdge>,
    geometry: Vec<Vec<GeoPoint>>,
    coordinates: Vec<Option<GeoPoint>>,
    adjacency_list: Vec<Vec<EdgeId>>,
}

impl AdjacencyGraph {
    pub fn new(nodes: usize) -> Self {
        AdjacencyGraph {
            nodes,
            edges: Vec::new(),
            geometry: Vec::new(),
            coordinates: vec![None; nodes],
            adjacency_list: vec![vec![]; nodes],
        }
    }

    pub fn set_node_coordinate(&mut self, node: NodeId, point: GeoPoint) -> Result<(), GraphError> {
        if node >= self.nodes {
            return Err(GraphError::NodeOutOfRange(node));
        }

        self.coordinates[node] = Some(point);
        Ok(())
    }

    pub fn add_edge(
        &mut self,
        from_node: NodeId,
        to_node: NodeId,
        weight: Weight,
        geometry: Vec<GeoPoint>,
    ) -> Result<EdgeId, GraphError> {
        if from_node >= self.nodes {
            return Err(GraphError::NodeOutOfRange(from_node));
        }

        if to_node >= self.nodes {
            return Err(GraphError::NodeOutOfRange(to_node));
        }

        // Label-setting search requires non-negative weights
        if weight < 0.0 || weight.is_nan() {
            return Err(GraphError::NegativeWeight {
                from: from_node,
                to: to_node,
                weight,
            });
        }

        let edge_id = self.edges.len();
        self.edges.push(GraphEdge {
            start_node: from_node,
            end_node: to_node,
            weight,
        });
        self.geometry.push(geometry);
        self.adjacency_list[from_node].push(edge_id);

        Ok(edge_id)
    }
}

impl Graph for AdjacencyGraph {
    fn node_count(&self) -> usize {
        self.nodes
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn contains_node(&self, node: NodeId) -> bool {
        node < self.nodes
    }

    fn node_outgoing_edges_iter(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.adjacency_list[node].iter().copied()
    }

    fn edge(&self, edge_id: EdgeId) -> &GraphEdge {
        &self.edges[edge_id]
    }

    fn edge_geometry(&self, edge_id: EdgeId) -> &[GeoPoint] {
        &self.geometry[edge_id]
    }

    fn node_coordinate(&self, node: NodeId) -> Option<GeoPoint> {
        self.coordinates[node]
    }
}
