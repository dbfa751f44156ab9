use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fxhash::{FxHashMap, FxHashSet};

use crate::constants::{INVALID_EDGE, INVALID_NODE, UNREACHABLE};
use crate::geopoint::GeoPoint;
use crate::graph::Graph;
use crate::types::{EdgeId, NodeId, Weight};

#[derive(Copy, Clone, Debug)]
struct HeapItem {
    node_id: NodeId,
    weight: Weight,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.weight == other.weight && self.node_id == other.node_id
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip weight to make this a min-heap. Equal-weight entries settle
        // lowest node id first, which fixes the tie-break policy for equal
        // shortest paths.
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.node_id.cmp(&self.node_id))
    }
}

struct NodeData {
    weight: Weight,
    settled: bool,
    parent: NodeId,
    // Edge taken from parent into this node
    edge_id: EdgeId,
}

impl NodeData {
    fn new() -> Self {
        NodeData {
            weight: UNREACHABLE,
            settled: false,
            parent: INVALID_NODE,
            edge_id: INVALID_EDGE,
        }
    }
}

/// Single-source label-setting search. State is allocated fresh per search so
/// parallel per-source searches never share mutable state.
///
/// The search stops as soon as every requested target is settled instead of
/// exhausting the graph, which is what keeps large-graph matrix requests fast.
pub struct DijkstraSearch {
    heap: BinaryHeap<HeapItem>,

    // A HashMap rather than a dense vector: graphs can be far larger than the
    // region a single search actually touches.
    data: FxHashMap<NodeId, NodeData>,

    visited_nodes: usize,
}

impl DijkstraSearch {
    pub fn new() -> Self {
        DijkstraSearch {
            heap: BinaryHeap::with_capacity(1024),
            data: FxHashMap::default(),
            visited_nodes: 0,
        }
    }

    pub fn run(&mut self, graph: &impl Graph, source: NodeId, targets: &FxHashSet<NodeId>) {
        let mut remaining = targets.clone();
        remaining.remove(&source);

        self.heap.push(HeapItem {
            node_id: source,
            weight: 0.0,
        });
        self.update_node_data(source, 0.0, INVALID_NODE, INVALID_EDGE);

        while let Some(HeapItem { node_id, weight }) = self.heap.pop() {
            if self.is_settled(node_id) {
                continue;
            }

            // Stale heap entry, a shorter label was already pushed
            if weight > self.current_shortest_weight(node_id) {
                continue;
            }

            self.set_settled(node_id);
            self.visited_nodes += 1;

            remaining.remove(&node_id);

            // Covers the degenerate case where the source was the only
            // target, otherwise the search would exhaust its whole component.
            if remaining.is_empty() {
                break;
            }

            for edge_id in graph.node_outgoing_edges_iter(node_id) {
                let edge = graph.edge(edge_id);
                let adj_node = edge.end_node();

                if self.is_settled(adj_node) {
                    continue;
                }

                let next_weight = weight + edge.weight();

                if next_weight < self.current_shortest_weight(adj_node) {
                    self.update_node_data(adj_node, next_weight, node_id, edge_id);
                    self.heap.push(HeapItem {
                        node_id: adj_node,
                        weight: next_weight,
                    });
                }
            }
        }
    }

    /// Shortest distance from the search source, or the unreachable sentinel.
    pub fn distance_to(&self, node: NodeId) -> Weight {
        self.data
            .get(&node)
            .filter(|data| data.settled)
            .map(|data| data.weight)
            .unwrap_or(UNREACHABLE)
    }

    pub fn visited_nodes(&self) -> usize {
        self.visited_nodes
    }

    /// Reconstructs the geometry of the shortest path into `target` by
    /// walking the parent pointers and concatenating edge geometries.
    pub fn path_geometry(&self, graph: &impl Graph, target: NodeId) -> Option<Vec<GeoPoint>> {
        let data = self.data.get(&target).filter(|data| data.settled)?;

        let mut segments: Vec<&[GeoPoint]> = Vec::with_capacity(32);
        let mut data = data;

        while data.parent != INVALID_NODE {
            segments.push(graph.edge_geometry(data.edge_id));
            data = self.data.get(&data.parent)?;
        }

        segments.reverse();

        Some(segments.into_iter().flatten().copied().collect())
    }

    fn update_node_data(&mut self, node: NodeId, weight: Weight, parent: NodeId, edge_id: EdgeId) {
        let data = self.data.entry(node).or_insert_with(NodeData::new);
        data.weight = weight;
        data.settled = false;
        data.parent = parent;
        data.edge_id = edge_id;
    }

    #[inline(always)]
    fn set_settled(&mut self, node: NodeId) {
        if let Some(data) = self.data.get_mut(&node) {
            data.settled = true;
        }
    }

    #[inline(always)]
    fn is_settled(&self, node: NodeId) -> bool {
        self.data.get(&node).map(|data| data.settled).unwrap_or(false)
    }

    #[inline(always)]
    fn current_shortest_weight(&self, node: NodeId) -> Weight {
        self.data
            .get(&node)
            .map(|data| data.weight)
            .unwrap_or(UNREACHABLE)
    }
}

impl Default for DijkstraSearch {
    fn default() -> Self {
        Self::new()
    }
}
