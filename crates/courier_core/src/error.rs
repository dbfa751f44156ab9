use thiserror::Error;

use crate::types::NodeId;

#[derive(Error, Debug, PartialEq)]
pub enum MatrixError {
    #[error("node {0} is not part of the graph")]
    UnknownNode(NodeId),
    #[error("matrix request contains no locations")]
    EmptyRequest,
}

#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("edge weight {weight} from node {from} to node {to} is negative")]
    NegativeWeight { from: NodeId, to: NodeId, weight: f64 },
    #[error("node {0} is out of range for this graph")]
    NodeOutOfRange(NodeId),
}
