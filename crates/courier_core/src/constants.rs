use crate::types::{EdgeId, NodeId, Weight};

pub(crate) const INVALID_NODE: NodeId = usize::MAX;
pub(crate) const INVALID_EDGE: EdgeId = usize::MAX;

/// Sentinel for pairs with no connecting path.
pub const UNREACHABLE: Weight = f64::INFINITY;
