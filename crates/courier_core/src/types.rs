pub type NodeId = usize;
pub type EdgeId = usize;

/// Edge weights and accumulated path weights. Non-negative by construction.
pub type Weight = f64;
