pub mod constants;
pub mod dijkstra;
pub mod error;
pub mod geopoint;
pub mod graph;
pub mod matrix;
pub mod stopwatch;
pub mod types;

#[cfg(test)]
pub(crate) mod test_graph_utils;
