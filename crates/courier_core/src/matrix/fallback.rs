use tracing::{debug, warn};

use crate::error::MatrixError;
use crate::graph::Graph;
use crate::types::NodeId;

use super::matrix::DistanceMatrix;
use super::matrix_algorithm::{MatrixResult, compute_distance_matrix};

/// How unreachable pairs are patched after the exact searches finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackMode {
    /// Leave unreachable pairs as infinity.
    DirectedOnly,
    /// Reuse the reverse direction when it is reachable.
    Symmetric,
    /// Great-circle distance scaled by `distance_factor`.
    Haversine,
    /// Symmetric first, then haversine.
    #[default]
    Hybrid,
}

#[derive(Debug, Clone, Copy)]
pub struct FallbackParams {
    pub mode: FallbackMode,
    /// Multiplier applied to the great-circle distance to approximate a road
    /// distance.
    pub distance_factor: f64,
}

impl Default for FallbackParams {
    fn default() -> Self {
        FallbackParams {
            mode: FallbackMode::default(),
            distance_factor: 1.3,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FallbackStats {
    pub symmetric: usize,
    pub haversine: usize,
}

impl FallbackStats {
    pub fn total(&self) -> usize {
        self.symmetric + self.haversine
    }
}

/// Computes the distance matrix and patches unreachable pairs per
/// `FallbackParams`. Patched entries carry no path geometry.
pub fn compute_distance_matrix_with_fallback<G>(
    graph: &G,
    locations: &[NodeId],
    include_geometry: bool,
    params: FallbackParams,
) -> Result<(MatrixResult, FallbackStats), MatrixError>
where
    G: Graph + Sync,
{
    let mut result = compute_distance_matrix(graph, locations, include_geometry)?;
    let stats = apply_fallbacks(graph, locations, &mut result.matrix, params);

    if stats.total() > 0 {
        debug!(
            symmetric = stats.symmetric,
            haversine = stats.haversine,
            mode = ?params.mode,
            "applied matrix fallbacks"
        );
    }

    Ok((result, stats))
}

fn apply_fallbacks<G>(
    graph: &G,
    locations: &[NodeId],
    matrix: &mut DistanceMatrix,
    params: FallbackParams,
) -> FallbackStats
where
    G: Graph,
{
    let mut stats = FallbackStats::default();

    if params.mode == FallbackMode::DirectedOnly {
        return stats;
    }

    let n = matrix.num_locations();
    let use_symmetric = matches!(params.mode, FallbackMode::Symmetric | FallbackMode::Hybrid);
    let use_haversine = matches!(params.mode, FallbackMode::Haversine | FallbackMode::Hybrid);

    for from in 0..n {
        for to in 0..n {
            if from == to || matrix.is_reachable(from, to) {
                continue;
            }

            if use_symmetric && matrix.is_reachable(to, from) {
                matrix.update_entry(from, to, matrix.distance(to, from));
                stats.symmetric += 1;
                continue;
            }

            if use_haversine {
                let from_coord = graph.node_coordinate(locations[from]);
                let to_coord = graph.node_coordinate(locations[to]);

                match (from_coord, to_coord) {
                    (Some(a), Some(b)) => {
                        let distance = a.haversine_distance(&b) * params.distance_factor;
                        matrix.update_entry(from, to, distance);
                        stats.haversine += 1;
                    }
                    _ => warn!(
                        from = locations[from],
                        to = locations[to],
                        "haversine fallback skipped, node coordinates missing"
                    ),
                }
            }
        }
    }

    stats
}
