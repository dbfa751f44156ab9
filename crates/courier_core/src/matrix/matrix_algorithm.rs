use std::time::Duration;

use fxhash::{FxHashMap, FxHashSet};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{debug, instrument};

use crate::dijkstra::DijkstraSearch;
use crate::error::MatrixError;
use crate::geopoint::GeoPoint;
use crate::graph::Graph;
use crate::stopwatch::Stopwatch;
use crate::types::{NodeId, Weight};

use super::matrix::DistanceMatrix;

pub struct MatrixResult {
    pub matrix: DistanceMatrix,
    pub visited_nodes: usize,
    pub duration: Duration,
}

struct SourceRow {
    distances: Vec<Weight>,
    geometries: Option<Vec<Option<Vec<GeoPoint>>>>,
    visited_nodes: usize,
}

/// Computes the full pairwise shortest-path matrix among `locations`.
///
/// One label-setting search per distinct source, run in parallel over the
/// shared immutable graph; each search terminates early once every requested
/// location is settled. Duplicate location ids are allowed and preserved
/// positionally.
#[instrument(skip_all, level = "debug", fields(locations = locations.len()))]
pub fn compute_distance_matrix<G>(
    graph: &G,
    locations: &[NodeId],
    include_geometry: bool,
) -> Result<MatrixResult, MatrixError>
where
    G: Graph + Sync,
{
    let stopwatch = Stopwatch::new("compute_distance_matrix");

    if locations.is_empty() {
        return Err(MatrixError::EmptyRequest);
    }

    for &location in locations {
        if !graph.contains_node(location) {
            return Err(MatrixError::UnknownNode(location));
        }
    }

    let num_locations = locations.len();
    let targets: FxHashSet<NodeId> = locations.iter().copied().collect();

    // Search once per distinct source, then fan results out to duplicate rows.
    let mut source_of_row: FxHashMap<NodeId, usize> = FxHashMap::default();
    let mut unique_sources: Vec<NodeId> = Vec::with_capacity(num_locations);
    for &location in locations {
        source_of_row.entry(location).or_insert_with(|| {
            unique_sources.push(location);
            unique_sources.len() - 1
        });
    }

    let rows: Vec<SourceRow> = unique_sources
        .par_iter()
        .map(|&source| {
            let mut search = DijkstraSearch::new();
            search.run(graph, source, &targets);

            let distances = locations
                .iter()
                .map(|&target| {
                    if target == source {
                        0.0
                    } else {
                        search.distance_to(target)
                    }
                })
                .collect();

            let geometries = include_geometry.then(|| {
                locations
                    .iter()
                    .map(|&target| {
                        if target == source {
                            None
                        } else {
                            search.path_geometry(graph, target)
                        }
                    })
                    .collect()
            });

            SourceRow {
                distances,
                geometries,
                visited_nodes: search.visited_nodes(),
            }
        })
        .collect();

    let visited_nodes = rows.iter().map(|row| row.visited_nodes).sum();

    let mut distances: Vec<Weight> = Vec::with_capacity(num_locations * num_locations);
    let mut geometries = include_geometry.then(Vec::new);

    for &location in locations {
        let row = &rows[source_of_row[&location]];
        distances.extend_from_slice(&row.distances);

        if let (Some(all), Some(row_geometries)) = (geometries.as_mut(), row.geometries.as_ref()) {
            all.extend(row_geometries.iter().cloned());
        }
    }

    let matrix = DistanceMatrix::from_parts(distances, geometries, num_locations);

    debug!(
        visited_nodes,
        sources = unique_sources.len(),
        "distance matrix computed"
    );
    stopwatch.report();

    Ok(MatrixResult {
        matrix,
        visited_nodes,
        duration: stopwatch.elapsed(),
    })
}
