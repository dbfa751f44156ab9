use serde::Serialize;

use crate::geopoint::GeoPoint;
use crate::types::Weight;

type PathGeometry = Vec<GeoPoint>;

/// Pairwise shortest-path distances between the requested locations, stored
/// flat in row-major order: `index = from * num_locations + to`.
///
/// Unreachable pairs hold the infinity sentinel; the diagonal is always zero.
/// Immutable once handed to a caller.
#[derive(Debug, Serialize)]
pub struct DistanceMatrix {
    distances: Vec<Weight>,
    geometries: Option<Vec<Option<PathGeometry>>>,
    num_locations: usize,
}

impl DistanceMatrix {
    pub(crate) fn from_parts(
        distances: Vec<Weight>,
        geometries: Option<Vec<Option<PathGeometry>>>,
        num_locations: usize,
    ) -> Self {
        debug_assert_eq!(distances.len(), num_locations * num_locations);

        DistanceMatrix {
            distances,
            geometries,
            num_locations,
        }
    }

    /// Builds a matrix from nested rows. Intended for callers that already
    /// hold precomputed distances (tests, external matrix providers).
    pub fn from_rows(rows: Vec<Vec<Weight>>) -> Self {
        let num_locations = rows.len();

        for row in &rows {
            assert_eq!(
                row.len(),
                num_locations,
                "distance matrix rows must be square"
            );
        }

        DistanceMatrix {
            distances: rows.into_iter().flatten().collect(),
            geometries: None,
            num_locations,
        }
    }

    #[inline(always)]
    fn index(&self, from: usize, to: usize) -> usize {
        from * self.num_locations + to
    }

    #[inline(always)]
    pub fn distance(&self, from: usize, to: usize) -> Weight {
        self.distances[self.index(from, to)]
    }

    #[inline(always)]
    pub fn is_reachable(&self, from: usize, to: usize) -> bool {
        self.distance(from, to).is_finite()
    }

    pub fn geometry(&self, from: usize, to: usize) -> Option<&[GeoPoint]> {
        let index = self.index(from, to);
        self.geometries
            .as_ref()
            .and_then(|geometries| geometries[index].as_deref())
    }

    pub fn has_geometry(&self) -> bool {
        self.geometries.is_some()
    }

    pub fn num_locations(&self) -> usize {
        self.num_locations
    }

    pub fn is_symmetric(&self) -> bool {
        for from in 0..self.num_locations {
            for to in 0..from {
                if self.distance(from, to) != self.distance(to, from) {
                    return false;
                }
            }
        }

        true
    }

    pub(crate) fn update_entry(&mut self, from: usize, to: usize, distance: Weight) {
        let index = self.index(from, to);
        self.distances[index] = distance;
    }
}
