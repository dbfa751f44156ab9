use crate::define_index_newtype;

// Index into the distance matrix. The depot is location 0 by convention,
// stops are 1..N-1.
define_index_newtype!(LocationIdx);

pub const DEPOT: LocationIdx = LocationIdx::new(0);
