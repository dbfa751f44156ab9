pub mod fallback;
pub mod matrix;
pub mod matrix_algorithm;

pub use fallback::{FallbackMode, FallbackParams, FallbackStats, compute_distance_matrix_with_fallback};
pub use matrix::DistanceMatrix;
pub use matrix_algorithm::{MatrixResult, compute_distance_matrix};
