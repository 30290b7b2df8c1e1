//! Euclidean (L2) distance between equal-length feature vectors.

use num_traits::{AsPrimitive, Float};

use crate::error::{KnnError, Result};

/// Calculates the Euclidean distance between two feature vectors.
///
/// Both slices must have the same length; a mismatch is a usage error and
/// is reported as [`KnnError::DimensionMismatch`] rather than silently
/// truncated to the shorter vector.
pub fn euclidean_distance<F>(a: &[F], b: &[F]) -> Result<f64>
where
    F: Float + AsPrimitive<f64>,
{
    if a.len() != b.len() {
        return Err(KnnError::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }

    let sum_squared: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let diff = (*x - *y).as_();
            diff * diff
        })
        .sum();
    Ok(sum_squared.sqrt())
}
