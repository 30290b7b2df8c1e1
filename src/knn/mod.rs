//! K-nearest-neighbors classification.
//!
//! The classifier is a single stateless routine: compute the distance
//! from the query to every dataset point, rank ascending, take the k
//! closest and majority-vote on their labels. There is no fitting step
//! and no index structure; every call is a pure function of
//! `(data, query, k)`.

pub mod distance;
pub mod vote;

use num_traits::{AsPrimitive, Float};
use ordered_float::OrderedFloat;

use crate::common_types::{Classification, DataPoint, Neighbor};
use crate::error::{KnnError, Result};
use self::distance::euclidean_distance;
use self::vote::mode;

/// Classifies `query` by majority vote among its `k` nearest neighbors
/// in `data` under Euclidean distance.
///
/// The returned neighbors are in ascending distance order; equidistant
/// points keep their dataset order. If `k` exceeds the dataset size the
/// vote simply uses every point, matching the reference behavior of
/// slice truncation rather than failing.
///
/// # Errors
///
/// - [`KnnError::InvalidK`] if `k` is zero.
/// - [`KnnError::EmptyInput`] if `data` is empty.
/// - [`KnnError::DimensionMismatch`] if any point's feature vector
///   disagrees in length with `query`.
pub fn knn<F, L>(data: &[DataPoint<F, L>], query: &[F], k: usize) -> Result<Classification<L>>
where
    F: Float + AsPrimitive<f64>,
    L: Clone + PartialEq,
{
    if k == 0 {
        return Err(KnnError::InvalidK { k });
    }
    if data.is_empty() {
        return Err(KnnError::EmptyInput);
    }

    let mut neighbors = Vec::with_capacity(data.len());
    for (index, point) in data.iter().enumerate() {
        let distance = euclidean_distance(query, &point.features)?;
        neighbors.push(Neighbor { distance, index });
    }

    // Stable sort, so equidistant points keep their dataset order.
    neighbors.sort_by_key(|n| OrderedFloat(n.distance));
    neighbors.truncate(k);

    let labels: Vec<L> = neighbors
        .iter()
        .map(|n| data[n.index].label.clone())
        .collect();
    let label = mode(&labels)?;

    Ok(Classification { neighbors, label })
}
