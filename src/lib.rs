//! A minimal k-nearest-neighbors classifier.
//!
//! Given a labelled dataset of n-dimensional feature vectors and a query
//! point, [`knn`] predicts the query's label by majority vote among its
//! k closest examples under Euclidean distance. The whole crate is that
//! single routine plus its two helpers, [`euclidean_distance`] and
//! [`mode`]; there is no fitting, no persistence and no index structure.
//!
//! # Example
//!
//! Does a 33 year old like pineapple on pizza?
//!
//! ```
//! use nearest_neighbors::{knn, DataPoint};
//!
//! // (age, likes pineapple): 1 = likes, 0 = dislikes.
//! let data = vec![
//!     DataPoint::new(vec![22.0], 1),
//!     DataPoint::new(vec![23.0], 1),
//!     DataPoint::new(vec![21.0], 1),
//!     DataPoint::new(vec![18.0], 1),
//!     DataPoint::new(vec![19.0], 1),
//!     DataPoint::new(vec![25.0], 0),
//!     DataPoint::new(vec![27.0], 0),
//!     DataPoint::new(vec![29.0], 0),
//!     DataPoint::new(vec![31.0], 0),
//!     DataPoint::new(vec![45.0], 0),
//! ];
//!
//! let result = knn(&data, &[33.0], 3)?;
//! assert_eq!(result.label, 0);
//! assert_eq!(result.neighbors[0].index, 8); // age 31, distance 2.0
//! # Ok::<(), nearest_neighbors::KnnError>(())
//! ```

pub mod common_types;
pub mod error;
pub mod knn;

pub use common_types::{Classification, DataPoint, Neighbor};
pub use error::{KnnError, Result};
pub use knn::distance::euclidean_distance;
pub use knn::knn;
pub use knn::vote::mode;
