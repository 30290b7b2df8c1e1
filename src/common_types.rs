//! Common data structures shared by the nearest-neighbor routines.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents a single labelled example, with features and a label.
///
/// - `F`: The type of the features (e.g., `f64`, `f32`).
/// - `L`: The type of the label (e.g., `i32`, `String`, an enum).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DataPoint<F, L> {
    pub features: Vec<F>,
    pub label: L,
}

impl<F, L> DataPoint<F, L> {
    pub fn new(features: Vec<F>, label: L) -> Self {
        DataPoint { features, label }
    }
}

/// Distance from a query to one dataset point, tagged with the point's
/// position in the dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Neighbor {
    pub distance: f64,
    pub index: usize,
}

/// The outcome of a single classification call: the chosen neighbors in
/// ascending distance order, and the majority-vote label.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Classification<L> {
    pub neighbors: Vec<Neighbor>,
    pub label: L,
}
