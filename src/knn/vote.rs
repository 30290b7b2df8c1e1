//! Majority vote over neighbor labels.

use crate::error::{KnnError, Result};

/// Returns the most frequent label in `labels`.
///
/// Counts are accumulated in a single left-to-right pass over an
/// insertion-ordered table, so when several labels tie for the highest
/// count the one encountered first wins. An unordered hash aggregation
/// would not reproduce that tie-break.
pub fn mode<L>(labels: &[L]) -> Result<L>
where
    L: Clone + PartialEq,
{
    if labels.is_empty() {
        return Err(KnnError::EmptyInput);
    }

    let mut counts: Vec<(L, usize)> = Vec::new();
    for label in labels {
        match counts.iter_mut().find(|(seen, _)| seen == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label.clone(), 1)),
        }
    }

    // Strictly-greater comparison keeps the earliest entry on ties.
    let mut best = 0;
    for i in 1..counts.len() {
        if counts[i].1 > counts[best].1 {
            best = i;
        }
    }
    Ok(counts.swap_remove(best).0)
}
