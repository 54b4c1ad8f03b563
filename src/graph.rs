//! Edge-list symmetrization
//!
//! The classifier is trained on an undirected notion of connectivity, so
//! every directed message-passing edge must be evaluated in both directions
//! before the decision function is applied. Symmetrization doubles the edge
//! list: the original columns first, then the same columns with source and
//! destination swapped.

use ndarray::{s, Array2, Axis};

/// Symmetrize a directed edge list.
///
/// Input shape `(2, E)`, output shape `(2, 2E)`: the original `E` columns
/// followed by their reversed counterparts, order-preserving within each
/// half. Pure; no failure modes.
///
/// # Examples
///
/// ```rust
/// use edgescore::graph::symmetrize;
/// use ndarray::arr2;
///
/// let edges = arr2(&[[0, 1], [1, 2]]);
/// let doubled = symmetrize(&edges);
/// assert_eq!(doubled, arr2(&[[0, 1, 1, 2], [1, 2, 0, 1]]));
/// ```
#[must_use]
pub fn symmetrize(edge_index: &Array2<i64>) -> Array2<i64> {
    let reversed = edge_index.slice(s![..;-1, ..]);
    ndarray::concatenate![Axis(1), edge_index.view(), reversed]
}
