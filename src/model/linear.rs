//! Reference linear edge classifier

use ndarray::{Array1, ArrayView2};

use super::EdgeClassifier;
use crate::{Error, Result};

/// Single linear layer over concatenated endpoint features.
///
/// For an edge `(u, v)` with node features `x_u, x_v` of dimension `F`, the
/// raw output is `w[..F] . x_u + w[F..] . x_v + b`. Deterministic and
/// dependency-free; used by tests and benches, and as a stand-in where a
/// full trained model is not wired up yet.
#[derive(Debug, Clone)]
pub struct LinearEdgeClassifier {
    weight: Array1<f32>,
    bias: f32,
}

impl LinearEdgeClassifier {
    /// Create a classifier from a flat weight vector and bias.
    ///
    /// The weight length must be `2F`, twice the node-feature dimension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Inference`] if the weight vector is empty or of odd
    /// length.
    pub fn new(weight: Vec<f32>, bias: f32) -> Result<Self> {
        if weight.is_empty() || weight.len() % 2 != 0 {
            return Err(Error::Inference(format!(
                "weight length {} is not a positive even number",
                weight.len()
            )));
        }
        Ok(Self {
            weight: Array1::from(weight),
            bias,
        })
    }

    /// Node-feature dimension `F` this classifier expects.
    #[must_use]
    pub fn feature_dim(&self) -> usize {
        self.weight.len() / 2
    }

    fn node_index(index: i64, num_nodes: usize) -> Result<usize> {
        let node = usize::try_from(index).map_err(|_| {
            Error::Inference(format!("negative node index {index} in edge list"))
        })?;
        if node >= num_nodes {
            return Err(Error::Inference(format!(
                "node index {node} out of range for {num_nodes} nodes"
            )));
        }
        Ok(node)
    }
}

impl EdgeClassifier for LinearEdgeClassifier {
    fn forward(
        &self,
        features: ArrayView2<'_, f32>,
        edge_index: ArrayView2<'_, i64>,
    ) -> Result<Array1<f32>> {
        let dim = self.feature_dim();
        if features.ncols() != dim {
            return Err(Error::Inference(format!(
                "feature dimension {} does not match classifier dimension {dim}",
                features.ncols()
            )));
        }

        let num_nodes = features.nrows();
        let mut out = Array1::zeros(edge_index.ncols());
        for (col, slot) in edge_index.columns().into_iter().zip(out.iter_mut()) {
            let src = Self::node_index(col[0], num_nodes)?;
            let dst = Self::node_index(col[1], num_nodes)?;
            let mut z = self.bias;
            for k in 0..dim {
                z += self.weight[k] * features[[src, k]] + self.weight[dim + k] * features[[dst, k]];
            }
            if !z.is_finite() {
                return Err(Error::Inference(
                    "non-finite classifier output (check input features)".to_string(),
                ));
            }
            *slot = z;
        }
        Ok(out)
    }
}
