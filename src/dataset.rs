//! The `Dataset` value object handed to estimator constructors.
//!
//! A dataset pairs a dense feature matrix with a target vector of the same
//! length. Targets are generic over the label type: `f64` for regression,
//! any equality-comparable type for classification. The dataset performs no
//! I/O and no cleaning; callers hand over already-valid numeric data.

use ndarray::s;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{EstimatorError, Result};
use crate::Matrix;

#[derive(Clone, Debug)]
pub struct Dataset<L = f64> {
    pub features: Matrix,
    pub targets: Vec<L>,
}

impl<L: Clone> Dataset<L> {
    /// Pair a feature matrix with its targets.
    ///
    /// Fails with [`EstimatorError::DimensionMismatch`] when the row count
    /// and target count disagree; nothing is constructed in that case.
    pub fn new(features: Matrix, targets: Vec<L>) -> Result<Self> {
        if features.nrows() != targets.len() {
            return Err(EstimatorError::DimensionMismatch {
                expected: features.nrows(),
                actual: targets.len(),
            });
        }

        Ok(Self { features, targets })
    }

    /// Build a dataset from row vectors, rejecting ragged input.
    ///
    /// Every row must match the width of the first; a ragged row fails with
    /// [`EstimatorError::DimensionMismatch`] before anything is allocated
    /// into the matrix.
    pub fn from_rows(rows: Vec<Vec<f64>>, targets: Vec<L>) -> Result<Self> {
        let n = rows.len();
        let p = rows.first().map_or(0, Vec::len);

        for row in &rows {
            if row.len() != p {
                return Err(EstimatorError::DimensionMismatch {
                    expected: p,
                    actual: row.len(),
                });
            }
        }

        let mut features = Matrix::zeros((n, p));
        for (i, row) in rows.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                features[(i, j)] = *value;
            }
        }

        Self::new(features, targets)
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// Split into leading training rows and trailing test rows.
    ///
    /// The split is positional; shuffle first (see [`Dataset::shuffled`])
    /// when the source ordering carries structure.
    pub fn train_test_split(&self, test_size: f64) -> Result<(Self, Self)> {
        if test_size <= 0.0 || test_size >= 1.0 {
            return Err(EstimatorError::InvalidParameter(format!(
                "test_size must be between 0 and 1, got {test_size}"
            )));
        }

        let n_samples = self.n_samples();
        let n_test = (n_samples as f64 * test_size).round() as usize;
        let n_train = n_samples - n_test;

        let train = Dataset::new(
            self.features.slice(s![..n_train, ..]).to_owned(),
            self.targets[..n_train].to_vec(),
        )?;
        let test = Dataset::new(
            self.features.slice(s![n_train.., ..]).to_owned(),
            self.targets[n_train..].to_vec(),
        )?;

        Ok((train, test))
    }

    /// Return a copy with rows (and their targets) in random order.
    pub fn shuffled<R: Rng>(&self, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..self.n_samples()).collect();
        order.shuffle(rng);

        let mut features = Matrix::zeros((self.n_samples(), self.n_features()));
        for (new_row, &old_row) in order.iter().enumerate() {
            features.row_mut(new_row).assign(&self.features.row(old_row));
        }
        let targets = order.iter().map(|&i| self.targets[i].clone()).collect();

        Self { features, targets }
    }
}
