use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use crate::dataset::Dataset;
use crate::error::{EstimatorError, Result};
use crate::numeric::euclidean_distance;
use crate::{Matrix, Vector};

/// Neighbor count used when callers have no preference.
pub const DEFAULT_K: usize = 5;

/// Brute-force k-nearest-neighbor classifier.
///
/// The training set is stored verbatim and never mutated, so a
/// constructed classifier is safe to share across threads for reads.
///
/// Two deterministic tie rules apply:
/// - equal distances keep their original row order (stable sort), and
/// - a tied majority vote goes to the label carried by the closest of
///   the tied candidates.
///
/// By default the vote runs over the `k` closest training points. The
/// [`skip_nearest`](KnnClassifier::skip_nearest) switch instead drops the
/// single closest match and votes over the next `k`. That turns
/// [`train_error`](KnnClassifier::train_error) into a leave-self-out
/// estimate, since each training row's closest match in the stored set is
/// itself at distance zero.
#[derive(Clone, Debug)]
pub struct KnnClassifier<L> {
    features: Matrix,
    labels: Vec<L>,
    k: usize,
    skip_nearest: bool,
}

impl<L: Clone + Eq + Hash> KnnClassifier<L> {
    /// Store a labeled training set and the neighbor count `k`.
    ///
    /// Fails with [`EstimatorError::DimensionMismatch`] when the feature
    /// row count and label count disagree, and with
    /// [`EstimatorError::InvalidParameter`] unless `1 <= k <= n`.
    pub fn new(features: Matrix, labels: Vec<L>, k: usize) -> Result<Self> {
        if features.nrows() != labels.len() {
            return Err(EstimatorError::DimensionMismatch {
                expected: features.nrows(),
                actual: labels.len(),
            });
        }

        let n = features.nrows();
        if k < 1 || k > n {
            return Err(EstimatorError::InvalidParameter(format!(
                "k must be in [1, {n}], got {k}"
            )));
        }

        Ok(Self {
            features,
            labels,
            k,
            skip_nearest: false,
        })
    }

    /// Construct from a classification dataset, copying its contents.
    pub fn from_dataset(dataset: &Dataset<L>, k: usize) -> Result<Self> {
        Self::new(dataset.features.clone(), dataset.targets.clone(), k)
    }

    /// Drop the single closest match before voting.
    ///
    /// With the switch on, at most `n − 1` candidates remain, so the vote
    /// window is truncated when `k` reaches the training-set size.
    pub fn skip_nearest(mut self, skip_nearest: bool) -> Self {
        self.skip_nearest = skip_nearest;
        self
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Predict the label of a single query point by majority vote among
    /// its nearest training points.
    pub fn classify(&self, x: &Vector) -> Result<L> {
        if x.len() != self.n_features() {
            return Err(EstimatorError::DimensionMismatch {
                expected: self.n_features(),
                actual: x.len(),
            });
        }

        let mut ranked: Vec<(f64, usize)> = Vec::with_capacity(self.n_samples());
        for i in 0..self.n_samples() {
            let distance = euclidean_distance(self.features.row(i), x.view())?;
            ranked.push((distance, i));
        }
        // Stable sort: equal distances keep ascending row order.
        ranked.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

        let start = if self.skip_nearest { 1 } else { 0 };
        let end = (start + self.k).min(ranked.len());
        let window = &ranked[start..end];

        // Tally votes, remembering the best rank each label achieved so a
        // tied vote resolves to the label seen closest to the query.
        let mut votes: HashMap<&L, (usize, usize)> = HashMap::new();
        for (rank, &(_, row)) in window.iter().enumerate() {
            let entry = votes.entry(&self.labels[row]).or_insert((0, rank));
            entry.0 += 1;
        }

        votes
            .into_iter()
            .max_by(|a, b| a.1.0.cmp(&b.1.0).then(b.1.1.cmp(&a.1.1)))
            .map(|(label, _)| label.clone())
            .ok_or_else(|| {
                EstimatorError::InvalidParameter("no neighbors left to vote".to_string())
            })
    }

    /// Fraction of training observations the classifier mislabels.
    ///
    /// Each training row is classified against the full stored set, so
    /// with the default window its own zero-distance match participates in
    /// the vote; enable `skip_nearest` for a leave-self-out estimate.
    pub fn train_error(&self) -> Result<f64> {
        let mut misclassified = 0;
        for i in 0..self.n_samples() {
            let predicted = self.classify(&self.features.row(i).to_owned())?;
            if predicted != self.labels[i] {
                misclassified += 1;
            }
        }

        Ok(misclassified as f64 / self.n_samples() as f64)
    }

    /// Fraction of a held-out set the classifier mislabels.
    pub fn test_error(&self, features: &Matrix, labels: &[L]) -> Result<f64> {
        if features.nrows() != labels.len() {
            return Err(EstimatorError::DimensionMismatch {
                expected: features.nrows(),
                actual: labels.len(),
            });
        }
        if features.nrows() == 0 {
            return Err(EstimatorError::InvalidParameter(
                "evaluation set is empty".to_string(),
            ));
        }

        let mut misclassified = 0;
        for (i, label) in labels.iter().enumerate() {
            let predicted = self.classify(&features.row(i).to_owned())?;
            if predicted != *label {
                misclassified += 1;
            }
        }

        Ok(misclassified as f64 / features.nrows() as f64)
    }
}
