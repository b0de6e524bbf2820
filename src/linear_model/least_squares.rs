use std::str::FromStr;

use crate::dataset::Dataset;
use crate::error::{EstimatorError, Result};
use crate::numeric::solve_linear_system;
use crate::{Matrix, Vector};

/// Shrinkage strength used when a ridge fit is requested by name without
/// an explicit value.
pub const DEFAULT_RIDGE_SHRINKAGE: f64 = 1.0;

/// Estimation method for [`LinearModel::fit`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FitMethod {
    /// Ordinary least squares: minimize `‖y − Xb‖²`.
    Ordinary,
    /// Ridge-penalized least squares: add `shrinkage` to every diagonal
    /// entry of the normal-equation matrix before solving. A shrinkage of
    /// zero reproduces the ordinary solution exactly.
    Ridge { shrinkage: f64 },
}

impl FromStr for FitMethod {
    type Err = EstimatorError;

    /// Parse the configuration-surface method names `"ordinary"` and
    /// `"ridge"` (the latter with [`DEFAULT_RIDGE_SHRINKAGE`]). Anything
    /// else fails with [`EstimatorError::UnsupportedMethod`].
    fn from_str(name: &str) -> Result<Self> {
        match name {
            "ordinary" => Ok(FitMethod::Ordinary),
            "ridge" => Ok(FitMethod::Ridge {
                shrinkage: DEFAULT_RIDGE_SHRINKAGE,
            }),
            other => Err(EstimatorError::UnsupportedMethod(other.to_string())),
        }
    }
}

/// Linear regression estimated from the normal equations.
///
/// The model owns its training data; construction validates shapes and
/// `fit` may run any number of times, each call replacing the previous
/// coefficient estimate. Predictions and fit metrics are rejected with
/// [`EstimatorError::NotFitted`] until the first successful `fit`.
#[derive(Clone, Debug)]
pub struct LinearModel {
    features: Matrix,
    targets: Vector,
    coefficients: Option<Vector>,
}

impl LinearModel {
    /// Capture the training data for later fitting.
    ///
    /// Fails with [`EstimatorError::DimensionMismatch`] when the design
    /// matrix row count and response length disagree; no partial model is
    /// constructed.
    pub fn new(features: Matrix, targets: Vector) -> Result<Self> {
        if features.nrows() != targets.len() {
            return Err(EstimatorError::DimensionMismatch {
                expected: features.nrows(),
                actual: targets.len(),
            });
        }

        Ok(Self {
            features,
            targets,
            coefficients: None,
        })
    }

    /// Construct from a regression dataset, copying its contents.
    pub fn from_dataset(dataset: &Dataset<f64>) -> Result<Self> {
        Self::new(
            dataset.features.clone(),
            Vector::from(dataset.targets.clone()),
        )
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// The fitted coefficient vector, once `fit` has run.
    pub fn coefficients(&self) -> Option<&Vector> {
        self.coefficients.as_ref()
    }

    /// Estimate coefficients by solving `(XᵗX + hI) b = Xᵗy`, where `h` is
    /// zero for [`FitMethod::Ordinary`].
    ///
    /// A singular normal-equation matrix (collinear or rank-deficient
    /// predictors) fails with [`EstimatorError::SingularMatrix`]; callers
    /// are responsible for supplying full-rank designs when fitting
    /// ordinary least squares. On any error the previous coefficient
    /// estimate is left untouched.
    pub fn fit(&mut self, method: FitMethod) -> Result<()> {
        let shrinkage = match method {
            FitMethod::Ordinary => 0.0,
            FitMethod::Ridge { shrinkage } => {
                if shrinkage < 0.0 {
                    return Err(EstimatorError::InvalidParameter(format!(
                        "ridge shrinkage must be non-negative, got {shrinkage}"
                    )));
                }
                shrinkage
            }
        };

        let xt = self.features.t();
        let mut normal = xt.dot(&self.features);
        if shrinkage > 0.0 {
            for i in 0..normal.nrows() {
                normal[(i, i)] += shrinkage;
            }
        }
        let moment = xt.dot(&self.targets);

        let coefficients = solve_linear_system(&normal, &moment)?;
        self.coefficients = Some(coefficients);
        Ok(())
    }

    /// Shorthand for `fit(FitMethod::Ordinary)`.
    pub fn fit_ordinary(&mut self) -> Result<()> {
        self.fit(FitMethod::Ordinary)
    }

    /// Shorthand for `fit(FitMethod::Ridge { shrinkage })`.
    pub fn fit_ridge(&mut self, shrinkage: f64) -> Result<()> {
        self.fit(FitMethod::Ridge { shrinkage })
    }

    /// Predict the response for a single observation.
    pub fn predict(&self, x: &Vector) -> Result<f64> {
        let coefficients = self.coefficients.as_ref().ok_or(EstimatorError::NotFitted)?;
        if x.len() != self.n_features() {
            return Err(EstimatorError::DimensionMismatch {
                expected: self.n_features(),
                actual: x.len(),
            });
        }

        Ok(coefficients.dot(x))
    }

    /// Predict the response for every row of `x`.
    pub fn predict_batch(&self, x: &Matrix) -> Result<Vector> {
        let coefficients = self.coefficients.as_ref().ok_or(EstimatorError::NotFitted)?;
        if x.ncols() != self.n_features() {
            return Err(EstimatorError::DimensionMismatch {
                expected: self.n_features(),
                actual: x.ncols(),
            });
        }

        Ok(x.dot(coefficients))
    }

    /// Residual sum of squares `‖y − Xb‖²` for an arbitrary coefficient
    /// vector, not necessarily the fitted one.
    pub fn rss(&self, b: &Vector) -> Result<f64> {
        if b.len() != self.n_features() {
            return Err(EstimatorError::DimensionMismatch {
                expected: self.n_features(),
                actual: b.len(),
            });
        }

        let residuals = &self.targets - &self.features.dot(b);
        Ok(residuals.mapv(|r| r * r).sum())
    }

    /// Total sum of squares `Σ(yᵢ − ȳ)²` of the training response,
    /// independent of any fit.
    pub fn tss(&self) -> f64 {
        let mean = self.targets.mean().unwrap_or(0.0);
        self.targets.mapv(|y| (y - mean) * (y - mean)).sum()
    }

    /// Mean squared error of the fitted coefficients on the training data.
    pub fn mse(&self) -> Result<f64> {
        let coefficients = self.coefficients.as_ref().ok_or(EstimatorError::NotFitted)?;
        Ok(self.rss(coefficients)? / self.n_samples() as f64)
    }

    /// Coefficient of determination `1 − RSS/TSS` on the training data.
    ///
    /// Undefined when every target is identical: TSS is zero and the
    /// quotient follows IEEE division, so the result is NaN or ±infinity.
    /// Callers with a degenerate response vector must guard for it.
    pub fn r_squared(&self) -> Result<f64> {
        let coefficients = self.coefficients.as_ref().ok_or(EstimatorError::NotFitted)?;
        Ok(1.0 - self.rss(coefficients)? / self.tss())
    }

    /// R² of the fitted model on held-out data.
    pub fn score(&self, features: &Matrix, targets: &Vector) -> Result<f64> {
        if features.nrows() != targets.len() {
            return Err(EstimatorError::DimensionMismatch {
                expected: features.nrows(),
                actual: targets.len(),
            });
        }

        let predictions = self.predict_batch(features)?;
        let residual = (targets - &predictions).mapv(|r| r * r).sum();
        let mean = targets.mean().unwrap_or(0.0);
        let total = targets.mapv(|y| (y - mean) * (y - mean)).sum();

        Ok(1.0 - residual / total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn perfect_line() -> LinearModel {
        // y = 2x with an explicit intercept column.
        let x = array![[1.0, 1.0], [1.0, 2.0], [1.0, 3.0]];
        let y = array![2.0, 4.0, 6.0];
        LinearModel::new(x, y).unwrap()
    }

    #[test]
    fn test_ordinary_fit_recovers_exact_line() {
        let mut model = perfect_line();
        model.fit(FitMethod::Ordinary).unwrap();

        let coefficients = model.coefficients().unwrap();
        assert!(coefficients[0].abs() < 1e-9);
        assert!((coefficients[1] - 2.0).abs() < 1e-9);
        assert!((model.r_squared().unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_ridge_zero_matches_ordinary() {
        let x = array![[1.0, 2.0], [2.0, 3.0], [3.0, 5.0], [4.0, 4.0]];
        let y = array![3.0, 5.0, 8.0, 8.0];

        let mut ols = LinearModel::new(x.clone(), y.clone()).unwrap();
        ols.fit_ordinary().unwrap();

        let mut ridge = LinearModel::new(x, y).unwrap();
        ridge.fit_ridge(0.0).unwrap();

        let a = ols.coefficients().unwrap();
        let b = ridge.coefficients().unwrap();
        for (ai, bi) in a.iter().zip(b.iter()) {
            assert!((ai - bi).abs() < 1e-12);
        }
    }

    #[test]
    fn test_ridge_shrinks_toward_zero() {
        // Orthogonal columns, so each ridge coefficient is the ordinary
        // one scaled by d/(d + h).
        let x = array![[1.0, 0.0], [0.0, 1.0], [2.0, 0.0], [0.0, 2.0]];
        let y = array![1.0, 2.0, 2.0, 4.0];

        let mut model = LinearModel::new(x, y).unwrap();
        model.fit_ordinary().unwrap();
        let ols = model.coefficients().unwrap().clone();

        model.fit_ridge(5.0).unwrap();
        let ridge = model.coefficients().unwrap();

        for (o, r) in ols.iter().zip(ridge.iter()) {
            assert!(r.abs() < o.abs());
            assert!(o.signum() == r.signum());
        }
    }

    #[test]
    fn test_refit_overwrites_coefficients() {
        let mut model = perfect_line();
        model.fit_ridge(10.0).unwrap();
        let penalized = model.coefficients().unwrap().clone();

        model.fit_ordinary().unwrap();
        let ordinary = model.coefficients().unwrap();
        assert!((ordinary[1] - 2.0).abs() < 1e-9);
        assert!((penalized[1] - ordinary[1]).abs() > 1e-6);
    }

    #[test]
    fn test_construction_length_mismatch() {
        let x = array![[1.0], [2.0]];
        let y = array![1.0, 2.0, 3.0];

        let err = LinearModel::new(x, y).unwrap_err();
        assert_eq!(
            err,
            EstimatorError::DimensionMismatch {
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn test_predict_before_fit() {
        let model = perfect_line();
        assert_eq!(
            model.predict(&array![1.0, 4.0]).unwrap_err(),
            EstimatorError::NotFitted
        );
        assert_eq!(model.mse().unwrap_err(), EstimatorError::NotFitted);
        assert_eq!(model.r_squared().unwrap_err(), EstimatorError::NotFitted);
    }

    #[test]
    fn test_predict_dimension_mismatch() {
        let mut model = perfect_line();
        model.fit_ordinary().unwrap();

        assert_eq!(
            model.predict(&array![1.0, 2.0, 3.0]).unwrap_err(),
            EstimatorError::DimensionMismatch {
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn test_singular_design_fails() {
        // Second column is a multiple of the first.
        let x = array![[1.0, 2.0], [2.0, 4.0], [3.0, 6.0]];
        let y = array![1.0, 2.0, 3.0];

        let mut model = LinearModel::new(x, y).unwrap();
        assert_eq!(
            model.fit_ordinary().unwrap_err(),
            EstimatorError::SingularMatrix
        );
        assert!(model.coefficients().is_none());
    }

    #[test]
    fn test_singular_design_recoverable_with_ridge() {
        let x = array![[1.0, 2.0], [2.0, 4.0], [3.0, 6.0]];
        let y = array![1.0, 2.0, 3.0];

        let mut model = LinearModel::new(x, y).unwrap();
        model.fit_ridge(1.0).unwrap();
        assert!(model.coefficients().is_some());
    }

    #[test]
    fn test_negative_shrinkage_rejected() {
        let mut model = perfect_line();
        assert!(matches!(
            model.fit_ridge(-0.5).unwrap_err(),
            EstimatorError::InvalidParameter(_)
        ));
        assert!(model.coefficients().is_none());
    }

    #[test]
    fn test_rss_for_arbitrary_coefficients() {
        let model = perfect_line();

        // b = [0, 2] reproduces y exactly, b = [0, 0] leaves all of y.
        assert!(model.rss(&array![0.0, 2.0]).unwrap() < 1e-12);
        assert_eq!(model.rss(&array![0.0, 0.0]).unwrap(), 56.0);
        assert!(model.rss(&array![1.0]).is_err());
    }

    #[test]
    fn test_mse_non_negative() {
        let x = array![[1.0, 1.0], [1.0, 2.0], [1.0, 3.0], [1.0, 4.0]];
        let y = array![2.1, 3.9, 6.2, 7.8];

        let mut model = LinearModel::new(x, y).unwrap();
        model.fit_ordinary().unwrap();
        assert!(model.mse().unwrap() >= 0.0);
        assert!(model.r_squared().unwrap() <= 1.0);
    }

    #[test]
    fn test_fit_method_parsing() {
        assert_eq!("ordinary".parse::<FitMethod>().unwrap(), FitMethod::Ordinary);
        assert_eq!(
            "ridge".parse::<FitMethod>().unwrap(),
            FitMethod::Ridge {
                shrinkage: DEFAULT_RIDGE_SHRINKAGE
            }
        );
        assert_eq!(
            "lasso".parse::<FitMethod>().unwrap_err(),
            EstimatorError::UnsupportedMethod("lasso".to_string())
        );
    }

    #[test]
    fn test_from_dataset() {
        let dataset = Dataset::new(array![[1.0], [2.0]], vec![2.0, 4.0]).unwrap();
        let mut model = LinearModel::from_dataset(&dataset).unwrap();
        model.fit_ordinary().unwrap();

        assert!((model.predict(&array![3.0]).unwrap() - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_on_held_out_data() {
        let mut model = perfect_line();
        model.fit_ordinary().unwrap();

        let x_new = array![[1.0, 5.0], [1.0, 6.0], [1.0, 7.0]];
        let y_new = array![10.0, 12.0, 14.0];
        assert!((model.score(&x_new, &y_new).unwrap() - 1.0).abs() < 1e-9);
    }
}
