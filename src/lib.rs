//! Educational statistics and machine-learning toolkit.
//!
//! Two independent fit/predict estimators built directly from
//! linear-algebra and distance primitives rather than from pre-built
//! models:
//! - [`LinearModel`]: least squares via the normal equations, ordinary or
//!   ridge-penalized, with residual metrics (RSS, TSS, MSE, R²)
//! - [`KnnClassifier`]: brute-force Euclidean nearest-neighbor search
//!   with majority vote
//!
//! Both consume already-clean numeric data, either raw `Matrix`/`Vector`
//! pairs or a [`Dataset`]; neither performs I/O. The crate is meant to
//! demonstrate the underlying math at small scale, not to be a
//! production learning system.
//!
//! # Examples
//!
//! ```rust
//! use statlearn::{FitMethod, KnnClassifier, LinearModel};
//! use ndarray::array;
//!
//! let x = array![[1.0, 1.0], [1.0, 2.0], [1.0, 3.0]];
//! let y = array![2.0, 4.0, 6.0];
//! let mut model = LinearModel::new(x, y).unwrap();
//! model.fit(FitMethod::Ordinary).unwrap();
//! assert!((model.predict(&array![1.0, 4.0]).unwrap() - 8.0).abs() < 1e-9);
//!
//! let x = array![[0.0], [1.0], [2.0], [10.0]];
//! let classifier = KnnClassifier::new(x, vec!["a", "a", "a", "b"], 3).unwrap();
//! assert_eq!(classifier.classify(&array![0.5]).unwrap(), "a");
//! ```

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod dataset;
pub mod error;
pub mod linear_model;
pub mod neighbors;
pub mod numeric;

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;

pub use dataset::Dataset;
pub use error::{EstimatorError, Result};
pub use linear_model::{DEFAULT_RIDGE_SHRINKAGE, FitMethod, LinearModel};
pub use neighbors::{DEFAULT_K, KnnClassifier};
pub use numeric::euclidean_distance;
