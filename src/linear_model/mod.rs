//! Least-squares linear models.
//!
//! [`LinearModel`] captures a design matrix and response vector at
//! construction and estimates its coefficients by solving the normal
//! equations, either plain (ordinary least squares) or with a ridge
//! penalty on the diagonal. Fit quality is reported through residual
//! metrics on the training data.
//!
//! # Examples
//!
//! ```rust
//! use statlearn::{FitMethod, LinearModel};
//! use ndarray::array;
//!
//! let x = array![[1.0, 1.0], [1.0, 2.0], [1.0, 3.0]];
//! let y = array![2.0, 4.0, 6.0];
//!
//! let mut model = LinearModel::new(x, y).unwrap();
//! model.fit(FitMethod::Ordinary).unwrap();
//!
//! let prediction = model.predict(&array![1.0, 4.0]).unwrap();
//! assert!((prediction - 8.0).abs() < 1e-9);
//! ```

mod least_squares;

pub use least_squares::{DEFAULT_RIDGE_SHRINKAGE, FitMethod, LinearModel};
