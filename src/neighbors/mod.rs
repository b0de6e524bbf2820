//! Nearest-neighbor classification.
//!
//! [`KnnClassifier`] answers each query by brute force: it measures the
//! Euclidean distance from the query to every stored training point,
//! ranks them, and takes a majority vote among the `k` closest. There is
//! no index structure and no fit step; construction stores the training
//! set and every query is O(n·p) distance work plus an O(n log n) sort.
//!
//! # Examples
//!
//! ```rust
//! use statlearn::KnnClassifier;
//! use ndarray::array;
//!
//! let x = array![[0.0], [1.0], [2.0], [10.0]];
//! let labels = vec!["a", "a", "a", "b"];
//!
//! let model = KnnClassifier::new(x, labels, 3).unwrap();
//! assert_eq!(model.classify(&array![0.5]).unwrap(), "a");
//! ```

mod knn;

pub use knn::{DEFAULT_K, KnnClassifier};
