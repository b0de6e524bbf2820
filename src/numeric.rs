//! Shared numeric primitives used by both estimators.
//!
//! Everything here operates on plain `f64` containers with runtime shape
//! checks; NaN and infinity propagate through IEEE arithmetic untouched.

use ndarray::ArrayView1;

use crate::error::{EstimatorError, Result};
use crate::{Matrix, Vector};

/// Pivots smaller than this are treated as zero during elimination.
const PIVOT_TOLERANCE: f64 = 1e-10;

/// Euclidean distance between two points of equal dimension.
///
/// Symmetric, and zero when both arguments are the same point.
pub fn euclidean_distance(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> Result<f64> {
    if a.len() != b.len() {
        return Err(EstimatorError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let squared: f64 = a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum();
    Ok(squared.sqrt())
}

/// Solve the dense square system `a · x = b` by Gaussian elimination with
/// partial pivoting.
///
/// Fails with [`EstimatorError::SingularMatrix`] when no pivot rises above
/// tolerance, which is how rank deficiency in a normal-equation matrix
/// surfaces to callers.
pub fn solve_linear_system(a: &Matrix, b: &Vector) -> Result<Vector> {
    let n = a.nrows();
    if a.ncols() != n {
        return Err(EstimatorError::DimensionMismatch {
            expected: n,
            actual: a.ncols(),
        });
    }
    if b.len() != n {
        return Err(EstimatorError::DimensionMismatch {
            expected: n,
            actual: b.len(),
        });
    }

    // Augmented matrix [a | b].
    let mut aug = Matrix::zeros((n, n + 1));
    for i in 0..n {
        for j in 0..n {
            aug[(i, j)] = a[(i, j)];
        }
        aug[(i, n)] = b[i];
    }

    for i in 0..n {
        let mut max_row = i;
        for k in (i + 1)..n {
            if aug[(k, i)].abs() > aug[(max_row, i)].abs() {
                max_row = k;
            }
        }

        if aug[(max_row, i)].abs() < PIVOT_TOLERANCE {
            return Err(EstimatorError::SingularMatrix);
        }

        if max_row != i {
            for j in 0..=n {
                aug.swap((i, j), (max_row, j));
            }
        }

        for k in (i + 1)..n {
            let factor = aug[(k, i)] / aug[(i, i)];
            for j in i..=n {
                aug[(k, j)] -= factor * aug[(i, j)];
            }
        }
    }

    // Back substitution.
    let mut x = Vector::zeros(n);
    for i in (0..n).rev() {
        x[i] = aug[(i, n)];
        for j in (i + 1)..n {
            x[i] -= aug[(i, j)] * x[j];
        }
        x[i] /= aug[(i, i)];
    }

    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_distance_symmetry() {
        let a = array![1.0, 2.0, 3.0];
        let b = array![4.0, 6.0, 8.0];

        let d_ab = euclidean_distance(a.view(), b.view()).unwrap();
        let d_ba = euclidean_distance(b.view(), a.view()).unwrap();

        assert_eq!(d_ab, d_ba);
        assert!((d_ab - 50.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = array![0.5, -1.5, 2.0];
        assert_eq!(euclidean_distance(a.view(), a.view()).unwrap(), 0.0);
    }

    #[test]
    fn test_distance_dimension_mismatch() {
        let a = array![1.0, 2.0];
        let b = array![1.0, 2.0, 3.0];

        let err = euclidean_distance(a.view(), b.view()).unwrap_err();
        assert_eq!(
            err,
            EstimatorError::DimensionMismatch {
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn test_solve_simple_system() {
        // 2x + y = 5, x + 3y = 10
        let a = array![[2.0, 1.0], [1.0, 3.0]];
        let b = array![5.0, 10.0];

        let x = solve_linear_system(&a, &b).unwrap();
        assert!((x[0] - 1.0).abs() < 1e-10);
        assert!((x[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_solve_requires_pivoting() {
        // Leading zero forces a row swap.
        let a = array![[0.0, 1.0], [1.0, 0.0]];
        let b = array![2.0, 3.0];

        let x = solve_linear_system(&a, &b).unwrap();
        assert!((x[0] - 3.0).abs() < 1e-12);
        assert!((x[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_solve_singular_matrix() {
        let a = array![[1.0, 2.0], [2.0, 4.0]];
        let b = array![1.0, 2.0];

        assert_eq!(
            solve_linear_system(&a, &b).unwrap_err(),
            EstimatorError::SingularMatrix
        );
    }

    #[test]
    fn test_solve_non_square() {
        let a = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let b = array![1.0, 2.0];

        assert!(solve_linear_system(&a, &b).is_err());
    }
}
