//! Dense distance matrix.

use crate::error::{InvalidInput, Result};

/// A dense n×n distance matrix stored in row-major order.
///
/// Every matrix handed out by this crate has a zero diagonal and finite,
/// non-negative entries. Symmetry is not required: directed road costs are
/// allowed.
///
/// # Examples
///
/// ```
/// use optiroute::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 5.0, 8.0],
///     vec![5.0, 0.0, 3.0],
///     vec![8.0, 3.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(dm.get(0, 2), 8.0);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a distance matrix from an explicit row-major n×n grid.
    ///
    /// Fails if the data length doesn't match `size * size` or any entry is
    /// invalid.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != size * size {
            return Err(InvalidInput::NonSquareMatrix {
                row: 0,
                len: data.len(),
                expected: size * size,
            }
            .into());
        }
        let dm = Self { data, size };
        dm.validate()?;
        Ok(dm)
    }

    /// Creates a distance matrix from one row per origin, the shape matrix
    /// services return.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(InvalidInput::NonSquareMatrix {
                    row,
                    len: values.len(),
                    expected: size,
                }
                .into());
            }
            data.extend(values);
        }
        let dm = Self { data, size };
        dm.validate()?;
        Ok(dm)
    }

    fn validate(&self) -> Result<()> {
        for from in 0..self.size {
            for to in 0..self.size {
                let value = self.get(from, to);
                if !value.is_finite() || value < 0.0 {
                    return Err(InvalidInput::InvalidDistance { from, to, value }.into());
                }
                if from == to && value != 0.0 {
                    return Err(InvalidInput::NonZeroDiagonal { index: from, value }.into());
                }
            }
        }
        Ok(())
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub(crate) fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RoutingError;

    fn sample() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 5.0, 8.0],
            vec![5.0, 0.0, 3.0],
            vec![8.0, 3.0, 0.0],
        ])
        .expect("valid")
    }

    #[test]
    fn test_from_rows() {
        let dm = sample();
        assert_eq!(dm.size(), 3);
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(2, 1), 3.0);
        assert_eq!(dm.get(1, 1), 0.0);
    }

    #[test]
    fn test_symmetric() {
        assert!(sample().is_symmetric(1e-10));
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_err());
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert_eq!(
            err,
            RoutingError::InvalidInput(InvalidInput::NonSquareMatrix {
                row: 1,
                len: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn test_rejects_negative_distance() {
        let err = DistanceMatrix::from_rows(vec![vec![0.0, -1.0], vec![1.0, 0.0]]).unwrap_err();
        assert!(matches!(
            err,
            RoutingError::InvalidInput(InvalidInput::InvalidDistance { from: 0, to: 1, .. })
        ));
    }

    #[test]
    fn test_rejects_nan_distance() {
        let result = DistanceMatrix::from_rows(vec![vec![0.0, f64::NAN], vec![1.0, 0.0]]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_nonzero_diagonal() {
        let err = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 2.0]]).unwrap_err();
        assert_eq!(
            err,
            RoutingError::InvalidInput(InvalidInput::NonZeroDiagonal {
                index: 1,
                value: 2.0
            })
        );
    }

    #[test]
    fn test_empty_matrix() {
        let dm = DistanceMatrix::from_rows(vec![]).expect("valid");
        assert_eq!(dm.size(), 0);
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
    }

    #[test]
    fn test_asymmetric_matrix() {
        let dm = DistanceMatrix::from_rows(vec![vec![0.0, 10.0], vec![15.0, 0.0]]).expect("valid");
        assert!(!dm.is_symmetric(1e-10));
    }
}
