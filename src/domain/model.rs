use crate::utils::error::{Result, WorkshopError};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    /// Age bracket suffix appended to the greeting, leading space included.
    pub fn age_label(&self) -> &'static str {
        if self.age < 13 {
            " (child)"
        } else if self.age <= 19 {
            " (teenager)"
        } else {
            ""
        }
    }
}

/// Rectangular integer matrix. Rows are validated to a uniform width at
/// construction; `i64` cells keep dot-product sums exact on exercise-scale
/// inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: Vec<Vec<i64>>,
    cols: usize,
}

impl Matrix {
    pub fn new(rows: Vec<Vec<i64>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(row) = rows.iter().find(|row| row.len() != cols) {
            return Err(WorkshopError::input(format!(
                "ragged matrix: expected {} columns, found a row with {}",
                cols,
                row.len()
            )));
        }
        Ok(Self { rows, cols })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }

    pub fn row_sum(&self, i: usize) -> i64 {
        self.rows[i].iter().sum()
    }

    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.row_count() {
            return Err(WorkshopError::dimension(format!(
                "cannot multiply {}x{} by {}x{}",
                self.row_count(),
                self.cols,
                other.row_count(),
                other.col_count()
            )));
        }

        let rows = (0..self.row_count())
            .map(|i| {
                (0..other.col_count())
                    .map(|j| {
                        (0..self.cols)
                            .map(|k| self.rows[i][k] * other.rows[k][j])
                            .sum()
                    })
                    .collect()
            })
            .collect();

        Ok(Matrix {
            rows,
            cols: other.col_count(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SalesRecord {
    pub order_id: String,
    pub category: String,
    pub customer_type: String,
    pub region: String,
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_label_brackets() {
        let label = |age| Person { name: "x".to_string(), age }.age_label();
        assert_eq!(label(12), " (child)");
        assert_eq!(label(13), " (teenager)");
        assert_eq!(label(19), " (teenager)");
        assert_eq!(label(20), "");
    }

    #[test]
    fn test_ragged_matrix_is_rejected() {
        assert!(Matrix::new(vec![vec![1, 2], vec![3]]).is_err());
    }

    #[test]
    fn test_multiply() {
        let a = Matrix::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let b = Matrix::new(vec![vec![5, 6], vec![7, 8]]).unwrap();
        let c = a.multiply(&b).unwrap();
        assert_eq!(c.rows(), &[vec![19, 22], vec![43, 50]]);
    }

    #[test]
    fn test_multiply_dimension_mismatch() {
        let a = Matrix::new(vec![vec![1, 2, 3]]).unwrap();
        let b = Matrix::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let err = a.multiply(&b).unwrap_err();
        assert!(matches!(err, WorkshopError::DimensionError { .. }));
    }
}
