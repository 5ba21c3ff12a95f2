use crate::core::scan::{parse_count, parse_int_row, LineScanner};
use crate::core::Task;
use crate::domain::model::Matrix;
use crate::utils::error::Result;

/// Matrix multiplication: two dimension-headed matrices in, their product out.
pub struct MatrixProduct;

pub(crate) fn parse_matrix(scanner: &mut LineScanner) -> Result<Matrix> {
    let dims = scanner.next_fields(2)?;
    let rows = parse_count(dims[0])?;
    let cols = parse_count(dims[1])?;

    let data = scanner
        .take_block(rows)?
        .into_iter()
        .map(|line| parse_int_row(line, cols))
        .collect::<Result<Vec<_>>>()?;
    Matrix::new(data)
}

impl Task for MatrixProduct {
    type Input = (Matrix, Matrix);
    type Output = Matrix;

    fn name(&self) -> &'static str {
        "matrix-product"
    }

    fn parse(&self, raw: &str) -> Result<(Matrix, Matrix)> {
        let mut scanner = LineScanner::new(raw);
        let left = parse_matrix(&mut scanner)?;
        let right = parse_matrix(&mut scanner)?;
        Ok((left, right))
    }

    fn compute(&self, (left, right): (Matrix, Matrix)) -> Result<Matrix> {
        left.multiply(&right)
    }

    fn render(&self, product: &Matrix) -> String {
        product
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(i64::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TaskEngine;
    use crate::utils::error::WorkshopError;

    #[test]
    fn test_two_by_two_product() {
        let engine = TaskEngine::new(MatrixProduct);
        let output = engine.run("2 2\n1 2\n3 4\n2 2\n5 6\n7 8\n").unwrap();
        assert_eq!(output, "19 22\n43 50");
    }

    #[test]
    fn test_rectangular_product() {
        let engine = TaskEngine::new(MatrixProduct);
        // 1x3 times 3x2
        let output = engine.run("1 3\n1 2 3\n3 2\n1 0\n0 1\n1 1\n").unwrap();
        assert_eq!(output, "4 5");
    }

    #[test]
    fn test_inner_dimension_mismatch() {
        let engine = TaskEngine::new(MatrixProduct);
        let err = engine.run("1 3\n1 2 3\n2 2\n1 0\n0 1\n").unwrap_err();
        assert!(matches!(err, WorkshopError::DimensionError { .. }));
    }

    #[test]
    fn test_row_width_mismatch() {
        let engine = TaskEngine::new(MatrixProduct);
        assert!(engine.run("2 2\n1 2\n3\n2 2\n5 6\n7 8\n").is_err());
    }
}
