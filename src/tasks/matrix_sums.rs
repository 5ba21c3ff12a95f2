use crate::core::scan::LineScanner;
use crate::core::Task;
use crate::domain::model::Matrix;
use crate::tasks::matrix_product::parse_matrix;
use crate::utils::error::Result;

/// Row and column sum analysis.
///
/// For each row the output pairs the row's sum with a running total over a
/// window of the first min(2, M) columns. The window total is cumulative
/// across rows 0..=i, not a per-row value.
pub struct MatrixSums;

impl Task for MatrixSums {
    type Input = Matrix;
    type Output = Vec<(i64, i64)>;

    fn name(&self) -> &'static str {
        "matrix-sums"
    }

    fn parse(&self, raw: &str) -> Result<Matrix> {
        let mut scanner = LineScanner::new(raw);
        parse_matrix(&mut scanner)
    }

    fn compute(&self, matrix: Matrix) -> Result<Vec<(i64, i64)>> {
        let window = matrix.col_count().min(2);
        let mut window_sum = 0i64;

        Ok((0..matrix.row_count())
            .map(|i| {
                window_sum += matrix.rows()[i][..window].iter().sum::<i64>();
                (matrix.row_sum(i), window_sum)
            })
            .collect())
    }

    fn render(&self, pairs: &Vec<(i64, i64)>) -> String {
        pairs
            .iter()
            .map(|(row_sum, window_sum)| format!("{} {}", row_sum, window_sum))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
