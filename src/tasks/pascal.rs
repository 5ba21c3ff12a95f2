use crate::core::scan::{parse_count, LineScanner};
use crate::core::Task;
use crate::utils::error::Result;

/// Pascal's triangle renderer.
///
/// Builds the first N rows and renders them centered: every value padded to
/// the width of the widest value, values joined with single spaces, and each
/// row line centered within the width of the last row. Trailing spaces are
/// part of the output format.
pub struct PascalTriangle;

fn build_triangle(n: usize) -> Vec<Vec<u64>> {
    let mut triangle = vec![vec![1u64]];
    for i in 1..n {
        let prev = &triangle[i - 1];
        let mut row = vec![1u64];
        for j in 1..i {
            row.push(prev[j - 1] + prev[j]);
        }
        row.push(1);
        triangle.push(row);
    }
    triangle
}

/// Centers `s` in `width` columns. For margin m and width w the left pad is
/// m/2 + (m & w & 1): the extra space of an odd margin goes left only when
/// the width is odd too, otherwise right.
fn center(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(margin - left))
}

impl Task for PascalTriangle {
    type Input = usize;
    type Output = Vec<Vec<u64>>;

    fn name(&self) -> &'static str {
        "pascal-triangle"
    }

    fn parse(&self, raw: &str) -> Result<usize> {
        let mut scanner = LineScanner::new(raw);
        parse_count(scanner.next_line()?)
    }

    fn compute(&self, n: usize) -> Result<Vec<Vec<u64>>> {
        Ok(build_triangle(n))
    }

    fn render(&self, triangle: &Vec<Vec<u64>>) -> String {
        let cell_width = triangle
            .iter()
            .flatten()
            .map(|value| value.to_string().len())
            .max()
            .unwrap_or(1);

        // Width of the widest (last) row once every cell is padded.
        let last_row = triangle.last().map_or(1, Vec::len);
        let line_width = last_row * (cell_width + 1) - 1;

        triangle
            .iter()
            .map(|row| {
                let cells: Vec<String> = row
                    .iter()
                    .map(|value| center(&value.to_string(), cell_width))
                    .collect();
                center(&cells.join(" "), line_width)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
