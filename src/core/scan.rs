use crate::utils::error::{Result, WorkshopError};

/// Line-oriented scanner over a whole input text.
///
/// Every exercise input is a sequence of whitespace-trimmed, non-empty lines,
/// usually led by a count or dimension header that announces how many lines
/// follow. The scanner owns that convention: blank lines are dropped up
/// front, and every read past the end or short record block is a typed error
/// rather than a panic.
pub struct LineScanner<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineScanner<'a> {
    pub fn new(raw: &'a str) -> Self {
        let lines = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        Self { lines, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len() - self.pos
    }

    pub fn next_line(&mut self) -> Result<&'a str> {
        let line = self
            .lines
            .get(self.pos)
            .copied()
            .ok_or_else(|| WorkshopError::input("unexpected end of input"))?;
        self.pos += 1;
        Ok(line)
    }

    /// Reads a single line holding one non-negative count.
    pub fn next_count(&mut self) -> Result<usize> {
        let line = self.next_line()?;
        parse_count(line)
    }

    /// Reads a line and splits it into exactly `expected` whitespace tokens.
    pub fn next_fields(&mut self, expected: usize) -> Result<Vec<&'a str>> {
        let line = self.next_line()?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != expected {
            return Err(WorkshopError::input(format!(
                "expected {} tokens on line '{}', found {}",
                expected,
                line,
                fields.len()
            )));
        }
        Ok(fields)
    }

    /// Consumes a record block: `count` data lines following a header.
    pub fn take_block(&mut self, count: usize) -> Result<Vec<&'a str>> {
        if count > self.remaining() {
            return Err(WorkshopError::input(format!(
                "declared count {} exceeds the {} remaining lines",
                count,
                self.remaining()
            )));
        }
        let block = self.lines[self.pos..self.pos + count].to_vec();
        self.pos += count;
        Ok(block)
    }
}

pub fn parse_count(token: &str) -> Result<usize> {
    token
        .parse()
        .map_err(|_| WorkshopError::input(format!("expected a count, found '{}'", token)))
}

pub fn parse_int(token: &str) -> Result<i64> {
    token
        .parse()
        .map_err(|_| WorkshopError::input(format!("expected an integer, found '{}'", token)))
}

/// Parses every whitespace token on a line as an integer, checking the count.
pub fn parse_int_row(line: &str, expected: usize) -> Result<Vec<i64>> {
    let values: Vec<i64> = line
        .split_whitespace()
        .map(parse_int)
        .collect::<Result<_>>()?;
    if values.len() != expected {
        return Err(WorkshopError::input(format!(
            "expected {} integers on line '{}', found {}",
            expected,
            line,
            values.len()
        )));
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_are_dropped() {
        let mut scanner = LineScanner::new("\n  2 \n\n  a b \n\nc\n\n");
        assert_eq!(scanner.remaining(), 3);
        assert_eq!(scanner.next_count().unwrap(), 2);
        assert_eq!(scanner.take_block(2).unwrap(), vec!["a b", "c"]);
        assert_eq!(scanner.remaining(), 0);
    }

    #[test]
    fn test_short_block_is_an_error() {
        let mut scanner = LineScanner::new("3\nonly one line");
        let count = scanner.next_count().unwrap();
        let err = scanner.take_block(count).unwrap_err();
        assert!(matches!(err, WorkshopError::InputError { .. }));
    }

    #[test]
    fn test_next_fields_checks_token_count() {
        let mut scanner = LineScanner::new("Alice 30 extra");
        assert!(scanner.next_fields(2).is_err());
    }

    #[test]
    fn test_reading_past_the_end() {
        let mut scanner = LineScanner::new("");
        assert!(scanner.next_line().is_err());
    }

    #[test]
    fn test_non_numeric_count() {
        let mut scanner = LineScanner::new("three");
        assert!(scanner.next_count().is_err());
    }

    #[test]
    fn test_parse_int_row() {
        assert_eq!(parse_int_row("1 -2 3", 3).unwrap(), vec![1, -2, 3]);
        assert!(parse_int_row("1 2", 3).is_err());
        assert!(parse_int_row("1 x 3", 3).is_err());
    }
}
