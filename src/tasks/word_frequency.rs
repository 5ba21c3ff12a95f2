use crate::core::scan::LineScanner;
use crate::core::Task;
use crate::utils::error::{Result, WorkshopError};
use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

/// Word frequency and length statistics over a block of text.
pub struct WordFrequency;

#[derive(Debug, PartialEq)]
pub struct TextQuery {
    pub tokens: Vec<String>,
    pub top_k: usize,
}

#[derive(Debug, PartialEq)]
pub struct TextReport {
    /// Top-K (word, count) pairs, ordered by descending count then word.
    pub top_words: Vec<(String, u64)>,
    pub mean_length: f64,
    pub median_length: f64,
    pub mode_length: f64,
    /// Distinct words of maximum length, sorted.
    pub longest_words: Vec<String>,
}

// Stripped from the text before tokenizing; hyphens and apostrophes survive.
fn punctuation() -> &'static Regex {
    static PUNCTUATION: OnceLock<Regex> = OnceLock::new();
    PUNCTUATION.get_or_init(|| {
        Regex::new(r#"[.,!?;:"()\[\]{}]"#).expect("static punctuation class")
    })
}

fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned = punctuation().replace_all(&lowered, "");
    cleaned
        .split_whitespace()
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}

fn mean(lengths: &[usize]) -> f64 {
    lengths.iter().sum::<usize>() as f64 / lengths.len() as f64
}

fn median(lengths: &[usize]) -> f64 {
    let mut sorted = lengths.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid] as f64
    } else {
        (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
    }
}

/// Most frequent length; ties resolve to the smallest length.
fn mode(lengths: &[usize]) -> f64 {
    let mut counts: HashMap<usize, usize> = HashMap::new();
    for &len in lengths {
        *counts.entry(len).or_default() += 1;
    }

    let mut entries: Vec<(usize, usize)> = counts.into_iter().collect();
    entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.first().map_or(0.0, |&(len, _)| len as f64)
}

impl Task for WordFrequency {
    type Input = TextQuery;
    type Output = TextReport;

    fn name(&self) -> &'static str {
        "word-frequency"
    }

    fn parse(&self, raw: &str) -> Result<TextQuery> {
        let mut scanner = LineScanner::new(raw);
        let line_count = scanner.next_count()?;
        let text = scanner.take_block(line_count)?.join(" ");
        let top_k = scanner.next_count()?;

        Ok(TextQuery {
            tokens: tokenize(&text),
            top_k,
        })
    }

    fn compute(&self, query: TextQuery) -> Result<TextReport> {
        if query.tokens.is_empty() {
            return Err(WorkshopError::input("no words of two or more characters"));
        }

        let mut counts: HashMap<&str, u64> = HashMap::new();
        for token in &query.tokens {
            *counts.entry(token.as_str()).or_default() += 1;
        }

        let mut top_words: Vec<(String, u64)> = counts
            .into_iter()
            .map(|(word, count)| (word.to_string(), count))
            .collect();
        top_words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        top_words.truncate(query.top_k);

        let lengths: Vec<usize> = query
            .tokens
            .iter()
            .map(|token| token.chars().count())
            .collect();
        let max_length = lengths.iter().copied().max().unwrap_or(0);

        let longest_words: Vec<String> = query
            .tokens
            .iter()
            .filter(|token| token.chars().count() == max_length)
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Ok(TextReport {
            top_words,
            mean_length: mean(&lengths),
            median_length: median(&lengths),
            mode_length: mode(&lengths),
            longest_words,
        })
    }

    fn render(&self, report: &TextReport) -> String {
        let top = report
            .top_words
            .iter()
            .map(|(word, count)| format!("{}: {}", word, count))
            .collect::<Vec<_>>()
            .join("\n");

        let stats = format!(
            "mean: {:.2}\nmedian: {:.2}\nmode: {:.2}",
            report.mean_length, report.median_length, report.mode_length
        );

        format!(
            "{}\n---\n{}\n---\n{}",
            top,
            stats,
            report.longest_words.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TaskEngine;

    #[test]
    fn test_full_report() {
        let engine = TaskEngine::new(WordFrequency);
        let output = engine.run("1\naa bb aa cc aa bb dd-dd!\n2\n").unwrap();
        assert_eq!(
            output,
            "aa: 3\nbb: 2\n---\nmean: 2.43\nmedian: 2.00\nmode: 2.00\n---\ndd-dd"
        );
    }

    #[test]
    fn test_tokenize_strips_punctuation_keeps_hyphens() {
        assert_eq!(
            tokenize("Well-known words: \"quoted\", (grouped) [and] {braced}!"),
            vec!["well-known", "words", "quoted", "grouped", "and", "braced"]
        );
    }

    #[test]
    fn test_short_tokens_are_dropped() {
        assert_eq!(tokenize("a b ab I go"), vec!["ab", "go"]);
    }

    #[test]
    fn test_top_k_tie_breaks_alphabetically() {
        let task = WordFrequency;
        let query = task.parse("1\nbb aa bb aa cc\n3\n").unwrap();
        let report = task.compute(query).unwrap();
        assert_eq!(
            report.top_words,
            vec![
                ("aa".to_string(), 2),
                ("bb".to_string(), 2),
                ("cc".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_k_larger_than_vocabulary() {
        let task = WordFrequency;
        let query = task.parse("1\naa bb\n10\n").unwrap();
        let report = task.compute(query).unwrap();
        assert_eq!(report.top_words.len(), 2);
    }

    #[test]
    fn test_even_count_median_and_mode_tie() {
        let task = WordFrequency;
        let query = task.parse("1\nab cd abc def\n1\n").unwrap();
        let report = task.compute(query).unwrap();
        assert_eq!(report.median_length, 2.5);
        // Lengths 2 and 3 are equally frequent; the smaller one wins.
        assert_eq!(report.mode_length, 2.0);
    }

    #[test]
    fn test_no_qualifying_tokens_is_an_error() {
        let engine = TaskEngine::new(WordFrequency);
        assert!(engine.run("1\na b c\n2\n").is_err());
    }
}
