use crate::core::Task;
use crate::utils::error::{Result, WorkshopError};

/// Prefix-candidate enumeration over a lowercase word.
///
/// For each position, every letter from `a` through the position's own
/// character is appended to the finalized prefix and emitted in quotes; the
/// position's character then becomes part of the prefix for the next round.
pub struct PrefixSequence;

impl Task for PrefixSequence {
    type Input = Vec<u8>;
    type Output = Vec<String>;

    fn name(&self) -> &'static str {
        "prefix-sequence"
    }

    fn parse(&self, raw: &str) -> Result<Vec<u8>> {
        let word = raw.trim();
        if let Some(bad) = word.bytes().find(|b| !b.is_ascii_lowercase()) {
            return Err(WorkshopError::input(format!(
                "expected lowercase letters, found '{}'",
                bad as char
            )));
        }
        Ok(word.as_bytes().to_vec())
    }

    fn compute(&self, word: Vec<u8>) -> Result<Vec<String>> {
        let mut emitted = Vec::new();
        let mut prefix = String::new();

        for &ch in &word {
            for candidate in b'a'..=ch {
                emitted.push(format!("\"{}{}\"", prefix, candidate as char));
            }
            prefix.push(ch as char);
        }
        Ok(emitted)
    }

    fn render(&self, emitted: &Vec<String>) -> String {
        emitted.join("\n")
    }
}
