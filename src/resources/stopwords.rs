// Stopword set — terms excluded from scoring regardless of frequency.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use stop_words::{get, LANGUAGE};

use super::LoadReport;

/// Read-only set of stopwords. Lookups are exact and case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// The bundled Chinese and English lists from the `stop-words` crate.
    pub fn builtin() -> Self {
        let chinese: Vec<String> = get(LANGUAGE::Chinese);
        let english: Vec<String> = get(LANGUAGE::English);
        chinese.into_iter().chain(english).collect()
    }

    /// Parse a stopword list, one word per line.
    ///
    /// Surrounding whitespace is trimmed and blank lines are ignored.
    /// Every other line is a stopword, so nothing is ever skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<(Self, LoadReport)> {
        let mut words = HashSet::new();
        let mut report = LoadReport::default();
        for line in reader.lines() {
            let line = line.context("Failed to read stopword line")?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            words.insert(word.to_string());
            report.entries += 1;
        }
        Ok((Self { words }, report))
    }

    /// Load a UTF-8 stopword file from disk.
    pub fn load(path: &Path) -> Result<(Self, LoadReport)> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open stopword file {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse stopword file {}", path.display()))
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reader_trims_and_skips_blank_lines() {
        let input = "了\n  要 \n\n\r\nthe\r\n";
        let (set, report) = StopwordSet::from_reader(input.as_bytes()).unwrap();
        assert_eq!(report.entries, 3);
        assert_eq!(report.skipped, 0);
        assert!(set.contains("了"));
        assert!(set.contains("要"));
        assert!(set.contains("the"));
        assert!(!set.contains(""));
    }

    #[test]
    fn test_builtin_is_populated() {
        let set = StopwordSet::builtin();
        assert!(!set.is_empty());
        assert!(set.contains("the"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let set: StopwordSet = ["the"].into_iter().collect();
        assert!(set.contains("the"));
        assert!(!set.contains("The"));
    }
}
