// IDF table — precomputed inverse document frequency per term.
//
// File format is one `term value` pair per line, whitespace separated.
// Lines with the wrong field count or a value that isn't a finite,
// non-negative number are skipped and counted, never reported as errors.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use super::LoadReport;

/// Read-only term -> IDF weight mapping.
///
/// `get` returns `None` for terms the table has never seen, which is
/// distinct from a term stored with a weight of zero.
#[derive(Debug, Clone, Default)]
pub struct IdfTable {
    weights: HashMap<String, f64>,
}

impl IdfTable {
    pub fn get(&self, term: &str) -> Option<f64> {
        self.weights.get(term).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Insert or overwrite one entry.
    pub fn insert(&mut self, term: impl Into<String>, weight: f64) {
        self.weights.insert(term.into(), weight);
    }

    /// The median IDF value (upper median for even sizes), or `None` when
    /// the table is empty.
    pub fn median(&self) -> Option<f64> {
        if self.weights.is_empty() {
            return None;
        }
        let mut values: Vec<f64> = self.weights.values().copied().collect();
        values.sort_by(f64::total_cmp);
        Some(values[values.len() / 2])
    }

    /// Merge entries parsed from `reader` into the table. Later entries
    /// override earlier ones, which is how a user overlay takes precedence
    /// over the main dictionary.
    pub fn extend_from_reader<R: BufRead>(&mut self, reader: R) -> Result<LoadReport> {
        let mut report = LoadReport::default();
        for line in reader.lines() {
            let line = line.context("Failed to read IDF line")?;
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(&line) {
                Some((term, weight)) => {
                    self.weights.insert(term.to_string(), weight);
                    report.entries += 1;
                }
                None => report.skipped += 1,
            }
        }
        Ok(report)
    }

    /// Merge a UTF-8 IDF file from disk into the table.
    pub fn extend_from_file(&mut self, path: &Path) -> Result<LoadReport> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open IDF file {}", path.display()))?;
        self.extend_from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse IDF file {}", path.display()))
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for IdfTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().map(|(t, w)| (t.into(), w)).collect(),
        }
    }
}

/// Parse one `term value` line. Returns `None` for anything malformed.
pub fn parse_line(line: &str) -> Option<(&str, f64)> {
    let mut fields = line.split_whitespace();
    let term = fields.next()?;
    let value = fields.next()?;
    if fields.next().is_some() {
        return None;
    }
    let weight: f64 = value.parse().ok()?;
    if !weight.is_finite() || weight < 0.0 {
        return None;
    }
    Some((term, weight))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_valid() {
        assert_eq!(parse_line("孩子 6.5"), Some(("孩子", 6.5)));
        assert_eq!(parse_line("  教育\t8.25  "), Some(("教育", 8.25)));
    }

    #[test]
    fn test_parse_line_rejects_malformed() {
        assert_eq!(parse_line("孩子"), None);
        assert_eq!(parse_line("孩子 6.5 extra"), None);
        assert_eq!(parse_line("孩子 abc"), None);
        assert_eq!(parse_line("孩子 NaN"), None);
        assert_eq!(parse_line("孩子 inf"), None);
        assert_eq!(parse_line("孩子 -1.0"), None);
    }

    #[test]
    fn test_extend_counts_skipped_lines() {
        let input = "孩子 6.5\nbad\n\n幼儿 9.1\n教育 x\n";
        let mut table = IdfTable::default();
        let report = table.extend_from_reader(input.as_bytes()).unwrap();
        assert_eq!(report.entries, 2);
        assert_eq!(report.skipped, 2);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("幼儿"), Some(9.1));
    }

    #[test]
    fn test_zero_weight_is_not_missing() {
        let table: IdfTable = [("zero", 0.0)].into_iter().collect();
        assert_eq!(table.get("zero"), Some(0.0));
        assert_eq!(table.get("absent"), None);
    }

    #[test]
    fn test_median() {
        let table: IdfTable = [("a", 3.0), ("b", 1.0), ("c", 2.0), ("d", 10.0)]
            .into_iter()
            .collect();
        assert_eq!(table.median(), Some(3.0));
        assert_eq!(IdfTable::default().median(), None);
    }
}
