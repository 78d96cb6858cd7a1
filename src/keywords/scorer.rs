// TF-IDF scoring and ranking.
//
// score(w) = idf(w) * tf(w), with a small fixed weight standing in for
// idf(w) when the table has no entry. Unknown terms rank low but are never
// dropped.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::tf::TermFrequencyMap;
use crate::resources::IdfTable;

/// IDF weight used for terms absent from the table.
pub const DEFAULT_UNKNOWN_IDF: f64 = 0.001;

/// A scored term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub term: String,
    /// TF-IDF score, never negative
    pub score: f64,
}

impl Keyword {
    pub fn new(term: impl Into<String>, score: f64) -> Self {
        Self {
            term: term.into(),
            score,
        }
    }
}

/// How to weight a term the IDF table doesn't know.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnknownTermWeight {
    /// A fixed weight (default 0.001)
    Fixed(f64),
    /// The median IDF of the loaded table
    Median,
}

impl Default for UnknownTermWeight {
    fn default() -> Self {
        UnknownTermWeight::Fixed(DEFAULT_UNKNOWN_IDF)
    }
}

impl UnknownTermWeight {
    /// Turn the policy into a concrete weight for `idf`. An empty table
    /// has no median, so `Median` falls back to the default weight.
    pub fn resolve(self, idf: &IdfTable) -> f64 {
        match self {
            UnknownTermWeight::Fixed(weight) => weight,
            UnknownTermWeight::Median => idf.median().unwrap_or(DEFAULT_UNKNOWN_IDF),
        }
    }
}

impl fmt::Display for UnknownTermWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownTermWeight::Fixed(weight) => write!(f, "{weight}"),
            UnknownTermWeight::Median => write!(f, "median"),
        }
    }
}

/// Combines term frequencies with an IDF table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeywordScorer {
    /// Weight substituted for idf(w) when w is not in the table
    pub unknown_idf: f64,
}

impl Default for KeywordScorer {
    fn default() -> Self {
        Self {
            unknown_idf: DEFAULT_UNKNOWN_IDF,
        }
    }
}

impl KeywordScorer {
    pub fn new(unknown_idf: f64) -> Self {
        Self { unknown_idf }
    }

    /// Score every term, in the map's first-seen order.
    pub fn score(&self, tf: &TermFrequencyMap, idf: &IdfTable) -> Vec<Keyword> {
        tf.iter()
            .map(|(term, weight)| {
                let idf_weight = idf.get(term).unwrap_or(self.unknown_idf);
                Keyword::new(term, idf_weight * weight)
            })
            .collect()
    }

    /// Score, rank and keep the first `n` keywords.
    pub fn top_n(
        &self,
        tf: &TermFrequencyMap,
        idf: &IdfTable,
        n: usize,
        highest_first: bool,
    ) -> Vec<Keyword> {
        rank(self.score(tf, idf), n, highest_first)
    }
}

/// Sort keywords by score and truncate to `n`.
///
/// Ascending by default, descending when `highest_first`. The sort is
/// stable, so tied scores keep their input order in both directions.
/// Asking for more than there are returns everything; `n == 0` returns
/// nothing.
pub fn rank(mut keywords: Vec<Keyword>, n: usize, highest_first: bool) -> Vec<Keyword> {
    if highest_first {
        keywords.sort_by(|a, b| b.score.total_cmp(&a.score));
    } else {
        keywords.sort_by(|a, b| a.score.total_cmp(&b.score));
    }
    keywords.truncate(n);
    keywords
}
