// Term frequency counting.
//
// tf(w) = count(w) / sum(count(k) for every qualifying k)
//
// Single-character tokens and stopwords never qualify. They are dropped
// before counting, so they affect neither the counts nor the denominator.

use std::collections::HashMap;

use crate::resources::StopwordSet;

/// Normalized frequency weight per distinct term, in first-seen order.
///
/// Weights sum to 1.0 unless the map is empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermFrequencyMap {
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl TermFrequencyMap {
    pub fn get(&self, term: &str) -> Option<f64> {
        self.index.get(term).map(|&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate terms and weights in the order each term first appeared.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(t, w)| (t.as_str(), *w))
    }

    /// Sum of all weights (1.0 for any non-empty map built by
    /// [`term_frequencies`]).
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w).sum()
    }
}

/// Build a map from explicit weights. A repeated term keeps its first
/// position and takes the last weight.
impl FromIterator<(String, f64)> for TermFrequencyMap {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut map = Self::default();
        for (term, weight) in iter {
            match map.index.get(&term) {
                Some(&i) => map.entries[i].1 = weight,
                None => {
                    map.index.insert(term.clone(), map.entries.len());
                    map.entries.push((term, weight));
                }
            }
        }
        map
    }
}

/// Whether a token counts toward term frequencies: at least two
/// characters long and not a stopword.
pub fn is_candidate(token: &str, stopwords: &StopwordSet) -> bool {
    token.chars().nth(1).is_some() && !stopwords.contains(token)
}

/// Count qualifying tokens and normalize the counts into weights.
///
/// Never fails. An empty token stream, or one where nothing qualifies,
/// yields an empty map.
pub fn term_frequencies<I, S>(tokens: I, stopwords: &StopwordSet) -> TermFrequencyMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts: Vec<(String, u32)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut word_sum: u32 = 0;

    for token in tokens {
        let token = token.as_ref();
        if !is_candidate(token, stopwords) {
            continue;
        }
        word_sum += 1;
        match index.get(token) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token.to_string(), counts.len());
                counts.push((token.to_string(), 1));
            }
        }
    }

    if word_sum == 0 {
        return TermFrequencyMap::default();
    }

    let total = f64::from(word_sum);
    let entries = counts
        .into_iter()
        .map(|(term, count)| (term, f64::from(count) / total))
        .collect();

    TermFrequencyMap { entries, index }
}
