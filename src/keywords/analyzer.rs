// TF-IDF analyzer — the full pipeline for one document.
//
// text -> segmenter -> term frequencies -> scores -> ranked keywords
//
// The analyzer holds the shared resources behind an `Arc` and never mutates
// them, so one analyzer can serve any number of threads at once.

use std::sync::Arc;

use tracing::debug;

use super::scorer::{Keyword, KeywordScorer};
use super::segment::default_segmenter;
use super::tf::{term_frequencies, TermFrequencyMap};
use super::traits::Segmenter;
use crate::resources::Resources;

pub struct TfIdfAnalyzer {
    resources: Arc<Resources>,
    segmenter: Box<dyn Segmenter>,
    scorer: KeywordScorer,
}

impl TfIdfAnalyzer {
    pub fn new(
        resources: Arc<Resources>,
        segmenter: Box<dyn Segmenter>,
        scorer: KeywordScorer,
    ) -> Self {
        Self {
            resources,
            segmenter,
            scorer,
        }
    }

    /// Analyzer with this build's default segmenter and the default
    /// unknown-term weight.
    pub fn with_defaults(resources: Arc<Resources>) -> Self {
        Self::new(resources, default_segmenter(), KeywordScorer::default())
    }

    /// Term frequencies for `content`. Absent or empty content returns an
    /// empty map without running the segmenter.
    pub fn term_frequencies(&self, content: Option<&str>) -> TermFrequencyMap {
        match content {
            Some(text) if !text.is_empty() => {
                term_frequencies(self.segmenter.segment(text), &self.resources.stopwords)
            }
            _ => TermFrequencyMap::default(),
        }
    }

    /// Every qualifying term with its score, unordered.
    pub fn analyze(&self, content: Option<&str>) -> Vec<Keyword> {
        let tf = self.term_frequencies(content);
        self.scorer.score(&tf, &self.resources.idf)
    }

    /// The `n` highest (or lowest) scoring keywords, ordered by score.
    pub fn analyze_top_n(
        &self,
        content: Option<&str>,
        highest_first: bool,
        n: usize,
    ) -> Vec<Keyword> {
        let tf = self.term_frequencies(content);
        let keywords = self.scorer.top_n(&tf, &self.resources.idf, n, highest_first);
        debug!(
            terms = tf.len(),
            returned = keywords.len(),
            highest_first,
            "Analyzed document"
        );
        keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::segment::UnicodeSegmenter;
    use crate::resources::{IdfTable, StopwordSet};

    /// Panics if asked to segment anything, proving the empty-input
    /// short-circuit never reaches it.
    struct PanickingSegmenter;

    impl Segmenter for PanickingSegmenter {
        fn segment<'a>(&'a self, _text: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
            panic!("segmenter should not be called for empty input")
        }
    }

    fn analyzer_with(segmenter: Box<dyn Segmenter>) -> TfIdfAnalyzer {
        let stopwords: StopwordSet = ["the", "and"].into_iter().collect();
        let idf: IdfTable = [("rust", 10.0), ("memory", 6.0)].into_iter().collect();
        TfIdfAnalyzer::new(
            Arc::new(Resources::new(stopwords, idf)),
            segmenter,
            KeywordScorer::default(),
        )
    }

    #[test]
    fn test_empty_content_skips_segmenter() {
        let analyzer = analyzer_with(Box::new(PanickingSegmenter));
        assert!(analyzer.analyze(None).is_empty());
        assert!(analyzer.analyze(Some("")).is_empty());
        assert!(analyzer.analyze_top_n(Some(""), true, 5).is_empty());
    }

    #[test]
    fn test_analyze_top_n_ranks_by_score() {
        let analyzer = analyzer_with(Box::new(UnicodeSegmenter));
        let top = analyzer.analyze_top_n(Some("the rust and memory and rust compiler"), true, 2);
        let terms: Vec<&str> = top.iter().map(|k| k.term.as_str()).collect();
        assert_eq!(terms, vec!["rust", "memory"]);
    }
}
