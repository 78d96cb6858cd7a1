// Segmenter trait — swap-ready abstraction over tokenization.
//
// Scoring only needs a sequence of token strings. How text is split into
// those tokens is language-specific, so it lives behind this trait: the
// Unicode word splitter works everywhere, and a dictionary-based Chinese
// segmenter can be swapped in without touching the scoring code.

/// Splits a document into candidate tokens.
pub trait Segmenter: Send + Sync {
    /// Produce the tokens of `text`, in document order. Tokens may be
    /// single characters or punctuation; filtering happens downstream.
    fn segment<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a>;
}
