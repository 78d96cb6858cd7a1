// Segmenter implementations.
//
// `UnicodeSegmenter` splits on UAX #29 word boundaries. It handles
// space-delimited languages well, but yields each CJK ideograph as its own
// word, so Chinese text needs the dictionary-based `JiebaSegmenter`
// (the `jieba` feature, on by default).

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use unicode_segmentation::UnicodeSegmentation;

use super::traits::Segmenter;

/// Word splitter based on Unicode word boundaries. Punctuation and
/// whitespace are dropped; case is preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSegmenter;

impl Segmenter for UnicodeSegmenter {
    fn segment<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        Box::new(text.unicode_words())
    }
}

/// Dictionary-based Chinese segmentation with HMM for unknown words.
#[cfg(feature = "jieba")]
pub struct JiebaSegmenter {
    jieba: jieba_rs::Jieba,
}

#[cfg(feature = "jieba")]
impl JiebaSegmenter {
    /// Load the bundled jieba dictionary.
    pub fn new() -> Self {
        Self {
            jieba: jieba_rs::Jieba::new(),
        }
    }
}

#[cfg(feature = "jieba")]
impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "jieba")]
impl Segmenter for JiebaSegmenter {
    fn segment<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        Box::new(self.jieba.cut(text, true).into_iter())
    }
}

/// The default segmenter for this build: jieba when compiled in,
/// Unicode words otherwise.
pub fn default_segmenter() -> Box<dyn Segmenter> {
    #[cfg(feature = "jieba")]
    {
        Box::new(JiebaSegmenter::new())
    }
    #[cfg(not(feature = "jieba"))]
    {
        Box::new(UnicodeSegmenter)
    }
}

/// Which segmenter to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmenterBackend {
    /// Unicode word boundaries (always available)
    Unicode,
    /// jieba dictionary segmentation (default when the `jieba` feature is on)
    Jieba,
}

impl Default for SegmenterBackend {
    fn default() -> Self {
        if cfg!(feature = "jieba") {
            SegmenterBackend::Jieba
        } else {
            SegmenterBackend::Unicode
        }
    }
}

impl FromStr for SegmenterBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unicode" => Ok(SegmenterBackend::Unicode),
            "jieba" => Ok(SegmenterBackend::Jieba),
            other => anyhow::bail!("Unknown segmenter '{other}' (expected 'unicode' or 'jieba')"),
        }
    }
}

impl fmt::Display for SegmenterBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmenterBackend::Unicode => write!(f, "unicode"),
            SegmenterBackend::Jieba => write!(f, "jieba"),
        }
    }
}

impl SegmenterBackend {
    /// Construct the segmenter. Fails if the backend wasn't compiled in.
    pub fn build(self) -> Result<Box<dyn Segmenter>> {
        match self {
            SegmenterBackend::Unicode => Ok(Box::new(UnicodeSegmenter)),
            #[cfg(feature = "jieba")]
            SegmenterBackend::Jieba => Ok(Box::new(JiebaSegmenter::new())),
            #[cfg(not(feature = "jieba"))]
            SegmenterBackend::Jieba => anyhow::bail!(
                "The jieba segmenter is not available in this build.\n\
                 Rebuild with `--features jieba`, or set CINDER_SEGMENTER=unicode."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_segmenter_drops_punctuation() {
        let tokens: Vec<&str> = UnicodeSegmenter
            .segment("Rust, fast and safe!")
            .collect();
        assert_eq!(tokens, vec!["Rust", "fast", "and", "safe"]);
    }

    #[test]
    fn test_unicode_segmenter_empty_text() {
        assert_eq!(UnicodeSegmenter.segment("").count(), 0);
    }

    #[test]
    fn test_backend_from_str() {
        assert_eq!("unicode".parse::<SegmenterBackend>().unwrap(), SegmenterBackend::Unicode);
        assert_eq!(" JIEBA ".parse::<SegmenterBackend>().unwrap(), SegmenterBackend::Jieba);
        assert!("icu".parse::<SegmenterBackend>().is_err());
    }

    #[test]
    fn test_unicode_backend_builds() {
        let segmenter = SegmenterBackend::Unicode.build().unwrap();
        assert_eq!(segmenter.segment("hello world").count(), 2);
    }

    #[test]
    fn test_default_backend_matches_build() {
        let expected = if cfg!(feature = "jieba") {
            SegmenterBackend::Jieba
        } else {
            SegmenterBackend::Unicode
        };
        assert_eq!(SegmenterBackend::default(), expected);
        assert!(SegmenterBackend::default().build().is_ok());
    }

    #[cfg(feature = "jieba")]
    #[test]
    fn test_jieba_keeps_chinese_words_whole() {
        let segmenter = default_segmenter();
        let tokens: Vec<&str> = segmenter
            .segment("孩子上了幼儿园 安全防拐教育要做好")
            .collect();
        assert!(tokens.contains(&"孩子"), "{tokens:?}");
        assert!(tokens.contains(&"教育"), "{tokens:?}");
    }

    #[cfg(feature = "jieba")]
    #[test]
    fn test_jieba_segments_chinese_words() {
        let segmenter = JiebaSegmenter::new();
        let tokens: Vec<&str> = segmenter.segment("我们中出了一个叛徒").collect();
        assert!(tokens.len() > 1);
        assert_eq!(tokens.concat(), "我们中出了一个叛徒");
    }
}
