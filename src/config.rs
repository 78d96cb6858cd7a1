use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::keywords::scorer::{UnknownTermWeight, DEFAULT_UNKNOWN_IDF};
use crate::keywords::segment::SegmenterBackend;

/// Number of keywords returned when neither the CLI nor the environment says.
pub const DEFAULT_TOP_N: usize = 5;

const STOPWORDS_FILE: &str = "stop_words.txt";
const IDF_DICT_FILE: &str = "idf_dict.txt";
const IDF_USER_FILE: &str = "idf_user.txt";

/// Returns the default directory for dictionary files.
/// Uses the platform data directory: ~/.local/share/cinder/dict/ on Linux.
pub fn default_resource_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cinder")
        .join("dict")
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// file path defaults to a name inside `resource_dir`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base directory for dictionary files (CINDER_RESOURCE_DIR)
    pub resource_dir: PathBuf,
    /// Stopword list, one word per line. Built-in lists are used if missing.
    pub stopwords_path: PathBuf,
    /// Main IDF dictionary. Required only when set explicitly; a missing
    /// file at the default location leaves the table empty.
    pub idf_dict_path: PathBuf,
    /// Whether CINDER_IDF_DICT named the dictionary
    pub idf_dict_explicit: bool,
    /// Optional user IDF entries, applied over the main dictionary
    pub idf_user_path: PathBuf,
    /// Weight for terms missing from the IDF table (CINDER_UNKNOWN_IDF)
    pub unknown_idf: UnknownTermWeight,
    /// Which segmenter to tokenize with (CINDER_SEGMENTER)
    pub segmenter: SegmenterBackend,
    /// Default number of keywords to return (CINDER_TOP_N)
    pub top_n: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::in_dir(default_resource_dir())
    }
}

impl Config {
    /// Defaults for every setting, with files expected under `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let resource_dir = dir.into();
        Self {
            stopwords_path: resource_dir.join(STOPWORDS_FILE),
            idf_dict_path: resource_dir.join(IDF_DICT_FILE),
            idf_user_path: resource_dir.join(IDF_USER_FILE),
            idf_dict_explicit: false,
            resource_dir,
            unknown_idf: UnknownTermWeight::default(),
            segmenter: SegmenterBackend::default(),
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Unset variables take their defaults; set-but-invalid values are
    /// errors rather than silently ignored.
    pub fn load() -> Result<Self> {
        let resource_dir = env::var("CINDER_RESOURCE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_resource_dir());
        let mut config = Self::in_dir(resource_dir);

        if let Ok(path) = env::var("CINDER_STOPWORDS") {
            config.stopwords_path = PathBuf::from(path);
        }
        if let Ok(path) = env::var("CINDER_IDF_DICT") {
            config.idf_dict_path = PathBuf::from(path);
            config.idf_dict_explicit = true;
        }
        if let Ok(path) = env::var("CINDER_IDF_USER") {
            config.idf_user_path = PathBuf::from(path);
        }
        if let Ok(value) = env::var("CINDER_UNKNOWN_IDF") {
            config.unknown_idf = parse_unknown_idf(&value)?;
        }
        if let Ok(value) = env::var("CINDER_SEGMENTER") {
            config.segmenter = value.parse()?;
        }
        if let Ok(value) = env::var("CINDER_TOP_N") {
            config.top_n = value
                .trim()
                .parse()
                .with_context(|| format!("CINDER_TOP_N must be a non-negative integer, got '{value}'"))?;
        }

        Ok(config)
    }

    /// Check that an explicitly configured IDF dictionary exists.
    /// Call this before loading resources — a named file that isn't there
    /// is a mistake, not a request for the empty-table fallback.
    pub fn require_idf(&self) -> Result<()> {
        if self.idf_dict_explicit && !self.idf_dict_path.exists() {
            anyhow::bail!(
                "IDF dictionary not found at {}\n\
                 Place an idf_dict.txt (one `term weight` pair per line) in {},\n\
                 or point CINDER_IDF_DICT at an existing file.",
                self.idf_dict_path.display(),
                self.resource_dir.display()
            );
        }
        Ok(())
    }
}

/// Parse CINDER_UNKNOWN_IDF: either `median` or a finite, non-negative number.
pub fn parse_unknown_idf(value: &str) -> Result<UnknownTermWeight> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("median") {
        return Ok(UnknownTermWeight::Median);
    }
    if value.is_empty() {
        return Ok(UnknownTermWeight::Fixed(DEFAULT_UNKNOWN_IDF));
    }
    let weight: f64 = value
        .parse()
        .with_context(|| format!("CINDER_UNKNOWN_IDF must be a number or 'median', got '{value}'"))?;
    if !weight.is_finite() || weight < 0.0 {
        anyhow::bail!("CINDER_UNKNOWN_IDF must be finite and non-negative, got {weight}");
    }
    Ok(UnknownTermWeight::Fixed(weight))
}
