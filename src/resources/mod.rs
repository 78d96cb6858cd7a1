// Lookup resources — the stopword set and the IDF table.
//
// Both are loaded once at startup, then frozen behind an `Arc` and shared
// read-only by every analyzer. Nothing mutates them after `load` returns,
// so concurrent scoring needs no locking.

pub mod idf;
pub mod stopwords;

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use crate::config::Config;

pub use idf::IdfTable;
pub use stopwords::StopwordSet;

/// `SourceReport::origin` when no IDF dictionary was found.
pub const EMPTY_IDF_ORIGIN: &str = "none (empty table)";

/// Counts gathered while parsing one resource file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines that produced an entry
    pub entries: usize,
    /// Malformed lines that were skipped (wrong field count, bad number)
    pub skipped: usize,
}

/// Which resource a [`SourceReport`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Stopwords,
    IdfDict,
    IdfUser,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Stopwords => write!(f, "stopwords"),
            ResourceKind::IdfDict => write!(f, "idf dictionary"),
            ResourceKind::IdfUser => write!(f, "idf user overlay"),
        }
    }
}

/// Where one resource came from and what loading it produced.
#[derive(Debug, Clone)]
pub struct SourceReport {
    pub kind: ResourceKind,
    /// File path, or "built-in" for the bundled stopword lists
    pub origin: String,
    pub report: LoadReport,
}

/// The frozen lookup tables shared by all scoring calls.
#[derive(Debug, Default)]
pub struct Resources {
    pub stopwords: StopwordSet,
    pub idf: IdfTable,
    /// One entry per source that was read, in load order
    pub sources: Vec<SourceReport>,
}

impl Resources {
    /// Wrap already-built tables. Used by tests and embedders that
    /// supply their own lookup structures.
    pub fn new(stopwords: StopwordSet, idf: IdfTable) -> Self {
        Self {
            stopwords,
            idf,
            sources: Vec::new(),
        }
    }

    /// Load every configured resource, then freeze the result.
    ///
    /// A missing stopword file falls back to the built-in lists and a
    /// missing overlay is simply not applied. A missing IDF dictionary at
    /// the default location leaves the table empty, so every term takes
    /// the unknown-term weight and ranking follows frequency alone. A
    /// dictionary named through CINDER_IDF_DICT must exist.
    pub fn load(config: &Config) -> Result<Arc<Self>> {
        config.require_idf()?;

        let mut sources = Vec::new();

        let stopwords = if config.stopwords_path.exists() {
            let (set, report) = StopwordSet::load(&config.stopwords_path)?;
            sources.push(record(ResourceKind::Stopwords, &config.stopwords_path, report));
            set
        } else {
            let set = StopwordSet::builtin();
            info!(
                path = %config.stopwords_path.display(),
                entries = set.len(),
                "Stopword file not found, using built-in lists"
            );
            sources.push(SourceReport {
                kind: ResourceKind::Stopwords,
                origin: "built-in".to_string(),
                report: LoadReport {
                    entries: set.len(),
                    skipped: 0,
                },
            });
            set
        };

        let mut idf = IdfTable::default();
        if config.idf_dict_path.exists() {
            let report = idf.extend_from_file(&config.idf_dict_path)?;
            sources.push(record(ResourceKind::IdfDict, &config.idf_dict_path, report));
        } else {
            warn!(
                path = %config.idf_dict_path.display(),
                "IDF dictionary not found, scoring with an empty table"
            );
            sources.push(SourceReport {
                kind: ResourceKind::IdfDict,
                origin: EMPTY_IDF_ORIGIN.to_string(),
                report: LoadReport::default(),
            });
        }

        if config.idf_user_path.exists() {
            let report = idf.extend_from_file(&config.idf_user_path)?;
            sources.push(record(ResourceKind::IdfUser, &config.idf_user_path, report));
        }

        info!(
            stopwords = stopwords.len(),
            idf_terms = idf.len(),
            "Resources loaded"
        );

        Ok(Arc::new(Self {
            stopwords,
            idf,
            sources,
        }))
    }

    /// Total malformed lines skipped across all sources.
    pub fn skipped_lines(&self) -> usize {
        self.sources.iter().map(|s| s.report.skipped).sum()
    }
}

/// Log one loaded file and turn it into a [`SourceReport`].
fn record(kind: ResourceKind, path: &Path, report: LoadReport) -> SourceReport {
    if report.skipped > 0 {
        warn!(
            resource = %kind,
            path = %path.display(),
            entries = report.entries,
            skipped = report.skipped,
            "Skipped malformed lines"
        );
    } else {
        info!(
            resource = %kind,
            path = %path.display(),
            entries = report.entries,
            "Loaded resource"
        );
    }
    SourceReport {
        kind,
        origin: path.display().to_string(),
        report,
    }
}
