// Cinder: TF-IDF keyword extraction
//
// This is the library root. Each module corresponds to a stage of the
// extraction pipeline: resources are loaded once, keywords are scored
// per document, and output renders the ranked list.

pub mod config;
pub mod keywords;
pub mod output;
pub mod resources;
pub mod status;
