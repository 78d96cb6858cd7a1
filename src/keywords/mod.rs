// Keyword extraction — term frequencies, TF-IDF scoring and ranking.

pub mod analyzer;
pub mod scorer;
pub mod segment;
pub mod tf;
pub mod traits;
