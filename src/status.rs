// Resource status display — shows where each dictionary came from and
// how much of it loaded.

use colored::Colorize;

use crate::config::Config;
use crate::resources::Resources;

/// Display configuration and resource status to the terminal.
pub fn show(config: &Config, resources: &Resources) {
    println!("Resource dir: {}", config.resource_dir.display());
    println!("Segmenter: {}", config.segmenter);
    println!("Unknown-term weight: {}", config.unknown_idf);
    println!();

    for source in &resources.sources {
        let skipped = if source.report.skipped > 0 {
            format!("{} skipped", source.report.skipped).yellow().to_string()
        } else {
            "0 skipped".dimmed().to_string()
        };
        println!(
            "  {:<18} {:>8} entries  {}  ({})",
            source.kind.to_string(),
            source.report.entries,
            skipped,
            source.origin
        );
    }

    if !config.idf_user_path.exists() {
        println!(
            "  {}",
            format!(
                "No user IDF overlay at {} (optional)",
                config.idf_user_path.display()
            )
            .dimmed()
        );
    }

    println!();
    println!(
        "Stopwords: {}  IDF terms: {}  Malformed lines skipped: {}",
        resources.stopwords.len(),
        resources.idf.len(),
        resources.skipped_lines()
    );
}
