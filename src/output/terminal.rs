// Colored terminal output for ranked keyword lists.
//
// Bars are scaled against the largest score in the list, so the top
// keyword always fills the bar regardless of the absolute TF-IDF values.

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::keywords::scorer::Keyword;

const BAR_WIDTH: usize = 20;
const TERM_COLUMN_WIDTH: usize = 24;

/// Display a ranked keyword list in the terminal.
pub fn display_keywords(keywords: &[Keyword], document: &str, highest_first: bool) {
    let preview = super::truncate_chars(document.trim(), 60);
    if keywords.is_empty() {
        println!("No keywords found in \"{}\".", preview.dimmed());
        return;
    }

    let order = if highest_first { "highest first" } else { "lowest first" };
    println!(
        "\n{}",
        format!("=== Keywords ({} terms, {order}) ===", keywords.len()).bold()
    );
    println!("  {}", preview.dimmed());
    println!();

    let max_score = keywords.iter().map(|k| k.score).fold(0.0_f64, f64::max);

    for (i, keyword) in keywords.iter().enumerate() {
        let fraction = if max_score > 0.0 {
            keyword.score / max_score
        } else {
            0.0
        };
        let bar = score_bar(fraction, BAR_WIDTH);

        let colored_bar = if fraction >= 0.66 {
            bar.bright_green()
        } else if fraction >= 0.33 {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };

        println!(
            "  {:>2}. {} {} {:.6}",
            i + 1,
            pad_to_width(&keyword.term, TERM_COLUMN_WIDTH).bold(),
            colored_bar,
            keyword.score
        );
    }
    println!();
}

/// Right-pad `text` with spaces to `width` terminal columns. CJK characters
/// take two columns, so `format!("{:<24}")` would misalign them.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(padding))
}

/// Build a `[====    ]` bar with `fraction` (clamped to 0..=1) filled.
pub fn score_bar(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bar() {
        assert_eq!(score_bar(1.0, 4), "[====]");
        assert_eq!(score_bar(0.5, 4), "[==  ]");
        assert_eq!(score_bar(0.0, 4), "[    ]");
        assert_eq!(score_bar(7.0, 4), "[====]");
    }

    #[test]
    fn test_pad_to_width_counts_wide_characters_twice() {
        assert_eq!(pad_to_width("孩子", 6), "孩子  ");
        assert_eq!(pad_to_width("rust", 6), "rust  ");
        assert_eq!(pad_to_width("幼儿园教育", 6), "幼儿园教育");
    }
}
