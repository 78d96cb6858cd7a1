// Output formatting — terminal display and JSON rendering.

pub mod terminal;

use anyhow::Result;

use crate::keywords::scorer::Keyword;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..120]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters like CJK text or emoji.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Render keywords as a pretty-printed JSON array of `{term, score}` objects.
pub fn to_json(keywords: &[Keyword]) -> Result<String> {
    Ok(serde_json::to_string_pretty(keywords)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_json_shape() {
        let json = to_json(&[Keyword::new("孩子", 1.5)]).unwrap();
        let parsed: Vec<Keyword> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vec![Keyword::new("孩子", 1.5)]);
        assert!(json.contains("\"term\""));
        assert!(json.contains("\"score\""));
    }
}
