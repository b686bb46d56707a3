//! Rich-text to plain-text conversion
//!
//! The content API stores article bodies as an ordered list of rich-text
//! blocks. For word counting and rendering we only need the plain text.

use crate::content::BodyBlock;

/// Concatenate the plain text of all body blocks
///
/// Blocks with empty text are skipped so the result never carries stray
/// separators; an empty body yields an empty string.
pub fn as_text(body: &[BodyBlock]) -> String {
    body.iter()
        .map(|block| block.text.as_str())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(text: &str) -> BodyBlock {
        BodyBlock {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_as_text_joins_blocks() {
        let body = vec![block("one two"), block("three")];
        assert_eq!(as_text(&body), "one two three");
    }

    #[test]
    fn test_as_text_empty_body() {
        assert_eq!(as_text(&[]), "");
    }

    #[test]
    fn test_as_text_skips_empty_blocks() {
        let body = vec![block(""), block("solo"), block("")];
        assert_eq!(as_text(&body), "solo");
    }
}
