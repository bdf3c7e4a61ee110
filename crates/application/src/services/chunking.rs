//! Positional text chunking for speech synthesis

/// Split `text` into consecutive slices of at most `max_chars` characters
///
/// Boundaries fall on character positions only; words and sentences may be
/// split. Concatenating the chunks reproduces `text` exactly. Empty text
/// yields no chunks, and a `max_chars` of zero is treated as one.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<&str> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut count = 0;

    for (idx, _) in text.char_indices() {
        if count == max_chars {
            chunks.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }

    if start < text.len() {
        chunks.push(&text[start..]);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_chunks() {
        assert!(chunk_text("", 3000).is_empty());
    }

    #[test]
    fn short_text_is_single_chunk() {
        assert_eq!(chunk_text("hello", 3000), vec!["hello"]);
    }

    #[test]
    fn exact_multiple_has_no_trailing_empty_chunk() {
        assert_eq!(chunk_text("abcdef", 3), vec!["abc", "def"]);
    }

    #[test]
    fn seven_thousand_chars_split_three_ways() {
        let text = "x".repeat(7000);
        let lengths: Vec<usize> = chunk_text(&text, 3000)
            .iter()
            .map(|c| c.chars().count())
            .collect();
        assert_eq!(lengths, vec![3000, 3000, 1000]);
    }

    #[test]
    fn splits_on_characters_not_bytes() {
        let chunks = chunk_text("äöüß", 3);
        assert_eq!(chunks, vec!["äöü", "ß"]);
    }

    #[test]
    fn zero_size_is_treated_as_one() {
        assert_eq!(chunk_text("ab", 0), vec!["a", "b"]);
    }
}
