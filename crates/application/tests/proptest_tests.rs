//! Property-based tests for chunking and dialog rendering

use application::{chunk_text, render_dialog};
use domain::Turn;
use proptest::prelude::*;

proptest! {
    #[test]
    fn chunks_concatenate_to_original(text in ".{0,200}", size in 1usize..50) {
        let chunks = chunk_text(&text, size);
        prop_assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn only_the_last_chunk_may_be_short(text in ".{1,200}", size in 1usize..50) {
        let chunks = chunk_text(&text, size);
        let (last, full) = chunks.split_last().unwrap();
        for chunk in full {
            prop_assert_eq!(chunk.chars().count(), size);
        }
        prop_assert!(last.chars().count() <= size);
        prop_assert!(!last.is_empty());
    }

    #[test]
    fn chunking_is_idempotent(text in ".{0,200}", size in 1usize..50) {
        for chunk in chunk_text(&text, size) {
            prop_assert_eq!(chunk_text(chunk, size), vec![chunk]);
        }
    }

    #[test]
    fn rendered_dialog_ends_with_cue(contents in prop::collection::vec("[a-z ]{1,20}", 0..8)) {
        let turns: Vec<Turn> = contents
            .iter()
            .enumerate()
            .map(|(i, c)| if i % 2 == 0 { Turn::user(c.as_str()) } else { Turn::assistant(c.as_str()) })
            .collect();

        let rendered = render_dialog(&turns);

        prop_assert!(rendered.ends_with("\nAI:"));
        prop_assert_eq!(rendered.lines().count(), turns.len() + if turns.is_empty() { 2 } else { 1 });
    }

    #[test]
    fn rendered_dialog_keeps_turn_order(contents in prop::collection::vec("[a-z]{1,10}", 1..8)) {
        let turns: Vec<Turn> = contents.iter().map(|c| Turn::user(c.as_str())).collect();
        let rendered = render_dialog(&turns);

        let lines: Vec<&str> = rendered.lines().collect();
        for (line, content) in lines.iter().zip(&contents) {
            prop_assert_eq!(*line, format!("User: {content}"));
        }
    }
}
