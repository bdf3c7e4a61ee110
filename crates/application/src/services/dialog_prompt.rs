//! Rendering of a session's turns into a completion prompt

use domain::{Turn, TurnRole};

/// Cue the language model completes from
pub const ASSISTANT_CUE: &str = "AI:";

/// Render turns as `User: ...` / `AI: ...` lines followed by an `AI:` cue line
///
/// An empty dialog renders as just the cue on its own line.
pub fn render_dialog(turns: &[Turn]) -> String {
    let mut prompt = turns
        .iter()
        .map(render_turn)
        .collect::<Vec<_>>()
        .join("\n");
    prompt.push('\n');
    prompt.push_str(ASSISTANT_CUE);
    prompt
}

fn render_turn(turn: &Turn) -> String {
    let prefix = match turn.role() {
        TurnRole::User => "User: ",
        TurnRole::Assistant => "AI: ",
    };
    format!("{prefix}{}", turn.content())
}
